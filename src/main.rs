use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use ldb_options::{Options, read_options_from_env};

pub fn main() -> Result<()> {
    // Warnings go to stderr so they never interleave with the options dump.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(anyhow::Error::msg)
        .context("Couldn't install the log subscriber")?;

    let mut options = Options::default();
    read_options_from_env(&mut options);

    println!(
        "block size {}, compaction table size {}, compaction total size {}, compression {:?}",
        options.block_size,
        options.compaction_table_size,
        options.compaction_total_size,
        options.compression,
    );

    Ok(())
}
