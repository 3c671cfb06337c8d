use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{info, warn};

use crate::{
    keys::*,
    options::{Compression, Options},
    setters::{LoadWarning, SetOutcome, Setters},
    source::{EnvSource, SettingSource},
};

/// Default ratio of compaction total size to compaction table size.
pub const TOTAL_TO_TABLE_RATIO: i64 = 5;

/// What a loading pass did. Purely informational, a pass never fails.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Settings that changed a field, in the order they were applied.
    pub changed: Vec<&'static str>,
    pub warnings: Vec<LoadWarning>,
    /// Whether the options dump was written.
    pub dumped: bool,
}

/// Populates `options` from the process environment, dumping to stdout when
/// `LDB_DEBUG_OPTIONS` is set.
pub fn read_options_from_env(options: &mut Options) -> LoadReport {
    read_options(options, &EnvSource, &mut io::stdout().lock())
}

/// Setters plus the list of settings that changed their field.
struct Pass<'s> {
    set: Setters<'s>,
    changed: Vec<&'static str>,
}

impl Pass<'_> {
    fn int(&mut self, key: &'static str, dest: &mut i64) -> SetOutcome<i64> {
        let outcome = self.set.set_int(key, Some(dest));
        self.track(key, outcome.changed());
        outcome
    }

    fn float(&mut self, key: &'static str, dest: &mut f64) {
        let outcome = self.set.set_float(key, Some(dest));
        self.track(key, outcome.changed());
    }

    fn boolean(&mut self, key: &'static str, dest: &mut bool) {
        let outcome = self.set.set_bool(key, Some(dest));
        self.track(key, outcome.changed());
    }

    /// Reads a flag that drives other fields rather than being stored.
    fn flag(&mut self, key: &'static str) -> bool {
        let mut flag = false;
        self.set.set_bool(key, Some(&mut flag));
        flag
    }

    fn track(&mut self, key: &'static str, changed: bool) {
        if changed {
            self.changed.push(key);
        }
    }
}

/// Populates `options` from `source`.
///
/// Every setting that is present and valid overwrites its field; anything
/// else leaves the field as it was. When the table size changed but no total
/// size was supplied, the total size follows the table size at the default
/// ratio. If `LDB_DEBUG_OPTIONS` is true the final record is written to `out`.
pub fn read_options<W: Write>(
    options: &mut Options,
    source: &dyn SettingSource,
    out: &mut W,
) -> LoadReport {
    let mut pass = Pass {
        set: Setters::new(source),
        changed: Vec::new(),
    };

    pass.int(BLOCK_SIZE, &mut options.block_size);

    // Compaction table size.
    let table_size = pass.int(COMPACTION_TABLE_SIZE, &mut options.compaction_table_size);
    pass.float(
        COMPACTION_TABLE_SIZE_MULTIPLIER,
        &mut options.compaction_table_size_multiplier,
    );

    // Compaction total size.
    let total_size = pass.int(COMPACTION_TOTAL_SIZE, &mut options.compaction_total_size);
    pass.float(
        COMPACTION_TOTAL_SIZE_MULTIPLIER,
        &mut options.compaction_total_size_multiplier,
    );

    let total_supplied = matches!(total_size, SetOutcome::Applied { .. });
    if let Some(derived) = derive_total_size(
        table_size.changed(),
        total_supplied,
        options.compaction_table_size,
    ) {
        let changed = options.compaction_total_size != derived;
        options.compaction_total_size = derived;
        pass.track(COMPACTION_TOTAL_SIZE, changed);
    }

    if pass.flag(DISABLE_COMPRESSION) {
        let changed = options.compression != Compression::None;
        options.compression = Compression::None;
        pass.track(DISABLE_COMPRESSION, changed);
    }

    pass.boolean(NO_SYNC, &mut options.no_sync);
    pass.boolean(BLOCK_CACHE_EVICT_REMOVED, &mut options.block_cache_evict_removed);
    pass.boolean(DISABLE_BUFFER_POOL, &mut options.disable_buffer_pool);
    pass.boolean(DISABLE_BLOCK_CACHE, &mut options.disable_block_cache);
    pass.boolean(DISABLE_COMPACTION_BACKOFF, &mut options.disable_compaction_backoff);
    pass.boolean(
        DISABLE_LARGE_BATCH_TRANSACTION,
        &mut options.disable_large_batch_transaction,
    );
    pass.boolean(DISABLE_SEEKS_COMPACTION, &mut options.disable_seeks_compaction);
    pass.boolean(ERROR_IF_EXIST, &mut options.error_if_exist);
    pass.boolean(ERROR_IF_MISSING, &mut options.error_if_missing);
    pass.boolean(NO_WRITE_MERGE, &mut options.no_write_merge);
    pass.boolean(READ_ONLY, &mut options.read_only);

    pass.int(BLOCK_CACHE_CAPACITY, &mut options.block_cache_capacity);
    pass.int(BLOCK_RESTART_INTERVAL, &mut options.block_restart_interval);
    pass.int(
        COMPACTION_EXPAND_LIMIT_FACTOR,
        &mut options.compaction_expand_limit_factor,
    );
    pass.int(
        COMPACTION_GP_OVERLAPS_FACTOR,
        &mut options.compaction_gp_overlaps_factor,
    );
    pass.int(COMPACTION_L0_TRIGGER, &mut options.compaction_l0_trigger);
    pass.int(
        COMPACTION_SOURCE_LIMIT_FACTOR,
        &mut options.compaction_source_limit_factor,
    );
    pass.int(ITERATOR_SAMPLING_RATE, &mut options.iterator_sampling_rate);
    pass.int(WRITE_BUFFER, &mut options.write_buffer);
    pass.int(WRITE_L0_PAUSE_TRIGGER, &mut options.write_l0_pause_trigger);
    pass.int(WRITE_L0_SLOWDOWN_TRIGGER, &mut options.write_l0_slowdown_trigger);
    pass.int(FILTER_BASE_LG, &mut options.filter_base_lg);
    pass.int(OPEN_FILES_CACHE_CAPACITY, &mut options.open_files_cache_capacity);

    // Must stay last so the dump shows the merged record.
    let debug_options = pass.flag(DEBUG_OPTIONS);

    let Pass { set, changed } = pass;
    let warnings = set.finish();
    if !warnings.is_empty() {
        info!(count = warnings.len(), "some settings were ignored, see warnings above");
    }

    let dumped = debug_options && dump_options(options, out);
    LoadReport {
        changed,
        warnings,
        dumped,
    }
}

/// New compaction total size, if it should follow the table size.
///
/// Only when the table size was changed and the total size was not supplied;
/// an explicit total size is kept even if it breaks the default ratio.
pub fn derive_total_size(table_changed: bool, total_supplied: bool, table_size: i64) -> Option<i64> {
    (table_changed && !total_supplied).then(|| table_size.saturating_mul(TOTAL_TO_TABLE_RATIO))
}

/// Renders `options` as JSON indented by four spaces.
pub fn render_options(options: &Options) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    options.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn dump_options<W: Write>(options: &Options, out: &mut W) -> bool {
    let json = match render_options(options) {
        Ok(json) => json,
        Err(e) => {
            warn!("failed to serialize options for {DEBUG_OPTIONS}: {e}");
            return false;
        }
    };

    match writeln!(out, "LevelDB Options:\n{json}").and_then(|()| out.flush()) {
        Ok(()) => true,
        Err(e) => {
            warn!("failed to write options dump: {e}");
            false
        }
    }
}
