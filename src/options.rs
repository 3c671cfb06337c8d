use serde::{Deserialize, Serialize};

const KIB: i64 = 1024;
const MIB: i64 = 1024 * KIB;

/// Block compression used for sorted tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compression {
    /// Let the engine pick (snappy).
    #[default]
    Default,
    None,
    Snappy,
}

/// Tuning knobs handed to the storage engine's constructor.
///
/// `Options::default()` carries the engine's built-in defaults; the loader
/// only overwrites the fields whose settings are present and valid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Options {
    pub block_size: i64,
    pub block_cache_capacity: i64,
    pub block_cache_evict_removed: bool,
    pub block_restart_interval: i64,
    pub compaction_expand_limit_factor: i64,
    pub compaction_gp_overlaps_factor: i64,
    pub compaction_l0_trigger: i64,
    pub compaction_source_limit_factor: i64,
    pub compaction_table_size: i64,
    pub compaction_table_size_multiplier: f64,
    pub compaction_total_size: i64,
    pub compaction_total_size_multiplier: f64,
    pub compression: Compression,
    pub disable_block_cache: bool,
    pub disable_buffer_pool: bool,
    pub disable_compaction_backoff: bool,
    pub disable_large_batch_transaction: bool,
    pub disable_seeks_compaction: bool,
    pub error_if_exist: bool,
    pub error_if_missing: bool,
    pub filter_base_lg: i64,
    pub iterator_sampling_rate: i64,
    pub no_sync: bool,
    pub no_write_merge: bool,
    /// Negative disables the open-files cache.
    pub open_files_cache_capacity: i64,
    pub read_only: bool,
    pub write_buffer: i64,
    pub write_l0_pause_trigger: i64,
    pub write_l0_slowdown_trigger: i64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            block_size: 4 * KIB,
            block_cache_capacity: 8 * MIB,
            block_cache_evict_removed: false,
            block_restart_interval: 16,
            compaction_expand_limit_factor: 25,
            compaction_gp_overlaps_factor: 10,
            compaction_l0_trigger: 4,
            compaction_source_limit_factor: 1,
            compaction_table_size: 2 * MIB,
            compaction_table_size_multiplier: 1.0,
            compaction_total_size: 10 * MIB,
            compaction_total_size_multiplier: 10.0,
            compression: Compression::Default,
            disable_block_cache: false,
            disable_buffer_pool: false,
            disable_compaction_backoff: false,
            disable_large_batch_transaction: false,
            disable_seeks_compaction: false,
            error_if_exist: false,
            error_if_missing: false,
            filter_base_lg: 11,
            iterator_sampling_rate: MIB,
            no_sync: false,
            no_write_merge: false,
            open_files_cache_capacity: default_open_files_cache_capacity(),
            read_only: false,
            write_buffer: 4 * MIB,
            write_l0_pause_trigger: 12,
            write_l0_slowdown_trigger: 8,
        }
    }
}

// macOS ships a low per-process descriptor limit.
const fn default_open_files_cache_capacity() -> i64 {
    if cfg!(target_os = "macos") { 200 } else { 500 }
}
