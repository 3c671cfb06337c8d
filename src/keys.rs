//! Names of the settings the loader reads.

// Reasonable things to try and tune.
pub const BLOCK_SIZE: &str = "LDB_BLOCK_SIZE";
pub const COMPACTION_TABLE_SIZE: &str = "LDB_COMPACTION_TABLE_SIZE";
pub const COMPACTION_TABLE_SIZE_MULTIPLIER: &str = "LDB_COMPACTION_TABLE_SIZE_MULTIPLIER";
pub const COMPACTION_TOTAL_SIZE: &str = "LDB_COMPACTION_TOTAL_SIZE";
pub const COMPACTION_TOTAL_SIZE_MULTIPLIER: &str = "LDB_COMPACTION_TOTAL_SIZE_MULTIPLIER";

// Proceed with caution: the application opening the engine may set these itself.
pub const DISABLE_COMPRESSION: &str = "LDB_DISABLE_COMPRESSION";
pub const NO_SYNC: &str = "LDB_NO_SYNC";
pub const BLOCK_CACHE_EVICT_REMOVED: &str = "LDB_BLOCK_CACHE_EVICT_REMOVED";
pub const DISABLE_BUFFER_POOL: &str = "LDB_DISABLE_BUFFER_POOL";
pub const DISABLE_BLOCK_CACHE: &str = "LDB_DISABLE_BLOCK_CACHE";
pub const DISABLE_COMPACTION_BACKOFF: &str = "LDB_DISABLE_COMPACTION_BACKOFF";
pub const DISABLE_LARGE_BATCH_TRANSACTION: &str = "LDB_DISABLE_LARGE_BATCH_TRANSACTION";
pub const DISABLE_SEEKS_COMPACTION: &str = "LDB_DISABLE_SEEKS_COMPACTION";
pub const ERROR_IF_EXIST: &str = "LDB_ERROR_IF_EXIST";
pub const ERROR_IF_MISSING: &str = "LDB_ERROR_IF_MISSING";
pub const NO_WRITE_MERGE: &str = "LDB_NO_WRITE_MERGE";
pub const READ_ONLY: &str = "LDB_READ_ONLY";
pub const BLOCK_CACHE_CAPACITY: &str = "LDB_BLOCK_CACHE_CAPACITY";
pub const BLOCK_RESTART_INTERVAL: &str = "LDB_BLOCK_RESTART_INTERVAL";
pub const COMPACTION_EXPAND_LIMIT_FACTOR: &str = "LDB_COMPACTION_EXPAND_LIMIT_FACTOR";
pub const COMPACTION_GP_OVERLAPS_FACTOR: &str = "LDB_COMPACTION_GP_OVERLAPS_FACTOR";
pub const COMPACTION_L0_TRIGGER: &str = "LDB_COMPACTION_L0_TRIGGER";
pub const COMPACTION_SOURCE_LIMIT_FACTOR: &str = "LDB_COMPACTION_SOURCE_LIMIT_FACTOR";
pub const ITERATOR_SAMPLING_RATE: &str = "LDB_ITERATOR_SAMPLING_RATE";
pub const WRITE_BUFFER: &str = "LDB_WRITE_BUFFER";
pub const WRITE_L0_PAUSE_TRIGGER: &str = "LDB_WRITE_L0_PAUSE_TRIGGER";
pub const WRITE_L0_SLOWDOWN_TRIGGER: &str = "LDB_WRITE_L0_SLOWDOWN_TRIGGER";
pub const FILTER_BASE_LG: &str = "LDB_FILTER_BASE_LG";
pub const OPEN_FILES_CACHE_CAPACITY: &str = "LDB_OPEN_FILES_CACHE_CAPACITY";

pub const DEBUG_OPTIONS: &str = "LDB_DEBUG_OPTIONS";

/// Every setting, in the order a pass reads them.
pub const ALL: &[&str] = &[
    BLOCK_SIZE,
    COMPACTION_TABLE_SIZE,
    COMPACTION_TABLE_SIZE_MULTIPLIER,
    COMPACTION_TOTAL_SIZE,
    COMPACTION_TOTAL_SIZE_MULTIPLIER,
    DISABLE_COMPRESSION,
    NO_SYNC,
    BLOCK_CACHE_EVICT_REMOVED,
    DISABLE_BUFFER_POOL,
    DISABLE_BLOCK_CACHE,
    DISABLE_COMPACTION_BACKOFF,
    DISABLE_LARGE_BATCH_TRANSACTION,
    DISABLE_SEEKS_COMPACTION,
    ERROR_IF_EXIST,
    ERROR_IF_MISSING,
    NO_WRITE_MERGE,
    READ_ONLY,
    BLOCK_CACHE_CAPACITY,
    BLOCK_RESTART_INTERVAL,
    COMPACTION_EXPAND_LIMIT_FACTOR,
    COMPACTION_GP_OVERLAPS_FACTOR,
    COMPACTION_L0_TRIGGER,
    COMPACTION_SOURCE_LIMIT_FACTOR,
    ITERATOR_SAMPLING_RATE,
    WRITE_BUFFER,
    WRITE_L0_PAUSE_TRIGGER,
    WRITE_L0_SLOWDOWN_TRIGGER,
    FILTER_BASE_LG,
    OPEN_FILES_CACHE_CAPACITY,
    DEBUG_OPTIONS,
];
