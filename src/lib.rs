pub mod keys;
mod loader;
mod options;
mod setters;
mod source;

// Public exports
pub use loader::{
    LoadReport, TOTAL_TO_TABLE_RATIO, derive_total_size, read_options, read_options_from_env,
    render_options,
};
pub use options::{Compression, Options};
pub use setters::{
    LoadWarning, ParseError, SetOutcome, Setters, SettingValue, SkipReason, WarningKind,
};
pub use source::{EnvSource, MapSource, SettingSource};
