use std::{
    fmt::Debug,
    num::{ParseFloatError, ParseIntError},
};

use thiserror::Error;
use tracing::{debug, warn};

use crate::source::SettingSource;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid integer: {0}")]
    Int(#[from] ParseIntError),
    #[error("invalid float: {0}")]
    Float(#[from] ParseFloatError),
    #[error("float must be finite")]
    NonFinite,
    #[error("invalid boolean syntax")]
    Bool,
}

/// A scalar type a setting can be parsed into.
pub trait SettingValue: Copy + PartialEq + Debug {
    const TYPE_NAME: &'static str;

    fn parse_setting(raw: &str) -> Result<Self, ParseError>;
}

impl SettingValue for i64 {
    const TYPE_NAME: &'static str = "int";

    fn parse_setting(raw: &str) -> Result<Self, ParseError> {
        Ok(raw.parse()?)
    }
}

impl SettingValue for f64 {
    const TYPE_NAME: &'static str = "float";

    // NaN and infinities have no JSON form and break change detection.
    fn parse_setting(raw: &str) -> Result<Self, ParseError> {
        let value: f64 = raw.parse()?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ParseError::NonFinite)
        }
    }
}

impl SettingValue for bool {
    const TYPE_NAME: &'static str = "bool";

    fn parse_setting(raw: &str) -> Result<Self, ParseError> {
        match raw {
            "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
            "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
            _ => Err(ParseError::Bool),
        }
    }
}

/// Why a setter left its field alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Setting unset or empty.
    Missing,
    /// Setting present but not parsable as the field's type.
    Invalid,
    /// No field was wired to the setting.
    NoTarget,
}

/// Result of one typed setter call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SetOutcome<T> {
    Applied { value: T, changed: bool },
    Skipped(SkipReason),
}

impl<T> SetOutcome<T> {
    /// Whether the field's effective value changed.
    pub fn changed(&self) -> bool {
        matches!(self, SetOutcome::Applied { changed: true, .. })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WarningKind {
    Invalid { value: String, reason: ParseError },
    NoTarget,
}

/// A recoverable problem met while applying one setting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadWarning {
    pub key: String,
    pub kind: WarningKind,
}

/// Reads settings from a source into fields, remembering what it had to skip.
pub struct Setters<'s> {
    source: &'s dyn SettingSource,
    warnings: Vec<LoadWarning>,
}

impl<'s> Setters<'s> {
    pub fn new(source: &'s dyn SettingSource) -> Self {
        Self {
            source,
            warnings: Vec::new(),
        }
    }

    pub fn set_int(&mut self, key: &str, dest: Option<&mut i64>) -> SetOutcome<i64> {
        self.set(key, dest)
    }

    pub fn set_float(&mut self, key: &str, dest: Option<&mut f64>) -> SetOutcome<f64> {
        self.set(key, dest)
    }

    pub fn set_bool(&mut self, key: &str, dest: Option<&mut bool>) -> SetOutcome<bool> {
        self.set(key, dest)
    }

    /// Overwrites `dest` with the parsed value of `key`, if it is set and valid.
    ///
    /// Missing settings are silent. A missing destination or an unparsable
    /// value is logged and recorded, and `dest` is left untouched.
    pub fn set<T: SettingValue>(&mut self, key: &str, dest: Option<&mut T>) -> SetOutcome<T> {
        let raw = match self.source.get(key) {
            Some(raw) if !raw.is_empty() => raw,
            _ => return SetOutcome::Skipped(SkipReason::Missing),
        };

        let Some(dest) = dest else {
            warn!(key, "no destination wired for setting, leaving existing value unchanged");
            self.warnings.push(LoadWarning {
                key: key.to_owned(),
                kind: WarningKind::NoTarget,
            });
            return SetOutcome::Skipped(SkipReason::NoTarget);
        };

        let value = match T::parse_setting(&raw) {
            Ok(value) => value,
            Err(reason) => {
                warn!(
                    key,
                    value = %raw,
                    "error parsing setting as {}: {reason}, leaving existing value {:?} unchanged",
                    T::TYPE_NAME,
                    *dest,
                );
                self.warnings.push(LoadWarning {
                    key: key.to_owned(),
                    kind: WarningKind::Invalid { value: raw, reason },
                });
                return SetOutcome::Skipped(SkipReason::Invalid);
            }
        };

        let changed = *dest != value;
        if changed {
            debug!(key, old = ?*dest, new = ?value, "setting applied");
        }
        *dest = value;
        SetOutcome::Applied { value, changed }
    }

    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }

    pub fn finish(self) -> Vec<LoadWarning> {
        self.warnings
    }
}
