use std::collections::HashMap;

/// Read-only key/value lookup the loader pulls settings from.
pub trait SettingSource {
    /// Returns the raw value for `key`, or `None` if it is not set.
    fn get(&self, key: &str) -> Option<String>;
}

/// The process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvSource;

impl SettingSource for EnvSource {
    fn get(&self, key: &str) -> Option<String> {
        // Non UTF-8 values come through lossily and fail parsing downstream.
        std::env::var_os(key).map(|val| val.to_string_lossy().into_owned())
    }
}

/// In-memory settings, mostly for tests and embedding.
#[derive(Clone, Debug, Default)]
pub struct MapSource {
    values: HashMap<String, String>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl SettingSource for MapSource {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

impl<S: SettingSource + ?Sized> SettingSource for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_source_only_returns_known_keys() {
        let source: MapSource = [("LDB_BLOCK_SIZE", "8192")].into_iter().collect();
        assert_eq!(source.get("LDB_BLOCK_SIZE").as_deref(), Some("8192"));
        assert_eq!(source.get("LDB_WRITE_BUFFER"), None);
    }

    #[test]
    fn env_source_misses_unset_variable() {
        assert_eq!(EnvSource.get("LDB_OPTIONS_TEST_SURELY_UNSET_VARIABLE"), None);
    }
}
