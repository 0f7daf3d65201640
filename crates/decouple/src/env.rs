//! Environment variable sources

use std::collections::HashMap;

/// A source of environment variables consulted before any settings file.
pub trait EnvSource: Send + Sync {
    /// Look up `key` by exact, case-sensitive name.
    fn lookup(&self, key: &str) -> Option<String>;

    /// Whether `key` is set.
    fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }
}

/// The live process environment.
///
/// Every lookup reads the current environment; nothing is cached.
///
/// Values are converted lossily: bytes that are not valid UTF-8 become
/// `U+FFFD` rather than failing the lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        // Keys containing '=' or NUL can never be set and make var_os panic
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}

/// A fixed set of variables, independent of the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedEnv {
    vars: HashMap<String, String>,
}

impl FixedEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `KEY=VALUE` entries. See [`env_to_map`].
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            vars: env_to_map(entries),
        }
    }

    /// Add or replace a variable.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl EnvSource for FixedEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for FixedEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Turn `KEY=VALUE` strings into a map.
///
/// Each entry is split on its first `=`; entries without one are dropped.
/// Later entries replace earlier ones.
pub fn env_to_map<I, S>(entries: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .filter_map(|entry| {
            entry
                .as_ref()
                .split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
        })
        .collect()
}

/// Whether `key` is set in the process environment.
pub(crate) fn process_has(key: &str) -> bool {
    ProcessEnv.contains(key)
}
