//! `settings.ini` backed repository

use super::Source;
use crate::{Error, Result};
use ::ini::{Ini, ParseOption};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The only INI section read by [`IniRepository`].
pub const SETTINGS_SECTION: &str = "settings";

/// Key/value pairs of the `[settings]` section of an INI file.
#[derive(Debug, Clone)]
pub struct IniRepository {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl IniRepository {
    /// Parse the INI file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the file cannot be read or is not valid INI.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Backslashes are kept verbatim so Windows paths survive
        let options = ParseOption {
            enabled_escape: false,
            ..ParseOption::default()
        };
        let ini = Ini::load_from_file_opt(path, options).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let values = Self::collect_section(&ini);
        debug!(path = %path.display(), keys = values.len(), "loaded settings.ini");

        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Keys of the `[settings]` section. A repeated section or key overrides
    /// the earlier one.
    fn collect_section(ini: &Ini) -> HashMap<String, String> {
        let mut values = HashMap::new();
        for (name, properties) in ini.iter() {
            if name != Some(SETTINGS_SECTION) {
                continue;
            }
            for (key, value) in properties.iter() {
                values.insert(key.to_string(), value.to_string());
            }
        }
        values
    }
}

impl Source for IniRepository {
    fn has_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn get_item(&self, key: &str) -> String {
        self.values.get(key).cloned().unwrap_or_default()
    }

    fn len(&self) -> usize {
        self.values.len()
    }
}
