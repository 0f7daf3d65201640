//! `.env` backed repository

use super::Source;
use crate::{Error, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Key/value pairs parsed from a line oriented `KEY=VALUE` file.
#[derive(Debug, Clone, Default)]
pub struct EnvFileRepository {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl EnvFileRepository {
    /// Parse the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Open`] if the file cannot be opened and [`Error::Io`]
    /// if reading fails part way through. Bytes that are not valid UTF-8 are
    /// replaced, never rejected.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::open(path, e))?;

        let mut values = HashMap::new();
        for bytes in BufReader::new(file).split(b'\n') {
            let bytes = bytes.map_err(|e| Error::io(path, e))?;
            let line = String::from_utf8_lossy(&bytes);
            if let Some((key, value)) = parse_line(&line) {
                values.insert(key.to_string(), value.to_string());
            }
        }

        debug!(path = %path.display(), keys = values.len(), "loaded .env");

        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    /// Parse `.env` content that is already in memory.
    pub fn parse_str(content: &str) -> Self {
        let values = content
            .lines()
            .filter_map(parse_line)
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Self {
            path: PathBuf::new(),
            values,
        }
    }

    /// Path of the backing file. Empty for content parsed with
    /// [`EnvFileRepository::parse_str`].
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Source for EnvFileRepository {
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

/// Split one line into a trimmed key and value.
///
/// Blank lines, `#` comments and lines without `=` yield `None`.
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (key, value) = line.split_once('=')?;
    Some((key.trim(), unquote(value.trim())))
}

/// Strip one layer of matching single or double quotes.
fn unquote(value: &str) -> &str {
    if value.len() >= 2 {
        for quote in ['\'', '"'] {
            if let Some(inner) = value
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
            {
                return inner;
            }
        }
    }
    value
}
