//! Read-only key/value sources backed by one settings file
//!
//! Every variant parses its source once on construction and never changes
//! afterwards.

mod env_file;
mod ini_file;
mod memory;

pub use self::env_file::EnvFileRepository;
pub use self::ini_file::{IniRepository, SETTINGS_SECTION};
pub use self::memory::MemoryRepository;

use crate::Format;
use std::path::Path;

/// Capabilities shared by every repository variant.
pub trait Source {
    /// Whether the source itself defines `key`.
    fn has_key(&self, key: &str) -> bool;

    /// Value of `key`, or an empty string when absent.
    ///
    /// Use [`Source::has_key`] to tell "absent" from "present but empty".
    fn get_item(&self, key: &str) -> String;

    /// Whether `key` is set in the process environment or in the source.
    ///
    /// Kept so a repository used on its own still reports environment
    /// overrides. [`crate::Config`] does its own environment lookup and only
    /// calls [`Source::has_key`].
    fn contains(&self, key: &str) -> bool {
        crate::env::process_has(key) || self.has_key(key)
    }

    /// Number of keys defined by the source.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A settings repository of one of the supported kinds.
#[derive(Debug, Clone)]
pub enum Repository {
    Ini(IniRepository),
    EnvFile(EnvFileRepository),
    Memory(MemoryRepository),
}

impl Repository {
    /// File format of the backing source, if file backed.
    pub fn format(&self) -> Option<Format> {
        match self {
            Self::Ini(_) => Some(Format::Ini),
            Self::EnvFile(_) => Some(Format::EnvFile),
            Self::Memory(_) => None,
        }
    }

    /// Path the repository was loaded from, if file backed.
    pub fn source_path(&self) -> Option<&Path> {
        match self {
            Self::Ini(repo) => Some(repo.path()),
            Self::EnvFile(repo) => Some(repo.path()),
            Self::Memory(_) => None,
        }
    }

    fn inner(&self) -> &dyn Source {
        match self {
            Self::Ini(repo) => repo,
            Self::EnvFile(repo) => repo,
            Self::Memory(repo) => repo,
        }
    }
}

impl Source for Repository {
    fn has_key(&self, key: &str) -> bool {
        self.inner().has_key(key)
    }

    fn get_item(&self, key: &str) -> String {
        self.inner().get_item(key)
    }

    fn contains(&self, key: &str) -> bool {
        self.inner().contains(key)
    }

    fn len(&self) -> usize {
        self.inner().len()
    }
}

impl From<IniRepository> for Repository {
    fn from(repo: IniRepository) -> Self {
        Self::Ini(repo)
    }
}

impl From<EnvFileRepository> for Repository {
    fn from(repo: EnvFileRepository) -> Self {
        Self::EnvFile(repo)
    }
}

impl From<MemoryRepository> for Repository {
    fn from(repo: MemoryRepository) -> Self {
        Self::Memory(repo)
    }
}
