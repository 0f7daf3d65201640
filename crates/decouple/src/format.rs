//! Supported settings file formats

use crate::repository::{EnvFileRepository, IniRepository, Repository};
use crate::Result;
use std::path::Path;

/// Settings file formats, each bound to one repository variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// `settings.ini`, read from its `[settings]` section
    Ini,
    /// `.env`, one `KEY=VALUE` per line
    EnvFile,
}

impl Format {
    /// Search priority: the first format whose file exists wins.
    pub const SEARCH_ORDER: [Format; 2] = [Format::Ini, Format::EnvFile];

    /// File name looked for in a search directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Ini => "settings.ini",
            Self::EnvFile => ".env",
        }
    }

    /// Match a file name against the supported formats.
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::SEARCH_ORDER
            .into_iter()
            .find(|format| format.file_name() == name)
    }

    /// Build the repository variant for this format from `path`.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Repository> {
        let path = path.as_ref();
        Ok(match self {
            Self::Ini => Repository::Ini(IniRepository::load(path)?),
            Self::EnvFile => Repository::EnvFile(EnvFileRepository::load(path)?),
        })
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_name())
    }
}
