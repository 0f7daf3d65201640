//! Settings file detection
//!
//! Finds the first supported settings file in a directory and builds the
//! matching repository.

use crate::repository::{EnvFileRepository, Repository};
use crate::{Format, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A settings file found in the search directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub format: Format,
}

/// Locates settings files in one directory.
#[derive(Debug, Clone)]
pub struct Detector {
    search_path: PathBuf,
}

impl Detector {
    pub fn new(search_path: impl Into<PathBuf>) -> Self {
        Self {
            search_path: search_path.into(),
        }
    }

    /// The directory as given.
    pub fn search_path(&self) -> &Path {
        &self.search_path
    }

    /// The directory as an absolute path, or unchanged if it cannot be
    /// resolved.
    ///
    /// Relative paths are joined onto the working directory. The directory
    /// does not have to exist and symlinks are not followed.
    pub fn resolved_dir(&self) -> PathBuf {
        std::path::absolute(&self.search_path).unwrap_or_else(|_| self.search_path.clone())
    }

    /// Find the highest priority settings file that exists.
    pub fn locate(&self) -> Option<Candidate> {
        let dir = self.resolved_dir();
        let found = Format::SEARCH_ORDER.into_iter().find_map(|format| {
            let path = dir.join(format.file_name());
            path.is_file().then_some(Candidate { path, format })
        });

        match &found {
            Some(candidate) => debug!(
                dir = %dir.display(),
                file = %candidate.path.display(),
                "detected settings file"
            ),
            None => debug!(dir = %dir.display(), "no settings file found"),
        }
        found
    }

    /// Build the repository for the detected settings file.
    ///
    /// # Errors
    ///
    /// With no settings file present this fails with [`crate::Error::Open`]
    /// for the `.env` path of the directory. Otherwise any load error of the
    /// detected format is returned.
    pub fn load(&self) -> Result<Repository> {
        match self.locate() {
            Some(candidate) => candidate.format.load(&candidate.path),
            None => {
                let fallback = self.resolved_dir().join(Format::EnvFile.file_name());
                EnvFileRepository::load(fallback).map(Repository::EnvFile)
            }
        }
    }
}
