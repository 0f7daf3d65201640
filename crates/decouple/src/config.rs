//! Option resolution
//!
//! [`Config`] answers option lookups from three tiers, highest first:
//! 1. **Environment** - a variable with exactly the option's name
//! 2. **Repository** - the settings file the config was built from
//! 3. **Default** - supplied by the caller; without one the lookup fails
//!
//! The resolved value then goes through the requested [`Coercion`].

use crate::cast::{self, Coercion};
use crate::env::{EnvSource, ProcessEnv};
use crate::repository::{Repository, Source};
use crate::{Detector, Error, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::trace;

/// Resolves options against the environment, one repository and defaults.
#[derive(Debug, Clone)]
pub struct Config<E = ProcessEnv> {
    repository: Repository,
    env: E,
}

impl Config<ProcessEnv> {
    /// Wrap an already built repository.
    pub fn new(repository: impl Into<Repository>) -> Self {
        Self {
            repository: repository.into(),
            env: ProcessEnv,
        }
    }

    /// Detect and load the settings file in `path`.
    ///
    /// # Errors
    ///
    /// Fails if no settings file exists or the detected file cannot be
    /// loaded. See [`Detector::load`].
    pub fn from_dir(path: impl AsRef<Path>) -> Result<Self> {
        let repository = Detector::new(path.as_ref()).load()?;
        Ok(Self::new(repository))
    }

    /// Detect and load the settings file in the current working directory.
    pub fn from_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::from_dir(cwd)
    }
}

impl<E: EnvSource> Config<E> {
    /// Replace the environment consulted before the repository.
    pub fn with_env<F: EnvSource>(self, env: F) -> Config<F> {
        Config {
            repository: self.repository,
            env,
        }
    }

    /// The repository backing this config.
    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    /// Resolve `option` and apply `coercion`.
    ///
    /// `default` is used when neither the environment nor the repository
    /// defines the option. Passing `None` makes the option required.
    ///
    /// # Errors
    ///
    /// - [`Error::OptionNotFound`] if the option is unresolved and there is no default
    /// - any error of the coercion, e.g. [`Error::InvalidTruthValue`]
    pub fn get(&self, option: &str, default: Option<Value>, coercion: Coercion) -> Result<Value> {
        let value = self.resolve(option, default)?;
        coercion.apply(value)
    }

    /// Resolve `option` as a string.
    ///
    /// Typed defaults never reach this path, so the result is always the
    /// environment, repository or default text.
    pub fn get_str(&self, option: &str, default: Option<&str>) -> Result<String> {
        if let Some(raw) = self.lookup(option) {
            return Ok(raw);
        }
        default
            .map(str::to_string)
            .ok_or_else(|| Self::not_found(option))
    }

    /// Resolve `option` as a boolean.
    pub fn get_bool(&self, option: &str, default: Option<bool>) -> Result<bool> {
        let value = self.get(option, default.map(Value::Bool), Coercion::Boolean)?;
        cast::value_to_bool(&value)
    }

    /// Resolve `option` and parse it with [`FromStr`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] if the resolved text does not parse.
    pub fn get_parsed<T>(&self, option: &str, default: Option<T>) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.lookup(option) {
            Some(raw) => raw
                .parse()
                .map_err(|e: T::Err| Error::invalid_value(option, e)),
            None => default.ok_or_else(|| Self::not_found(option)),
        }
    }

    fn resolve(&self, option: &str, default: Option<Value>) -> Result<Value> {
        if let Some(raw) = self.lookup(option) {
            return Ok(Value::String(raw));
        }

        trace!(option, tier = "default", "resolved option");
        default.ok_or_else(|| Self::not_found(option))
    }

    /// Raw text from the environment or the repository.
    fn lookup(&self, option: &str) -> Option<String> {
        if let Some(raw) = self.env.lookup(option) {
            trace!(option, tier = "environment", "resolved option");
            return Some(raw);
        }

        if self.repository.has_key(option) {
            trace!(option, tier = "repository", "resolved option");
            return Some(self.repository.get_item(option));
        }

        None
    }

    fn not_found(option: &str) -> Error {
        Error::OptionNotFound {
            option: option.to_string(),
        }
    }
}
