//! Settings resolution for Rust processes
//!
//! Resolves named options from the process environment first, then from a
//! settings file (`settings.ini` or `.env`), then from a caller default.

pub mod cast;
pub mod config;
pub mod detect;
pub mod env;
pub mod error;
pub mod format;
pub mod logging;
pub mod repository;

pub use cast::{CastFn, Coercion, to_bool};
pub use config::Config;
pub use detect::{Candidate, Detector};
pub use env::{EnvSource, FixedEnv, ProcessEnv};
pub use error::{Error, Result};
pub use format::Format;
pub use repository::{
    EnvFileRepository, IniRepository, MemoryRepository, Repository, SETTINGS_SECTION, Source,
};

/// Dynamic value produced by [`Config::get`].
pub use serde_json::Value;
