//! Shared test utilities for the decouple workspace.
//!
//! Dev-dependency only; never published.
//!
//! # Modules
//!
//! - [`settings`] — [`TestSettingsDir`] builder for settings file fixtures

pub mod settings;

pub use settings::TestSettingsDir;
