//! Coercion of resolved values into typed values

use crate::{Error, Result};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Strings accepted as `true` (compared case-insensitively).
pub const TRUE_VALUES: &[&str] = &["y", "yes", "t", "true", "on", "1"];

/// Strings accepted as `false` (compared case-insensitively).
pub const FALSE_VALUES: &[&str] = &["n", "no", "f", "false", "off", "0"];

/// A pure conversion from a raw string into a value.
pub type CastFn = fn(&str) -> Result<Value>;

/// Convert a raw string into a boolean.
///
/// # Errors
///
/// Returns [`Error::InvalidTruthValue`] when `raw` is in neither
/// [`TRUE_VALUES`] nor [`FALSE_VALUES`].
pub fn to_bool(raw: &str) -> Result<bool> {
    let lowered = raw.to_lowercase();

    if TRUE_VALUES.contains(&lowered.as_str()) {
        return Ok(true);
    }
    if FALSE_VALUES.contains(&lowered.as_str()) {
        return Ok(false);
    }

    Err(Error::InvalidTruthValue {
        value: raw.to_string(),
    })
}

/// Convert a dynamic value into a boolean.
///
/// Native booleans are returned unchanged and strings go through [`to_bool`].
/// Any other value is not a truth value.
pub fn value_to_bool(value: &Value) -> Result<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) => to_bool(s),
        other => Err(Error::InvalidTruthValue {
            value: other.to_string(),
        }),
    }
}

/// Coercion applied to a resolved value before it is returned.
#[derive(Clone, Copy, Default)]
pub enum Coercion {
    /// Return the value unchanged.
    #[default]
    None,
    /// Interpret the value as a truth value. Empty strings are `false`.
    Boolean,
    /// Run a caller supplied conversion on string values.
    Custom(CastFn),
}

impl Coercion {
    /// Apply this coercion to a resolved value.
    pub fn apply(&self, value: Value) -> Result<Value> {
        match self {
            Self::None => Ok(value),
            Self::Boolean => match &value {
                Value::String(s) if s.is_empty() => Ok(Value::Bool(false)),
                _ => value_to_bool(&value).map(Value::Bool),
            },
            Self::Custom(cast) => match &value {
                Value::String(s) => cast(s),
                // Typed defaults are already in their final form
                _ => Ok(value),
            },
        }
    }

    /// Short name of this coercion.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Boolean => "bool",
            Self::Custom(_) => "custom",
        }
    }
}

impl FromStr for Coercion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "" | "none" | "str" | "string" => Ok(Self::None),
            "bool" | "boolean" => Ok(Self::Boolean),
            _ => Err(Error::UnknownCoercion {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Debug for Coercion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coercion::{}", self.name())
    }
}

impl PartialEq for Coercion {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None) | (Self::Boolean, Self::Boolean) => true,
            (Self::Custom(a), Self::Custom(b)) => std::ptr::fn_addr_eq(*a, *b),
            _ => false,
        }
    }
}
