//! Crate-level error types.

use std::fmt;

use glam::Vec3;

/// Errors produced by the vantage crate.
///
/// None of these are fatal to a running viewer: every failure leaves the
/// camera where it was.
#[derive(Debug)]
pub enum VantageError {
    /// A parameter was out of range (non-positive or non-finite).
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// No viewpoint with the given id is registered.
    NotFound(String),
    /// Two viewpoints share the same id.
    DuplicatePoint(String),
    /// A marker color string is not a `#rrggbb` hex triplet.
    InvalidColor(String),
    /// The host has not attached look-at controls to the camera yet.
    MissingControls,
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options or registry parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for VantageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { name, value } if value.is_finite() => {
                write!(f, "invalid parameter {name}: {value} (must be > 0)")
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "invalid parameter {name}: {value} (must be finite)")
            }
            Self::NotFound(id) => write!(f, "no viewpoint with id {id:?}"),
            Self::DuplicatePoint(id) => {
                write!(f, "duplicate viewpoint id {id:?}")
            }
            Self::InvalidColor(color) => {
                write!(f, "invalid marker color {color:?}")
            }
            Self::MissingControls => {
                write!(f, "camera has no look-at controls attached")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl VantageError {
    /// `InvalidParameter` naming the first non-finite component of `v`.
    pub(crate) fn check_finite(
        name: &'static str,
        v: Vec3,
    ) -> Result<(), Self> {
        match v.to_array().into_iter().find(|c| !c.is_finite()) {
            Some(value) => Err(Self::InvalidParameter { name, value }),
            None => Ok(()),
        }
    }
}

impl std::error::Error for VantageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VantageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
