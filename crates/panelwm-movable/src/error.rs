#![forbid(unsafe_code)]

//! Errors surfaced by the movable behavior.

use std::fmt;

/// Axis a size limit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeAxis {
    Height,
    Width,
}

impl fmt::Display for SizeAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Height => f.write_str("height"),
            Self::Width => f.write_str("width"),
        }
    }
}

/// Errors from [`Movable`](crate::Movable) and [`MovableConfig`](crate::MovableConfig).
///
/// A resize that would shrink the panel below its minimum is *not* an error;
/// it is reported as [`GeometryOutcome::BelowMinimum`](crate::GeometryOutcome::BelowMinimum).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovableError {
    /// A release arrived while the host had no rectangle. A release implies
    /// an earlier press that found one, so this is a protocol violation.
    NoActiveWindow,
    /// A configured minimum size is below one cell.
    InvalidMinimum { axis: SizeAxis, value: i32 },
    /// The reserved title-bar column count is negative.
    NegativeReservedCols { value: i32 },
}

impl fmt::Display for MovableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoActiveWindow => write!(f, "mouse release with no active window"),
            Self::InvalidMinimum { axis, value } => {
                write!(f, "minimum {axis} must be at least 1, got {value}")
            }
            Self::NegativeReservedCols { value } => {
                write!(f, "reserved title columns must not be negative, got {value}")
            }
        }
    }
}

impl std::error::Error for MovableError {}
