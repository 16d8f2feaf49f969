//! Error handling for FloorKit
//!
//! Provides error types for the two layers of the engine:
//! - Plan errors (invalid footprint data handed in by the caller)
//! - Session errors (transform gesture lifecycle violations)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Plan error type
///
/// Represents contract violations in caller-supplied footprint data.
/// Out-of-domain geometry is rejected when a gesture begins rather than
/// being handled deep inside geometry code.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// Footprint carries a NaN or infinite coordinate or extent
    #[error("Footprint {id} has non-finite geometry")]
    NonFiniteGeometry {
        /// The offending footprint id.
        id: u64,
    },

    /// Footprint width or height is zero or negative
    #[error("Footprint {id} has invalid dimensions {width}x{height}")]
    InvalidDimensions {
        /// The offending footprint id.
        id: u64,
        /// The supplied width.
        width: f64,
        /// The supplied height.
        height: f64,
    },

    /// Footprint id is not present in the plan
    #[error("Footprint {id} not found in plan")]
    UnknownFootprint {
        /// The missing footprint id.
        id: u64,
    },
}

/// Session error type
///
/// Represents violations of the transform-session state machine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A gesture was started with nothing selected
    #[error("Transform session requires a non-empty selection")]
    EmptySelection,

    /// A gesture was started while another is still active
    #[error("A transform session is already active")]
    AlreadyActive,
}

/// Main error type for FloorKit
///
/// A unified error type that can represent any error from both layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Plan error
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// Session error
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a plan error
    pub fn is_plan_error(&self) -> bool {
        matches!(self, Error::Plan(_))
    }

    /// Check if this is a session error
    pub fn is_session_error(&self) -> bool {
        matches!(self, Error::Session(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
