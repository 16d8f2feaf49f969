//! # FloorKit Core
//!
//! Core types, errors, and configuration for FloorKit.
//! Provides the fundamental abstractions shared by the layout engine:
//! typed errors, footprint and level identifiers, per-level height bands,
//! and measurement-unit helpers.

pub mod constants;
pub mod error;
pub mod types;
pub mod units;

pub use error::{Error, PlanError, Result, SessionError};

pub use types::{FootprintId, Level, LevelBand, LevelBands};

pub use units::MeasurementSystem;
