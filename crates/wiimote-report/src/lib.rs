//! Wii Remote input report framing
//!
//! This crate provides the pieces every Wii Remote extension decoder shares:
//! the input report tag table, the extension payload offset for each tag,
//! the core button bytes, and the [`CoreController`] trait through which an
//! extension decoder reaches the remote it is plugged into.
//!
//! ## Features
//! - Report tag classification and extension offset resolution
//! - Core button decoding (d-pad, A/B, 1/2, +/-, Home)
//! - A minimal [`Wiimote`] transport usable on its own or behind an extension

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod buttons;
pub mod controller;
pub mod report;

pub use buttons::*;
pub use controller::*;
pub use report::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("Empty input report")]
    Empty,

    #[error("Report too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },
}

pub type ReportResult<T> = Result<T, ReportError>;
