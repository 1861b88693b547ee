//! # bizday-core
//!
//! Core error definitions and string helpers for bizday.
//!
//! This crate provides the building blocks shared across the other crates
//! in the workspace: the error hierarchy, the `ensure!` / `fail!` macros,
//! and the text parsers and formatters used at the input and output
//! boundaries.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Miscellaneous utilities.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
