//! Prelude module for age_picker_core.
//!
//! Re-exports the derive macros from derive_more used across the crate.

pub use derive_more::Display;
