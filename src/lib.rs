//! Quiz scoring core and its surrounding adapters.
//!
//! The scoring engine is a pure function from a submitted questionnaire to
//! a winning archetype; the CLI in `main.rs` is a thin adapter around it.

pub mod browser;
pub mod form;
pub mod output;
pub mod scoring;
