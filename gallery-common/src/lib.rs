//! Gallery page - Common Types & Logic
//!
//! Everything here is plain Rust with no browser dependency, so the confetti
//! simulation can be driven and tested without a display clock.

pub mod confetti;
pub mod core;

pub use anyhow::{bail, Result};
