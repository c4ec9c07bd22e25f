//! # Observability
//!
//! Structured JSON logging. One line per event, synchronous, deterministic
//! field ordering, errors to stderr. No metrics subsystem; the logger is the
//! whole surface.

mod logger;

pub use logger::{Logger, Severity};
