//! # refinery-observability
//!
//! Structured logging for the concept refinery: subscriber setup and the named
//! events the refinement pipeline emits.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_with_filter};
