//! JPX noise CLI - command line access to the ground noise engine.
//!
//! The `jpx-noise` binary resolves profiles, classifies type codes, and
//! computes single-point or whole-track noise estimates as JSON.

pub mod config;
pub mod input;
pub mod logging;

pub use config::Config;
pub use logging::init_tracing;
