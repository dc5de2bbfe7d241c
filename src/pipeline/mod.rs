//! Pipeline artifacts and execution.
//!
//! ## Submodules
//!
//! - [`artifacts`] — Typed intermediates bundled into [`PipelineResult`],
//!   plus the [`Recovered`] degradation boundary
//! - [`runner`] — The [`Pipeline`] stage container and `process` entry point

pub mod artifacts;
pub mod runner;

// Re-export the main types for convenient access.
pub use artifacts::{PipelineResult, Recovered};
pub use runner::Pipeline;
