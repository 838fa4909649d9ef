// THEORY:
// This file is the main entry point for the `banana_vision` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the public
// API that will be exposed to external consumers (CLIs, services, UIs).
//
// The primary goal is to export the `RipenessPipeline` and its associated data
// structures (`PipelineConfig`, `AnalysisReport`, `Ripeness`, etc.) as the
// clean, high-level interface for the entire ripeness engine. The internal
// modules (`core_modules`) stay encapsulated: consumers feed in an RGBA
// buffer and get back a verdict, statistics, visualization masks, and the
// static recommendation table entry for the verdict.

pub mod core_modules;
pub mod error;
pub mod parallel_pipeline;
pub mod pipeline;
pub mod recommendation;

pub use error::{AnalysisError, Result};
pub use pipeline::{
    AnalysisReport, PipelineConfig, ReportSummary, Ripeness, RipenessPipeline, analyze_image,
};
pub use recommendation::{Recommendation, for_ripeness};
