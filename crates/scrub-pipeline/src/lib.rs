//! Table cleaning pipeline.
//!
//! Composes the validator and the cleaner into a single run:
//! pre-validation, cleaning, post-validation, and a [`PipelineReport`].
//!
//! - **config**: [`PipelineConfig`] and YAML/JSON document loading
//! - **pipeline**: the [`Pipeline`] state machine
//! - **report**: the serializable run report
//! - **logging**: `tracing-subscriber` setup for applications

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod report;

pub use config::PipelineConfig;
pub use pipeline::Pipeline;
pub use report::PipelineReport;
