//! # Pipeline Orchestration
//!
//! Runs collection, formatting, composition, audio pairing and publishing in
//! sequence while keeping a shared [`StatusHandle`] up to date. Used by both
//! the web server and the `run` subcommand.

pub mod runner;
pub mod status;

pub use runner::{select_rankings, MoodChoice, PipelineRunner, RunRequest};
pub use status::{PipelineStatus, Stage, StageStatus, StatusHandle, VideoDescriptor};
