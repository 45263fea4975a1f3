//! # Ranking Reels
//!
//! Turn college rankings into short-form ranking videos, driven from a small
//! web UI.
//!
//! Every expensive step is a stand-in: rankings come from static tables,
//! campus images and audio tracks are text placeholders, and a "video" is a
//! text description of what would have been rendered.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ranking_reels::{
//!     config::Config,
//!     pipeline::{MoodChoice, PipelineRunner, StatusHandle},
//! };
//!
//! # fn main() -> ranking_reels::Result<()> {
//! let runner = PipelineRunner::new(Config::with_root("data"), StatusHandle::new());
//! let videos = runner.run(&["Best Campus Food".to_string()], &MoodChoice::Fixed("calm".into()))?;
//!
//! for video in videos {
//!     println!("{} -> {}", video.category, video.url);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`collection`] - Static ranking tables and placeholder asset trees
//! - [`rankings`] - Template-based ranking formatting
//! - [`composition`] - Video placeholder composition
//! - [`audio`] - Mood-based audio pairing
//! - [`pipeline`] - End-to-end orchestration and shared status
//! - [`server`] - HTTP facade
//! - [`catalog`] - Markdown category and audio catalogues
//! - [`config`] - Configuration management

pub mod audio;
pub mod catalog;
pub mod collection;
pub mod composition;
pub mod config;
pub mod error;
pub mod load;
pub mod pipeline;
pub mod rankings;
pub mod server;

// Re-export commonly used types for convenience
pub use crate::{
    composition::{CompositionEngine, Mood},
    config::Config,
    error::{PipelineError, Result},
    pipeline::{PipelineRunner, StatusHandle},
    rankings::RankingFormatter,
};
