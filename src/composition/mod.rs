//! # Composition Stub
//!
//! Stands in for video rendering: classifies a background for each
//! formatted ranking and writes a text description of the video.
//!
//! [`CompositionEngine::create_all_ranking_videos`] is the batch entry point
//! behind `ranking-reels generate`. The web pipeline composes only the
//! selected files through [`CompositionEngine::create_ranking_video`].

pub mod classifier;
pub mod engine;

// Re-exports for convenience
pub use classifier::{BackgroundBucket, Mood};
pub use engine::{list_files, ComposedVideo, CompositionEngine};
