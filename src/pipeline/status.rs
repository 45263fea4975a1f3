//! Shared pipeline status
//!
//! The status is written by the pipeline runner and read by the status and
//! video listing endpoints. [`StatusHandle`] wraps it in an `Arc<RwLock<_>>`
//! so the blocking runner and async handlers can share it.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

/// Progress of one pipeline stage
///
/// Each run moves a stage `NotStarted -> InProgress -> {Completed, Failed}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    Failed,
}

/// A published video from the last run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoDescriptor {
    pub id: String,
    pub category: String,
    pub audio_mood: String,

    /// Items shown in the video, as `text (description)`
    #[serde(default)]
    pub items: Vec<String>,
    pub timestamp: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PipelineStatus {
    pub data_collection: StageStatus,
    pub video_generation: StageStatus,
    pub last_run: Option<String>,
    pub videos_generated: Vec<VideoDescriptor>,
}

/// Pipeline stage, used to address a status field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    DataCollection,
    VideoGeneration,
}

/// Cloneable handle to the shared [`PipelineStatus`]
#[derive(Debug, Clone, Default)]
pub struct StatusHandle {
    inner: Arc<RwLock<PipelineStatus>>,
}

impl StatusHandle {
    pub fn new() -> Self {
        Self::default()
    }

    // A panicking writer leaves plain data behind, so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, PipelineStatus> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, PipelineStatus> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Copy of the current status
    pub fn snapshot(&self) -> PipelineStatus {
        self.read().clone()
    }

    /// Videos published by the last run
    pub fn videos(&self) -> Vec<VideoDescriptor> {
        self.read().videos_generated.clone()
    }

    /// Reset for a new run
    pub fn begin_run(&self, started_at: String) {
        let mut status = self.write();
        status.data_collection = StageStatus::InProgress;
        status.video_generation = StageStatus::NotStarted;
        status.last_run = Some(started_at);
        status.videos_generated.clear();
    }

    pub fn mark(&self, stage: Stage, state: StageStatus) {
        let mut status = self.write();
        match stage {
            Stage::DataCollection => status.data_collection = state,
            Stage::VideoGeneration => status.video_generation = state,
        }
    }

    /// Record a successful run
    pub fn finish(&self, videos: Vec<VideoDescriptor>) {
        let mut status = self.write();
        status.data_collection = StageStatus::Completed;
        status.video_generation = StageStatus::Completed;
        status.videos_generated = videos;
    }

    /// Record a failed run
    pub fn fail(&self) {
        let mut status = self.write();
        status.data_collection = StageStatus::Failed;
        status.video_generation = StageStatus::Failed;
    }
}
