use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::{
    audio::{AudioPairing, PairedVideo},
    collection::{CampusImageCollector, RankingCollector, TrendingAudioTracker},
    composition::{list_files, ComposedVideo, CompositionEngine, Mood},
    config::Config,
    error::Result,
    pipeline::status::{Stage, StageStatus, StatusHandle, VideoDescriptor},
    rankings::{category_slug, RankingFormatter},
};

/// Body of a run request
#[derive(Debug, Clone, Deserialize)]
pub struct RunRequest {
    #[serde(default)]
    pub categories: Vec<String>,

    /// Falls back to the configured default mood
    #[serde(default)]
    pub audio_mood: Option<String>,
}

/// How each video's audio mood is chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoodChoice {
    /// Same mood for every video
    Fixed(String),
    /// Mood suggested from each ranking's file name
    Suggested,
}

impl MoodChoice {
    fn for_file(&self, ranking_file: &str) -> String {
        match self {
            MoodChoice::Fixed(mood) => mood.clone(),
            MoodChoice::Suggested => Mood::suggest_for(ranking_file).to_string(),
        }
    }
}

/// Match formatted ranking files against user selections
///
/// A file's name is its stem with underscores turned into spaces. A file is
/// selected when any selection is a case-insensitive substring of its name.
/// Output keeps the order of `files`.
pub fn select_rankings(files: &[String], selections: &[String]) -> Vec<String> {
    let selections: Vec<String> = selections
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    files
        .iter()
        .filter(|file| {
            let stem = Path::new(file.as_str())
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or(file.as_str());
            let name = stem.replace('_', " ").to_lowercase();
            selections.iter().any(|selection| name.contains(selection.as_str()))
        })
        .cloned()
        .collect()
}

/// Runs the full pipeline and keeps the shared status current
pub struct PipelineRunner {
    config: Config,
    status: StatusHandle,
}

impl PipelineRunner {
    pub fn new(config: Config, status: StatusHandle) -> Self {
        Self { config, status }
    }

    pub fn status(&self) -> &StatusHandle {
        &self.status
    }

    /// Write raw rankings and the placeholder image and audio trees
    pub fn collect_assets(&self) -> Result<()> {
        info!("Starting data collection");
        let paths = &self.config.paths;

        let rankings = RankingCollector::new(paths.raw_data_dir()).run_all()?;
        let images = CampusImageCollector::new(paths.images_dir()).download_sample_images()?;
        let tracks =
            TrendingAudioTracker::new(paths.audio_dir(), &self.config.audio.track_extension).collect_trending_audio()?;

        info!(
            "Data collection completed: {} ranking files, {} images, {} tracks",
            rankings, images, tracks
        );
        Ok(())
    }

    /// Format, compose and pair every ranking on disk
    ///
    /// The standalone batch: no selection and no publishing, and the shared
    /// status is left alone. Each mood is suggested from its file name and
    /// videos whose mood has no tracks are skipped.
    pub fn generate_all(&self) -> Result<Vec<PairedVideo>> {
        self.config.paths.ensure_dirs()?;

        let formatted = RankingFormatter::from_config(&self.config).format_all()?;
        let composed = CompositionEngine::from_config(&self.config).create_all_ranking_videos()?;
        let paired = AudioPairing::from_config(&self.config).process_all_videos()?;

        info!(
            "Batch generation completed: {} formatted, {} composed, {} with audio",
            formatted.len(),
            composed.len(),
            paired.len()
        );
        Ok(paired)
    }

    /// Run every stage for the selected categories
    ///
    /// Status is reset on entry. On error both stages are marked failed and
    /// the error is returned. Videos that cannot be composed or paired are
    /// left out without failing the run.
    pub fn run(&self, categories: &[String], mood: &MoodChoice) -> Result<Vec<VideoDescriptor>> {
        info!("Starting pipeline with categories: {:?}, audio mood: {:?}", categories, mood);
        self.status.begin_run(timestamp());

        match self.run_stages(categories, mood) {
            Ok(videos) => {
                info!("Pipeline completed successfully, generated {} videos", videos.len());
                self.status.finish(videos.clone());
                Ok(videos)
            }
            Err(e) => {
                warn!("Error running pipeline: {}", e);
                self.status.fail();
                Err(e)
            }
        }
    }

    fn run_stages(&self, categories: &[String], mood: &MoodChoice) -> Result<Vec<VideoDescriptor>> {
        self.config.paths.ensure_dirs()?;

        self.collect_assets()?;
        self.status.mark(Stage::DataCollection, StageStatus::Completed);
        self.status.mark(Stage::VideoGeneration, StageStatus::InProgress);

        info!("Starting ranking formatting");
        RankingFormatter::from_config(&self.config).format_all()?;

        let available = list_files(&self.config.paths.formatted_dir(), "json")?;
        let selected = select_rankings(&available, categories);
        info!("Selected {} of {} formatted rankings", selected.len(), available.len());

        info!("Starting video generation");
        let engine = CompositionEngine::from_config(&self.config);
        let mut composed = Vec::with_capacity(selected.len());
        for ranking_file in &selected {
            match engine.create_ranking_video(ranking_file, &mood.for_file(ranking_file)) {
                Ok(video) => composed.push(video),
                Err(e) if e.is_per_video() => warn!("Skipping {}: {}", ranking_file, e),
                Err(e) => return Err(e),
            }
        }

        info!("Starting audio integration");
        let pairing = AudioPairing::from_config(&self.config);
        let mut videos = Vec::with_capacity(composed.len());
        for video in &composed {
            match pairing.add_audio_to_video(video) {
                Ok(paired) => videos.push(self.publish(video, &paired)?),
                Err(e) if e.is_per_video() => warn!("Failed to add audio to {}: {}", video.category, e),
                Err(e) => return Err(e),
            }
        }

        Ok(videos)
    }

    /// Copy a final description into the static videos directory
    fn publish(&self, video: &ComposedVideo, paired: &PairedVideo) -> Result<VideoDescriptor> {
        let id = format!("video_{}_{}", chrono::Utc::now().timestamp(), category_slug(&video.category));
        let videos_dir = self.config.paths.static_dir().join("videos");

        std::fs::create_dir_all(&videos_dir)?;
        std::fs::copy(&paired.path, videos_dir.join(format!("{}.txt", id)))?;

        Ok(VideoDescriptor {
            url: format!("/static/videos/{}.txt", id),
            id,
            category: video.category.clone(),
            audio_mood: paired.audio_mood.clone(),
            items: video.items.clone(),
            timestamp: timestamp(),
        })
    }
}

fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
