use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use tracing::{info, warn};

use crate::{
    composition::{list_files, ComposedVideo},
    config::Config,
    error::{AudioError, Result},
};

/// Result of pairing a video placeholder with a track
#[derive(Debug, Clone, PartialEq)]
pub struct PairedVideo {
    pub video_path: PathBuf,
    pub track_path: PathBuf,
    pub audio_mood: String,

    /// Final description combining video and audio
    pub path: PathBuf,
}

/// Picks a placeholder track for a mood and merges it with a video
/// description
pub struct AudioPairing {
    audio_dir: PathBuf,
    videos_dir: PathBuf,
    output_dir: PathBuf,
    track_extension: String,
}

impl AudioPairing {
    pub fn new<P: Into<PathBuf>>(audio_dir: P, videos_dir: P, output_dir: P, track_extension: &str) -> Self {
        Self {
            audio_dir: audio_dir.into(),
            videos_dir: videos_dir.into(),
            output_dir: output_dir.into(),
            track_extension: track_extension.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.paths.audio_dir(),
            config.paths.generated_dir(),
            config.paths.final_dir(),
            &config.audio.track_extension,
        )
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Choose a track for `mood` uniformly at random
    ///
    /// Moods map to `<audio_dir>/<mood lowercased>`. An absent or empty
    /// directory is an error the caller treats as "skip this video".
    pub fn get_audio_track(&self, mood: &str) -> Result<PathBuf> {
        let mood_key = mood.trim().to_lowercase();
        let is_plain_name = !mood_key.is_empty()
            && !mood_key.contains(['/', '\\'])
            && mood_key != "."
            && mood_key != "..";

        let mood_dir = self.audio_dir.join(&mood_key);
        if !is_plain_name || !mood_dir.is_dir() {
            warn!("Audio mood directory not found: {}", mood);
            return Err(AudioError::MoodNotFound { mood: mood.to_string() }.into());
        }

        let tracks = list_files(&mood_dir, &self.track_extension)?;
        let selected = tracks.choose(&mut rand::thread_rng()).ok_or_else(|| {
            warn!("No audio tracks found for mood: {}", mood);
            AudioError::NoTracks { mood: mood.to_string() }
        })?;

        Ok(mood_dir.join(selected))
    }

    /// Pair a video description file with a track for `mood`
    pub fn add_audio_to_file(&self, video_file: &Path, mood: &str) -> Result<PairedVideo> {
        info!("Adding {} audio to {}...", mood, video_file.display());

        let track_path = self.get_audio_track(mood)?;

        let video_name = video_file
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("video");
        let mood_key = mood.trim().to_lowercase();
        let path = self.output_dir.join(format!("{}_with_{}_audio.txt", video_name, mood_key));

        let video_description = std::fs::read_to_string(video_file)?;
        let audio_description = std::fs::read_to_string(&track_path)?;

        let content = format!(
            "This is a placeholder for a final video with audio.\n\
             In the actual implementation, this would be a 15-second video file with audio.\n\n\
             VIDEO DESCRIPTION:\n{}\n\n\
             AUDIO DESCRIPTION:\n{}\n\n\
             Final video created at: {}\n",
            video_description,
            audio_description,
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        );

        std::fs::create_dir_all(&self.output_dir)?;
        std::fs::write(&path, content)?;
        info!("Final video placeholder created at {}", path.display());

        Ok(PairedVideo {
            video_path: video_file.to_path_buf(),
            track_path,
            audio_mood: mood_key,
            path,
        })
    }

    /// Pair a freshly composed video using its own mood
    pub fn add_audio_to_video(&self, video: &ComposedVideo) -> Result<PairedVideo> {
        self.add_audio_to_file(&video.path, &video.audio_mood)
    }

    /// Pair every description in the videos directory, reading each mood
    /// back from its `Audio mood:` line (default `calm`). Videos whose mood
    /// has no tracks are skipped.
    pub fn process_all_videos(&self) -> Result<Vec<PairedVideo>> {
        let mut paired = Vec::new();

        for video_file in list_files(&self.videos_dir, "txt")? {
            let video_path = self.videos_dir.join(&video_file);
            let content = std::fs::read_to_string(&video_path)?;
            let mood = mood_from_description(&content).unwrap_or("calm");

            match self.add_audio_to_file(&video_path, mood) {
                Ok(result) => paired.push(result),
                Err(e) if e.is_per_video() => warn!("Failed to add audio to {}: {}", video_file, e),
                Err(e) => return Err(e),
            }
        }

        info!("Audio added to {} videos", paired.len());
        Ok(paired)
    }
}

/// Extract the mood recorded in a video description
pub fn mood_from_description(content: &str) -> Option<&str> {
    content
        .lines()
        .find_map(|line| line.strip_prefix("Audio mood:"))
        .map(str::trim)
        .filter(|mood| !mood.is_empty())
}
