use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::{collection::write_metadata, error::Result};

type MoodGroup = (&'static str, &'static str, &'static [(&'static str, &'static str)]);

/// Placeholder track library: (mood, description, [(file stem, title)])
pub const MOOD_GROUPS: &[MoodGroup] = &[
    ("sad", "Melancholic and emotional instrumental tracks", &[
        ("weightless_marconi", "Marconi Union - Weightless"),
        ("sad_piano_melody", "Sad Piano Melody - Kevin MacLeod"),
        ("melancholy_strings", "Melancholy Strings - Flawed Mangoes"),
        ("rainy_day", "Rainy Day - Ambient Works"),
        ("nostalgic_memories", "Nostalgic Memories - Chill Beats"),
    ]),
    ("calm", "Peaceful and relaxing instrumental tracks", &[
        ("elevator_music", "Elevator Music - Kevin MacLeod"),
        ("gentle_waves", "Gentle Waves - Ocean Sounds"),
        ("soft_piano", "Soft Piano - Relaxing Music"),
        ("morning_coffee", "Morning Coffee - Lofi Beats"),
        ("peaceful_garden", "Peaceful Garden - Nature Sounds"),
    ]),
    ("ambient", "Atmospheric background instrumental tracks", &[
        ("space_ambient", "Space Ambient - Cosmic Sounds"),
        ("forest_sounds", "Forest Sounds - Nature's Symphony"),
        ("night_atmosphere", "Night Atmosphere - Dark Ambient"),
        ("urban_background", "Urban Background - City Sounds"),
        ("meditation_bells", "Meditation Bells - Zen Music"),
    ]),
    ("inspirational", "Uplifting and motivational instrumental tracks", &[
        ("rising_hope", "Rising Hope - Motivational Music"),
        ("epic_journey", "Epic Journey - Adventure Sounds"),
        ("triumph_over_adversity", "Triumph Over Adversity - Inspirational"),
        ("new_beginnings", "New Beginnings - Morning Light"),
        ("achievement_unlocked", "Achievement Unlocked - Success Music"),
    ]),
];

#[derive(Serialize)]
struct MoodSummary {
    count: usize,
    description: &'static str,
}

/// Writes placeholder "trending" audio tracks, one directory per mood
pub struct TrendingAudioTracker {
    output_dir: PathBuf,
    track_extension: String,
}

impl TrendingAudioTracker {
    pub fn new<P: Into<PathBuf>>(output_dir: P, track_extension: &str) -> Self {
        Self {
            output_dir: output_dir.into(),
            track_extension: track_extension.to_string(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write every placeholder track and the `metadata.json` summary.
    /// Returns the number of tracks written.
    pub fn collect_trending_audio(&self) -> Result<usize> {
        let mut total = 0;

        for (mood, _, tracks) in MOOD_GROUPS {
            let mood_dir = self.output_dir.join(mood);
            std::fs::create_dir_all(&mood_dir)?;

            for (filename, title) in tracks.iter() {
                let body = format!(
                    "This is a placeholder for an audio track: {title}.\n\
                     In the actual implementation, this would be an audio file.\n\
                     Mood: {mood}\n\
                     Filename: {filename}\n\
                     Title: {title}\n\
                     Duration: 15 seconds (looped for short-form videos)\n\
                     Usage: TikTok and YouTube Shorts background music\n"
                );
                let path = mood_dir.join(format!("{}.{}", filename, self.track_extension));
                std::fs::write(path, body)?;
                total += 1;
            }
        }

        let moods = MOOD_GROUPS
            .iter()
            .map(|(name, description, tracks)| {
                (name.to_string(), MoodSummary { count: tracks.len(), description: *description })
            })
            .collect();

        write_metadata(
            &self.output_dir,
            "total_tracks",
            total,
            "moods",
            moods,
            "These tracks are for demonstration purposes only. In a real implementation, proper licensing would be required.",
        )?;

        info!("Collected {} trending audio tracks", total);
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_tracks_per_mood() {
        let dir = tempdir().unwrap();
        let written = TrendingAudioTracker::new(dir.path(), "txt").collect_trending_audio().unwrap();
        assert_eq!(written, 20);

        for (mood, _, _) in MOOD_GROUPS {
            assert_eq!(std::fs::read_dir(dir.path().join(mood)).unwrap().count(), 5);
        }

        let track = std::fs::read_to_string(dir.path().join("calm/soft_piano.txt")).unwrap();
        assert!(track.contains("Mood: calm"));
        assert!(track.contains("Title: Soft Piano - Relaxing Music"));
    }
}
