use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::{
    composition::classifier::{BackgroundBucket, Mood},
    config::{CompositionConfig, Config},
    error::{CompositionError, PipelineError, RankingError, Result},
    load::load_json_optional,
    rankings::{category_slug, FormattedRanking},
};

/// A placeholder video written by the composition stub
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedVideo {
    pub category: String,
    pub title: String,
    pub audio_mood: String,
    pub background: BackgroundBucket,

    /// `text (description)` for each item shown
    pub items: Vec<String>,

    /// Location of the written description
    pub path: PathBuf,
    pub created_at: String,
}

/// Stand-in for the video renderer
///
/// For each formatted ranking it classifies a background, keeps the top
/// items and writes a text description of the video that would have been
/// rendered. No frames are produced.
pub struct CompositionEngine {
    rankings_dir: PathBuf,
    output_dir: PathBuf,
    settings: CompositionConfig,
}

impl CompositionEngine {
    pub fn new<P: Into<PathBuf>>(rankings_dir: P, output_dir: P, settings: CompositionConfig) -> Self {
        Self {
            rankings_dir: rankings_dir.into(),
            output_dir: output_dir.into(),
            settings,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.paths.formatted_dir(),
            config.paths.generated_dir(),
            config.composition.clone(),
        )
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Load a formatted ranking; `None` if the file does not exist.
    ///
    /// A file that is not a formatted ranking only affects its own video.
    pub fn load_ranking(&self, filename: &str) -> Result<Option<FormattedRanking>> {
        load_json_optional(&self.rankings_dir.join(filename)).map_err(|e| match e {
            PipelineError::Ranking(RankingError::ParseFailed { path, reason }) => {
                CompositionError::RankingUnreadable { path, reason }.into()
            }
            other => other,
        })
    }

    /// Render the video description for a ranking
    pub fn describe(&self, ranking: &FormattedRanking, audio_mood: &str, created_at: &str) -> String {
        let background = BackgroundBucket::classify(&ranking.category);
        let [r, g, b] = background.color();
        let mut text = String::new();

        // Writing to a String cannot fail
        let _ = writeln!(text, "This is a placeholder for a video about {}.", ranking.title);
        let _ = writeln!(
            text,
            "In the actual implementation, this would be a {}-second {}x{} video at {} fps.",
            self.settings.duration_secs, self.settings.width, self.settings.height, self.settings.fps
        );
        let _ = writeln!(text, "Category: {}", ranking.category);
        let _ = writeln!(text, "Background: {} ({}, {}, {})", background.label(), r, g, b);
        let _ = writeln!(text, "Audio mood: {}", audio_mood);
        let _ = writeln!(text, "Items shown:");
        for item in self.shown_items(ranking) {
            let _ = writeln!(text, "- {}", item);
        }
        let _ = writeln!(text, "Created at: {}", created_at);

        text
    }

    fn shown_items(&self, ranking: &FormattedRanking) -> Vec<String> {
        ranking
            .items
            .iter()
            .take(self.settings.items_shown)
            .map(|item| format!("{} ({})", item.text, item.description))
            .collect()
    }

    /// Write the placeholder for an already-loaded ranking
    pub fn compose(&self, ranking: &FormattedRanking, audio_mood: &str) -> Result<ComposedVideo> {
        let created_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let background = BackgroundBucket::classify(&ranking.category);

        debug!("Title sequence: '{}'", ranking.title);
        debug!("Background for {}: {}", ranking.category, background.label());
        debug!("Selecting {} audio track", audio_mood);

        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(format!("{}.txt", category_slug(&ranking.category)));
        std::fs::write(&path, self.describe(ranking, audio_mood, &created_at)).map_err(|e| {
            CompositionError::OutputFailed {
                reason: format!("{}: {}", path.display(), e),
            }
        })?;

        info!("Video placeholder created at {}", path.display());

        Ok(ComposedVideo {
            category: ranking.category.clone(),
            title: ranking.title.clone(),
            audio_mood: audio_mood.to_string(),
            background,
            items: self.shown_items(ranking),
            path,
            created_at,
        })
    }

    /// Load a ranking file and write its placeholder video
    pub fn create_ranking_video(&self, ranking_file: &str, audio_mood: &str) -> Result<ComposedVideo> {
        info!("Creating video for {}...", ranking_file);

        let ranking = self.load_ranking(ranking_file)?.ok_or_else(|| {
            warn!("Failed to load ranking data from {}", ranking_file);
            CompositionError::RankingNotFound {
                path: self.rankings_dir.join(ranking_file).display().to_string(),
            }
        })?;

        self.compose(&ranking, audio_mood)
    }

    /// Compose every formatted ranking, choosing each mood from its file name
    pub fn create_all_ranking_videos(&self) -> Result<Vec<ComposedVideo>> {
        let mut videos = Vec::new();

        for ranking_file in list_files(&self.rankings_dir, "json")? {
            let mood = Mood::suggest_for(&ranking_file);
            match self.create_ranking_video(&ranking_file, mood.as_str()) {
                Ok(video) => videos.push(video),
                Err(e) if e.is_per_video() => warn!("Skipping {}: {}", ranking_file, e),
                Err(e) => return Err(e),
            }
        }

        info!("Created {} ranking videos", videos.len());
        Ok(videos)
    }
}

/// File names in `dir` with the given extension, sorted. A missing
/// directory yields no files.
pub fn list_files(dir: &Path, extension: &str) -> Result<Vec<String>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some(extension) {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                files.push(name.to_string());
            }
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rankings::{FormattedItem, TemplateKind};
    use serde_json::json;
    use tempfile::tempdir;

    fn ranking(category: &str, items: usize) -> FormattedRanking {
        FormattedRanking {
            title: format!("{} Rankings", category),
            category: category.to_string(),
            count: 10,
            items: (1..=items)
                .map(|i| FormattedItem {
                    rank: json!(i),
                    text: format!("#{}. School {}", i, i),
                    description: format!("Located in Town {}", i),
                })
                .collect(),
            template_type: TemplateKind::Standard,
            created_at: "2024-01-01 00:00:00".to_string(),
        }
    }

    fn engine(dir: &Path) -> CompositionEngine {
        CompositionEngine::new(dir.join("formatted"), dir.join("generated"), CompositionConfig::default())
    }

    #[test]
    fn test_description_lists_top_five() {
        let dir = tempdir().unwrap();
        let text = engine(dir.path()).describe(&ranking("Best Campus Food", 8), "calm", "now");

        assert!(text.contains("Category: Best Campus Food"));
        assert!(text.contains("Background: dark red (100, 0, 0)"));
        assert!(text.contains("Audio mood: calm"));
        assert!(text.contains("- #5. School 5 (Located in Town 5)"));
        assert!(!text.contains("#6. School 6"));
    }

    #[test]
    fn test_compose_writes_slugged_file() {
        let dir = tempdir().unwrap();
        let video = engine(dir.path()).compose(&ranking("Best College Dorms", 3), "ambient").unwrap();

        assert_eq!(video.path, dir.path().join("generated/best_college_dorms.txt"));
        assert_eq!(video.background, BackgroundBucket::Dorm);
        assert_eq!(video.items.len(), 3);
        assert!(std::fs::read_to_string(&video.path).unwrap().contains("Audio mood: ambient"));
    }

    #[test]
    fn test_missing_ranking_is_per_video_error() {
        let dir = tempdir().unwrap();
        let err = engine(dir.path()).create_ranking_video("ghost.json", "calm").unwrap_err();
        assert!(err.is_per_video());
    }

    #[test]
    fn test_malformed_ranking_is_per_video_error() {
        let dir = tempdir().unwrap();
        let formatted = dir.path().join("formatted");
        std::fs::create_dir_all(&formatted).unwrap();
        std::fs::write(formatted.join("notes.json"), "not json").unwrap();
        std::fs::write(formatted.join("list.json"), r#"{"title": "No items"}"#).unwrap();

        let engine = engine(dir.path());
        for file in ["notes.json", "list.json"] {
            let err = engine.create_ranking_video(file, "calm").unwrap_err();
            assert!(matches!(
                err,
                PipelineError::Composition(CompositionError::RankingUnreadable { .. })
            ));
            assert!(err.is_per_video());
        }
    }

    #[test]
    fn test_create_all_skips_malformed_rankings() {
        let dir = tempdir().unwrap();
        let formatted = dir.path().join("formatted");
        std::fs::create_dir_all(&formatted).unwrap();
        std::fs::write(formatted.join("aa_broken.json"), "{").unwrap();
        let path = formatted.join("best_campus_food.json");
        std::fs::write(path, serde_json::to_string(&ranking("Best Campus Food", 2)).unwrap()).unwrap();

        let videos = engine(dir.path()).create_all_ranking_videos().unwrap();
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].category, "Best Campus Food");
    }

    #[test]
    fn test_create_all_suggests_moods() {
        let dir = tempdir().unwrap();
        let formatted = dir.path().join("formatted");
        std::fs::create_dir_all(&formatted).unwrap();
        for category in ["Most Beautiful Campuses", "Top National Universities"] {
            let path = formatted.join(format!("{}.json", category_slug(category)));
            std::fs::write(path, serde_json::to_string(&ranking(category, 2)).unwrap()).unwrap();
        }

        let videos = engine(dir.path()).create_all_ranking_videos().unwrap();
        let moods: Vec<&str> = videos.iter().map(|v| v.audio_mood.as_str()).collect();
        assert_eq!(moods, vec!["inspirational", "ambient"]);
    }

    #[test]
    fn test_list_files_filters_and_sorts() {
        let dir = tempdir().unwrap();
        for name in ["b.json", "a.json", "notes.txt"] {
            std::fs::write(dir.path().join(name), "{}").unwrap();
        }
        assert_eq!(list_files(dir.path(), "json").unwrap(), vec!["a.json", "b.json"]);
        assert!(list_files(&dir.path().join("missing"), "json").unwrap().is_empty());
    }
}
