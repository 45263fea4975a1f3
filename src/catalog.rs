//! Markdown catalogues shown on the index page.
//!
//! Both catalogues share one format: a `## ` heading sets the current
//! section and a line starting `- **` adds the bold text as an entry under
//! it. Entries before the first heading are ignored. A file that cannot be
//! read or holds no entries falls back to the built-in defaults.

use std::path::Path;

use tracing::{info, warn};

use crate::{
    error::Result,
    load::{read_to_string_or, Loaded},
};

/// Entries grouped under their section, in first-seen order
pub type Grouped = Vec<(String, Vec<String>)>;

const DEFAULT_CATEGORIES: &[(&str, &str)] = &[
    ("Most Beautiful Campuses", "Campus Features"),
    ("Top National Universities", "Academic Rankings"),
    ("Best College Dorms", "Student Life"),
    ("Happiest Students", "Student Life"),
    ("Best Campus Food", "Student Life"),
    ("Most Beautiful Ivy League Campuses", "Elite Schools"),
    ("Best Student Life", "Student Life"),
];

const DEFAULT_AUDIO_MOODS: &[(&str, &[&str])] = &[
    ("Sad", &["Weightless - Marconi Union", "Sad Piano Melody", "Melancholy Strings"]),
    ("Calm", &["Gentle Waves", "Soft Piano", "Morning Coffee"]),
    ("Ambient", &["Space Ambient", "Forest Sounds", "Night Atmosphere"]),
    ("Inspirational", &["Rising Hope", "Epic Journey", "New Beginnings"]),
];

/// One catalogue line: `name` listed under `section`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub section: String,
}

/// Parse `## section` / `- **entry**` markdown into entries
pub fn parse_catalog(content: &str) -> Vec<CatalogEntry> {
    let mut entries = Vec::new();
    let mut current_section: Option<String> = None;

    for line in content.lines() {
        if let Some(heading) = line.strip_prefix("## ") {
            current_section = Some(heading.trim().to_string());
        } else if line.starts_with("- **") {
            let name = line.split("**").nth(1).unwrap_or("").trim();
            if let Some(section) = &current_section {
                if !name.is_empty() {
                    entries.push(CatalogEntry {
                        name: name.to_string(),
                        section: section.clone(),
                    });
                }
            }
        }
    }

    entries
}

/// Group entries by section, keeping the order sections first appear in
pub fn group_by_section(entries: &[CatalogEntry]) -> Grouped {
    let mut grouped: Grouped = Vec::new();

    for entry in entries {
        match grouped.iter_mut().find(|(section, _)| *section == entry.section) {
            Some((_, names)) => names.push(entry.name.clone()),
            None => grouped.push((entry.section.clone(), vec![entry.name.clone()])),
        }
    }

    grouped
}

fn default_categories() -> Vec<CatalogEntry> {
    DEFAULT_CATEGORIES
        .iter()
        .map(|(name, section)| CatalogEntry {
            name: name.to_string(),
            section: section.to_string(),
        })
        .collect()
}

fn default_audio_tracks() -> Vec<CatalogEntry> {
    DEFAULT_AUDIO_MOODS
        .iter()
        .flat_map(|(mood, tracks)| {
            tracks.iter().map(move |track| CatalogEntry {
                name: track.to_string(),
                section: mood.to_string(),
            })
        })
        .collect()
}

fn load_catalog(path: &Path, defaults: fn() -> Vec<CatalogEntry>) -> Result<Loaded<Vec<CatalogEntry>>> {
    // Unreadable catalogues are treated like missing ones
    let content = match read_to_string_or(path, String::new) {
        Ok(content) => content,
        Err(e) => {
            warn!("Could not read {}, using defaults: {}", path.display(), e);
            return Ok(Loaded::Defaulted(defaults()));
        }
    };
    let entries = parse_catalog(content.as_ref());

    if entries.is_empty() {
        if !content.is_default() {
            warn!("No entries found in {}, using defaults", path.display());
        }
        return Ok(Loaded::Defaulted(defaults()));
    }

    Ok(Loaded::Found(entries))
}

/// Ranking categories with their sections
pub fn load_ranking_categories(path: &Path) -> Result<Loaded<Vec<CatalogEntry>>> {
    load_catalog(path, default_categories)
}

/// Audio tracks with their moods
pub fn load_audio_tracks(path: &Path) -> Result<Loaded<Vec<CatalogEntry>>> {
    load_catalog(path, default_audio_tracks)
}

/// Both catalogues, grouped for display
#[derive(Debug, Clone, PartialEq)]
pub struct Catalogs {
    pub categories: Grouped,
    pub audio_tracks: Grouped,
}

impl Catalogs {
    pub fn load(categories_file: &Path, audio_file: &Path) -> Result<Self> {
        let categories = group_by_section(load_ranking_categories(categories_file)?.as_ref());
        let audio_tracks = group_by_section(load_audio_tracks(audio_file)?.as_ref());

        info!(
            "Loaded {} category sections and {} audio moods",
            categories.len(),
            audio_tracks.len()
        );

        Ok(Self {
            categories,
            audio_tracks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = "\
# College Ranking Categories

- **Orphan entry** before any section

## Campus Features
- **Most Beautiful Campuses** - scenic grounds
- **  ** empty name
Some prose line

## Student Life
- **Best College Dorms**
- **Best Campus Food**
";

    #[test]
    fn test_parse_catalog() {
        let entries = parse_catalog(SAMPLE);
        let names: Vec<_> = entries.iter().map(|e| (e.name.as_str(), e.section.as_str())).collect();

        assert_eq!(
            names,
            vec![
                ("Most Beautiful Campuses", "Campus Features"),
                ("Best College Dorms", "Student Life"),
                ("Best Campus Food", "Student Life"),
            ]
        );
    }

    #[test]
    fn test_group_preserves_order() {
        let mut entries = parse_catalog(SAMPLE);
        entries.push(CatalogEntry {
            name: "Happiest Students".into(),
            section: "Campus Features".into(),
        });

        let grouped = group_by_section(&entries);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0, "Campus Features");
        assert_eq!(grouped[0].1, vec!["Most Beautiful Campuses", "Happiest Students"]);
        assert_eq!(grouped[1].1, vec!["Best College Dorms", "Best Campus Food"]);
    }

    #[test]
    fn test_missing_files_use_defaults() {
        let dir = tempdir().unwrap();

        let categories = load_ranking_categories(&dir.path().join("none.md")).unwrap();
        assert!(categories.is_default());
        assert_eq!(categories.as_ref().len(), 7);

        let tracks = load_audio_tracks(&dir.path().join("none.md")).unwrap();
        let grouped = group_by_section(tracks.as_ref());
        assert_eq!(grouped.len(), 4);
        assert!(grouped.iter().all(|(_, names)| names.len() == 3));
        assert_eq!(grouped[0].1[0], "Weightless - Marconi Union");
    }

    #[test]
    fn test_file_without_entries_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("categories.md");
        std::fs::write(&path, "# Nothing here\n").unwrap();

        let catalogs = Catalogs::load(&path, &dir.path().join("audio.md")).unwrap();
        assert_eq!(catalogs.categories[0].0, "Campus Features");
        assert_eq!(catalogs.categories.len(), 4);
    }

    #[test]
    fn test_unreadable_files_use_defaults() {
        let dir = tempdir().unwrap();
        let invalid_utf8 = dir.path().join("categories.md");
        std::fs::write(&invalid_utf8, b"## Sec\n- **Bad \xff\xfe**\n").unwrap();

        let categories = load_ranking_categories(&invalid_utf8).unwrap();
        assert!(categories.is_default());
        assert_eq!(categories.as_ref().len(), 7);

        let as_directory = dir.path().join("tracks.md");
        std::fs::create_dir(&as_directory).unwrap();
        let tracks = load_audio_tracks(&as_directory).unwrap();
        assert!(tracks.is_default());
        assert_eq!(tracks.as_ref().len(), 12);
    }
}
