//! Keyword classifiers over category names.
//!
//! Both classifiers lowercase the input and walk a fixed keyword list;
//! the first keyword contained in the name wins.

use serde::{Deserialize, Serialize};

/// Placeholder background chosen for a ranking video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundBucket {
    BeautifulCampus,
    Food,
    Dorm,
    IvyLeague,
    Default,
}

impl BackgroundBucket {
    /// Match order; earlier entries win on overlap
    const KEYWORDS: &'static [(&'static str, BackgroundBucket)] = &[
        ("beautiful", BackgroundBucket::BeautifulCampus),
        ("food", BackgroundBucket::Food),
        ("dorm", BackgroundBucket::Dorm),
        ("ivy", BackgroundBucket::IvyLeague),
    ];

    pub fn classify(category: &str) -> Self {
        let lowered = category.to_lowercase();
        Self::KEYWORDS
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map(|(_, bucket)| *bucket)
            .unwrap_or(BackgroundBucket::Default)
    }

    /// Fill colour as RGB
    pub fn color(&self) -> [u8; 3] {
        match self {
            Self::BeautifulCampus => [0, 100, 0],
            Self::Food => [100, 0, 0],
            Self::Dorm => [0, 0, 100],
            Self::IvyLeague => [0, 100, 100],
            Self::Default => [50, 50, 50],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::BeautifulCampus => "dark green",
            Self::Food => "dark red",
            Self::Dorm => "dark blue",
            Self::IvyLeague => "teal",
            Self::Default => "gray",
        }
    }
}

/// Coarse audio style used to pick a placeholder track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Sad,
    Calm,
    Ambient,
    Inspirational,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Sad, Mood::Calm, Mood::Ambient, Mood::Inspirational];

    const SUGGESTIONS: &'static [(&'static str, Mood)] = &[
        ("beautiful", Mood::Inspirational),
        ("happiest", Mood::Inspirational),
        ("best", Mood::Calm),
        ("top", Mood::Ambient),
        ("ivy", Mood::Calm),
        ("food", Mood::Calm),
        ("dorms", Mood::Ambient),
        ("student_life", Mood::Inspirational),
    ];

    /// Suggest a mood for a category name or ranking file stem
    pub fn suggest_for(category: &str) -> Self {
        let lowered = category.to_lowercase();
        Self::SUGGESTIONS
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map(|(_, mood)| *mood)
            .unwrap_or(Mood::Calm)
    }

    /// Directory name under the audio library
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sad => "sad",
            Self::Calm => "calm",
            Self::Ambient => "ambient",
            Self::Inspirational => "inspirational",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mood| mood.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown mood: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_keywords() {
        assert_eq!(BackgroundBucket::classify("Most Beautiful Campuses"), BackgroundBucket::BeautifulCampus);
        assert_eq!(BackgroundBucket::classify("Best Campus Food"), BackgroundBucket::Food);
        assert_eq!(BackgroundBucket::classify("Best College Dorms"), BackgroundBucket::Dorm);
        assert_eq!(BackgroundBucket::classify("Happiest Students"), BackgroundBucket::Default);
    }

    #[test]
    fn test_background_first_match_wins() {
        // Contains both "beautiful" and "ivy"
        assert_eq!(
            BackgroundBucket::classify("Most Beautiful Ivy League Campuses"),
            BackgroundBucket::BeautifulCampus
        );
        assert_eq!(BackgroundBucket::classify("Ivy Dorms"), BackgroundBucket::Dorm);
    }

    #[test]
    fn test_mood_suggestions() {
        assert_eq!(Mood::suggest_for("most_beautiful_campuses"), Mood::Inspirational);
        assert_eq!(Mood::suggest_for("best_college_dorms"), Mood::Calm);
        assert_eq!(Mood::suggest_for("top_national_universities"), Mood::Ambient);
        assert_eq!(Mood::suggest_for("something_else"), Mood::Calm);
    }

    #[test]
    fn test_mood_parsing_is_case_insensitive() {
        assert_eq!("Calm".parse::<Mood>(), Ok(Mood::Calm));
        assert_eq!(" AMBIENT ".parse::<Mood>(), Ok(Mood::Ambient));
        assert!("jazzy".parse::<Mood>().is_err());
    }
}
