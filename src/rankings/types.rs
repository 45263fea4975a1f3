use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// A single row in a collected ranking table
///
/// This is the write-side shape produced by the static source tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    /// 1-based rank within the source list
    pub rank: u32,

    /// College or university name
    pub name: String,

    /// "City, ST" location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Numeric score out of 100
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "serialize_score")]
    pub score: Option<f64>,

    /// Letter grade, e.g. Niche's "A+"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
}

impl RankingEntry {
    pub fn new(rank: u32, name: &str, location: &str) -> Self {
        Self {
            rank,
            name: name.to_string(),
            location: Some(location.to_string()),
            score: None,
            rating: None,
        }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_rating(mut self, rating: &str) -> Self {
        self.rating = Some(rating.to_string());
        self
    }
}

/// Loose, read-side view of a ranking row
///
/// Every field is an arbitrary JSON value. Rows are not validated: a string
/// rank or a missing name is carried straight into the rendered text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankingRow {
    #[serde(default)]
    pub rank: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub location: Option<Value>,
    #[serde(default)]
    pub score: Option<Value>,
}

impl RankingRow {
    /// Rank as a JSON value, zero when absent
    pub fn rank_value(&self) -> Value {
        match &self.rank {
            Some(Value::Null) | None => Value::from(0),
            Some(v) => v.clone(),
        }
    }

    pub fn rank_text(&self) -> String {
        display_value(&self.rank_value())
    }

    pub fn name_text(&self) -> String {
        self.name.as_ref().map(display_value).unwrap_or_default()
    }

    pub fn location_text(&self) -> String {
        self.location.as_ref().map(display_value).unwrap_or_default()
    }

    pub fn score_text(&self) -> String {
        self.score.as_ref().map(display_value).unwrap_or_default()
    }
}

impl From<&RankingEntry> for RankingRow {
    fn from(entry: &RankingEntry) -> Self {
        Self {
            rank: Some(Value::from(entry.rank)),
            name: Some(Value::from(entry.name.clone())),
            location: entry.location.clone().map(Value::from),
            score: entry.score.and_then(score_value),
        }
    }
}

/// Whole scores render without a trailing `.0`
fn score_value(score: f64) -> Option<Value> {
    if score.fract() == 0.0 && score.abs() < i64::MAX as f64 {
        Some(Value::from(score as i64))
    } else {
        serde_json::Number::from_f64(score).map(Value::Number)
    }
}

fn serialize_score<S: Serializer>(score: &Option<f64>, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    score.and_then(score_value).serialize(serializer)
}

/// Render a JSON value the way it should appear inside a template
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// The three fixed ranking templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    Standard,
    ScoreBased,
    Comparison,
}

impl TemplateKind {
    /// Resolve a template by name; unknown names fall back to `Standard`
    pub fn from_name(name: &str) -> Self {
        match name {
            "score_based" => Self::ScoreBased,
            "comparison" => Self::Comparison,
            _ => Self::Standard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::ScoreBased => "score_based",
            Self::Comparison => "comparison",
        }
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rendered line of a formatted ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedItem {
    pub rank: Value,
    pub text: String,
    pub description: String,
}

/// A template-rendered ranking, ready for composition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedRanking {
    pub title: String,
    pub category: String,

    /// Requested count, not the number of items actually present
    pub count: usize,
    pub items: Vec<FormattedItem>,
    pub template_type: TemplateKind,

    /// `%Y-%m-%d %H:%M:%S` local time
    pub created_at: String,
}
