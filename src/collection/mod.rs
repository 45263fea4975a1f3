//! # Data Collection
//!
//! Stand-ins for the collection stage: static ranking tables serialized to
//! JSON, placeholder campus images and placeholder audio tracks. Every
//! "download" writes a descriptive text file.

pub mod audio;
pub mod images;
pub mod scraper;
pub mod sources;

pub use audio::TrendingAudioTracker;
pub use images::CampusImageCollector;
pub use scraper::RankingCollector;
pub use sources::RankingSource;

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;

/// Write a `metadata.json` summary for a placeholder asset tree
fn write_metadata<S: Serialize>(
    dir: &Path,
    total_key: &str,
    total: usize,
    groups_key: &str,
    groups: BTreeMap<String, S>,
    usage_notes: &str,
) -> Result<()> {
    let metadata = serde_json::json!({
        total_key: total,
        groups_key: groups,
        "usage_notes": usage_notes,
        "last_updated": chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    });

    std::fs::write(dir.join("metadata.json"), serde_json::to_string_pretty(&metadata)?)?;
    Ok(())
}
