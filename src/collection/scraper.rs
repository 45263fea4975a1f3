use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::{debug, info};

use crate::{
    collection::sources::{RankingSource, IVY_LEAGUE, STUDENT_LIFE},
    error::Result,
    rankings::RankingEntry,
};

/// Writes ranking tables to the raw data directory
///
/// Nothing is fetched over the network; each "scrape" serializes a static
/// table so downstream stages have files to read.
pub struct RankingCollector {
    output_dir: PathBuf,
}

impl RankingCollector {
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self { output_dir: output_dir.into() }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Collect one source/category, keeping at most `limit` rows
    pub fn collect(&self, source: RankingSource, category: &str, limit: usize) -> Result<Vec<RankingEntry>> {
        debug!("Collecting {} ({})", category, source.url(category));

        let mut rankings = source.table(category);
        rankings.truncate(limit);
        info!("Collected {} rows for {}/{}", rankings.len(), source.file_prefix(), category);

        let filename = format!("{}_{}.json", source.file_prefix(), category);
        self.write(&filename, &rankings)?;
        Ok(rankings)
    }

    /// Build the derived rankings: Ivy League by (simulated) campus beauty
    /// and best student life
    pub fn create_custom_rankings<R: Rng>(&self, rng: &mut R) -> Result<()> {
        let mut ivy_beauty: Vec<RankingEntry> = IVY_LEAGUE
            .iter()
            .enumerate()
            .map(|(i, name)| RankingEntry {
                rank: i as u32 + 1,
                name: name.to_string(),
                location: None,
                score: Some(rng.gen_range(85..=98) as f64),
                rating: None,
            })
            .collect();

        // Stable sort keeps listing order among equal scores
        ivy_beauty.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        for (i, entry) in ivy_beauty.iter_mut().enumerate() {
            entry.rank = i as u32 + 1;
        }
        self.write("custom_ivy_league_beauty.json", &ivy_beauty)?;

        let student_life: Vec<RankingEntry> = STUDENT_LIFE
            .iter()
            .enumerate()
            .map(|(i, (name, location, score))| {
                RankingEntry::new(i as u32 + 1, name, location).with_score(*score)
            })
            .collect();
        self.write("custom_best_student_life.json", &student_life)?;

        info!("Created custom ranking categories");
        Ok(())
    }

    /// Collect every source/category plus the custom rankings
    pub fn run_all(&self) -> Result<usize> {
        let mut files = 0;
        for source in [RankingSource::UsNews, RankingSource::PrincetonReview, RankingSource::Niche] {
            for category in source.categories() {
                self.collect(source, category, source.default_limit())?;
                files += 1;
            }
        }

        self.create_custom_rankings(&mut rand::thread_rng())?;
        files += 2;

        info!("All college data collection complete ({} files)", files);
        Ok(files)
    }

    fn write(&self, filename: &str, rankings: &[RankingEntry]) -> Result<()> {
        std::fs::create_dir_all(&self.output_dir)?;
        let json = serde_json::to_string_pretty(rankings)?;
        std::fs::write(self.output_dir.join(filename), json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use tempfile::tempdir;

    fn read(dir: &Path, filename: &str) -> Vec<RankingEntry> {
        serde_json::from_str(&std::fs::read_to_string(dir.join(filename)).unwrap()).unwrap()
    }

    #[test]
    fn test_collect_respects_limit() {
        let dir = tempdir().unwrap();
        let collector = RankingCollector::new(dir.path());

        let rows = collector.collect(RankingSource::UsNews, "national-universities", 5).unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(read(dir.path(), "us_news_national-universities.json"), rows);
    }

    #[test]
    fn test_unknown_category_writes_empty_file() {
        let dir = tempdir().unwrap();
        let collector = RankingCollector::new(dir.path());

        collector.collect(RankingSource::Niche, "best-parking", 25).unwrap();
        assert!(read(dir.path(), "niche_best-parking.json").is_empty());
    }

    #[test]
    fn test_ivy_ranking_sorted_by_score() {
        let dir = tempdir().unwrap();
        let collector = RankingCollector::new(dir.path());
        collector.create_custom_rankings(&mut StdRng::seed_from_u64(7)).unwrap();

        let ivy = read(dir.path(), "custom_ivy_league_beauty.json");
        assert_eq!(ivy.len(), 8);
        for pair in ivy.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        let ranks: Vec<u32> = ivy.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, (1..=8).collect::<Vec<_>>());
        assert!(ivy.iter().all(|e| (85.0..=98.0).contains(&e.score.unwrap())));
    }

    #[test]
    fn test_run_all_writes_every_file() {
        let dir = tempdir().unwrap();
        let files = RankingCollector::new(dir.path()).run_all().unwrap();
        assert_eq!(files, 9);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 9);
    }
}
