use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::{
    config::Config,
    error::{RankingError, Result},
    load::{load_json_or_default, Loaded},
    rankings::{
        category_slug,
        templates::{render, TemplateRegistry},
        types::{FormattedItem, FormattedRanking, RankingRow},
    },
};

/// Source files formatted by [`RankingFormatter::format_all`]:
/// (raw data file, display category, template)
pub const FORMAT_PLAN: &[(&str, &str, &str)] = &[
    ("us_news_national-universities.json", "Top National Universities", "score_based"),
    ("princeton_review_most-beautiful-campus.json", "Most Beautiful Campuses", "standard"),
    ("princeton_review_happiest-students.json", "Happiest Students", "standard"),
    ("niche_best-college-campuses.json", "Best College Campuses", "standard"),
    ("niche_best-food.json", "Best Campus Food", "standard"),
    ("niche_best-dorms.json", "Best College Dorms", "standard"),
    ("custom_ivy_league_beauty.json", "Most Beautiful Ivy League Campuses", "score_based"),
    ("custom_best_student_life.json", "Best Student Life", "score_based"),
];

/// Converts raw ranking rows into template-rendered ranking documents
pub struct RankingFormatter {
    data_dir: PathBuf,
    output_dir: PathBuf,
    default_count: usize,
    templates: TemplateRegistry,
}

impl RankingFormatter {
    pub fn new<P: Into<PathBuf>>(data_dir: P, output_dir: P, default_count: usize) -> Self {
        Self {
            data_dir: data_dir.into(),
            output_dir: output_dir.into(),
            default_count,
            templates: TemplateRegistry::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.paths.raw_data_dir(),
            config.paths.formatted_dir(),
            config.formatter.default_count,
        )
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Load raw rows from the data directory; a missing file yields an
    /// empty, defaulted sequence
    pub fn load_ranking_data(&self, filename: &str) -> Result<Loaded<Vec<RankingRow>>> {
        load_json_or_default(&self.data_dir.join(filename))
    }

    /// Render rows with the named template, keeping the first `count` rows
    /// in input order
    pub fn format(
        &self,
        rows: &[RankingRow],
        category: &str,
        template_name: &str,
        count: usize,
    ) -> FormattedRanking {
        let (kind, template) = self.templates.get_by_name(template_name);
        let count_text = count.to_string();

        let title = render(
            template.title_format,
            &[("category", category), ("count", &count_text)],
        );

        let items = rows
            .iter()
            .take(count)
            .map(|row| {
                let rank = row.rank_text();
                let name = row.name_text();
                let location = row.location_text();
                let score = row.score_text();

                FormattedItem {
                    rank: row.rank_value(),
                    text: render(
                        template.item_format,
                        &[("rank", &rank), ("name", &name), ("score", &score)],
                    ),
                    description: render(
                        template.description_format,
                        &[("location", &location), ("metric", "Score"), ("value", &score)],
                    ),
                }
            })
            .collect();

        FormattedRanking {
            title,
            category: category.to_string(),
            count,
            items,
            template_type: kind,
            created_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    /// Write a formatted ranking to `<output_dir>/<category slug>.json`
    pub fn save(&self, ranking: &FormattedRanking) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(format!("{}.json", category_slug(&ranking.category)));

        let json = serde_json::to_string_pretty(ranking)?;
        std::fs::write(&path, json).map_err(|_| RankingError::WriteFailed {
            path: path.display().to_string(),
        })?;

        debug!("Formatted ranking saved to {}", path.display());
        Ok(path)
    }

    /// Format and save in one step
    pub fn format_ranking(
        &self,
        rows: &[RankingRow],
        category: &str,
        template_name: &str,
        count: usize,
    ) -> Result<FormattedRanking> {
        info!("Formatting {} ranking...", category);
        let ranking = self.format(rows, category, template_name, count);
        self.save(&ranking)?;
        Ok(ranking)
    }

    /// Format every known source file
    pub fn format_all(&self) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(FORMAT_PLAN.len());

        for (filename, category, template) in FORMAT_PLAN {
            let rows = self.load_ranking_data(filename)?;
            if rows.is_default() {
                debug!("No source data for {}, formatting an empty ranking", category);
            }
            let ranking = self.format(rows.as_ref(), category, template, self.default_count);
            written.push(self.save(&ranking)?);
        }

        info!("All {} rankings formatted", written.len());
        Ok(written)
    }
}
