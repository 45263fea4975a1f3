//! # Rankings
//!
//! Ranking rows, the three string templates and the formatter that turns
//! raw rows into [`FormattedRanking`] documents.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ranking_reels::{config::Config, rankings::RankingFormatter};
//!
//! # fn main() -> ranking_reels::Result<()> {
//! let formatter = RankingFormatter::from_config(&Config::default());
//! let rows = formatter.load_ranking_data("niche_best-food.json")?.into_inner();
//! let ranking = formatter.format_ranking(&rows, "Best Campus Food", "standard", 10)?;
//! println!("{}", ranking.title);
//! # Ok(())
//! # }
//! ```

pub mod formatter;
pub mod templates;
pub mod types;

pub use formatter::{RankingFormatter, FORMAT_PLAN};
pub use templates::{Template, TemplateRegistry};
pub use types::{FormattedItem, FormattedRanking, RankingEntry, RankingRow, TemplateKind};

/// File-name slug for a category: lowercased, spaces become underscores
pub fn category_slug(category: &str) -> String {
    category.to_lowercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_slug() {
        assert_eq!(category_slug("Most Beautiful Ivy League Campuses"), "most_beautiful_ivy_league_campuses");
    }
}
