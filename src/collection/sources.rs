//! Hardcoded ranking tables standing in for scraped data.

use crate::rankings::RankingEntry;

/// Where a ranking list nominally comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingSource {
    UsNews,
    PrincetonReview,
    Niche,
}

impl RankingSource {
    /// Prefix used for raw data file names
    pub fn file_prefix(&self) -> &'static str {
        match self {
            Self::UsNews => "us_news",
            Self::PrincetonReview => "princeton_review",
            Self::Niche => "niche",
        }
    }

    /// Nominal listing URL, recorded for provenance only
    pub fn url(&self, category: &str) -> String {
        match self {
            Self::UsNews => format!("https://www.usnews.com/best-colleges/rankings/{}", category),
            Self::PrincetonReview => "https://www.princetonreview.com/college-rankings/best-colleges".to_string(),
            Self::Niche => "https://www.niche.com/colleges/search/best-colleges/".to_string(),
        }
    }

    /// Default row limit per source
    pub fn default_limit(&self) -> usize {
        match self {
            Self::UsNews => 50,
            Self::PrincetonReview | Self::Niche => 25,
        }
    }

    /// Categories collected on every run
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            Self::UsNews => &["national-universities"],
            Self::PrincetonReview => &["best-classroom-experience", "most-beautiful-campus", "happiest-students"],
            Self::Niche => &["best-college-campuses", "best-food", "best-dorms"],
        }
    }

    /// Static table for a category; unknown categories are empty
    pub fn table(&self, category: &str) -> Vec<RankingEntry> {
        match (self, category) {
            (Self::UsNews, "national-universities") => us_news_national(),
            (Self::PrincetonReview, "best-classroom-experience") => listed(&[
                ("Reed College", "Portland, OR"),
                ("United States Military Academy", "West Point, NY"),
                ("Vanderbilt University", "Nashville, TN"),
                ("Colby College", "Waterville, ME"),
                ("Stanford University", "Stanford, CA"),
                ("Franklin W. Olin College of Engineering", "Needham, MA"),
                ("Wabash College", "Crawfordsville, IN"),
                ("Bennington College", "Bennington, VT"),
                ("Bowdoin College", "Brunswick, ME"),
                ("Swarthmore College", "Swarthmore, PA"),
            ]),
            (Self::PrincetonReview, "most-beautiful-campus") => listed(&[
                ("University of San Diego", "San Diego, CA"),
                ("Bryn Mawr College", "Bryn Mawr, PA"),
                ("Mount Holyoke College", "South Hadley, MA"),
                ("University of Richmond", "Richmond, VA"),
                ("Scripps College", "Claremont, CA"),
                ("Sewanee—University of the South", "Sewanee, TN"),
                ("Rhodes College", "Memphis, TN"),
                ("Loyola Marymount University", "Los Angeles, CA"),
                ("Pepperdine University", "Malibu, CA"),
                ("Colgate University", "Hamilton, NY"),
            ]),
            (Self::PrincetonReview, "happiest-students") => listed(&[
                ("Vanderbilt University", "Nashville, TN"),
                ("Tulane University", "New Orleans, LA"),
                ("College of William & Mary", "Williamsburg, VA"),
                ("Kansas State University", "Manhattan, KS"),
                ("Clemson University", "Clemson, SC"),
                ("University of Oklahoma", "Norman, OK"),
                ("Colby College", "Waterville, ME"),
                ("Auburn University", "Auburn, AL"),
                ("University of Iowa", "Iowa City, IA"),
                ("University of California, Berkeley", "Berkeley, CA"),
            ]),
            (Self::Niche, "best-college-campuses") => graded(&[
                ("Washington University in St. Louis", "St. Louis, MO"),
                ("Liberty University", "Lynchburg, VA"),
                ("Stanford University", "Stanford, CA"),
                ("University of California, Los Angeles", "Los Angeles, CA"),
                ("Grand Canyon University", "Phoenix, AZ"),
                ("University of Michigan - Ann Arbor", "Ann Arbor, MI"),
                ("University of California, Santa Barbara", "Santa Barbara, CA"),
                ("University of California, San Diego", "La Jolla, CA"),
                ("University of Florida", "Gainesville, FL"),
                ("University of Georgia", "Athens, GA"),
            ]),
            (Self::Niche, "best-food") => graded(&[
                ("University of Massachusetts - Amherst", "Amherst, MA"),
                ("Virginia Tech", "Blacksburg, VA"),
                ("University of California, Los Angeles", "Los Angeles, CA"),
                ("Washington University in St. Louis", "St. Louis, MO"),
                ("Cornell University", "Ithaca, NY"),
                ("James Madison University", "Harrisonburg, VA"),
                ("St. Norbert College", "De Pere, WI"),
                ("Vanderbilt University", "Nashville, TN"),
                ("Bates College", "Lewiston, ME"),
                ("Bowdoin College", "Brunswick, ME"),
            ]),
            (Self::Niche, "best-dorms") => graded(&[
                ("High Point University", "High Point, NC"),
                ("Washington University in St. Louis", "St. Louis, MO"),
                ("Grand Canyon University", "Phoenix, AZ"),
                ("Christopher Newport University", "Newport News, VA"),
                ("Bowdoin College", "Brunswick, ME"),
                ("Johnson University", "Knoxville, TN"),
                ("Regent University", "Virginia Beach, VA"),
                ("Bryn Mawr College", "Bryn Mawr, PA"),
                ("Rice University", "Houston, TX"),
                ("Vanderbilt University", "Nashville, TN"),
            ]),
            _ => Vec::new(),
        }
    }
}

fn us_news_national() -> Vec<RankingEntry> {
    [
        ("Princeton University", "Princeton, NJ", 100.0),
        ("Massachusetts Institute of Technology", "Cambridge, MA", 99.0),
        ("Harvard University", "Cambridge, MA", 98.0),
        ("Stanford University", "Stanford, CA", 97.0),
        ("Yale University", "New Haven, CT", 96.0),
        ("University of Pennsylvania", "Philadelphia, PA", 94.0),
        ("California Institute of Technology", "Pasadena, CA", 93.0),
        ("Duke University", "Durham, NC", 92.0),
        ("Brown University", "Providence, RI", 91.0),
        ("Northwestern University", "Evanston, IL", 90.0),
        ("Johns Hopkins University", "Baltimore, MD", 89.0),
        ("Dartmouth College", "Hanover, NH", 88.0),
        ("Columbia University", "New York, NY", 87.0),
        ("University of Chicago", "Chicago, IL", 86.0),
        ("Cornell University", "Ithaca, NY", 85.0),
    ]
    .iter()
    .enumerate()
    .map(|(i, (name, location, score))| RankingEntry::new(i as u32 + 1, name, location).with_score(*score))
    .collect()
}

fn listed(rows: &[(&str, &str)]) -> Vec<RankingEntry> {
    rows.iter()
        .enumerate()
        .map(|(i, (name, location))| RankingEntry::new(i as u32 + 1, name, location))
        .collect()
}

fn graded(rows: &[(&str, &str)]) -> Vec<RankingEntry> {
    listed(rows).into_iter().map(|entry| entry.with_rating("A+")).collect()
}

/// The eight Ivy League schools, in listing order
pub const IVY_LEAGUE: &[&str] = &[
    "Harvard University",
    "Yale University",
    "Princeton University",
    "Columbia University",
    "Brown University",
    "Dartmouth College",
    "University of Pennsylvania",
    "Cornell University",
];

/// Student-life scores for the custom "Best Student Life" ranking
pub const STUDENT_LIFE: &[(&str, &str, f64)] = &[
    ("Vanderbilt University", "Nashville, TN", 98.0),
    ("University of Michigan - Ann Arbor", "Ann Arbor, MI", 97.0),
    ("University of California, Los Angeles", "Los Angeles, CA", 96.0),
    ("University of Wisconsin - Madison", "Madison, WI", 95.0),
    ("University of Texas at Austin", "Austin, TX", 94.0),
    ("University of Virginia", "Charlottesville, VA", 93.0),
    ("University of Florida", "Gainesville, FL", 92.0),
    ("University of Georgia", "Athens, GA", 91.0),
    ("University of North Carolina at Chapel Hill", "Chapel Hill, NC", 90.0),
    ("University of California, Berkeley", "Berkeley, CA", 89.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_collected_category_has_rows() {
        for source in [RankingSource::UsNews, RankingSource::PrincetonReview, RankingSource::Niche] {
            for category in source.categories() {
                assert!(!source.table(category).is_empty(), "{:?}/{}", source, category);
            }
        }
    }

    #[test]
    fn test_ranks_are_sequential() {
        let table = RankingSource::Niche.table("best-food");
        let ranks: Vec<u32> = table.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, (1..=10).collect::<Vec<_>>());
        assert!(table.iter().all(|e| e.rating.as_deref() == Some("A+")));
    }

    #[test]
    fn test_unknown_category_is_empty() {
        assert!(RankingSource::PrincetonReview.table("best-parking").is_empty());
    }

    #[test]
    fn test_us_news_scores() {
        let table = RankingSource::UsNews.table("national-universities");
        assert_eq!(table.len(), 15);
        assert_eq!(table[0].score, Some(100.0));
    }
}
