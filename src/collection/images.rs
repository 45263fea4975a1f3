use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::{collection::write_metadata, error::Result};

type ImageGroup = (&'static str, &'static str, &'static [(&'static str, &'static str)]);

/// Campus image categories: (directory, description, [(file stem, subject)])
pub const IMAGE_GROUPS: &[ImageGroup] = &[
    ("ivy_league", "Images of Ivy League campuses", &[
        ("harvard", "Harvard University - Harvard Yard"),
        ("yale", "Yale University - Old Campus"),
        ("princeton", "Princeton University - Nassau Hall"),
        ("columbia", "Columbia University - Low Memorial Library"),
        ("brown", "Brown University - The College Green"),
        ("dartmouth", "Dartmouth College - Baker-Berry Library"),
        ("upenn", "University of Pennsylvania - College Hall"),
        ("cornell", "Cornell University - McGraw Tower"),
    ]),
    ("public_universities", "Images of public university campuses", &[
        ("michigan", "University of Michigan - The Diag"),
        ("berkeley", "UC Berkeley - Sather Tower"),
        ("unc", "UNC Chapel Hill - The Old Well"),
        ("texas", "UT Austin - The Tower"),
        ("ucla", "UCLA - Royce Hall"),
        ("virginia", "University of Virginia - The Rotunda"),
        ("wisconsin", "University of Wisconsin - Bascom Hall"),
        ("washington", "University of Washington - The Quad"),
    ]),
    ("liberal_arts", "Images of liberal arts college campuses", &[
        ("williams", "Williams College - Chapin Hall"),
        ("amherst", "Amherst College - Johnson Chapel"),
        ("swarthmore", "Swarthmore College - Parrish Hall"),
        ("pomona", "Pomona College - Marston Quad"),
        ("bowdoin", "Bowdoin College - Hubbard Hall"),
        ("middlebury", "Middlebury College - Mead Chapel"),
        ("carleton", "Carleton College - Willis Hall"),
        ("davidson", "Davidson College - Chambers Building"),
    ]),
    ("recognizable_landmarks", "Images of recognizable campus landmarks", &[
        ("harvard_statue", "Harvard University - John Harvard Statue"),
        ("princeton_nassau", "Princeton University - FitzRandolph Gate"),
        ("yale_sterling", "Yale University - Sterling Memorial Library"),
        ("columbia_alma", "Columbia University - Alma Mater Statue"),
        ("michigan_union", "University of Michigan - Michigan Union"),
        ("berkeley_gate", "UC Berkeley - Sather Gate"),
        ("stanford_oval", "Stanford University - The Oval"),
        ("duke_chapel", "Duke University - Duke Chapel"),
    ]),
];

#[derive(Serialize)]
struct GroupSummary {
    count: usize,
    description: &'static str,
}

/// Writes placeholder campus "images" (text files describing the subject)
pub struct CampusImageCollector {
    output_dir: PathBuf,
}

impl CampusImageCollector {
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self { output_dir: output_dir.into() }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write every placeholder and the `metadata.json` summary.
    /// Returns the number of placeholders written.
    pub fn download_sample_images(&self) -> Result<usize> {
        let mut total = 0;

        for (category, _, images) in IMAGE_GROUPS {
            let category_dir = self.output_dir.join(category);
            std::fs::create_dir_all(&category_dir)?;

            for (filename, description) in images.iter() {
                let body = format!(
                    "This is a placeholder for an image of {description}.\n\
                     In the actual implementation, this would be a high-quality image file.\n\
                     Category: {category}\n\
                     Filename: {filename}\n\
                     Description: {description}\n"
                );
                std::fs::write(category_dir.join(format!("{}.txt", filename)), body)?;
                total += 1;
            }
        }

        let categories = IMAGE_GROUPS
            .iter()
            .map(|(name, description, images)| {
                (name.to_string(), GroupSummary { count: images.len(), description: *description })
            })
            .collect();

        write_metadata(
            &self.output_dir,
            "total_images",
            total,
            "categories",
            categories,
            "These images are for demonstration purposes only. In a real implementation, proper attribution and licensing would be required.",
        )?;

        info!("Wrote {} placeholder campus images", total);
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_placeholders_and_metadata() {
        let dir = tempdir().unwrap();
        let written = CampusImageCollector::new(dir.path()).download_sample_images().unwrap();
        assert_eq!(written, 32);

        let harvard = std::fs::read_to_string(dir.path().join("ivy_league/harvard.txt")).unwrap();
        assert!(harvard.contains("Harvard University - Harvard Yard"));
        assert!(harvard.contains("Category: ivy_league"));

        let metadata: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.path().join("metadata.json")).unwrap()).unwrap();
        assert_eq!(metadata["total_images"], 32);
        assert_eq!(metadata["categories"]["liberal_arts"]["count"], 8);
    }
}
