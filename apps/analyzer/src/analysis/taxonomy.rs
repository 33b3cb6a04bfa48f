//! Keyword taxonomy: the categorized skill vocabulary the local engine scores against.
//!
//! The built-in taxonomy covers five categories. A replacement can be loaded from a JSON
//! file at startup; it is immutable afterwards.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Skill categories, in the order they are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Languages,
    Frontend,
    Backend,
    Cloud,
    SoftSkills,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Languages,
        Category::Frontend,
        Category::Backend,
        Category::Cloud,
        Category::SoftSkills,
    ];
}

/// Category → ordered keyword list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordTaxonomy {
    categories: BTreeMap<Category, Vec<String>>,
}

impl KeywordTaxonomy {
    /// Reads a taxonomy from a JSON object keyed by category name, e.g.
    /// `{"languages": ["Rust"], "cloud": ["AWS"]}`. Missing categories are empty.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read taxonomy file '{}'", path.display()))?;
        Self::from_json_str(&raw)
            .with_context(|| format!("Invalid taxonomy file '{}'", path.display()))
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let taxonomy: KeywordTaxonomy = serde_json::from_str(raw)?;
        Ok(taxonomy)
    }

    pub fn keywords(&self, category: Category) -> &[String] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.categories.iter().map(|(c, kws)| (*c, kws.as_slice()))
    }

    pub fn keyword_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}

impl Default for KeywordTaxonomy {
    fn default() -> Self {
        let entries: [(Category, &[&str]); 5] = [
            (
                Category::Languages,
                &[
                    "Javascript", "Python", "Java", "C++", "TypeScript", "Go", "Rust", "PHP",
                    "Ruby", "Swift",
                ],
            ),
            (
                Category::Frontend,
                &[
                    "React", "Angular", "Vue", "HTML", "CSS", "Redux", "Webpack", "Tailwind",
                ],
            ),
            (
                Category::Backend,
                &[
                    "Node.js", "Express", "Django", "Flask", "Spring", "Laravel", "PostgreSQL",
                    "MongoDB", "SQL",
                ],
            ),
            (
                Category::Cloud,
                &["AWS", "Azure", "GCP", "Docker", "Kubernetes", "Jenkins", "CI/CD"],
            ),
            (
                Category::SoftSkills,
                &[
                    "Leadership",
                    "Communication",
                    "Agile",
                    "Scrum",
                    "Project Management",
                    "Teamwork",
                ],
            ),
        ];

        Self {
            categories: entries
                .into_iter()
                .map(|(c, kws)| (c, kws.iter().map(|k| k.to_string()).collect()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_taxonomy_covers_every_category() {
        let taxonomy = KeywordTaxonomy::default();
        for category in Category::ALL {
            assert!(
                !taxonomy.keywords(category).is_empty(),
                "{category:?} has no keywords"
            );
        }
        assert_eq!(taxonomy.keyword_count(), 40);
    }

    #[test]
    fn test_from_json_uses_camel_case_keys() {
        let taxonomy =
            KeywordTaxonomy::from_json_str(r#"{"softSkills": ["Mentoring"], "cloud": ["AWS"]}"#)
                .unwrap();
        assert_eq!(taxonomy.keywords(Category::SoftSkills), ["Mentoring"]);
        assert_eq!(taxonomy.keywords(Category::Cloud), ["AWS"]);
        assert!(taxonomy.keywords(Category::Languages).is_empty());
    }

    #[test]
    fn test_from_json_rejects_unknown_category() {
        assert!(KeywordTaxonomy::from_json_str(r#"{"databases": ["Redis"]}"#).is_err());
    }

    #[test]
    fn test_iteration_follows_category_order() {
        let taxonomy = KeywordTaxonomy::default();
        let order: Vec<Category> = taxonomy.iter().map(|(c, _)| c).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }
}
