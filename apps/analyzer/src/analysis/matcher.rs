//! Keyword Taxonomy Matcher: finds which taxonomy keywords occur in free text.
//!
//! Every keyword is escaped before it is compiled, so entries such as `C++`, `Node.js`
//! or `CI/CD` match literally. Patterns are compiled once per taxonomy and shared.

use std::collections::BTreeMap;

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::analysis::taxonomy::{Category, KeywordTaxonomy};

/// How a keyword must sit in the text to count as present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Anywhere, including inside longer words ("Java" matches "Javascript").
    #[default]
    Substring,
    /// Bounded by a non-word character or the start/end of the text on both sides.
    WholeWord,
}

/// Keywords found per category, in taxonomy order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MatchResult {
    found: BTreeMap<Category, Vec<String>>,
}

impl MatchResult {
    pub fn get(&self, category: Category) -> &[String] {
        self.found.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, category: Category) -> usize {
        self.get(category).len()
    }

    pub fn has(&self, category: Category) -> bool {
        self.count(category) > 0
    }

    /// Total matched keywords across all categories.
    pub fn total(&self) -> usize {
        self.found.values().map(Vec::len).sum()
    }

    /// Number of categories with at least one match.
    pub fn non_empty_categories(&self) -> usize {
        self.found.values().filter(|kws| !kws.is_empty()).count()
    }
}

#[derive(Debug)]
struct CompiledKeyword {
    keyword: String,
    pattern: Regex,
}

/// A taxonomy with every keyword pre-compiled into a case-insensitive pattern.
#[derive(Debug)]
pub struct TaxonomyMatcher {
    categories: Vec<(Category, Vec<CompiledKeyword>)>,
}

impl TaxonomyMatcher {
    pub fn new(taxonomy: &KeywordTaxonomy, mode: MatchMode) -> Result<Self, regex::Error> {
        let categories = taxonomy
            .iter()
            .map(|(category, keywords)| {
                let compiled = keywords
                    .iter()
                    .filter(|k| !k.trim().is_empty())
                    .map(|k| {
                        Ok(CompiledKeyword {
                            keyword: k.clone(),
                            pattern: compile_keyword(k, mode)?,
                        })
                    })
                    .collect::<Result<Vec<_>, regex::Error>>()?;
                Ok((category, compiled))
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;

        Ok(Self { categories })
    }

    /// Scans `text` against every category. Never fails; empty text yields empty sets.
    pub fn find(&self, text: &str) -> MatchResult {
        let found = self
            .categories
            .iter()
            .map(|(category, keywords)| {
                let hits = keywords
                    .iter()
                    .filter(|k| k.pattern.is_match(text))
                    .map(|k| k.keyword.clone())
                    .collect();
                (*category, hits)
            })
            .collect();

        MatchResult { found }
    }
}

fn compile_keyword(keyword: &str, mode: MatchMode) -> Result<Regex, regex::Error> {
    let escaped = regex::escape(keyword.trim());
    let pattern = match mode {
        MatchMode::Substring => escaped,
        MatchMode::WholeWord => format!(r"(?:^|\W){escaped}(?:\W|$)"),
    };
    RegexBuilder::new(&pattern).case_insensitive(true).build()
}
