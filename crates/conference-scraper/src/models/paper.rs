//! Paper records scraped from listing and schedule pages.

use serde::{Deserialize, Serialize};

/// A paper parsed from a DBLP listing page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    /// Paper title, trailing periods removed.
    pub title: String,

    /// Author names in listing order.
    pub authors: Vec<String>,

    /// Citation count, filled in by enrichment.
    #[serde(default)]
    pub num_citations: Option<u32>,

    /// Abstract text, filled in by enrichment.
    #[serde(default)]
    pub r#abstract: Option<String>,
}

impl PaperRecord {
    /// Create a record with no enrichment data.
    #[must_use]
    pub fn new(title: impl Into<String>, authors: Vec<String>) -> Self {
        Self { title: title.into(), authors, num_citations: None, r#abstract: None }
    }

    /// Check if enrichment data has been merged.
    #[must_use]
    pub const fn is_enriched(&self) -> bool {
        self.num_citations.is_some() && self.r#abstract.is_some()
    }

    /// Get author names as a single cell.
    #[must_use]
    pub fn author_names(&self) -> String {
        self.authors.join("; ")
    }
}

/// A poster scraped from a conference schedule page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    /// Paper name as shown on the schedule.
    pub name: String,

    /// Author names in schedule order.
    pub authors: Vec<String>,

    /// Citation count from the first author profile that lists the paper.
    #[serde(default)]
    pub citations: Option<u32>,

    /// Affiliation declared on that author's profile.
    #[serde(default)]
    pub affiliation: Option<String>,
}

impl ScheduleRecord {
    /// Create a record with no citation data.
    #[must_use]
    pub fn new(name: impl Into<String>, authors: Vec<String>) -> Self {
        Self { name: name.into(), authors, citations: None, affiliation: None }
    }

    /// Check if a citation count has been attached.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.citations.is_some()
    }

    /// Paper name in comparison form.
    #[must_use]
    pub fn normalized_name(&self) -> String {
        normalize_title(&self.name)
    }
}

/// Lowercase a title and drop all whitespace, for cross-site comparison.
#[must_use]
pub fn normalize_title(title: &str) -> String {
    title.chars().filter(|c| !c.is_whitespace()).flat_map(char::to_lowercase).collect()
}
