//! Results returned by the bibliographic search service.

use serde::{Deserialize, Serialize};

use super::normalize_title;

/// Outcome of a search that may legitimately find nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    /// The search produced a result.
    Found(T),
    /// The search produced no result.
    NotFound,
}

impl<T> Lookup<T> {
    /// Convert into an `Option`.
    #[must_use]
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound => None,
        }
    }

    /// Check if the search found something.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NotFound, Self::Found)
    }
}

/// Best match for a single-publication title search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    /// Title as shown by the search service.
    pub title: String,

    /// Citation count, if the result shows one.
    #[serde(default)]
    pub num_citations: Option<u32>,

    /// Abstract or snippet text, if the result shows one.
    #[serde(default)]
    pub r#abstract: Option<String>,
}

/// Author profile returned by an author search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorProfile {
    /// Display name on the profile.
    pub name: String,

    /// Profile identifier (`user=` parameter).
    pub scholar_id: String,

    /// Declared affiliation, possibly empty.
    #[serde(default)]
    pub affiliation: String,
}

/// One row of an author's publication table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorPaperEntry {
    /// Paper name as listed on the profile.
    pub name: String,

    /// Raw text of the citation cell; `None` when the row has no cell.
    pub citations: Option<String>,
}

impl AuthorPaperEntry {
    /// Paper name in comparison form.
    #[must_use]
    pub fn normalized_name(&self) -> String {
        normalize_title(&self.name)
    }

    /// Citation count shown in the row.
    ///
    /// An empty cell means zero citations. Returns `None` when the cell is
    /// absent or does not hold a number.
    #[must_use]
    pub fn citation_count(&self) -> Option<u32> {
        let cell = self.citations.as_deref()?.trim();
        if cell.is_empty() { Some(0) } else { cell.parse().ok() }
    }
}
