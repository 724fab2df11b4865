//! Author-centric citation lookup for schedule records.
//!
//! A schedule record has no citation data. Each author is searched in turn;
//! the first author whose profile lists the paper with a citation cell
//! resolves the record, and no later author is queried.

use crate::error::ClientResult;
use crate::models::{AuthorProfile, Lookup, ScheduleRecord};
use crate::scholar::BibliographicSearch;

/// Final state of one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// An author profile supplied the citation count.
    Resolved {
        /// Name on the profile that matched.
        author: String,
        /// Citation count from that profile.
        citations: u32,
        /// Affiliation declared on that profile.
        affiliation: String,
    },
    /// No author produced a match; fields stay blank.
    Unresolved,
}

/// Try each author of a record until one resolves it.
///
/// # Errors
///
/// Returns error if a search request fails. A missing author or paper is not
/// an error.
pub async fn correlate_record(
    search: &dyn BibliographicSearch,
    record: &mut ScheduleRecord,
) -> ClientResult<Resolution> {
    let target = record.normalized_name();
    tracing::debug!(paper = %record.name, authors = ?record.authors, "Correlating paper");

    for author in &record.authors {
        let profile = match search.search_author(author).await? {
            Lookup::Found(profile) => profile,
            Lookup::NotFound => {
                tracing::debug!(author = %author, "No author profile");
                continue;
            }
        };
        tracing::debug!(author = %profile.name, "Found author profile");

        if let Some(citations) = citations_on_profile(search, &profile, &target).await? {
            record.citations = Some(citations);
            record.affiliation = Some(profile.affiliation.clone());
            tracing::info!(
                paper = %record.name,
                author = %profile.name,
                citations,
                "Resolved citations"
            );
            return Ok(Resolution::Resolved {
                author: profile.name,
                citations,
                affiliation: profile.affiliation,
            });
        }
    }

    Ok(Resolution::Unresolved)
}

/// Citation count for the first entry on the profile matching `target`.
async fn citations_on_profile(
    search: &dyn BibliographicSearch,
    profile: &AuthorProfile,
    target: &str,
) -> ClientResult<Option<u32>> {
    let entries = search.author_publications(profile).await?;
    let Some(entry) = entries.iter().find(|entry| entry.normalized_name() == target) else {
        return Ok(None);
    };

    let count = entry.citation_count();
    if count.is_none() {
        tracing::warn!(
            author = %profile.name,
            source = %target,
            found = %entry.normalized_name(),
            "Couldn't find citations for author"
        );
    }
    Ok(count)
}

/// Correlate every record in order; returns how many were resolved.
///
/// # Errors
///
/// Returns the first search request failure.
pub async fn correlate_all(
    search: &dyn BibliographicSearch,
    records: &mut [ScheduleRecord],
) -> ClientResult<usize> {
    let mut resolved = 0;
    for record in records.iter_mut() {
        if let Resolution::Resolved { .. } = correlate_record(search, record).await? {
            resolved += 1;
        }
    }
    Ok(resolved)
}
