//! Citation enrichment for listing records.
//!
//! A record is enriched only when the search finds a publication that has
//! both a citation count and an abstract. Anything less fails that record; the
//! rest of the batch is still attempted.

use crate::error::EnrichError;
use crate::models::{Lookup, PaperRecord};
use crate::scholar::BibliographicSearch;

/// Look up one record and merge citation count and abstract into it.
///
/// The record is left untouched on any failure.
pub async fn enrich_record(
    search: &dyn BibliographicSearch,
    record: &mut PaperRecord,
) -> Result<(), EnrichError> {
    let publication = match search.search_single_pub(&record.title).await? {
        Lookup::Found(publication) => publication,
        Lookup::NotFound => return Err(EnrichError::no_match(&record.title)),
    };

    let num_citations = publication
        .num_citations
        .ok_or_else(|| EnrichError::missing_field(&record.title, "num_citations"))?;
    let r#abstract = publication
        .r#abstract
        .ok_or_else(|| EnrichError::missing_field(&record.title, "abstract"))?;

    record.num_citations = Some(num_citations);
    record.r#abstract = Some(r#abstract);
    Ok(())
}

/// Outcome of enriching a batch.
#[derive(Debug, Default)]
pub struct EnrichReport {
    /// Records that were enriched.
    pub enriched: usize,

    /// Titles that failed, with the reason.
    pub failures: Vec<(String, EnrichError)>,
}

impl EnrichReport {
    /// Number of failed records.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Enrich every record in order, one lookup at a time.
pub async fn enrich_all(
    search: &dyn BibliographicSearch,
    records: &mut [PaperRecord],
) -> EnrichReport {
    let mut report = EnrichReport::default();

    for record in records.iter_mut() {
        match enrich_record(search, record).await {
            Ok(()) => report.enriched += 1,
            Err(e) => {
                tracing::warn!(title = %record.title, error = %e, "Enrichment failed");
                report.failures.push((record.title.clone(), e));
            }
        }
    }

    report
}
