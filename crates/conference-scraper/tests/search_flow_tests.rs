//! Enrichment and correlation against an in-memory search service.

mod common;

use common::MockSearch;
use conference_scraper::error::EnrichError;
use conference_scraper::models::{PaperRecord, ScheduleRecord};
use conference_scraper::scrape::{
    Resolution, correlate_all, correlate_record, enrich_all, enrich_record,
};

fn record(title: &str) -> PaperRecord {
    PaperRecord::new(title, vec!["An Author".to_string()])
}

fn poster(name: &str, authors: &[&str]) -> ScheduleRecord {
    ScheduleRecord::new(name, authors.iter().map(ToString::to_string).collect())
}

// =============================================================================
// Enrichment
// =============================================================================

#[tokio::test]
async fn test_enrich_record_merges_fields() {
    let search = MockSearch::default().with_publication("Deep Sets", Some(1200), Some("Sets."));
    let mut paper = record("Deep Sets");

    enrich_record(&search, &mut paper).await.unwrap();

    assert_eq!(paper.num_citations, Some(1200));
    assert_eq!(paper.r#abstract.as_deref(), Some("Sets."));
    assert!(paper.is_enriched());
}

#[tokio::test]
async fn test_enrich_record_no_match() {
    let search = MockSearch::default();
    let mut paper = record("Unknown Paper");

    let err = enrich_record(&search, &mut paper).await.unwrap_err();

    assert!(matches!(err, EnrichError::NoMatch { .. }));
    assert!(!paper.is_enriched());
}

#[tokio::test]
async fn test_enrich_record_missing_abstract_leaves_record_untouched() {
    let search = MockSearch::default().with_publication("Deep Sets", Some(10), None);
    let mut paper = record("Deep Sets");

    let err = enrich_record(&search, &mut paper).await.unwrap_err();

    assert!(matches!(err, EnrichError::MissingField { field: "abstract", .. }));
    assert!(paper.num_citations.is_none());
}

#[tokio::test]
async fn test_enrich_record_missing_citations() {
    let search = MockSearch::default().with_publication("Deep Sets", None, Some("Sets."));
    let mut paper = record("Deep Sets");

    let err = enrich_record(&search, &mut paper).await.unwrap_err();

    assert!(matches!(err, EnrichError::MissingField { field: "num_citations", .. }));
    assert!(paper.r#abstract.is_none());
}

#[tokio::test]
async fn test_enrich_all_isolates_failures() {
    let search = MockSearch::default()
        .with_publication("First", Some(1), Some("a"))
        .with_failing_title("Second")
        .with_publication("Third", Some(3), Some("c"));
    let mut papers = vec![record("First"), record("Second"), record("Missing"), record("Third")];

    let report = enrich_all(&search, &mut papers).await;

    assert_eq!(report.enriched, 2);
    assert_eq!(report.failed(), 2);
    assert_eq!(report.failures[0].0, "Second");
    assert!(matches!(report.failures[0].1, EnrichError::Client(_)));
    assert_eq!(report.failures[1].0, "Missing");

    assert!(papers[0].is_enriched());
    assert!(!papers[1].is_enriched());
    assert!(!papers[2].is_enriched());
    assert_eq!(papers[3].num_citations, Some(3));

    // Every record was looked up, in order.
    assert_eq!(search.calls(), vec!["pub:First", "pub:Second", "pub:Missing", "pub:Third"]);
}

// =============================================================================
// Correlation
// =============================================================================

#[tokio::test]
async fn test_correlate_stops_at_first_matching_author() {
    let search = MockSearch::default()
        .with_author("Bob", "Uni B", &[("Other Paper", Some("4"))])
        .with_author("Carol", "Uni C", &[("Deep  Sets", Some("42"))])
        .with_author("Dave", "Uni D", &[("Deep Sets", Some("99"))]);
    let mut rec = poster("Deep Sets", &["Alice", "Bob", "Carol", "Dave"]);

    let resolution = correlate_record(&search, &mut rec).await.unwrap();

    assert_eq!(
        resolution,
        Resolution::Resolved {
            author: "Carol".to_string(),
            citations: 42,
            affiliation: "Uni C".to_string(),
        }
    );
    assert_eq!(rec.citations, Some(42));
    assert_eq!(rec.affiliation.as_deref(), Some("Uni C"));

    assert_eq!(
        search.calls(),
        vec!["author:Alice", "author:Bob", "papers:id-Bob", "author:Carol", "papers:id-Carol"]
    );
}

#[tokio::test]
async fn test_correlate_matches_ignoring_case_and_spaces() {
    let search =
        MockSearch::default().with_author("Alice", "MIT", &[("deep sets", Some("7"))]);
    let mut rec = poster("Deep Sets", &["Alice"]);

    let resolution = correlate_record(&search, &mut rec).await.unwrap();

    assert!(matches!(resolution, Resolution::Resolved { citations: 7, .. }));
}

#[tokio::test]
async fn test_correlate_missing_citation_cell_moves_on() {
    let search = MockSearch::default()
        .with_author("Alice", "Uni A", &[("Deep Sets", None)])
        .with_author("Bob", "Uni B", &[("Deep Sets", Some("11"))]);
    let mut rec = poster("Deep Sets", &["Alice", "Bob"]);

    let resolution = correlate_record(&search, &mut rec).await.unwrap();

    assert!(matches!(
        resolution,
        Resolution::Resolved { ref author, citations: 11, .. } if author == "Bob"
    ));
    assert_eq!(rec.affiliation.as_deref(), Some("Uni B"));
}

#[tokio::test]
async fn test_correlate_empty_citation_cell_is_zero() {
    let search = MockSearch::default().with_author("Alice", "Uni A", &[("Deep Sets", Some(""))]);
    let mut rec = poster("Deep Sets", &["Alice"]);

    correlate_record(&search, &mut rec).await.unwrap();

    assert_eq!(rec.citations, Some(0));
}

#[tokio::test]
async fn test_correlate_unresolved_leaves_fields_blank() {
    let search =
        MockSearch::default().with_author("Alice", "Uni A", &[("Something Else", Some("5"))]);
    let mut rec = poster("Deep Sets", &["Alice", "Nobody"]);

    let resolution = correlate_record(&search, &mut rec).await.unwrap();

    assert_eq!(resolution, Resolution::Unresolved);
    assert!(!rec.is_resolved());
    assert!(rec.citations.is_none());
    assert!(rec.affiliation.is_none());
}

#[tokio::test]
async fn test_correlate_all_counts_resolved() {
    let search = MockSearch::default()
        .with_author("Alice", "Uni A", &[("Paper One", Some("3"))]);
    let mut records = vec![
        poster("Paper One", &["Alice"]),
        poster("Paper Two", &["Alice"]),
        poster("Paper Three", &[]),
    ];

    let resolved = correlate_all(&search, &mut records).await.unwrap();

    assert_eq!(resolved, 1);
    assert!(records[0].is_resolved());
    assert!(!records[1].is_resolved());
    assert!(!records[2].is_resolved());
}
