//! Per-job pipelines.
//!
//! A job runs its stages in order and stops at the first fetch, parse or
//! write error. Jobs are independent; run them through [`crate::pool::TaskQueue`].

use std::path::PathBuf;
use std::sync::Arc;

use crate::client::PageClient;
use crate::config::Config;
use crate::error::ScrapeResult;
use crate::models::ConferenceYearJob;
use crate::output;
use crate::scholar::BibliographicSearch;
use crate::scrape;

/// Shared, read-only state for jobs.
pub struct ScrapeContext {
    /// Page client for listing and schedule pages.
    pub pages: PageClient,

    /// Search service for enrichment and correlation.
    pub search: Arc<dyn BibliographicSearch>,

    /// Site configuration.
    pub config: Config,

    /// Directory receiving output files.
    pub output_dir: PathBuf,
}

impl ScrapeContext {
    /// Create a new context.
    #[must_use]
    pub fn new(
        pages: PageClient,
        search: Arc<dyn BibliographicSearch>,
        config: Config,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self { pages, search, config, output_dir: output_dir.into() }
    }
}

/// What a listing job produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSummary {
    /// Papers parsed from the listing.
    pub papers: usize,

    /// Enrichment counts `(enriched, failed)`, when enrichment ran.
    pub enrichment: Option<(usize, usize)>,

    /// Files written.
    pub files: Vec<PathBuf>,
}

/// What a schedule job produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSummary {
    /// Posters parsed from the schedule.
    pub papers: usize,

    /// Posters that received a citation count.
    pub resolved: usize,

    /// File written.
    pub file: PathBuf,
}

/// Listing pipeline: DBLP listing → papers table, optionally → enriched table.
pub async fn run_listing_job(
    ctx: &ScrapeContext,
    job: &ConferenceYearJob,
    get_data: bool,
) -> ScrapeResult<ListingSummary> {
    let url = scrape::listing_url(&ctx.config.dblp_base_url, &job.conference, job.year);
    tracing::info!(conference = %job.conference, year = job.year, %url, "Fetching listing");

    let html = ctx.pages.fetch_html(&url).await?;
    let mut papers = scrape::parse_listing(&html)?;
    tracing::info!(
        conference = %job.conference,
        year = job.year,
        papers = papers.len(),
        "Parsed listing"
    );

    let mut files = vec![output::write_papers(&ctx.output_dir, job, &papers)?];

    let enrichment = if get_data {
        let report = scrape::enrich_all(ctx.search.as_ref(), &mut papers).await;
        tracing::info!(
            conference = %job.conference,
            year = job.year,
            enriched = report.enriched,
            failed = report.failed(),
            "Enrichment finished"
        );
        files.push(output::write_paper_data(&ctx.output_dir, job, &papers)?);
        Some((report.enriched, report.failed()))
    } else {
        None
    };

    Ok(ListingSummary { papers: papers.len(), enrichment, files })
}

/// Schedule pipeline: poster schedule → author-correlated citations → JSON table.
pub async fn run_schedule_job(
    ctx: &ScrapeContext,
    job: &ConferenceYearJob,
) -> ScrapeResult<ScheduleSummary> {
    let url =
        scrape::schedule_url(ctx.config.schedule_base_url.as_deref(), &job.conference, job.year)?;
    tracing::info!(conference = %job.conference, year = job.year, %url, "Fetching schedule");

    let html = ctx.pages.fetch_html(&url).await?;
    let mut records = scrape::parse_schedule(&html)?;
    let resolved = scrape::correlate_all(ctx.search.as_ref(), &mut records).await?;
    tracing::info!(
        conference = %job.conference,
        year = job.year,
        papers = records.len(),
        resolved,
        "Correlation finished"
    );

    let file = output::write_schedule_results(&ctx.output_dir, job, &records)?;
    Ok(ScheduleSummary { papers: records.len(), resolved, file })
}
