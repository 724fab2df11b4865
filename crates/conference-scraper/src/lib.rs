//! Conference Scraper
//!
//! Scrapes conference paper listings from DBLP and attaches citation data
//! from Google Scholar.
//!
//! # Pipelines
//!
//! - **Listing**: DBLP listing page → `papers-{conference}-{year}.csv`
//! - **Enrichment** (optional): title search per paper → `paper_data-{conference}-{year}.csv`
//! - **Schedule**: conference poster schedule, citations found through each
//!   author's profile → `results_{conference}_{year}.json`
//!
//! Every (conference, year) pair is an independent job run through a bounded
//! [`pool::TaskQueue`].
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use conference_scraper::models::ConferenceYearJob;
//! use conference_scraper::pipeline::{ScrapeContext, run_listing_job};
//! use conference_scraper::{Config, PageClient, ScholarClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let pages = PageClient::new(&config)?;
//!     let search = Arc::new(ScholarClient::new(pages.clone(), &config));
//!     let ctx = ScrapeContext::new(pages, search, config, "./data");
//!
//!     let summary = run_listing_job(&ctx, &ConferenceYearJob::new("NeurIPS", 2020), false).await?;
//!     println!("{} papers", summary.papers);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod html;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod pool;
pub mod scholar;
pub mod scrape;
pub mod years;

pub use client::PageClient;
pub use config::Config;
pub use error::{ClientError, EnrichError, ParseError, ScrapeError};
pub use scholar::{BibliographicSearch, ScholarClient};
