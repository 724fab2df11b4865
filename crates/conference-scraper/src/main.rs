//! Conference Scraper - Entry Point
//!
//! `listing` scrapes DBLP listings (optionally enriched from Google Scholar);
//! `schedule` scrapes conference poster schedules and finds citations through
//! author profiles.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use conference_scraper::config::{Config, api};
use conference_scraper::models::{ConferenceYearJob, jobs_for};
use conference_scraper::pipeline::{self, ScrapeContext};
use conference_scraper::pool::{JobReport, TaskQueue};
use conference_scraper::{PageClient, ScholarClient, years};

#[derive(Parser, Debug)]
#[command(name = "conference-scraper")]
#[command(about = "Scrape conference papers from DBLP and citation counts from Google Scholar")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG", global = true)]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    /// DBLP base URL
    #[arg(long, env = "DBLP_BASE_URL", global = true)]
    dblp_url: Option<String>,

    /// Google Scholar base URL
    #[arg(long, env = "SCHOLAR_BASE_URL", global = true)]
    scholar_url: Option<String>,

    /// Base URL for schedule pages, instead of each conference's own site
    #[arg(long, env = "SCHEDULE_BASE_URL", global = true)]
    schedule_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape DBLP listings into papers-{conference}-{year}.csv
    Listing {
        /// Conference years: "2019", "2018,2020" or "2017-2020"
        #[arg(long, required = true, num_args = 1..)]
        year: Vec<String>,

        /// Conference names
        #[arg(long, num_args = 1.., default_value = "NeurIPS")]
        conference: Vec<String>,

        /// Also fetch citation counts and abstracts from Google Scholar
        #[arg(long)]
        get_data: bool,

        /// Directory for output tables
        #[arg(long, default_value = "./data")]
        output_dir: PathBuf,

        /// Concurrent (conference, year) jobs
        #[arg(long, default_value_t = api::WORKERS)]
        workers: usize,
    },
    /// Scrape poster schedules into results_{conference}_{year}.json
    Schedule {
        /// Conference years: "2019", "2018,2020" or "2017-2020"
        #[arg(long, num_args = 1.., default_value = "2018")]
        year: Vec<String>,

        /// Conference names (NeurIPS or ICML)
        #[arg(long, num_args = 1.., default_value = "NeurIPS")]
        conference: Vec<String>,

        /// Directory for output tables
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,

        /// Concurrent (conference, year) jobs
        #[arg(long, default_value_t = api::WORKERS)]
        workers: usize,
    },
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::from_env()?;
    if let Some(url) = &cli.dblp_url {
        config.dblp_base_url.clone_from(url);
    }
    if let Some(url) = &cli.scholar_url {
        config.scholar_base_url.clone_from(url);
    }
    if cli.schedule_url.is_some() {
        config.schedule_base_url.clone_from(&cli.schedule_url);
    }
    Ok(config)
}

/// Log every report; returns the number of failed jobs.
fn log_reports<T: std::fmt::Debug, E: std::fmt::Display>(
    reports: &[JobReport<ConferenceYearJob, T, E>],
) -> usize {
    let mut failed = 0;
    for report in reports {
        match &report.outcome {
            Ok(summary) => tracing::info!(job = %report.job, ?summary, "Job finished"),
            Err(e) => {
                failed += 1;
                tracing::error!(job = %report.job, error = %e, "Job failed");
            }
        }
    }
    failed
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting conference scraper");

    let config = build_config(&cli)?;
    let pages = PageClient::new(&config)?;
    let search = Arc::new(ScholarClient::new(pages.clone(), &config));

    let failed = match cli.command {
        Command::Listing { year, conference, get_data, output_dir, workers } => {
            let years = years::parse_year_args(&year)?;
            std::fs::create_dir_all(&output_dir)?;

            let ctx = ScrapeContext::new(pages, search, config, output_dir);
            let jobs = jobs_for(&years, &conference);
            tracing::info!(jobs = jobs.len(), workers, get_data, "Running listing jobs");

            let reports = TaskQueue::new(workers)
                .run(jobs, |job| {
                    let ctx = &ctx;
                    async move { pipeline::run_listing_job(ctx, &job, get_data).await }
                })
                .await;
            log_reports(&reports)
        }
        Command::Schedule { year, conference, output_dir, workers } => {
            let years = years::parse_year_args(&year)?;
            std::fs::create_dir_all(&output_dir)?;

            let ctx = ScrapeContext::new(pages, search, config, output_dir);
            let jobs = jobs_for(&years, &conference);
            tracing::info!(jobs = jobs.len(), workers, "Running schedule jobs");

            let reports = TaskQueue::new(workers)
                .run(jobs, |job| {
                    let ctx = &ctx;
                    async move { pipeline::run_schedule_job(ctx, &job).await }
                })
                .await;
            log_reports(&reports)
        }
    };

    if failed > 0 {
        tracing::error!(failed, "Some jobs failed");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
