//! Configuration for the conference scraper.

use std::time::Duration;

/// Site and transport constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for DBLP conference listing pages.
    pub const DBLP_BASE_URL: &str = "https://dblp.org";

    /// Base URL for Google Scholar.
    pub const SCHOLAR_BASE_URL: &str = "https://scholar.google.com";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Delay before each request. Zero: no throttling beyond the worker pool.
    pub const REQUEST_DELAY: Duration = Duration::ZERO;

    /// Retries on transient failures. Zero: a failed fetch fails the job.
    pub const MAX_RETRIES: u32 = 0;

    /// Page cache TTL (30 minutes, long enough for one run).
    pub const CACHE_TTL: Duration = Duration::from_secs(1800);

    /// Maximum cached pages.
    pub const CACHE_MAX_SIZE: u64 = 1000;

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);

    /// Worker pool size for (conference, year) jobs.
    pub const WORKERS: usize = 10;

    /// Rows requested from an author's publication table (single page).
    pub const AUTHOR_PAGE_SIZE: u32 = 200;

    /// Browser-like user agent; Scholar rejects the reqwest default.
    pub const USER_AGENT: &str =
        "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";
}

/// Scraper configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for DBLP listing pages (for testing with mock servers).
    pub dblp_base_url: String,

    /// Base URL for Google Scholar (for testing with mock servers).
    pub scholar_base_url: String,

    /// Override for conference schedule pages. `None` uses the conference's own site.
    pub schedule_base_url: Option<String>,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Delay before each request.
    pub request_delay: Duration,

    /// Retries on transient failures.
    pub max_retries: u32,

    /// Page cache TTL.
    pub cache_ttl: Duration,

    /// Maximum cached pages.
    pub cache_max_size: u64,

    /// Rows requested from an author's publication table.
    pub author_page_size: u32,
}

impl Config {
    /// Create the default configuration pointing at the live sites.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dblp_base_url: api::DBLP_BASE_URL.to_string(),
            scholar_base_url: api::SCHOLAR_BASE_URL.to_string(),
            schedule_base_url: None,
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            request_delay: api::REQUEST_DELAY,
            max_retries: api::MAX_RETRIES,
            cache_ttl: api::CACHE_TTL,
            cache_max_size: api::CACHE_MAX_SIZE,
            author_page_size: api::AUTHOR_PAGE_SIZE,
        }
    }

    /// Create a test configuration with every site pointed at one mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            dblp_base_url: base_url.to_string(),
            scholar_base_url: base_url.to_string(),
            schedule_base_url: Some(base_url.to_string()),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            request_delay: Duration::ZERO,
            max_retries: 0,
            cache_ttl: Duration::from_secs(0), // No caching in tests
            cache_max_size: 0,
            author_page_size: api::AUTHOR_PAGE_SIZE,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `DBLP_BASE_URL`, `SCHOLAR_BASE_URL`, `SCHEDULE_BASE_URL` and
    /// `SCRAPER_MAX_RETRIES`; anything unset keeps its default.
    ///
    /// # Errors
    ///
    /// Returns error if `SCRAPER_MAX_RETRIES` is not a number.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::new();

        if let Ok(url) = std::env::var("DBLP_BASE_URL") {
            config.dblp_base_url = url;
        }
        if let Ok(url) = std::env::var("SCHOLAR_BASE_URL") {
            config.scholar_base_url = url;
        }
        config.schedule_base_url = std::env::var("SCHEDULE_BASE_URL").ok();

        if let Ok(retries) = std::env::var("SCRAPER_MAX_RETRIES") {
            config.max_retries = retries.parse().map_err(|e| {
                anyhow::anyhow!("SCRAPER_MAX_RETRIES must be a non-negative integer: {e}")
            })?;
        }

        Ok(config)
    }

    /// Check if retries are enabled.
    #[must_use]
    pub const fn retries_enabled(&self) -> bool {
        self.max_retries > 0
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
