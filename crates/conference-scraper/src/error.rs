//! Error types for the conference scraper.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.
//! Each layer has its own enum: transport ([`ClientError`]), page structure
//! ([`ParseError`]), per-record enrichment ([`EnrichError`]) and per-job
//! ([`ScrapeError`]).

use std::time::Duration;

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Middleware error
    #[error("Middleware error: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    /// Rate limited by the remote site (429 response)
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Suggested wait time before retry
        retry_after: Duration,
    },

    /// Page not found (404 response)
    #[error("Page not found: {url}")]
    NotFound {
        /// URL that was requested
        url: String,
    },

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// A request URL could not be built
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Fetched page did not have the expected structure
    #[error("Failed to parse response: {0}")]
    Parse(#[from] ParseError),
}

impl ClientError {
    /// Create a rate limited error with retry-after duration.
    #[must_use]
    pub fn rate_limited(seconds: u64) -> Self {
        Self::RateLimited { retry_after: Duration::from_secs(seconds) }
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(url: impl Into<String>) -> Self {
        Self::NotFound { url: url.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// Returns true if this error is retryable.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::Server { .. })
    }
}

/// Structural errors in a fetched page.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A citation block did not contain exactly one title element
    #[error("citation block {index} has {found} title elements, expected exactly one")]
    TitleCount {
        /// Position of the block in the page (0 is the proceedings entry)
        index: usize,
        /// Number of title elements found
        found: usize,
    },

    /// A required element is absent
    #[error("missing element: {what}")]
    MissingElement {
        /// Description of the missing element
        what: String,
    },
}

impl ParseError {
    /// Create a missing element error.
    #[must_use]
    pub fn missing(what: impl Into<String>) -> Self {
        Self::MissingElement { what: what.into() }
    }
}

/// Per-record enrichment failures.
#[derive(thiserror::Error, Debug)]
pub enum EnrichError {
    /// The search request itself failed
    #[error("search failed: {0}")]
    Client(#[from] ClientError),

    /// The search returned no publication
    #[error("no publication found for '{title}'")]
    NoMatch {
        /// Title that was searched
        title: String,
    },

    /// The publication lacks a requested field
    #[error("publication '{title}' has no {field}")]
    MissingField {
        /// Title that was searched
        title: String,
        /// Name of the missing field
        field: &'static str,
    },
}

impl EnrichError {
    /// Create a no-match error.
    #[must_use]
    pub fn no_match(title: impl Into<String>) -> Self {
        Self::NoMatch { title: title.into() }
    }

    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(title: impl Into<String>, field: &'static str) -> Self {
        Self::MissingField { title: title.into(), field }
    }
}

/// Invalid `--year` values.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum YearSpecError {
    /// A component is not an integer
    #[error("'{value}' is not a year")]
    NotANumber {
        /// Offending component
        value: String,
    },

    /// A dash range runs backwards
    #[error("year range {start}-{end} is empty")]
    EmptyRange {
        /// Range start
        start: i32,
        /// Range end
        end: i32,
    },

    /// Nothing to parse
    #[error("no year given")]
    Empty,
}

/// Errors that abort one (conference, year) job.
#[derive(thiserror::Error, Debug)]
pub enum ScrapeError {
    /// Error from the HTTP client
    #[error("fetch failed: {0}")]
    Client(#[from] ClientError),

    /// Page structure error
    #[error("parse failed: {0}")]
    Parse(#[from] ParseError),

    /// Conference has no known schedule site
    #[error("no schedule site known for conference '{0}'")]
    UnsupportedConference(String),

    /// Output file error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV writer error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for job operations.
pub type ScrapeResult<T> = Result<T, ScrapeError>;
