//! Middleware stack for the page client.
//!
//! Retries are off by default; listing and profile pages are fetched once and a
//! failed fetch fails the job. `SCRAPER_MAX_RETRIES` turns on exponential backoff.

use std::time::Duration;

use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};

/// Wrap a reqwest client with the configured middleware.
pub(super) fn with_middleware(client: Client, max_retries: u32) -> ClientWithMiddleware {
    let builder = ClientBuilder::new(client);
    if max_retries == 0 {
        return builder.build();
    }

    let retry_policy = ExponentialBackoff::builder()
        .retry_bounds(Duration::from_secs(1), Duration::from_secs(30))
        .build_with_max_retries(max_retries);

    builder.with(RetryTransientMiddleware::new_with_policy(retry_policy)).build()
}
