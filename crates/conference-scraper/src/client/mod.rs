//! HTML page client.
//!
//! Provides async HTTP client with:
//! - Connection pooling via reqwest
//! - Optional retry middleware with exponential backoff
//! - Optional courtesy delay before each request
//! - Page caching, so an author profile shared by several papers is fetched once

mod middleware;

use moka::future::Cache;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::ClientWithMiddleware;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};

/// Fetches raw HTML pages.
#[derive(Clone)]
pub struct PageClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// Page cache, keyed by request.
    cache: Cache<String, String>,

    /// Delay before each request.
    request_delay: std::time::Duration,

    /// Whether retry middleware is installed.
    retries: bool,
}

impl PageClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(api::USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static("text/html,application/xhtml+xml"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        let cache = Cache::builder()
            .max_capacity(config.cache_max_size)
            .time_to_live(config.cache_ttl)
            .build();

        Ok(Self {
            client: middleware::with_middleware(client, config.max_retries),
            cache,
            request_delay: config.request_delay,
            retries: config.retries_enabled(),
        })
    }

    /// Fetch a page and return its body as text.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or a non-success status.
    pub async fn fetch_html(&self, url: &str) -> ClientResult<String> {
        self.fetch_html_with_query(url, &[]).await
    }

    /// Fetch a page with query parameters and return its body as text.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or a non-success status.
    pub async fn fetch_html_with_query(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> ClientResult<String> {
        let cache_key = Self::cache_key(url, params);
        if let Some(cached) = self.cache.get(&cache_key).await {
            tracing::debug!(url, "Page cache hit");
            return Ok(cached);
        }

        if !self.request_delay.is_zero() {
            tokio::time::sleep(self.request_delay).await;
        }

        tracing::debug!(url, "Fetching page");
        let response = self.client.get(url).query(params).send().await?;
        let response = Self::handle_response(url, response).await?;
        let body = response.text().await?;

        self.cache.insert(cache_key, body.clone()).await;

        Ok(body)
    }

    /// Map non-success status codes to errors.
    async fn handle_response(
        url: &str,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60);

                Err(ClientError::rate_limited(retry_after))
            }
            404 => Err(ClientError::not_found(url)),
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }

    /// Generate cache key.
    fn cache_key(url: &str, params: &[(&str, String)]) -> String {
        use md5::{Digest, Md5};

        let mut hasher = Md5::new();
        hasher.update(url.as_bytes());
        hasher.update(b"|");

        for (k, v) in params {
            hasher.update(k.as_bytes());
            hasher.update(b"=");
            hasher.update(v.as_bytes());
            hasher.update(b"&");
        }

        format!("{:x}", hasher.finalize())
    }
}

impl std::fmt::Debug for PageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageClient")
            .field("request_delay", &self.request_delay)
            .field("retries", &self.retries)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_depends_on_params() {
        let a = PageClient::cache_key("https://x", &[("q", "a".to_string())]);
        let b = PageClient::cache_key("https://x", &[("q", "b".to_string())]);
        assert_ne!(a, b);
        assert_eq!(a, PageClient::cache_key("https://x", &[("q", "a".to_string())]));
    }
}
