//! Bibliographic search service.
//!
//! [`BibliographicSearch`] is the seam the enricher and the correlator call
//! through; [`ScholarClient`] implements it by reading Google Scholar pages.
//! Searches that find nothing return [`Lookup::NotFound`] rather than an error.

mod parse;

pub use parse::{parse_author_publications, parse_author_search, parse_publication_search};

use url::Url;

use crate::client::PageClient;
use crate::config::Config;
use crate::error::ClientResult;
use crate::models::{AuthorPaperEntry, AuthorProfile, Lookup, Publication};

/// Publication and author lookups.
#[async_trait::async_trait]
pub trait BibliographicSearch: Send + Sync {
    /// Find the best match for a paper title.
    async fn search_single_pub(&self, title: &str) -> ClientResult<Lookup<Publication>>;

    /// Find the first profile matching an author name.
    async fn search_author(&self, name: &str) -> ClientResult<Lookup<AuthorProfile>>;

    /// List an author's publications, newest first, single page.
    async fn author_publications(
        &self,
        author: &AuthorProfile,
    ) -> ClientResult<Vec<AuthorPaperEntry>>;
}

/// Google Scholar search over HTML pages.
#[derive(Debug, Clone)]
pub struct ScholarClient {
    pages: PageClient,
    base_url: String,
    author_page_size: u32,
}

impl ScholarClient {
    /// Create a client sharing the given page client.
    #[must_use]
    pub fn new(pages: PageClient, config: &Config) -> Self {
        Self {
            pages,
            base_url: config.scholar_base_url.trim_end_matches('/').to_string(),
            author_page_size: config.author_page_size,
        }
    }

    fn endpoint(&self, path: &str) -> ClientResult<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    /// URL of an author's publication table, sorted by date.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is not a valid URL.
    pub fn author_page_url(&self, scholar_id: &str) -> ClientResult<Url> {
        let mut url = self.endpoint("/citations")?;
        url.query_pairs_mut()
            .append_pair("hl", "en")
            .append_pair("user", scholar_id)
            .append_pair("view_op", "list_works")
            .append_pair("sortby", "pubdate")
            .append_pair("cstart", "0")
            .append_pair("pagesize", &self.author_page_size.to_string());
        Ok(url)
    }
}

#[async_trait::async_trait]
impl BibliographicSearch for ScholarClient {
    async fn search_single_pub(&self, title: &str) -> ClientResult<Lookup<Publication>> {
        let url = self.endpoint("/scholar")?;
        let params = [("hl", "en".to_string()), ("q", title.to_string())];

        let html = self.pages.fetch_html_with_query(url.as_str(), &params).await?;
        Ok(parse_publication_search(&html).into())
    }

    async fn search_author(&self, name: &str) -> ClientResult<Lookup<AuthorProfile>> {
        let url = self.endpoint("/citations")?;
        let params = [
            ("hl", "en".to_string()),
            ("view_op", "search_authors".to_string()),
            ("mauthors", name.to_string()),
        ];

        let html = self.pages.fetch_html_with_query(url.as_str(), &params).await?;
        Ok(parse_author_search(&html)?.into())
    }

    async fn author_publications(
        &self,
        author: &AuthorProfile,
    ) -> ClientResult<Vec<AuthorPaperEntry>> {
        let url = self.author_page_url(&author.scholar_id)?;
        let html = self.pages.fetch_html(url.as_str()).await?;
        Ok(parse_author_publications(&html)?)
    }
}
