//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use conference_scraper::error::{ClientError, ClientResult};
use conference_scraper::models::{AuthorPaperEntry, AuthorProfile, Lookup, Publication};
use conference_scraper::scholar::BibliographicSearch;

// =============================================================================
// DBLP listing pages
// =============================================================================

/// Proceedings entry that opens every DBLP listing page.
pub const PROCEEDINGS_CITE: &str = r#"<cite class="data tts-content" itemprop="headline">
    <span itemprop="author" itemscope itemtype="http://schema.org/Person"><a href="https://dblp.org/pid/h/Hadsell"><span itemprop="name" title="Raia Hadsell">Raia Hadsell</span></a></span>,
    <span itemprop="author" itemscope itemtype="http://schema.org/Person"><a href="https://dblp.org/pid/l/Lin"><span itemprop="name" title="Hsuan-Tien Lin">Hsuan-Tien Lin</span></a></span>:
    <span class="title" itemprop="name">Advances in Neural Information Processing Systems 33: Annual Conference on Neural Information Processing Systems 2020.</span>
    <span itemprop="datePublished">2020</span></cite>"#;

/// One paper entry as DBLP renders it, `title_html` inserted verbatim.
#[must_use]
pub fn paper_cite(authors: &[&str], title_html: &str) -> String {
    let authors: Vec<String> = authors
        .iter()
        .map(|name| {
            format!(
                r#"<span itemprop="author" itemscope itemtype="http://schema.org/Person"><a href="https://dblp.org/pid/x"><span itemprop="name" title="{name}">{name}</span></a></span>"#
            )
        })
        .collect();

    format!(
        r#"<cite class="data tts-content" itemprop="headline">{}:
        <span class="title" itemprop="name">{title_html}</span>
        <a href="https://dblp.org/db/conf/nips/neurips2020.html"><span itemprop="isPartOf" itemscope itemtype="http://schema.org/BookSeries"><span itemprop="name">NeurIPS</span></span></a>
        <span itemprop="datePublished">2020</span></cite>"#,
        authors.join(", ")
    )
}

/// Wrap cites in a listing page body.
#[must_use]
pub fn listing_page(cites: &[String]) -> String {
    let entries: String = cites
        .iter()
        .map(|cite| {
            format!(r#"<li class="entry inproceedings"><div class="data">{cite}</div></li>"#)
        })
        .collect();

    format!(
        r#"<!DOCTYPE html><html lang="en"><head><title>dblp: NeurIPS 2020</title></head>
        <body class="no-js"><header><h1>NeurIPS 2020</h1></header>
        <ul class="publ-list">{entries}</ul></body></html>"#
    )
}

/// A listing with the proceedings entry followed by the given papers.
#[must_use]
pub fn listing_with_papers(papers: &[(&[&str], &str)]) -> String {
    let mut cites = vec![PROCEEDINGS_CITE.to_string()];
    cites.extend(papers.iter().map(|(authors, title)| paper_cite(authors, title)));
    listing_page(&cites)
}

// =============================================================================
// Google Scholar pages
// =============================================================================

/// Publication search page with one result.
#[must_use]
pub fn scholar_search_page(title: &str, citations: Option<u32>, snippet: Option<&str>) -> String {
    let cited_by = citations
        .map(|n| format!(r#"<a href="/scholar?cites=1">Cited by {n}</a>"#))
        .unwrap_or_default();
    let snippet = snippet.map(|s| format!(r#"<div class="gs_rs">{s}</div>"#)).unwrap_or_default();

    format!(
        r##"<html><body><div id="gs_res_ccl_mid"><div class="gs_r gs_or gs_scl"><div class="gs_ri">
        <h3 class="gs_rt"><a href="/x">{title}</a></h3>{snippet}
        <div class="gs_fl"><a href="#">Save</a> {cited_by}</div></div></div></div></body></html>"##
    )
}

/// Author search page with one profile.
#[must_use]
pub fn scholar_author_page(name: &str, id: &str, affiliation: &str) -> String {
    format!(
        r#"<html><body><div class="gsc_1usr"><div class="gs_ai gs_scl gs_ai_chpr">
        <h3 class="gs_ai_name"><a href="/citations?hl=en&amp;user={id}">{name}</a></h3>
        <div class="gs_ai_aff">{affiliation}</div></div></div></body></html>"#
    )
}

/// Author publication table; `None` citations omits the cell link.
#[must_use]
pub fn scholar_profile_page(rows: &[(&str, Option<&str>)]) -> String {
    let rows: String = rows
        .iter()
        .map(|(title, cites)| {
            let cell = cites
                .map(|c| format!(r#"<a class="gsc_a_ac gs_ibl" href="/c">{c}</a>"#))
                .unwrap_or_default();
            format!(
                r#"<tr class="gsc_a_tr"><td class="gsc_a_t"><a class="gsc_a_at" href="/p">{title}</a></td><td class="gsc_a_c">{cell}</td></tr>"#
            )
        })
        .collect();
    format!(
        r#"<html><body><table id="gsc_a_t"><tbody id="gsc_a_b">{rows}</tbody></table></body></html>"#
    )
}

// =============================================================================
// In-memory search service
// =============================================================================

/// Search service backed by maps; records every call.
#[derive(Default)]
pub struct MockSearch {
    pub publications: HashMap<String, Publication>,
    pub authors: HashMap<String, AuthorProfile>,
    pub author_papers: HashMap<String, Vec<AuthorPaperEntry>>,
    pub failing_titles: HashSet<String>,
    pub calls: Mutex<Vec<String>>,
}

impl MockSearch {
    pub fn with_publication(
        mut self,
        title: &str,
        citations: Option<u32>,
        abstract_: Option<&str>,
    ) -> Self {
        self.publications.insert(
            title.to_string(),
            Publication {
                title: title.to_string(),
                num_citations: citations,
                r#abstract: abstract_.map(String::from),
            },
        );
        self
    }

    pub fn with_failing_title(mut self, title: &str) -> Self {
        self.failing_titles.insert(title.to_string());
        self
    }

    pub fn with_author(
        mut self,
        name: &str,
        affiliation: &str,
        papers: &[(&str, Option<&str>)],
    ) -> Self {
        let id = format!("id-{}", name.replace(' ', "-"));
        self.authors.insert(
            name.to_string(),
            AuthorProfile {
                name: name.to_string(),
                scholar_id: id.clone(),
                affiliation: affiliation.to_string(),
            },
        );
        self.author_papers.insert(
            id,
            papers
                .iter()
                .map(|(paper, cites)| AuthorPaperEntry {
                    name: (*paper).to_string(),
                    citations: cites.map(String::from),
                })
                .collect(),
        );
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait::async_trait]
impl BibliographicSearch for MockSearch {
    async fn search_single_pub(&self, title: &str) -> ClientResult<Lookup<Publication>> {
        self.record(format!("pub:{title}"));
        if self.failing_titles.contains(title) {
            return Err(ClientError::server(503, "search unavailable"));
        }
        Ok(self.publications.get(title).cloned().into())
    }

    async fn search_author(&self, name: &str) -> ClientResult<Lookup<AuthorProfile>> {
        self.record(format!("author:{name}"));
        Ok(self.authors.get(name).cloned().into())
    }

    async fn author_publications(
        &self,
        author: &AuthorProfile,
    ) -> ClientResult<Vec<AuthorPaperEntry>> {
        self.record(format!("papers:{}", author.scholar_id));
        Ok(self.author_papers.get(&author.scholar_id).cloned().unwrap_or_default())
    }
}
