//! CSV tables for listing records.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ScrapeResult;
use crate::models::{ConferenceYearJob, PaperRecord};

/// Name of the listing table for a job.
#[must_use]
pub fn papers_file_name(job: &ConferenceYearJob) -> String {
    format!("papers-{}-{}.csv", job.conference, job.year)
}

/// Name of the enriched table for a job.
#[must_use]
pub fn paper_data_file_name(job: &ConferenceYearJob) -> String {
    format!("paper_data-{}-{}.csv", job.conference, job.year)
}

#[derive(Serialize)]
struct PaperRow<'a> {
    title: &'a str,
    author: String,
}

#[derive(Serialize)]
struct PaperDataRow<'a> {
    title: &'a str,
    author: String,
    num_citations: Option<u32>,
    #[serde(rename = "abstract")]
    r#abstract: Option<&'a str>,
}

/// Write `title,author` rows to any writer.
pub fn write_papers_to<W: io::Write>(writer: W, papers: &[PaperRecord]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(["title", "author"])?;

    for paper in papers {
        wtr.serialize(PaperRow { title: &paper.title, author: paper.author_names() })?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write `title,author,num_citations,abstract` rows to any writer.
///
/// Records that were not enriched get empty cells.
pub fn write_paper_data_to<W: io::Write>(
    writer: W,
    papers: &[PaperRecord],
) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(["title", "author", "num_citations", "abstract"])?;

    for paper in papers {
        wtr.serialize(PaperDataRow {
            title: &paper.title,
            author: paper.author_names(),
            num_citations: paper.num_citations,
            r#abstract: paper.r#abstract.as_deref(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the listing table into `dir` and return its path.
pub fn write_papers(
    dir: &Path,
    job: &ConferenceYearJob,
    papers: &[PaperRecord],
) -> ScrapeResult<PathBuf> {
    let path = dir.join(papers_file_name(job));
    write_papers_to(std::fs::File::create(&path)?, papers)?;
    tracing::info!(path = %path.display(), rows = papers.len(), "Saved papers");
    Ok(path)
}

/// Write the enriched table into `dir` and return its path.
pub fn write_paper_data(
    dir: &Path,
    job: &ConferenceYearJob,
    papers: &[PaperRecord],
) -> ScrapeResult<PathBuf> {
    let path = dir.join(paper_data_file_name(job));
    write_paper_data_to(std::fs::File::create(&path)?, papers)?;
    tracing::info!(path = %path.display(), rows = papers.len(), "Saved paper data");
    Ok(path)
}
