//! JSON tables for schedule records.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::ScrapeResult;
use crate::models::{ConferenceYearJob, ScheduleRecord};

/// Name of the schedule results table for a job.
#[must_use]
pub fn results_file_name(job: &ConferenceYearJob) -> String {
    format!("results_{}_{}.json", job.conference, job.year)
}

/// Serialize records as a pretty-printed JSON array.
pub fn write_schedule_results_to<W: io::Write>(
    writer: W,
    records: &[ScheduleRecord],
) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(writer, records)
}

/// Write the schedule results into `dir` and return its path.
pub fn write_schedule_results(
    dir: &Path,
    job: &ConferenceYearJob,
    records: &[ScheduleRecord],
) -> ScrapeResult<PathBuf> {
    let path = dir.join(results_file_name(job));
    let mut writer = BufWriter::new(std::fs::File::create(&path)?);
    write_schedule_results_to(&mut writer, records)?;
    writer.flush()?;
    tracing::info!(path = %path.display(), rows = records.len(), "Saved schedule results");
    Ok(path)
}
