//! Unit of work for the worker pool.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One (conference, year) pair to scrape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConferenceYearJob {
    /// Conference name as given on the command line.
    pub conference: String,

    /// Conference year.
    pub year: i32,
}

impl ConferenceYearJob {
    /// Create a job.
    #[must_use]
    pub fn new(conference: impl Into<String>, year: i32) -> Self {
        Self { conference: conference.into(), year }
    }
}

impl fmt::Display for ConferenceYearJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.conference, self.year)
    }
}

/// Every (year, conference) combination, year-major.
#[must_use]
pub fn jobs_for(years: &[i32], conferences: &[String]) -> Vec<ConferenceYearJob> {
    years
        .iter()
        .flat_map(|&year| {
            conferences.iter().map(move |conference| ConferenceYearJob::new(conference, year))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jobs_for_is_cartesian_product() {
        let conferences = vec!["NeurIPS".to_string(), "ICML".to_string()];
        let jobs = jobs_for(&[2019, 2020], &conferences);

        assert_eq!(
            jobs,
            vec![
                ConferenceYearJob::new("NeurIPS", 2019),
                ConferenceYearJob::new("ICML", 2019),
                ConferenceYearJob::new("NeurIPS", 2020),
                ConferenceYearJob::new("ICML", 2020),
            ]
        );
    }

    #[test]
    fn test_job_display() {
        assert_eq!(ConferenceYearJob::new("ICML", 2021).to_string(), "ICML-2021");
    }
}
