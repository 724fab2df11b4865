//! Bounded task queue for independent jobs.
//!
//! Jobs share nothing and finish in any order. Each job's outcome is kept in
//! its own [`JobReport`]; a failing job never stops the others.

use std::future::Future;

use futures::StreamExt;
use futures::stream;

use crate::config::api;

/// Outcome of one job.
#[derive(Debug)]
pub struct JobReport<J, T, E> {
    /// The job descriptor.
    pub job: J,

    /// What the job returned.
    pub outcome: Result<T, E>,
}

impl<J, T, E> JobReport<J, T, E> {
    /// Check if the job succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Runs jobs with at most `concurrency` in flight.
#[derive(Debug, Clone, Copy)]
pub struct TaskQueue {
    concurrency: usize,
}

impl TaskQueue {
    /// Create a queue. A limit of zero is treated as one.
    #[must_use]
    pub fn new(concurrency: usize) -> Self {
        Self { concurrency: concurrency.max(1) }
    }

    /// Concurrency limit.
    #[must_use]
    pub const fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Run `work` on every job and collect one report per job, in completion order.
    pub async fn run<J, T, E, F, Fut>(&self, jobs: Vec<J>, work: F) -> Vec<JobReport<J, T, E>>
    where
        J: Clone,
        F: Fn(J) -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        stream::iter(jobs)
            .map(|job| {
                let running = work(job.clone());
                async move { JobReport { job, outcome: running.await } }
            })
            .buffer_unordered(self.concurrency)
            .collect()
            .await
    }
}

impl Default for TaskQueue {
    fn default() -> Self {
        Self::new(api::WORKERS)
    }
}
