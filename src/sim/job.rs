use crate::core::{Job, Ticks};

/// A job plus the times the simulation observed for it.
#[derive(Debug, Clone)]
pub struct JobInstance {
    pub job: Job,
    pub start_time: Option<Ticks>,
    pub completion_time: Option<Ticks>,
}

impl JobInstance {
    pub fn new(job: Job) -> Self {
        Self {
            job,
            start_time: None,
            completion_time: None,
        }
    }

    /// Ticks spent waiting before service began.
    pub fn response_time(&self) -> Option<Ticks> {
        Some(self.start_time? - self.job.arrival_time)
    }

    /// Ticks from arrival to completion.
    pub fn turnaround_time(&self) -> Option<Ticks> {
        Some(self.completion_time? - self.job.arrival_time)
    }
}
