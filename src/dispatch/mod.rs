pub mod fifo;
pub mod priq;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    core::{Job, PriorityKey},
    error::{ResourceError, Result},
};
pub use fifo::FifoLine;
pub use priq::PriqLine;

/// Rule deciding which waiting job is admitted next. Fixed for the lifetime
/// of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DispatchPolicy {
    /// First come, first served
    #[default]
    Fcfs,
    /// Smallest priority key first
    Priority,
}

impl DispatchPolicy {
    pub fn pending_set(self) -> PendingSet {
        match self {
            Self::Fcfs => PendingSet::Fifo(FifoLine::new()),
            Self::Priority => PendingSet::Priq(PriqLine::new()),
        }
    }
}

/// Jobs waiting for the resource.
#[derive(Debug)]
pub enum PendingSet {
    Fifo(FifoLine),
    Priq(PriqLine),
}

impl PendingSet {
    pub fn new(policy: DispatchPolicy) -> Self {
        policy.pending_set()
    }

    pub fn policy(&self) -> DispatchPolicy {
        match self {
            Self::Fifo(_) => DispatchPolicy::Fcfs,
            Self::Priq(_) => DispatchPolicy::Priority,
        }
    }

    /// Adds a job to the line. `key` is ignored in FIFO mode.
    pub fn insert(&mut self, job: Job, key: PriorityKey) {
        match self {
            Self::Fifo(line) => line.push(job),
            Self::Priq(line) => line.push(job, key),
        }
    }

    pub fn remove_next(&mut self) -> Result<Job> {
        let job = match self {
            Self::Fifo(line) => line.pop(),
            Self::Priq(line) => line.pop(),
        };
        job.ok_or(ResourceError::Empty)
    }

    pub fn peek_next(&self) -> Result<&Job> {
        let job = match self {
            Self::Fifo(line) => line.front(),
            Self::Priq(line) => line.front(),
        };
        job.ok_or(ResourceError::Empty)
    }

    /// The job that would be admitted last if nothing else arrived.
    pub fn peek_last(&self) -> Result<&Job> {
        let job = match self {
            Self::Fifo(line) => line.back(),
            Self::Priq(line) => line.back(),
        };
        job.ok_or(ResourceError::Empty)
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Fifo(line) => line.len(),
            Self::Priq(line) => line.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
