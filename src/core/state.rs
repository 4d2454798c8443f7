use serde::Deserialize;

use crate::error::{ResourceError, Result};

pub type JobId = u64;
pub type Ticks = u64;
pub type PriorityKey = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceState {
    Idle,
    Busy,
}

/// A unit of work competing for the shared resource.
///
/// Once submitted, the resource keeps its own copy; the scheduler's copy is
/// never observed again by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: JobId,
    pub arrival_time: Ticks,
    pub required_service: Ticks,
    // Only consulted under priority dispatch
    pub priority_key: PriorityKey,
}

impl Job {
    /// Builds a job keyed by its own service time (shortest job first).
    pub fn new(id: JobId, arrival_time: Ticks, required_service: Ticks) -> Self {
        Self {
            id,
            arrival_time,
            required_service,
            priority_key: required_service,
        }
    }

    pub fn with_priority_key(mut self, priority_key: PriorityKey) -> Self {
        self.priority_key = priority_key;
        self
    }
}

/// Signed job description as it appears in workload files.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobRecord {
    pub id: JobId,
    #[serde(default)]
    pub arrival_time: i64,
    pub required_service: i64,
    #[serde(default)]
    pub priority_key: Option<i64>,
}

impl TryFrom<JobRecord> for Job {
    type Error = ResourceError;

    fn try_from(record: JobRecord) -> Result<Self> {
        let field = |name: &str, value: i64| -> Result<u64> {
            u64::try_from(value).map_err(|_| {
                ResourceError::InvalidArgument(format!(
                    "job {}: {name} must be non-negative, got {value}",
                    record.id
                ))
            })
        };

        let arrival_time = field("arrival_time", record.arrival_time)?;
        let required_service = field("required_service", record.required_service)?;
        let priority_key = match record.priority_key {
            Some(key) => field("priority_key", key)?,
            None => required_service,
        };

        Ok(Job {
            id: record.id,
            arrival_time,
            required_service,
            priority_key,
        })
    }
}
