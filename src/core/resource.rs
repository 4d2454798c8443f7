use tracing::{debug, info};

use super::{
    event::ResourceEvent,
    state::{Job, ResourceState, Ticks},
};
use crate::{
    dispatch::{DispatchPolicy, PendingSet},
    error::ResourceError,
};

/// A serially reusable device shared by many jobs.
///
/// At most one job is in service. Jobs that arrive while the device is busy
/// wait in a [`PendingSet`] ordered by the policy chosen at construction.
#[derive(Debug)]
pub struct SharedResource {
    in_service: Option<Job>,
    // Meaningless while idle
    elapsed: Ticks,
    pending: PendingSet,
    events: Vec<ResourceEvent>,
}

impl SharedResource {
    pub fn new(policy: DispatchPolicy) -> Self {
        info!(?policy, "Shared resource created");
        Self {
            in_service: None,
            elapsed: 0,
            pending: policy.pending_set(),
            events: Vec::new(),
        }
    }

    /// Hands a job to the resource.
    ///
    /// An idle resource admits the job directly, without looking at the
    /// pending set. A busy one queues it according to the dispatch policy.
    pub fn submit(&mut self, job: Job) {
        if self.in_service.is_none() {
            self.admit(job, true);
            return;
        }

        let job_id = job.id;
        let key = job.priority_key;
        self.pending.insert(job, key);

        let waiting = self.pending.len();
        debug!(job_id, waiting, "Job queued for resource");
        self.events.push(ResourceEvent::Enqueued {
            job: job_id,
            waiting,
        });
    }

    /// Advances the resource by one time unit and returns the job that
    /// completed on this tick, if any.
    ///
    /// Completion is detected on the tick after `elapsed` reaches the
    /// required service time, and a freed resource only pulls the next
    /// waiting job on the following tick.
    pub fn tick(&mut self) -> Option<Job> {
        let Some(required) = self.in_service.as_ref().map(|job| job.required_service) else {
            self.admit_next();
            return None;
        };

        if self.elapsed == required {
            let job = self.in_service.take()?;
            debug!(job_id = job.id, service = required, "Job completed on resource");
            self.events.push(ResourceEvent::Completed { job: job.id });
            return Some(job);
        }

        self.elapsed += 1;
        None
    }

    fn admit_next(&mut self) {
        let job = match self.pending.remove_next() {
            Ok(job) => job,
            Err(err) => {
                debug_assert!(matches!(err, ResourceError::Empty), "Pending set failed: {err}");
                self.events.push(ResourceEvent::Idle);
                return;
            }
        };
        self.admit(job, false);
    }

    fn admit(&mut self, job: Job, direct: bool) {
        debug_assert!(self.in_service.is_none(), "Resource already serving a job");

        debug!(job_id = job.id, direct, "Job admitted to resource");
        self.events.push(ResourceEvent::Admitted { job: job.id, direct });
        self.in_service = Some(job);
        self.elapsed = 0;
    }

    pub fn drain_events(&mut self) -> Vec<ResourceEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn state(&self) -> ResourceState {
        if self.in_service.is_some() {
            ResourceState::Busy
        } else {
            ResourceState::Idle
        }
    }

    pub fn is_busy(&self) -> bool {
        self.state() == ResourceState::Busy
    }

    pub fn in_service(&self) -> Option<&Job> {
        self.in_service.as_ref()
    }

    pub fn elapsed(&self) -> Ticks {
        self.elapsed
    }

    pub fn pending(&self) -> &PendingSet {
        &self.pending
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn policy(&self) -> DispatchPolicy {
        self.pending.policy()
    }
}

impl Drop for SharedResource {
    fn drop(&mut self) {
        info!(
            waiting = self.pending.len(),
            busy = self.in_service.is_some(),
            "Shared resource destroyed"
        );
    }
}
