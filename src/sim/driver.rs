use rustc_hash::FxHashMap;
use tracing::{debug, info};

use super::{job::JobInstance, report::Report};
use crate::{
    core::{Job, JobId, Observer, ResourceEvent, SharedResource, Ticks},
    dispatch::DispatchPolicy,
    error::{ResourceError, Result},
};

/// Feeds a fixed set of jobs into one shared resource, one tick at a time.
pub struct Sim {
    pub resource: SharedResource,
    pub jobs: Vec<JobInstance>,
    job_cursor: usize,
    // JobId --> jobs[index]; used to stamp start/completion times
    jobs_index: FxHashMap<JobId, usize>,
    now: Ticks,
    observer: Observer,
}

impl Sim {
    pub fn new(mut jobs: Vec<Job>, policy: DispatchPolicy) -> Result<Self> {
        jobs.sort_by(|a, b| {
            a.arrival_time
                .cmp(&b.arrival_time)
                .then_with(|| a.id.cmp(&b.id))
        });

        let mut jobs_index = FxHashMap::default();
        for (index, job) in jobs.iter().enumerate() {
            if jobs_index.insert(job.id, index).is_some() {
                return Err(ResourceError::InvalidArgument(format!(
                    "duplicate job id {}",
                    job.id
                )));
            }
        }

        info!(jobs = jobs.len(), ?policy, "Simulation prepared");

        Ok(Self {
            resource: SharedResource::new(policy),
            jobs: jobs.into_iter().map(JobInstance::new).collect(),
            job_cursor: 0,
            jobs_index,
            now: 0,
            observer: Observer::new(),
        })
    }

    /// Runs one time unit: this tick's arrivals are submitted first, then the
    /// resource ticks once.
    pub fn step(&mut self) -> Vec<ResourceEvent> {
        self.handle_arrivals();
        let completed = self.resource.tick();
        self.observer.observe(&self.resource);

        let events = self.resource.drain_events();
        for event in &events {
            match *event {
                ResourceEvent::Admitted { job, .. } => {
                    self.stamp(job, |j, now| j.start_time = Some(now))
                }
                ResourceEvent::Completed { job } => {
                    self.stamp(job, |j, now| j.completion_time = Some(now))
                }
                ResourceEvent::Enqueued { .. } | ResourceEvent::Idle => {}
            }
        }
        debug_assert_eq!(
            completed.map(|job| job.id),
            events.iter().find_map(|event| match event {
                ResourceEvent::Completed { job } => Some(*job),
                _ => None,
            }),
            "tick() result and Completed event disagree"
        );

        self.now += 1;
        events
    }

    fn stamp(&mut self, job: JobId, update: impl FnOnce(&mut JobInstance, Ticks)) {
        match self.jobs_index.get(&job) {
            Some(&index) => update(&mut self.jobs[index], self.now),
            None => debug_assert!(false, "Event for unknown job {job}"),
        }
    }

    fn handle_arrivals(&mut self) {
        let now = self.now;
        // Contiguous, since jobs are sorted by arrival
        while let Some(instance) = self.jobs.get(self.job_cursor) {
            if instance.job.arrival_time != now {
                break;
            }
            debug!(job_id = instance.job.id, now, "Job arrived");
            self.resource.submit(instance.job.clone());
            self.job_cursor += 1;
        }
    }

    /// Steps until every job has completed.
    pub fn run(&mut self) -> Report {
        while !self.all_jobs_completed() {
            self.step();
        }
        self.report()
    }

    pub fn report(&self) -> Report {
        Report::new(self.resource.policy(), &self.jobs, &self.observer)
    }

    pub fn all_jobs_completed(&self) -> bool {
        self.jobs.iter().all(|job| job.completion_time.is_some())
    }

    pub fn jobs_map<'a, F>(&'a self, f: F) -> impl Iterator<Item = f64> + 'a
    where
        F: Fn(&JobInstance) -> Ticks + 'a,
    {
        self.jobs.iter().map(move |job| f(job) as f64)
    }

    pub fn now(&self) -> Ticks {
        self.now
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }
}
