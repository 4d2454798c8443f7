use super::resource::SharedResource;
use crate::dispatch::DispatchPolicy;

/// Checks resource invariants after every tick and keeps running counters.
#[derive(Debug, Default)]
pub struct Observer {
    step: u64,
    busy_ticks: u64,
    max_waiting: usize,
    policy: Option<DispatchPolicy>,
    // Previous tick ended idle while jobs were waiting
    stalled: bool,
}

impl Observer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, resource: &SharedResource) {
        self.step += 1;
        self.max_waiting = self.max_waiting.max(resource.pending_len());

        let policy = *self.policy.get_or_insert(resource.policy());
        debug_assert_eq!(
            policy,
            resource.policy(),
            "Dispatch policy changed after construction"
        );

        if let Some(job) = resource.in_service() {
            self.busy_ticks += 1;
            debug_assert!(
                resource.elapsed() <= job.required_service,
                "Job {} elapsed {} past its service time {}",
                job.id,
                resource.elapsed(),
                job.required_service
            );
        }

        // A freed resource may skip one tick, never two
        let stalled = !resource.is_busy() && resource.pending_len() > 0;
        debug_assert!(
            !(stalled && self.stalled),
            "Resource idle for two ticks with {} jobs waiting",
            resource.pending_len()
        );
        self.stalled = stalled;
    }

    pub fn steps(&self) -> u64 {
        self.step
    }

    pub fn busy_ticks(&self) -> u64 {
        self.busy_ticks
    }

    pub fn max_waiting(&self) -> usize {
        self.max_waiting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Job;

    #[test]
    fn counts_busy_ticks_and_depth() {
        let mut resource = SharedResource::new(DispatchPolicy::Fcfs);
        let mut observer = Observer::new();
        resource.submit(Job::new(1, 0, 0));
        resource.submit(Job::new(2, 0, 1));
        resource.submit(Job::new(3, 0, 1));

        // complete 1, admit 2, progress 2, complete 2, admit 3
        for _ in 0..5 {
            resource.tick();
            observer.observe(&resource);
        }

        assert_eq!(observer.steps(), 5);
        assert_eq!(observer.busy_ticks(), 3);
        assert_eq!(observer.max_waiting(), 2);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "idle for two ticks")]
    fn flags_resource_stalled_with_waiting_jobs() {
        let mut resource = SharedResource::new(DispatchPolicy::Fcfs);
        let mut observer = Observer::new();
        resource.submit(Job::new(1, 0, 0));
        resource.submit(Job::new(2, 0, 1));

        resource.tick();
        observer.observe(&resource);
        // Observing again without a tick looks like a second idle tick
        observer.observe(&resource);
    }
}
