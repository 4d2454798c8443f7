use average::{Estimate, Mean};

use super::job::JobInstance;
use crate::{
    core::{Observer, Ticks},
    dispatch::DispatchPolicy,
};

/// Summary of a finished (or stopped) run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub policy: DispatchPolicy,
    pub jobs: usize,
    pub completed: usize,
    pub makespan: Ticks,
    pub mean_response: f64,
    pub mean_turnaround: f64,
    pub max_response: Ticks,
    pub max_waiting: usize,
    // Fraction of ticks that ended with a job in service
    pub utilization: f64,
}

impl Report {
    pub fn new(policy: DispatchPolicy, jobs: &[JobInstance], observer: &Observer) -> Self {
        let mean_response: Mean = jobs
            .iter()
            .filter_map(JobInstance::response_time)
            .map(|t| t as f64)
            .collect();
        let mean_turnaround: Mean = jobs
            .iter()
            .filter_map(JobInstance::turnaround_time)
            .map(|t| t as f64)
            .collect();

        let utilization = match observer.steps() {
            0 => 0.0,
            steps => observer.busy_ticks() as f64 / steps as f64,
        };

        Self {
            policy,
            jobs: jobs.len(),
            completed: jobs.iter().filter(|j| j.completion_time.is_some()).count(),
            makespan: observer.steps(),
            mean_response: mean_or_zero(&mean_response),
            mean_turnaround: mean_or_zero(&mean_turnaround),
            max_response: jobs
                .iter()
                .filter_map(JobInstance::response_time)
                .max()
                .unwrap_or(0),
            max_waiting: observer.max_waiting(),
            utilization,
        }
    }
}

// An empty Mean estimates NaN
fn mean_or_zero(mean: &Mean) -> f64 {
    match mean.len() {
        0 => 0.0,
        _ => mean.estimate(),
    }
}
