use std::collections::VecDeque;

use crate::core::Job;

/// Waiting line in arrival order.
#[derive(Debug, Default)]
pub struct FifoLine {
    jobs: VecDeque<Job>,
}

impl FifoLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, job: Job) {
        self.jobs.push_back(job);
    }

    pub fn pop(&mut self) -> Option<Job> {
        self.jobs.pop_front()
    }

    pub fn front(&self) -> Option<&Job> {
        self.jobs.front()
    }

    pub fn back(&self) -> Option<&Job> {
        self.jobs.back()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }
}
