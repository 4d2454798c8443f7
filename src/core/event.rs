use crate::core::JobId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceEvent {
    // `direct` is set when the job bypassed the pending set
    Admitted { job: JobId, direct: bool },
    Enqueued { job: JobId, waiting: usize },
    Completed { job: JobId },
    // Resource idle even after consulting the pending set
    Idle,
}
