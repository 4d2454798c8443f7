pub mod event;
pub mod observer;
pub mod resource;
pub mod state;

pub use event::ResourceEvent;
pub use observer::Observer;
pub use resource::SharedResource;
pub use state::{Job, JobId, JobRecord, PriorityKey, ResourceState, Ticks};
