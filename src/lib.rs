pub mod config;
pub mod core;
pub mod dispatch;
pub mod error;
pub mod sim;

pub use crate::core::{Job, ResourceEvent, SharedResource};
pub use dispatch::{DispatchPolicy, PendingSet};
pub use error::{ResourceError, Result};
pub use sim::{Report, Sim};
