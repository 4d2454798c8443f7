pub mod driver;
pub mod job;
pub mod report;
pub mod workload;

pub use driver::Sim;
pub use job::JobInstance;
pub use report::Report;
pub use workload::{BernoulliParams, bernoulli_jobs};
