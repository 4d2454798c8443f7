use rand::prelude::*;
use serde::Deserialize;

use crate::{
    core::{Job, Ticks},
    error::{ResourceError, Result},
};

/// Parameters of a seeded random workload. Each tick a job arrives with
/// probability `p_arrival`; it is short with probability `p_short`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BernoulliParams {
    pub ticks: Ticks,
    pub p_arrival: f64,
    pub p_short: f64,
    pub short_ticks: Ticks,
    pub long_ticks: Ticks,
    pub seed: u64,
}

impl Default for BernoulliParams {
    fn default() -> Self {
        Self {
            ticks: 500,
            p_arrival: 0.3,
            p_short: 0.3,
            short_ticks: 2,
            long_ticks: 6,
            seed: 0,
        }
    }
}

fn check_probability(name: &str, p: f64) -> Result<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(ResourceError::InvalidArgument(format!(
            "{name} must lie in [0, 1], got {p}"
        )))
    }
}

/// Generates jobs keyed by their service time, so priority dispatch runs
/// shortest job first.
pub fn bernoulli_jobs(params: &BernoulliParams) -> Result<Vec<Job>> {
    check_probability("p_arrival", params.p_arrival)?;
    check_probability("p_short", params.p_short)?;

    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut jobs = Vec::new();

    for t in 0..params.ticks {
        if rng.random::<f64>() < params.p_arrival {
            let run_time = if rng.random::<f64>() < params.p_short {
                params.short_ticks
            } else {
                params.long_ticks
            };

            jobs.push(Job::new(jobs.len() as u64, t, run_time));
        }
    }

    Ok(jobs)
}
