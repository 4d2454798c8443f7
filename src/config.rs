use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    core::{Job, JobRecord},
    dispatch::DispatchPolicy,
    error::{ResourceError, Result},
    sim::{BernoulliParams, bernoulli_jobs},
};

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Workload {
    Bernoulli(BernoulliParams),
    Jobs { jobs: Vec<JobRecord> },
}

impl Default for Workload {
    fn default() -> Self {
        Self::Bernoulli(BernoulliParams::default())
    }
}

impl Workload {
    pub fn jobs(&self) -> Result<Vec<Job>> {
        match self {
            Self::Bernoulli(params) => bernoulli_jobs(params),
            Self::Jobs { jobs } => jobs.iter().cloned().map(Job::try_from).collect(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SimConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub policy: DispatchPolicy,
    #[serde(default)]
    pub workload: Workload,
}

impl SimConfig {
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ResourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Applies command-line overrides. A seed only affects generated workloads.
    pub fn override_from_args(&mut self, policy: Option<DispatchPolicy>, seed: Option<u64>) {
        if let Some(policy) = policy {
            self.policy = policy;
        }
        if let (Some(seed), Workload::Bernoulli(params)) = (seed, &mut self.workload) {
            params.seed = seed;
        }
    }
}
