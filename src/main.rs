use std::path::PathBuf;

use clap::Parser;
use resource_model::{DispatchPolicy, ResourceEvent, Sim, config::SimConfig};
use tracing_subscriber::EnvFilter;

/// Simulates jobs contending for one shared device
#[derive(Parser, Debug)]
#[command(name = "resource_model")]
#[command(version)]
struct Args {
    /// YAML file describing policy and workload
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the dispatch policy
    #[arg(short, long, value_enum)]
    policy: Option<DispatchPolicy>,

    /// Override the seed of a generated workload
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print every resource event
    #[arg(long)]
    trace: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => SimConfig::load_file(path)?,
        None => SimConfig::default(),
    };
    config.override_from_args(args.policy, args.seed);

    let jobs = config.workload.jobs()?;
    let mut sim = Sim::new(jobs, config.policy)?;

    let mut current_idle = 0;
    let mut max_idle = 0;

    while !sim.all_jobs_completed() {
        let now = sim.now();
        let events = sim.step();

        let mut got_idle = false;
        for event in events {
            if args.trace {
                println!("t={} {:?}", now, event);
            }
            if event == ResourceEvent::Idle {
                got_idle = true;
            }
        }

        if got_idle {
            current_idle += 1;
            max_idle = max_idle.max(current_idle);
        } else {
            current_idle = 0;
        }
    }

    let report = sim.report();
    if !config.name.is_empty() {
        println!("Run: {}", config.name);
    }
    println!("Policy: {:?}", report.policy);
    println!("Jobs completed: {}/{}", report.completed, report.jobs);
    println!("Makespan: {} ticks", report.makespan);
    println!("Average response time: {:.2} ticks", report.mean_response);
    println!("Average turnaround time: {:.2} ticks", report.mean_turnaround);
    println!("Longest wait: {} ticks", report.max_response);
    println!("Longest idle period: {} ticks", max_idle);
    println!("Max queue depth: {}", report.max_waiting);
    println!("Utilization: {:.1}%", report.utilization * 100.0);

    Ok(())
}
