use std::path::Path;

use clap::Args;
use commitfill_core::{PcgSource, RunReporter, ScheduleDriver};

use crate::report::ConsoleReporter;

#[derive(Args)]
pub struct PlanArgs {
    /// Seed for a reproducible schedule (overrides `seed`)
    #[arg(long)]
    seed: Option<u64>,
    /// Print the plan as JSON
    #[arg(long)]
    json: bool,
    /// List every planned commit message
    #[arg(long)]
    commits: bool,
}

pub fn run(config_path: &Path, args: PlanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(config_path, None, args.seed)?;
    let settings = config.settings()?;
    let mut driver = ScheduleDriver::new(settings, PcgSource::from_seed(config.seed));
    let plans = driver.plan();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plans)?);
        return Ok(());
    }

    let mut reporter = ConsoleReporter::new(args.commits);
    reporter.on_run_start(driver.settings());
    for plan in &plans {
        if plan.is_skipped() {
            reporter.on_week_skipped(plan);
            continue;
        }
        reporter.on_week_planned(plan);
        for day in plan.active_days() {
            reporter.on_day_planned(day);
        }
        for event in &plan.events {
            reporter.on_event_committed(event);
        }
    }

    let total: usize = plans.iter().map(|plan| plan.event_count()).sum();
    println!("\n{total} commit(s) planned across {} week(s).", plans.len());
    Ok(())
}
