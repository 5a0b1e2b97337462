use std::path::{Path, PathBuf};

use clap::Args;
use commitfill_core::{
    ActivityLogFile, GitCli, HelperFileWriter, MemoryActivityLog, MemoryArtifacts,
    MemoryVersionControl, PcgSource, ScheduleDriver,
};

use crate::report::ConsoleReporter;

#[derive(Args)]
pub struct RunArgs {
    /// Repository to backfill (overrides `repo_path`)
    #[arg(long)]
    repo: Option<PathBuf>,
    /// Seed for a reproducible schedule (overrides `seed`)
    #[arg(long)]
    seed: Option<u64>,
    /// Print what would be committed without writing anything
    #[arg(long)]
    dry_run: bool,
}

pub fn run(config_path: &Path, args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(config_path, args.repo, args.seed)?;
    let settings = config.settings()?;
    let mut driver = ScheduleDriver::new(settings, PcgSource::from_seed(config.seed));

    if args.dry_run {
        let mut reporter = ConsoleReporter::new(true);
        driver.run(
            &mut MemoryActivityLog::new(),
            &mut MemoryArtifacts::new(),
            &mut MemoryVersionControl::new(),
            &mut reporter,
        )?;
        println!("\nDry run: nothing was written.");
        return Ok(());
    }

    let mut log = ActivityLogFile::new(config.activity_path());
    let mut helpers = HelperFileWriter::new(config.artifact_root());
    let mut git = GitCli::new(&config.repo_path);
    let mut reporter = ConsoleReporter::new(false);
    let summary = driver.run(&mut log, &mut helpers, &mut git, &mut reporter)?;

    println!(
        "\nDone. {} commit(s) created. Now you can push with: git push origin main",
        summary.events_committed
    );
    Ok(())
}
