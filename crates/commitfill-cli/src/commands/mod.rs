pub mod config;
pub mod plan;
pub mod run;

use std::path::{Path, PathBuf};

use commitfill_core::Config;

/// Load the config file (defaults when absent) and apply command-line overrides.
pub fn load_config(
    path: &Path,
    repo: Option<PathBuf>,
    seed: Option<u64>,
) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = Config::load_or_default(path)?;
    if let Some(repo) = repo {
        config.repo_path = repo;
    }
    if seed.is_some() {
        config.seed = seed;
    }
    Ok(config)
}
