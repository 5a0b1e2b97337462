use std::path::Path;

use clap::Subcommand;
use commitfill_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Get a config value
    Get {
        /// Config key (e.g. "max_commits_per_day", "monthly_weights.6")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// List all config values
    List,
}

pub fn run(path: &Path, action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                let message = format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
                return Err(message.into());
            }
            Config::default().save(path)?;
            println!("wrote {}", path.display());
        }
        ConfigAction::Get { key } => {
            let config = Config::load_or_default(path)?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => {
                    eprintln!("unknown key: {key}");
                    std::process::exit(1);
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_or_default(path)?;
            config.set(&key, &value)?;
            config.settings()?;
            config.save(path)?;
            println!("ok");
        }
        ConfigAction::List => {
            let config = Config::load_or_default(path)?;
            println!("{}", toml::to_string_pretty(&config)?);
        }
    }
    Ok(())
}
