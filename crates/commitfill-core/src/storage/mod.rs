pub mod activity_log;
pub mod artifacts;
mod config;

pub use activity_log::ActivityLogFile;
pub use artifacts::HelperFileWriter;
pub use config::{Config, ScheduleSettings, DEFAULT_CONFIG_FILE};
