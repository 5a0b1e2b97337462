//! TOML-based backfill configuration.
//!
//! Stores everything a run needs:
//! - Date range bounds
//! - Base weekly commit bounds and the per-day cap
//! - Working hours for commit timestamps
//! - Month activity weights
//! - Repository, activity log and artifact locations
//!
//! Configuration lives at `commitfill.toml` in the working directory unless
//! a path is given explicitly.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::calendar::DateRange;
use crate::demand::MonthWeights;
use crate::error::{ConfigError, CoreError, Result};

pub const DEFAULT_CONFIG_FILE: &str = "commitfill.toml";

/// Backfill configuration.
///
/// Serialized to/from TOML. Every field has a default so partial files load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Inclusive, `YYYY-MM-DD`
    #[serde(default = "default_start_date")]
    pub start_date: String,
    /// Inclusive, `YYYY-MM-DD`
    #[serde(default = "default_end_date")]
    pub end_date: String,
    #[serde(default = "default_base_min")]
    pub base_min_commits_per_week: u32,
    #[serde(default = "default_base_max")]
    pub base_max_commits_per_week: u32,
    #[serde(default = "default_max_per_day")]
    pub max_commits_per_day: u32,
    /// First hour a commit may land in
    #[serde(default = "default_work_start_hour")]
    pub work_start_hour: u32,
    /// Exclusive upper hour
    #[serde(default = "default_work_end_hour")]
    pub work_end_hour: u32,
    #[serde(default = "default_repo_path")]
    pub repo_path: PathBuf,
    /// Relative to `repo_path`
    #[serde(default = "default_activity_file")]
    pub activity_file: PathBuf,
    /// Relative to `repo_path`
    #[serde(default = "default_artifact_dir")]
    pub artifact_dir: PathBuf,
    /// Fixed seed for reproducible schedules (None = random)
    #[serde(default)]
    pub seed: Option<u64>,
    /// 1 = normal, >1 = more active, <1 = quieter
    #[serde(default)]
    pub monthly_weights: MonthWeights,
}

// Default functions
fn default_start_date() -> String {
    "2024-01-01".into()
}
fn default_end_date() -> String {
    "2025-11-14".into()
}
fn default_base_min() -> u32 {
    3
}
fn default_base_max() -> u32 {
    10
}
fn default_max_per_day() -> u32 {
    6
}
fn default_work_start_hour() -> u32 {
    10
}
fn default_work_end_hour() -> u32 {
    18
}
fn default_repo_path() -> PathBuf {
    PathBuf::from(".")
}
fn default_activity_file() -> PathBuf {
    PathBuf::from("src/activity-log.ts")
}
fn default_artifact_dir() -> PathBuf {
    PathBuf::from("src/daily")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_date: default_start_date(),
            end_date: default_end_date(),
            base_min_commits_per_week: default_base_min(),
            base_max_commits_per_week: default_base_max(),
            max_commits_per_day: default_max_per_day(),
            work_start_hour: default_work_start_hour(),
            work_end_hour: default_work_end_hour(),
            repo_path: default_repo_path(),
            activity_file: default_activity_file(),
            artifact_dir: default_artifact_dir(),
            seed: None,
            monthly_weights: MonthWeights::default(),
        }
    }
}

/// Validated scheduling parameters derived from a [`Config`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleSettings {
    pub range: DateRange,
    pub base_min_commits_per_week: u32,
    pub base_max_commits_per_week: u32,
    pub max_commits_per_day: u32,
    pub work_start_hour: u32,
    pub work_end_hour: u32,
    pub monthly_weights: MonthWeights,
}

impl ScheduleSettings {
    /// Settings over `range` with every other value at its default.
    pub fn for_range(range: DateRange) -> Self {
        let defaults = Config::default();
        Self {
            range,
            base_min_commits_per_week: defaults.base_min_commits_per_week,
            base_max_commits_per_week: defaults.base_max_commits_per_week,
            max_commits_per_day: defaults.max_commits_per_day,
            work_start_hour: defaults.work_start_hour,
            work_end_hour: defaults.work_end_hour,
            monthly_weights: defaults.monthly_weights,
        }
    }
}

impl Config {
    /// Check every value and produce the scheduling parameters.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for unparseable or reversed dates, an empty
    /// working-hours window, or a bad month weight.
    pub fn settings(&self) -> Result<ScheduleSettings> {
        let range = DateRange::parse(&self.start_date, &self.end_date)?;

        if self.work_start_hour >= self.work_end_hour || self.work_end_hour > 24 {
            return Err(CoreError::InvalidInput(format!(
                "working hours must satisfy start < end <= 24 (got {}..{})",
                self.work_start_hour, self.work_end_hour
            )));
        }

        for (key, weight) in self.monthly_weights.iter() {
            let month_ok = key
                .parse::<u32>()
                .is_ok_and(|m| (1..=12).contains(&m) && key == m.to_string());
            if !month_ok {
                return Err(CoreError::InvalidInput(format!(
                    "monthly weight key '{key}' is not a month number 1-12"
                )));
            }
            if !weight.is_finite() || weight <= 0.0 {
                return Err(CoreError::InvalidInput(format!(
                    "monthly weight for month {key} must be positive (got {weight})"
                )));
            }
        }

        Ok(ScheduleSettings {
            range,
            base_min_commits_per_week: self.base_min_commits_per_week,
            base_max_commits_per_week: self.base_max_commits_per_week,
            max_commits_per_day: self.max_commits_per_day,
            work_start_hour: self.work_start_hour,
            work_end_hour: self.work_end_hour,
            monthly_weights: self.monthly_weights.clone(),
        })
    }

    /// Absolute-or-relative path of the activity log.
    pub fn activity_path(&self) -> PathBuf {
        self.repo_path.join(&self.activity_file)
    }

    /// Absolute-or-relative root of the generated helper files.
    pub fn artifact_root(&self) -> PathBuf {
        self.repo_path.join(&self.artifact_dir)
    }

    /// Load from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    }

    /// Load from `path`, or the defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Persist to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(invalid("config key is empty".into()));
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                let obj = current
                    .as_object_mut()
                    .ok_or_else(|| invalid("unknown config key".into()))?;
                let existing = obj
                    .get(part)
                    .ok_or_else(|| invalid("unknown config key".into()))?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<u64>() {
                            serde_json::Value::Number(n.into())
                        } else if let Ok(n) = value.parse::<f64>() {
                            serde_json::Number::from_f64(n)
                                .map(serde_json::Value::Number)
                                .ok_or_else(|| {
                                    invalid(format!("cannot parse '{value}' as number"))
                                })?
                        } else {
                            return Err(invalid(format!("cannot parse '{value}' as number")));
                        }
                    }
                    // Unset optionals (seed) take whatever JSON the value parses as
                    serde_json::Value::Null => serde_json::from_str(value)
                        .unwrap_or_else(|_| serde_json::Value::String(value.into())),
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    serde_json::Value::String(_) => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current
                .get_mut(part)
                .ok_or_else(|| invalid("unknown config key".into()))?;
        }

        Err(invalid("unknown config key".into()))
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key, typed by the current value.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be parsed
    /// into the key's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json =
            serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
        assert_eq!(parsed.monthly_weights.weight_for(7), 1.4);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let parsed: Config = toml::from_str(
            r#"
            start_date = "2025-03-01"
            max_commits_per_day = 2

            [monthly_weights]
            "3" = 2.0
            "#,
        )
        .unwrap();
        assert_eq!(parsed.start_date, "2025-03-01");
        assert_eq!(parsed.end_date, "2025-11-14");
        assert_eq!(parsed.max_commits_per_day, 2);
        assert_eq!(parsed.base_max_commits_per_week, 10);
        assert_eq!(parsed.monthly_weights.weight_for(3), 2.0);
        // Only the listed month is present; others fall back to 1.0
        assert_eq!(parsed.monthly_weights.weight_for(6), 1.0);
    }

    #[test]
    fn settings_reject_reversed_range() {
        let cfg = Config {
            start_date: "2025-01-02".into(),
            end_date: "2025-01-01".into(),
            ..Config::default()
        };
        assert!(matches!(cfg.settings(), Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn settings_reject_unparseable_date() {
        let cfg = Config {
            end_date: "someday".into(),
            ..Config::default()
        };
        assert!(matches!(cfg.settings(), Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn settings_reject_empty_hours() {
        let cfg = Config {
            work_start_hour: 18,
            work_end_hour: 18,
            ..Config::default()
        };
        assert!(matches!(cfg.settings(), Err(CoreError::InvalidInput(_))));

        let cfg = Config {
            work_end_hour: 25,
            ..Config::default()
        };
        assert!(cfg.settings().is_err());
    }

    #[test]
    fn settings_reject_bad_weights() {
        let mut cfg = Config::default();
        cfg.monthly_weights.set(13, 1.0);
        assert!(cfg.settings().is_err());

        let mut cfg = Config::default();
        cfg.monthly_weights.set(4, 0.0);
        assert!(cfg.settings().is_err());
    }

    #[test]
    fn settings_reject_non_canonical_month_keys() {
        for key in ["06", "+6", " 6"] {
            let cfg: Config =
                toml::from_str(&format!("[monthly_weights]\n\"{key}\" = 3.0\n")).unwrap();
            assert!(
                matches!(cfg.settings(), Err(CoreError::InvalidInput(_))),
                "key {key:?} accepted"
            );
        }

        let cfg: Config = toml::from_str("[monthly_weights]\n\"6\" = 3.0\n").unwrap();
        assert_eq!(cfg.settings().unwrap().monthly_weights.weight_for(6), 3.0);
    }

    #[test]
    fn settings_carry_values() {
        let settings = Config::default().settings().unwrap();
        assert_eq!(settings.range.start().to_string(), "2024-01-01");
        assert_eq!(settings.range.end().to_string(), "2025-11-14");
        assert_eq!(settings.max_commits_per_day, 6);
    }

    #[test]
    fn get_and_set_by_path() {
        let mut cfg = Config::default();
        assert_eq!(cfg.get("max_commits_per_day").as_deref(), Some("6"));
        assert_eq!(cfg.get("monthly_weights.6").as_deref(), Some("1.4"));
        assert_eq!(cfg.get("no_such_key"), None);

        cfg.set("max_commits_per_day", "3").unwrap();
        assert_eq!(cfg.max_commits_per_day, 3);

        cfg.set("monthly_weights.6", "2.5").unwrap();
        assert_eq!(cfg.monthly_weights.weight_for(6), 2.5);

        cfg.set("start_date", "2023-05-01").unwrap();
        assert_eq!(cfg.start_date, "2023-05-01");

        cfg.set("seed", "42").unwrap();
        assert_eq!(cfg.seed, Some(42));
    }

    #[test]
    fn set_rejects_unknown_or_mistyped() {
        let mut cfg = Config::default();
        assert!(cfg.set("nope", "1").is_err());
        assert!(cfg.set("max_commits_per_day", "many").is_err());
        assert!(cfg.set("", "1").is_err());
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);

        let mut cfg = Config::default();
        cfg.seed = Some(9);
        cfg.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), cfg);
    }

    #[test]
    fn load_or_default_handles_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(Config::load(&path).is_err());
        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "max_commits_per_day = \"lots\"").unwrap();
        assert!(matches!(
            Config::load_or_default(&path),
            Err(ConfigError::ParseFailed(_))
        ));
    }
}
