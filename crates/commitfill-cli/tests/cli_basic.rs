//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary against a config in a temp directory and
//! verify outputs.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command with `--config <path>` and return output.
fn run_cli(config: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_commitfill"))
        .args(args)
        .arg("--config")
        .arg(config)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn write_config(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("commitfill.toml");
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_config_init_get_set() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("commitfill.toml");

    let (code, stdout, _) = run_cli(&path, &["config", "init"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("wrote"));
    assert!(path.exists());

    let (code, _, stderr) = run_cli(&path, &["config", "init"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("already exists"));

    let (code, stdout, _) = run_cli(&path, &["config", "get", "max_commits_per_day"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "6");

    let (code, _, _) = run_cli(&path, &["config", "set", "max_commits_per_day", "2"]);
    assert_eq!(code, 0);
    let (_, stdout, _) = run_cli(&path, &["config", "get", "max_commits_per_day"]);
    assert_eq!(stdout.trim(), "2");

    let (code, _, stderr) = run_cli(&path, &["config", "get", "nope"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown key"));
}

#[test]
fn test_config_set_rejects_invalid_range() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "start_date = \"2024-01-01\"\nend_date = \"2024-01-31\"\n");

    let (code, _, stderr) = run_cli(&path, &["config", "set", "start_date", "2024-02-15"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Invalid input"));

    let (_, stdout, _) = run_cli(&path, &["config", "get", "start_date"]);
    assert_eq!(stdout.trim(), "2024-01-01");
}

#[test]
fn test_plan_json_is_reproducible() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "start_date = \"2024-01-01\"\nend_date = \"2024-01-21\"\n");

    let (code, first, _) = run_cli(&path, &["plan", "--json", "--seed", "5"]);
    assert_eq!(code, 0);
    let (_, second, _) = run_cli(&path, &["plan", "--json", "--seed", "5"]);
    assert_eq!(first, second);

    let plans: serde_json::Value = serde_json::from_str(&first).unwrap();
    let plans = plans.as_array().unwrap();
    assert_eq!(plans.len(), 3);
    assert_eq!(plans[0]["week_key"], "2024-01-01");
    assert!(plans[0]["events"].as_array().unwrap().len() >= 2);
}

#[test]
fn test_plan_prints_week_and_day_summaries() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "start_date = \"2024-01-01\"\nend_date = \"2024-01-07\"\nbase_min_commits_per_week = 3\nbase_max_commits_per_week = 3\n[monthly_weights]\n",
    );

    let (code, stdout, _) = run_cli(&path, &["plan", "--seed", "1"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Backfilling commits from 2024-01-01 to 2024-01-07..."));
    assert!(stdout.contains(
        "=== Week starting 2024-01-01 (month 1, weight 1.00): planning 3 commit(s) ==="
    ));
    assert!(stdout.contains("  - 2024-01-0"));
    assert!(stdout.contains("3 commit(s) planned across 1 week(s)."));
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let body = format!(
        "start_date = \"2024-03-04\"\nend_date = \"2024-03-10\"\nrepo_path = {:?}\n",
        dir.path().display().to_string()
    );
    let path = write_config(&dir, &body);

    let (code, stdout, _) = run_cli(&path, &["run", "--dry-run", "--seed", "3"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Dry run: nothing was written."));
    assert!(stdout.contains("(2024-03-0"));
    assert!(!dir.path().join("src").exists());
}

#[test]
fn test_invalid_dates_exit_with_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "start_date = \"2024-02-30\"\n");

    let (code, stdout, stderr) = run_cli(&path, &["plan"]);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("error: Invalid input"));
}
