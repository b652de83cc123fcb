use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn progress_bar(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("progress-bar").unwrap();
    cmd.arg("--config")
        .arg(config_dir.path().join("config.toml"));
    cmd
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("progress-bar").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("progress-bar").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_render_half_done() {
    let dir = TempDir::new().unwrap();
    progress_bar(&dir)
        .args(["render", "--total", "100", "--done", "50", "--width", "40"])
        .assert()
        .success()
        .stdout("[------>      ] 50.0% 50/100 ? remaining\n");
}

#[test]
fn test_render_with_elapsed_time() {
    let dir = TempDir::new().unwrap();
    progress_bar(&dir)
        .args(["render", "--total", "60", "--done", "3"])
        .args(["--elapsed-secs", "6", "--width", "60"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "] 5.0% 3/60 1 min, 54 secs remaining\n",
        ));
}

#[test]
fn test_render_truncates_message() {
    let dir = TempDir::new().unwrap();
    progress_bar(&dir)
        .args(["render", "--total", "10", "--done", "1", "--width", "50"])
        .args(["--message", "Synchronising the mirrored archive"])
        .assert()
        .success()
        .stdout("Synchronisi... 10.0% 1/10 ? remaining [->        ]\n");
}

#[test]
fn test_render_empty_run_is_complete() {
    let dir = TempDir::new().unwrap();
    progress_bar(&dir)
        .args(["render", "--total", "0", "--done", "0", "--width", "30"])
        .assert()
        .success()
        .stdout("[---->] 100.0% 0/0 ? remaining\n");
}

#[test]
fn test_render_uses_configured_min_bar_width() {
    let dir = TempDir::new().unwrap();
    progress_bar(&dir)
        .args(["config", "set", "progress.min_bar_width", "4"])
        .assert()
        .success();

    progress_bar(&dir)
        .args(["render", "--total", "10", "--done", "1", "--width", "20"])
        .args(["--message", "Copying"])
        .assert()
        .success()
        .stdout(" 10.0% 1/10 ? remaining [>   ]\n");
}

#[test]
fn test_run_reports_completion() {
    let dir = TempDir::new().unwrap();
    progress_bar(&dir)
        .args(["run", "--total", "5", "--interval-ms", "0", "--width", "60"])
        .assert()
        .success()
        .stderr(predicate::str::contains("100.0% 5/5"))
        .stdout(predicate::str::contains("Completed 5/5 units"))
        .stdout(predicate::str::contains("(5 updates)"));
}

#[test]
fn test_run_with_message() {
    let dir = TempDir::new().unwrap();
    progress_bar(&dir)
        .args(["run", "--total", "4", "--step", "2", "--interval-ms", "0"])
        .args(["--width", "70", "--message", "Copying"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Copying 50.0% 2/4"))
        .stdout(predicate::str::contains("(2 updates)"));
}

#[test]
fn test_run_without_progress() {
    let dir = TempDir::new().unwrap();
    progress_bar(&dir)
        .args(["run", "--total", "3", "--interval-ms", "0", "--no-progress"])
        .assert()
        .success()
        .stderr(predicate::str::contains("remaining").not())
        .stdout(predicate::str::contains("Completed 3/3 units"));
}

#[test]
fn test_run_rejects_zero_step() {
    let dir = TempDir::new().unwrap();
    progress_bar(&dir)
        .args(["run", "--total", "3", "--step", "0", "--interval-ms", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("step must be greater than 0"));
}

#[test]
fn test_config_set_get_list() {
    let dir = TempDir::new().unwrap();
    progress_bar(&dir)
        .args(["config", "set", "output.redraw", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("output.redraw"));

    progress_bar(&dir)
        .args(["config", "get", "output.redraw"])
        .assert()
        .success()
        .stdout("false\n");

    progress_bar(&dir)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("output.redraw = false"))
        .stdout(predicate::str::contains("progress.min_bar_width = 10"));
}

#[test]
fn test_config_path() {
    let dir = TempDir::new().unwrap();
    progress_bar(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();
    progress_bar(&dir)
        .args(["config", "set", "output.sparkles", "true"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration key"));
}

#[test]
fn test_config_set_rejects_inconsistent_widths() {
    let dir = TempDir::new().unwrap();
    progress_bar(&dir)
        .args(["config", "set", "progress.min_bar_width", "90"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "min_bar_width must be smaller than fallback_width",
        ));

    progress_bar(&dir)
        .args(["render", "--total", "10", "--done", "1", "--width", "40"])
        .assert()
        .success();
}

#[test]
fn test_inconsistent_config_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[progress]\nfallback_width = 20\nmin_bar_width = 30\n",
    )
    .unwrap();

    progress_bar(&dir)
        .args(["render", "--total", "10", "--done", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_render_rejects_zero_width() {
    let dir = TempDir::new().unwrap();
    progress_bar(&dir)
        .args(["render", "--total", "10", "--done", "1", "--width", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid progress configuration"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_completions() {
    let mut cmd = Command::cargo_bin("progress-bar").unwrap();
    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("progress-bar"));
}
