use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn shapesketch_cmd(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("shapesketch").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home);
    cmd
}

#[test]
fn shapesketch_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    shapesketch_cmd(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Two-click shape drawing surface"));
}

#[test]
fn script_argument_is_required() {
    let temp = TempDir::new().unwrap();
    shapesketch_cmd(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}

#[test]
fn replay_writes_output_png() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("scene.sketch");
    std::fs::write(
        &script,
        "tool rect\n\
         down 10 10\n\
         move 40 30\n\
         down 40 30\n\
         tool circle\n\
         fill outlined\n\
         stroke-width 3\n\
         down 80 40\n\
         down 80 60\n",
    )
    .unwrap();
    let output = temp.path().join("out").join("final.png");

    shapesketch_cmd(temp.path())
        .args(["--width", "160", "--height", "100", "--no-status-bar"])
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 shapes committed"))
        .stdout(predicate::str::contains("Final surface written to"));

    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn rejected_control_values_do_not_abort_replay() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("scene.sketch");
    std::fs::write(&script, "stroke-width 4\nfill outlined\nstroke-width 0\n").unwrap();

    shapesketch_cmd(temp.path())
        .args(["--width", "32", "--height", "32"])
        .arg("--script")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 rejected"));
}

#[test]
fn malformed_script_reports_line() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("bad.sketch");
    std::fs::write(&script, "tool rect\njump 1 2\n").unwrap();

    shapesketch_cmd(temp.path())
        .arg("--script")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2: unknown command 'jump'"));
}

#[test]
fn explicit_config_file_must_exist() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("empty.sketch");
    std::fs::write(&script, "").unwrap();

    shapesketch_cmd(temp.path())
        .arg("--script")
        .arg(&script)
        .arg("--config")
        .arg(temp.path().join("missing.toml"))
        .assert()
        .failure();
}

#[test]
fn config_file_sets_initial_tool_controls() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    std::fs::write(
        &config,
        "[canvas]\nwidth = 64\nheight = 48\n\n[drawing]\ndefault_fill = \"outlined\"\n",
    )
    .unwrap();
    let script = temp.path().join("width.sketch");
    // Outlined by default, so the width control is available immediately.
    std::fs::write(&script, "stroke-width 6\n").unwrap();

    shapesketch_cmd(temp.path())
        .arg("--script")
        .arg(&script)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 rejected"));
}
