//! End-to-end tests for the `glance` binary.

use assert_cmd::Command;
use std::io::{Read, Write};
use std::process::Stdio;
use std::time::{Duration, Instant};

fn glance() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_glance"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn invalid_info_prints_guidance_on_stdout() {
    let output = glance().arg("--info=bogus").output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Invalid option. Please use 'cpu', 'memory', or 'disk'.\n"
    );
    assert!(output.stderr.is_empty(), "{}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn global_options_before_subcommand() {
    let output = glance()
        .args(["--color", "never", "--height", "3", "memory"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn info_with_subcommand_is_rejected() {
    let output = glance().args(["--info", "memory", "diskspace"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn malformed_flags_fail_to_parse() {
    let output = glance().arg("--no-such-flag").output().unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let output = glance().args(["--height", "0"]).output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn help_lists_subcommands() {
    let output = glance().arg("--help").output().unwrap();
    assert!(output.status.success());

    let help = String::from_utf8_lossy(&output.stdout);
    for name in ["cpu", "memory", "diskspace", "--info"] {
        assert!(help.contains(name), "missing {name} in help:\n{help}");
    }
}

#[test]
fn version_flag() {
    let output = glance().arg("--version").output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn memory_listing_is_plain_when_piped() {
    let output = glance().arg("memory").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains('\u{1b}'));
    assert!(
        stdout.contains("Total Memory:") || stdout.contains("Error fetching memory usage"),
        "{stdout}"
    );
}

#[test]
fn memory_snapshot_honours_graph_height() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "[graph]\nheight = 3\n\n[theme]\ncolor = \"never\"").unwrap();

    let output = glance()
        .args(["--info", "memory", "--config"])
        .arg(config.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    if stdout.contains("Memory Usage") {
        // blank line, title, used/total line, three graph rows
        assert_eq!(stdout.lines().count(), 6, "{stdout}");
    }
}

#[test]
fn diskspace_never_fails() {
    let output = glance().args(["diskspace", "--color", "never"]).output().unwrap();
    assert!(output.status.success());
}

#[test]
fn unreadable_config_is_fatal() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "[watch]\ninterval_ms = 1").unwrap();

    let output = glance()
        .args(["memory", "--config"])
        .arg(config.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("watch.interval_ms"));
}

#[cfg(unix)]
#[test]
fn cpu_watch_stops_cleanly_on_sigterm() {
    let mut child = std::process::Command::new(env!("CARGO_BIN_EXE_glance"))
        .args(["cpu", "--color", "never", "--interval-ms", "200"])
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    std::thread::sleep(Duration::from_millis(1_000));
    let status = std::process::Command::new("kill")
        .args(["-TERM", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(status.success());

    // one tick interval plus the blocking query, with slack for slow CI
    let deadline = Instant::now() + Duration::from_secs(5);
    let status = loop {
        if let Some(status) = child.try_wait().unwrap() {
            break status;
        }
        assert!(Instant::now() < deadline, "cpu watch ignored SIGTERM");
        std::thread::sleep(Duration::from_millis(20));
    };
    assert!(status.success(), "{status:?}");

    let mut stdout = String::new();
    child.stdout.take().unwrap().read_to_string(&mut stdout).unwrap();
    assert!(stdout.starts_with("Press Ctrl+C to exit...\n"), "{stdout}");
    assert!(stdout.contains("CPU Usage: ") || stdout.contains("Error fetching CPU usage"));
    assert!(stdout.ends_with('\n'), "partial line after shutdown: {stdout:?}");
}

#[test]
fn piped_logs_carry_no_escape_codes() {
    let dir = tempfile::tempdir().unwrap();
    let output = glance()
        .args(["memory", "--config"])
        .arg(dir.path().join("absent.toml"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Config file not found"), "{stderr}");
    assert!(!stderr.contains('\u{1b}'), "{stderr:?}");
}
