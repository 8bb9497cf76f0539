//! End-to-end runs of both binaries.
//! `true` and `false` stand in for minicom.

use std::path::Path;
use std::process::{Command, Output};

fn console(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_console"))
        .args(args)
        .env("HOME", home)
        .env_remove("BENCHKIT_TERMINAL")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run console binary")
}

fn qrcode_wifi(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_qrcode-wifi"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run qrcode-wifi binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ════════════════════════════════════════════════════════════════
// console
// ════════════════════════════════════════════════════════════════

#[cfg(unix)]
#[test]
fn console_emulator_success_exits_zero() {
    let home = tempfile::tempdir().unwrap();
    let output = console(home.path(), &["host1", "--emulator", "true"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(home.path().join("general").is_dir());
}

#[cfg(unix)]
#[test]
fn console_emulator_failure_exits_nonzero() {
    let home = tempfile::tempdir().unwrap();
    let output = console(home.path(), &["host1", "-p", "projectXY", "--emulator", "false"]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("Whoops!"), "stderr: {}", err);
    assert!(err.contains("exit status 1"), "stderr: {}", err);
    assert!(home.path().join("projectXY").is_dir());
}

#[cfg(unix)]
#[test]
fn console_failure_is_logged() {
    let home = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_console"))
        .args(["host1", "--emulator", "false"])
        .env("HOME", home.path())
        .env("RUST_LOG", "error")
        .env_remove("BENCHKIT_TERMINAL")
        .output()
        .expect("failed to run console binary");

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("ERROR"), "stderr: {}", err);
    assert!(err.contains("run failed"), "stderr: {}", err);
    assert!(err.contains("Whoops!"), "stderr: {}", err);
}

#[cfg(unix)]
#[test]
fn console_emulator_from_environment() {
    let home = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_console"))
        .arg("host1")
        .env("HOME", home.path())
        .env("BENCHKIT_TERMINAL", "false")
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[cfg(unix)]
#[test]
fn console_existing_directory_is_not_an_error() {
    let home = tempfile::tempdir().unwrap();
    std::fs::create_dir(home.path().join("general")).unwrap();
    std::fs::write(home.path().join("general").join("keep.capture"), b"old").unwrap();

    let output = console(home.path(), &["host1", "--emulator", "true"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("exists."));
    assert_eq!(
        std::fs::read(home.path().join("general").join("keep.capture")).unwrap(),
        b"old"
    );
}

#[test]
fn console_missing_emulator_exits_nonzero() {
    let home = tempfile::tempdir().unwrap();
    let output = console(
        home.path(),
        &["host1", "--emulator", "benchkit-no-such-emulator"],
    );

    assert!(!output.status.success());
    assert!(stderr(&output).contains("benchkit-no-such-emulator"));
}

#[test]
fn console_dry_run_prints_layout() {
    let home = tempfile::tempdir().unwrap();
    let output = console(
        home.path(),
        &["host1", "-p", "lab", "-D", "/dev/ttyACM0", "-b", "9600", "--dry-run"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    let expected_dir = home.path().join("lab");
    assert!(out.contains(&format!("Capture file : {}/host1_", expected_dir.display())));
    assert!(out.contains(".capture"));
    assert!(out.contains("minicom -D /dev/ttyACM0 -b 9600 -C "));
    assert!(!expected_dir.exists());
}

#[test]
fn console_requires_name() {
    let home = tempfile::tempdir().unwrap();
    let output = console(home.path(), &[]);
    assert_eq!(output.status.code(), Some(2));
}

// ════════════════════════════════════════════════════════════════
// qrcode-wifi
// ════════════════════════════════════════════════════════════════

#[test]
fn qrcode_wifi_literal_passphrase() {
    let cwd = tempfile::tempdir().unwrap();
    let output = qrcode_wifi(cwd.path(), &["HomeNet", "-P", "abc123"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "SSID         : HomeNet\n\
         Passphrase   : abc123\n\
         QR Code      : WIFI:S:HomeNet;T:WPA;P:abc123;H:false;;\n\
         QR Code file : HomeNet.png\n"
    );

    let png = std::fs::read(cwd.path().join("HomeNet.png")).unwrap();
    assert!(png.starts_with(b"\x89PNG"));
}

#[test]
fn qrcode_wifi_generates_passphrase() {
    let cwd = tempfile::tempdir().unwrap();
    let output = qrcode_wifi(cwd.path(), &["Lab", "-l", "8", "--hidden", "-p", "WEP"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    let passphrase = out
        .lines()
        .find_map(|l| l.strip_prefix("Passphrase   : "))
        .unwrap();
    assert_eq!(passphrase.len(), 16);
    assert!(passphrase.chars().all(|c| c.is_ascii_hexdigit()));
    assert!(out.contains(&format!("WIFI:S:Lab;T:WEP;P:{};H:true;;", passphrase)));
    assert!(cwd.path().join("Lab.png").is_file());
}

#[test]
fn qrcode_wifi_overwrites_existing_image() {
    let cwd = tempfile::tempdir().unwrap();
    std::fs::write(cwd.path().join("HomeNet.png"), b"stale").unwrap();

    let output = qrcode_wifi(cwd.path(), &["HomeNet", "-P", "abc123"]);

    assert!(output.status.success());
    assert_ne!(std::fs::read(cwd.path().join("HomeNet.png")).unwrap(), b"stale");
}

#[test]
fn qrcode_wifi_requires_ssid() {
    let cwd = tempfile::tempdir().unwrap();
    let output = qrcode_wifi(cwd.path(), &[]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn qrcode_wifi_rejects_oversized_length() {
    let cwd = tempfile::tempdir().unwrap();
    let output = qrcode_wifi(cwd.path(), &["Lab", "-l", "18446744073709551615"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(!cwd.path().join("Lab.png").exists());
}
