use std::process::Command;

use tempfile::tempdir;

#[test]
fn test_missing_config_exits_2_and_names_variable() {
    let dir = tempdir().unwrap();
    let bin = env!("CARGO_BIN_EXE_pagewatch");

    let output = Command::new(bin)
        .current_dir(dir.path())
        .env_clear()
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("WATCH_URL"),
        "stderr should name the missing variable; got:\n{}",
        stderr
    );
}

#[test]
fn test_url_flag_alone_still_requires_credentials() {
    let dir = tempdir().unwrap();
    let bin = env!("CARGO_BIN_EXE_pagewatch");

    let output = Command::new(bin)
        .current_dir(dir.path())
        .env_clear()
        .args(["--url", "https://example.com"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("RESEND_API_KEY"),
        "stderr should name the missing credential; got:\n{}",
        stderr
    );
}

#[test]
fn test_no_network_calls_are_attempted_on_missing_config() {
    // A fatal config error must fail fast: no state directory appears.
    let dir = tempdir().unwrap();
    let bin = env!("CARGO_BIN_EXE_pagewatch");

    Command::new(bin)
        .current_dir(dir.path())
        .env_clear()
        .output()
        .unwrap();

    assert!(!dir.path().join(".watch_state").exists());
}
