//! CLI arg parsing and profile persistence tests (non-interactive paths only)
use std::fs;
use std::process::Command;
use std::sync::Mutex;

// Global lock to serialize tests that mutate process-wide environment variables.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn run_dashtop(args: &[&str]) -> (bool, String) {
    let exe = env!("CARGO_BIN_EXE_dashtop");
    let output = Command::new(exe).args(args).output().expect("run dashtop");
    let ok = output.status.success();
    let text = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    (ok, text)
}

fn profiles_path() -> std::path::PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        std::path::PathBuf::from(xdg).join("dashtop").join("profiles.json")
    } else {
        panic!("tests must set XDG_CONFIG_HOME");
    }
}

#[test]
fn help_mentions_flags_and_usage() {
    let (ok, text) = run_dashtop(&["--help"]);
    assert!(ok, "dashtop --help did not succeed");
    assert!(
        text.contains("Usage:")
            && text.contains("--profile")
            && text.contains("-P")
            && text.contains("--dry-run"),
        "help text missing expected flags\n{text}"
    );
}

#[test]
fn unexpected_extra_argument_is_rejected() {
    let (_ok, text) = run_dashtop(&["http://one:8000", "http://two:8000", "--dry-run"]);
    assert!(text.contains("Unexpected argument"), "{text}");
}

#[test]
fn dry_run_reports_the_resolved_server() {
    let _guard = ENV_LOCK.lock().unwrap();
    let td = tempfile::tempdir().unwrap();
    std::env::set_var("XDG_CONFIG_HOME", td.path());
    let (ok, text) = run_dashtop(&["http://pi.local:8000", "--dry-run"]);
    assert!(ok);
    assert!(text.contains("http://pi.local:8000"), "{text}");
}

#[test]
fn profile_created_on_first_use() {
    let _guard = ENV_LOCK.lock().unwrap();
    let td = tempfile::tempdir().unwrap();
    std::env::set_var("XDG_CONFIG_HOME", td.path());
    let _ = fs::remove_file(profiles_path());
    let (_ok, _out) = run_dashtop(&["--profile", "unittest", "http://example:8000", "--dry-run"]);
    let data = fs::read_to_string(profiles_path()).expect("profiles.json created");
    assert!(
        data.contains("unittest") && data.contains("http://example:8000"),
        "profiles.json missing profile entry: {data}"
    );
}

#[test]
fn profile_overwritten_only_when_changed() {
    let _guard = ENV_LOCK.lock().unwrap();
    let td = tempfile::tempdir().unwrap();
    std::env::set_var("XDG_CONFIG_HOME", td.path());
    let _ = fs::remove_file(profiles_path());
    // Initial create
    let (_ok, _out) = run_dashtop(&["--profile", "prod", "http://one:8000", "--dry-run"]);
    let first = fs::read_to_string(profiles_path()).unwrap();
    // Re-run identical (should not duplicate or corrupt)
    let (_ok2, _out2) = run_dashtop(&["--profile", "prod", "http://one:8000", "--dry-run"]);
    let second = fs::read_to_string(profiles_path()).unwrap();
    assert_eq!(first, second, "Profile file changed despite identical input");
    // Overwrite with different URL using --save (no prompt path)
    let (_ok3, _out3) = run_dashtop(&["--profile", "prod", "--save", "http://two:8000", "--dry-run"]);
    let third = fs::read_to_string(profiles_path()).unwrap();
    assert!(third.contains("two"), "Updated URL not written: {third}");
}
