use std::{
    env, fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

fn test_dir(name: &str) -> PathBuf {
    let test_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);

    fs::remove_dir_all(&test_dir).ok();
    fs::create_dir_all(&test_dir).expect("failed to create test directory");

    test_dir
}

fn run_bin(file: &Path) -> Output {
    let bin = PathBuf::from(env!("CARGO_BIN_EXE_logavg"));

    Command::new(bin)
        .arg(file)
        .output()
        .expect("failed to execute command")
}

fn run_bin_on(test_dir: &Path, contents: &str) -> Output {
    let log_path = test_dir.join("measurements.log");
    fs::write(&log_path, contents).expect("failed to write log file");
    run_bin(&log_path)
}

#[test]
fn averages_well_formed_log() {
    let test_dir = test_dir("averages_well_formed_log");

    let output = run_bin_on(
        &test_dir,
        "x x 10.0 x x x x x 50.0\nx x 20.0 x x x x x 60.0\n",
    );

    let stdout_str =
        std::str::from_utf8(&output.stdout).expect("failed to convert stdout to string");
    let stderr_str =
        std::str::from_utf8(&output.stderr).expect("failed to convert stderr to string");

    assert!(
        output.status.success(),
        "failed to run binary\nstdout:\n{stdout_str}\nstderr:\n{stderr_str}\n"
    );
    assert_eq!(stdout_str, "Average time: 15.0\nAverage percentage: 55.0\n");

    fs::remove_dir_all(&test_dir).ok();
}

#[test]
fn single_record_is_identity() {
    let test_dir = test_dir("single_record_is_identity");

    let output = run_bin_on(&test_dir, "a b 5.0 c d e f g 100.0\n");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Average time: 5.0\nAverage percentage: 100.0\n"
    );

    fs::remove_dir_all(&test_dir).ok();
}

#[test]
fn rejects_bad_input() {
    let test_dir = test_dir("rejects_bad_input");

    let cases = [
        ("empty", ""),
        ("short line", "x x 10.0 x x x x x 50.0\nx x 20.0 x\n"),
        ("non-numeric field", "x x abc x x x x x 50.0\n"),
    ];
    for (name, contents) in cases {
        let output = run_bin_on(&test_dir, contents);
        assert!(!output.status.success(), "{name}: expected failure");
        assert!(output.stdout.is_empty(), "{name}: expected no output");
    }

    let output = run_bin(&test_dir.join("missing.log"));
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    fs::remove_dir_all(&test_dir).ok();
}
