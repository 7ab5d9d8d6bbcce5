// tests/cli_tests.rs
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const RUN_OUTPUT: &str = "\
Testing \"queue\" in queue.test.c:
! queue.test.c:12  q->count == 0  ok
! queue.test.c:13  q->head != NULL  FAILED
WvTest: 2 tests, 1 failure.
";

#[test]
fn test_default_writes_stdin_to_stderr_unchanged() {
    // stderr is a pipe under the test harness, so colors are off
    let mut cmd = Command::cargo_bin("wvcolor").unwrap();
    cmd.write_stdin(RUN_OUTPUT)
        .assert()
        .success()
        .stdout("")
        .stderr(RUN_OUTPUT);
}

#[test]
fn test_empty_input_exits_cleanly() {
    let mut cmd = Command::cargo_bin("wvcolor").unwrap();
    cmd.write_stdin("").assert().success().stdout("").stderr("");
}

#[test]
fn test_color_always() {
    let mut cmd = Command::cargo_bin("wvcolor").unwrap();
    cmd.arg("--color")
        .arg("always")
        .write_stdin("! a ok\n! b FAILED\n! c skipped\nplain\n")
        .assert()
        .success()
        .stderr("\x1b[92m! a ok\n\x1b[0m\x1b[91m! b FAILED\n\x1b[0m! c skipped\nplain\n");
}

#[test]
fn test_color_never() {
    let mut cmd = Command::cargo_bin("wvcolor").unwrap();
    cmd.arg("--color=never")
        .write_stdin(RUN_OUTPUT)
        .assert()
        .success()
        .stderr(RUN_OUTPUT);
}

#[test]
fn test_input_and_output_files() {
    let mut input = NamedTempFile::new().unwrap();
    write!(input, "{}", RUN_OUTPUT).unwrap();
    let output = NamedTempFile::new().unwrap();

    let mut cmd = Command::cargo_bin("wvcolor").unwrap();
    cmd.arg(input.path())
        .arg("-o")
        .arg(output.path())
        .assert()
        .success()
        .stderr("");

    let written = std::fs::read_to_string(output.path()).unwrap();
    assert_eq!(written, RUN_OUTPUT);
}

#[test]
fn test_output_file_with_forced_color() {
    let output = NamedTempFile::new().unwrap();

    let mut cmd = Command::cargo_bin("wvcolor").unwrap();
    cmd.arg("--color")
        .arg("always")
        .arg("--output")
        .arg(output.path())
        .write_stdin("WvTest: 5 tests, 0 failures.\n")
        .assert()
        .success();

    let written = std::fs::read_to_string(output.path()).unwrap();
    assert_eq!(written, "\x1b[94mWvTest: 5 tests, 0 failures.\n\x1b[0m");
}

#[test]
fn test_missing_input_file_fails() {
    let mut cmd = Command::cargo_bin("wvcolor").unwrap();
    cmd.arg("nonexistent_file.log")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "wvcolor: failed to open input file 'nonexistent_file.log'",
        ));
}

#[test]
fn test_debug_reports_statistics() {
    let mut cmd = Command::cargo_bin("wvcolor").unwrap();
    cmd.arg("--debug")
        .write_stdin(RUN_OUTPUT)
        .assert()
        .success()
        .stderr(predicate::str::contains("wvcolor: reading from stdin"))
        .stderr(predicate::str::contains("wvcolor: colors disabled"))
        .stderr(predicate::str::contains("Lines read: 4"))
        .stderr(predicate::str::contains("Failure: 2"));
}

#[test]
fn test_invalid_color_choice_rejected() {
    let mut cmd = Command::cargo_bin("wvcolor").unwrap();
    cmd.arg("--color")
        .arg("sometimes")
        .write_stdin("")
        .assert()
        .failure();
}

#[test]
fn test_zero_buffer_size_rejected() {
    let mut cmd = Command::cargo_bin("wvcolor").unwrap();
    cmd.arg("--buffer-size")
        .arg("0")
        .write_stdin("! a ok\nplain\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--buffer-size"));
}

#[test]
fn test_one_byte_buffer_passes_input_through() {
    let mut cmd = Command::cargo_bin("wvcolor").unwrap();
    cmd.arg("--buffer-size")
        .arg("1")
        .write_stdin("! a ok\nplain\n")
        .assert()
        .success()
        .stderr("! a ok\nplain\n");
}

#[test]
fn test_unwritable_output_fails() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("no_such_dir").join("out.log");

    let mut cmd = Command::cargo_bin("wvcolor").unwrap();
    cmd.arg("-o")
        .arg(&target)
        .write_stdin("plain\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "wvcolor: failed to create output file",
        ));
}
