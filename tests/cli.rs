use assert_cmd::Command;

mod common;
use common::temp_file;

fn eolcheck() -> Command {
    Command::cargo_bin("eolcheck").unwrap()
}

#[test]
fn consistent_file_prints_info_and_exits_zero() {
    let (_dir, path) = temp_file(b"a\nb\n");
    let output = eolcheck().arg(&path).output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(r#"contains UNIX "\n" line endings."#), "{stdout}");
    assert!(output.stderr.is_empty());
}

#[test]
fn mixed_file_reports_on_stderr_and_exits_one() {
    let (_dir, path) = temp_file(b"a\r\nb\n");
    let output = eolcheck().arg(&path).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("contains both DOS"), "{stderr}");
}

#[test]
fn missing_argument_exits_one_with_usage() {
    let output = eolcheck().output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Usage"), "{stderr}");
}

#[test]
fn extra_argument_exits_one() {
    let (_dir, path) = temp_file(b"a\n");
    eolcheck().arg(&path).arg("extra").assert().code(1);
}

#[test]
fn missing_file_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    eolcheck()
        .arg(dir.path().join("missing.txt"))
        .assert()
        .code(1);
}

#[test]
fn expect_flag_enforces_convention() {
    let (_dir, path) = temp_file(b"a\r\nb\r\n");
    eolcheck().arg("--expect").arg("dos").arg(&path).assert().code(0);
    eolcheck().arg("--expect").arg("unix").arg(&path).assert().code(1);
}

#[test]
fn expect_flag_rejects_legacy() {
    let (_dir, path) = temp_file(b"a\n");
    eolcheck().arg("--expect").arg("cr").arg(&path).assert().code(1);
}

#[test]
fn quiet_prints_nothing() {
    let (_dir, path) = temp_file(b"a\rb");
    let output = eolcheck().arg("-q").arg(&path).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn help_exits_zero() {
    eolcheck().arg("--help").assert().success();
}

#[test]
fn dash_prefixed_file_name_after_separator() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("-dash.txt");
    std::fs::write(&path, b"a\r\nb\r\n").unwrap();
    eolcheck()
        .current_dir(dir.path())
        .arg("--")
        .arg("-dash.txt")
        .assert()
        .code(0);
    eolcheck()
        .current_dir(dir.path())
        .arg("-dash.txt")
        .assert()
        .code(1);
}
