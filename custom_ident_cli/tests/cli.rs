use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_custom-ident"))
        .args(args)
        .output()
        .expect("run custom-ident")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

#[test]
fn plain_values() {
    let out = run(&["my", "custom", "ident"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "my_custom_ident");
}

#[test]
fn plain_values_are_escaped_and_legalized() {
    let out = run(&["1 my@ident"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "c1_my\\40ident");
}

#[test]
fn json_values() {
    let out = run(&["--json", r#"{"my": true, "custom": "1", "ident": 3}"#, "[null, 2]"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "custom_ident_my_null_2");
}

#[test]
fn json_from_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_custom-ident"))
        .args(["start", "--file", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn custom-ident");
    child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(br#"["my", ["custom", "ident", {"another": false}]]"#)
        .expect("write stdin");
    let out = child.wait_with_output().expect("wait for custom-ident");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "start_my_custom_ident");
}

#[test]
fn empty_ident_fails() {
    let out = run(&["--json", "{}", r#"{"a": false}"#]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("customIdent must not be empty"), "{stderr}");
}

#[test]
fn invalid_json_fails() {
    let out = run(&["--json", "[1,"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("value 1 is not valid JSON"));
}
