//! Binary-level tests: flags, output destinations, exit codes.

use std::fs;

use assert_cmd::Command;

fn yaml2go() -> Command {
    Command::cargo_bin("yaml2go").unwrap()
}

fn write_input(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("input.yaml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn prints_to_stdout_with_default_struct_name() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "port: 80\n");

    let output = yaml2go().arg("-i").arg(&input).output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "type YAMLToGoStruct struct {\n\tPort int `yaml:\"port\"`\n}\n\n"
    );
}

#[test]
fn struct_name_and_json_flags() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "port: 80\n");

    let output = yaml2go()
        .arg("-i")
        .arg(&input)
        .args(["--struct", "Server", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "type Server struct {\n\tPort int `yaml:\"port\" json:\"port\"`\n}\n\n"
    );
}

#[test]
fn writes_output_file_and_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "name: x\n");
    let out = dir.path().join("gen").join("types.go");

    let output = yaml2go().arg("-i").arg(&input).arg("-o").arg(&out).output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Generated struct written to"));
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "type YAMLToGoStruct struct {\n\tName string `yaml:\"name\"`\n}\n\n"
    );
}

#[test]
fn ir_format_is_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "a:\n  b: 1\n");

    let output = yaml2go().arg("-i").arg(&input).args(["--format", "ir"]).output().unwrap();
    assert!(output.status.success());
    let decls: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(decls[0]["name"], "YAMLToGoStruct");
    assert_eq!(decls[1]["name"], "YAMLToGoStructA");
    assert_eq!(decls[1]["fields"][0]["ty"]["kind"], "int");
}

#[test]
fn non_mapping_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "- 1\n- 2\n");
    let out = dir.path().join("types.go");

    let output = yaml2go().arg("-i").arg(&input).arg("-o").arg(&out).output().unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!out.exists());
    assert!(String::from_utf8_lossy(&output.stderr).contains("expected mapping node"));
}

#[test]
fn missing_input_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = yaml2go().arg("-i").arg(dir.path().join("nope.yaml")).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read file"));
}

#[test]
fn input_flag_is_required() {
    yaml2go().assert().failure();
}
