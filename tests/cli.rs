use std::path::Path;
use std::process::{Command, Output};

const SAMPLE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/sample.txt");

fn run_partflow(input: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_partflow"))
        .arg(input)
        .output()
        .expect("run partflow")
}

fn run_on_text(text: &str) -> Output {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("input.txt");
    std::fs::write(&path, text).expect("write input");
    run_partflow(&path)
}

#[test]
fn sample_prints_only_the_total() {
    let output = run_partflow(Path::new(SAMPLE_PATH));
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "19114\n");
}

#[test]
fn undefined_target_fails_without_output() {
    let output = run_on_text("in{x>1:nowhere,R}\n\n{x=2}\n");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("undefined target 'nowhere'"));
}

#[test]
fn malformed_part_fails_without_output() {
    let output = run_on_text("in{A}\n\n{x=1,m=}\n");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_file_fails_without_output() {
    let output = run_partflow(Path::new("does/not/exist.txt"));
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
