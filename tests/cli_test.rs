use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const BIN: &str = env!("CARGO_BIN_EXE_seqstats");
const TEST_DATA_DIR: &str = "tests/test_data";

fn run(args: &[&str]) -> Output {
    Command::new(BIN)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run seqstats")
}

fn data(rel: &str) -> String {
    Path::new(TEST_DATA_DIR).join(rel).display().to_string()
}

#[test]
fn test_fasta_to_stdout() {
    let out = run(&[&data("fasta/sample.fasta")]);
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[3], "short: Length=2, GC%=100.00, Ambiguous=0");
}

#[test]
fn test_fastq_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("summary.txt");

    let out = run(&[&data("fastq/sample.fastq"), "-o", output.to_str().unwrap()]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("read1 lane=1: Length=10, GC%=50.00, Avg Quality=40.00\n"));
    assert_eq!(written.lines().count(), 4);
}

#[test]
fn test_ignore_case_flag() {
    let out = run(&[&data("fasta/sample.fasta"), "--ignore-case"]);
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("soft_masked lowercase repeat: Length=24, GC%=58.33, Ambiguous=4"));
}

#[test]
fn test_explicit_format_overrides_extension() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("reads.txt");
    fs::write(&input, ">a\nACGT\nGGCC\n>b\nNNNN\n").unwrap();

    let out = run(&[input.to_str().unwrap()]);
    assert!(!out.status.success());

    let out = run(&[input.to_str().unwrap(), "--format", "fasta"]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "a: Length=8, GC%=75.00, Ambiguous=0\nb: Length=4, GC%=0.00, Ambiguous=4\n"
    );
}

#[test]
fn test_missing_input_fails() {
    let out = run(&["tests/test_data/nowhere.fasta"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Input file not found"));
}

#[test]
fn test_dedup_last_write_wins() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("dups.fasta");
    fs::write(&input, ">x\nAAAA\n>y\nGG\n>x\nCCCC\n").unwrap();

    let out = run(&[input.to_str().unwrap()]);
    assert_eq!(String::from_utf8(out.stdout).unwrap().lines().count(), 3);

    let out = run(&[input.to_str().unwrap(), "--dedup"]);
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "x: Length=4, GC%=100.00, Ambiguous=0\ny: Length=2, GC%=100.00, Ambiguous=0\n"
    );
}

#[test]
fn test_strict_halts_or_skips() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.fastq");
    fs::write(&input, "@r1\nACGT\n+\nII\n@r2\nGGCC\n+\nIIII\n@r3\nAC\n").unwrap();
    let input = input.to_str().unwrap();

    let lenient = run(&[input]);
    assert!(lenient.status.success());
    assert_eq!(String::from_utf8(lenient.stdout).unwrap().lines().count(), 2);

    let strict = run(&[input, "--strict"]);
    assert!(!strict.status.success());
    assert!(String::from_utf8_lossy(&strict.stderr).contains("Quality length mismatch"));

    let skipping = run(&[input, "--strict", "--skip-malformed"]);
    assert!(skipping.status.success());
    assert_eq!(
        String::from_utf8(skipping.stdout).unwrap(),
        "r2: Length=4, GC%=100.00, Avg Quality=40.00\n"
    );
}
