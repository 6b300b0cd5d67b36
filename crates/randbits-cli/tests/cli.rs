use std::path::PathBuf;
use std::process::{Command, Output};

fn command(args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_randbits"));
    cmd.args(args)
        .env_remove("RANDBITS_SEED")
        .env_remove("RANDBITS_OUTPUT")
        .env_remove("RANDBITS_REPORT")
        .env_remove("RUST_LOG");
    cmd
}

fn randbits(args: &[&str]) -> Output {
    command(args).output().expect("failed to run randbits")
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("randbits-{}-{name}", std::process::id()))
}

fn stdout_line(output: &Output) -> String {
    let text = String::from_utf8(output.stdout.clone()).unwrap();
    assert!(text.ends_with('\n'), "missing newline: {text:?}");
    assert_eq!(text.matches('\n').count(), 1, "more than one line: {text:?}");
    text.trim_end_matches('\n').to_string()
}

fn assert_binary_line(line: &str) {
    assert_eq!(line.len(), 128);
    assert!(line.bytes().all(|b| b == b'0' || b == b'1'), "line = {line}");
}

#[test]
fn prints_one_binary_line_and_exits_zero() {
    let output = randbits(&[]);
    assert!(output.status.success());
    assert_binary_line(&stdout_line(&output));
}

#[test]
fn independent_runs_differ() {
    let a = stdout_line(&randbits(&[]));
    let b = stdout_line(&randbits(&[]));
    assert_ne!(a, b);
}

#[test]
fn seed_makes_output_reproducible() {
    let a = stdout_line(&randbits(&["--seed", "42"]));
    let b = stdout_line(&randbits(&["--seed", "42"]));
    let c = stdout_line(&randbits(&["--seed", "43"]));
    assert_binary_line(&a);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn seed_is_read_from_environment() {
    let from_flag = stdout_line(&randbits(&["--seed", "7"]));
    let output = command(&[]).env("RANDBITS_SEED", "7").output().unwrap();
    assert_eq!(stdout_line(&output), from_flag);
}

#[test]
fn report_goes_to_stderr() {
    let output = randbits(&["--seed", "1", "--report"]);
    assert!(output.status.success());
    assert_binary_line(&stdout_line(&output));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Monobit P-value"));
    assert!(stderr.contains("Longest Run P-value"));
}

#[test]
fn output_flag_writes_file() {
    let path = temp_path("flag.txt");
    let path_str = path.to_str().unwrap();
    let output = randbits(&["--seed", "5", "--output", path_str]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let text = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert!(text.ends_with('\n'));
    let line = text.trim_end_matches('\n');
    assert_binary_line(line);
    assert_eq!(line, stdout_line(&randbits(&["--seed", "5"])));
}

#[test]
fn invalid_arguments_exit_nonzero() {
    let output = randbits(&["--seed", "not-a-number"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn dotenv_file_in_working_directory_is_loaded() {
    let dir = temp_path("dotenv");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(".env"), "RANDBITS_SEED=7\n").unwrap();

    let output = command(&[]).current_dir(&dir).output().unwrap();
    let _ = std::fs::remove_dir_all(&dir);
    assert!(output.status.success());
    assert_eq!(stdout_line(&output), stdout_line(&randbits(&["--seed", "7"])));
}

#[test]
fn output_is_read_from_environment() {
    let path = temp_path("env.txt");
    let output = command(&["--seed", "11"])
        .env("RANDBITS_OUTPUT", &path)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let text = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(
        text.trim_end_matches('\n'),
        stdout_line(&randbits(&["--seed", "11"]))
    );
}

#[test]
fn report_is_read_from_environment() {
    let output = command(&["--seed", "1"])
        .env("RANDBITS_REPORT", "true")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_binary_line(&stdout_line(&output));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Sequence Test Results"));
    assert!(stderr.contains("Runs P-value"));
}
