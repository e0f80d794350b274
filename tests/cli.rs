use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sat"))
        .args(args)
        .output()
        .expect("failed to run sat")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn satisfiable_exits_20() {
    let output = run(&["tests/data/chain.cnf"]);
    assert_eq!(output.status.code(), Some(20));
    let text = stdout(&output);
    assert!(text.contains("s SATISFIABLE"));
    assert!(text.contains("v 1 2 3"));
    assert!(text.contains("v 0"));
}

#[test]
fn unsatisfiable_exits_10() {
    let output = run(&["tests/data/php_3_2.cnf", "--learned", "watch"]);
    assert_eq!(output.status.code(), Some(10));
    assert!(stdout(&output).contains("s UNSATISFIABLE"));
}

#[test]
fn model_and_stats_switches() {
    let output = run(&["tests/data/two_vars.cnf", "--no-model", "--stats"]);
    assert_eq!(output.status.code(), Some(20));
    let text = stdout(&output);
    assert!(!text.contains("v "));
    assert!(text.contains("c decisions 1"));
}

#[test]
fn missing_file_exits_2() {
    let output = run(&["tests/data/does_not_exist.cnf"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn zero_decision_cap_is_rejected() {
    let output = run(&["tests/data/unit.cnf", "--decision-cap", "0"]);
    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(20));
}
