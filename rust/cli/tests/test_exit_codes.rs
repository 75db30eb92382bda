use pazaak_cli::run;

#[test]
fn help_exits_zero_and_prints_to_stdout() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["pazaak", "--help"], &mut out, &mut err);
    assert_eq!(code, 0);
    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("pazaak"));
    assert!(err.is_empty());
}

#[test]
fn unknown_command_exits_two_with_usage() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["pazaak", "shuffle"], &mut out, &mut err);
    assert_eq!(code, 2);
    let stderr = String::from_utf8(err).unwrap();
    assert!(stderr.contains("Usage: pazaak"));
}

#[test]
fn unknown_strategy_exits_two() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(
        [
            "pazaak",
            "eval",
            "--strategy-a",
            "bogus",
            "--strategy-b",
            "random",
            "--games",
            "1",
        ],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 2);
    let stderr = String::from_utf8(err).unwrap();
    assert!(stderr.starts_with("Error:"));
    assert!(stderr.contains("bogus"));
}

#[test]
fn lookahead_without_model_exits_two() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(
        [
            "pazaak",
            "eval",
            "--strategy-a",
            "lookahead",
            "--strategy-b",
            "heuristic",
            "--games",
            "1",
        ],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 2);
    let stderr = String::from_utf8(err).unwrap();
    assert!(stderr.starts_with("Error:"));
    assert!(stderr.contains("model"));
}
