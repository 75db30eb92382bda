use pazaak_cli::run;

#[test]
fn ai_quick_match_plays_to_a_winner() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(
        ["pazaak", "play", "--vs", "ai", "--quick", "--seed", "42"],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0);
    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("Seed: 42"));
    assert!(output.contains("-- set 1 --"));
    assert!(output.contains("wins the game"));
}

#[test]
fn full_match_reports_three_set_wins() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(
        ["pazaak", "play", "--vs", "ai", "--seed", "7"],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0);
    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("wins the game 3 -"));
}

#[test]
fn seeded_ai_match_is_reproducible() {
    let run_once = || {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(
            ["pazaak", "play", "--vs", "ai", "--seed", "123"],
            &mut out,
            &mut err,
        );
        assert_eq!(code, 0);
        out
    };
    assert_eq!(run_once(), run_once());
}

#[test]
fn random_opponent_is_accepted() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(
        [
            "pazaak",
            "play",
            "--vs",
            "ai",
            "--quick",
            "--seed",
            "3",
            "--opponent",
            "random",
        ],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0);
    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("ai vs random"));
}
