//! Head-to-head strategy comparison over many seeded games.

use std::io::Write;
use std::path::Path;

use pazaak_ai::create_strategy;
use pazaak_engine::{Engine, Player, Rules};

use crate::error::CliError;

pub fn handle_eval_command(
    strategy_a: &str,
    strategy_b: &str,
    games: u32,
    seed: Option<u64>,
    model: Option<&Path>,
    quick: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        return Err(CliError::InvalidInput("games must be >= 1".into()));
    }
    let rules = if quick {
        Rules::quick_match()
    } else {
        Rules::default()
    };
    let base_seed = seed.unwrap_or_else(rand::random);

    let mut wins = [0u32; 2];
    for g in 0..games {
        let game_seed = base_seed.wrapping_add(u64::from(g));
        let a = create_strategy(strategy_a, game_seed.wrapping_mul(2), &rules, model)?;
        let b = create_strategy(
            strategy_b,
            game_seed.wrapping_mul(2).wrapping_add(1),
            &rules,
            model,
        )?;
        let mut engine = Engine::new(
            Some(game_seed),
            rules,
            [Player::new(strategy_a, a), Player::new(strategy_b, b)],
        )?;
        let winner = engine.play_game();
        wins[winner] += 1;
    }

    let pct = |w: u32| 100.0 * f64::from(w) / f64::from(games);
    writeln!(out, "Evaluated {} games (base seed {})", games, base_seed)?;
    writeln!(out, "  {}: {} wins ({:.1}%)", strategy_a, wins[0], pct(wins[0]))?;
    writeln!(out, "  {}: {} wins ({:.1}%)", strategy_b, wins[1], pct(wins[1]))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_mirror_match_completes() {
        let mut out = Vec::new();
        handle_eval_command("heuristic", "heuristic", 3, Some(42), None, true, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Evaluated 3 games"));
    }

    #[test]
    fn win_counts_sum_to_the_game_count() {
        let mut out = Vec::new();
        handle_eval_command("heuristic", "random", 5, Some(9), None, true, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        let wins: u32 = output
            .lines()
            .skip(1)
            .filter_map(|l| l.split_whitespace().nth(1)?.parse::<u32>().ok())
            .sum();
        assert_eq!(wins, 5);
    }

    #[test]
    fn zero_games_is_invalid() {
        let mut out = Vec::new();
        let result = handle_eval_command("heuristic", "random", 0, Some(1), None, false, &mut out);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn unknown_strategy_is_reported() {
        let mut out = Vec::new();
        let result = handle_eval_command("bogus", "random", 1, Some(1), None, false, &mut out);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn same_seed_reproduces_the_report() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();
        handle_eval_command("heuristic", "random", 4, Some(3), None, true, &mut out1).unwrap();
        handle_eval_command("heuristic", "random", 4, Some(3), None, true, &mut out2).unwrap();
        assert_eq!(out1, out2);
    }
}
