//! Interactive (or spectated) match play with per-turn narration.

use std::io::{BufRead, Write};
use std::path::Path;

use pazaak_ai::create_strategy;
use pazaak_engine::{Decider, Engine, Player, SetOutcome, TurnReport};

use crate::cli::Vs;
use crate::config;
use crate::error::CliError;
use crate::human::HumanDecider;
use crate::ui::format_card;

#[allow(clippy::too_many_arguments)]
pub fn handle_play_command(
    vs: Vs,
    seed: Option<u64>,
    quick: bool,
    opponent: &str,
    model: Option<&Path>,
    input: Box<dyn BufRead>,
    prompt: Box<dyn Write>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let mut rules = cfg.to_rules();
    if quick {
        rules.winning_sets = 1;
    }
    let match_seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let (first_name, first): (&str, Box<dyn Decider>) = match vs {
        Vs::Human => ("you", Box::new(HumanDecider::new(rules.goal, input, prompt))),
        Vs::Ai => (
            "ai",
            create_strategy("heuristic", match_seed.wrapping_mul(2), &rules, model)?,
        ),
    };
    let rival = create_strategy(
        opponent,
        match_seed.wrapping_mul(2).wrapping_add(1),
        &rules,
        model,
    )?;

    let mut engine = Engine::new(
        Some(match_seed),
        rules,
        [Player::new(first_name, first), Player::new(opponent, rival)],
    )?;
    engine.setup_game();

    writeln!(out, "Seed: {}", engine.seed())?;
    writeln!(
        out,
        "{} vs {}; first to {} set(s), goal {}.",
        first_name, opponent, rules.winning_sets, rules.goal
    )?;

    let mut set_no = 1u32;
    loop {
        writeln!(out, "-- set {} --", set_no)?;
        loop {
            let report = engine.play_turn();
            narrate_turn(&engine, &report, out)?;
            if engine.set_is_over() {
                break;
            }
        }
        match engine.finish_set() {
            SetOutcome::Winner(seat) => writeln!(
                out,
                "{} takes the set ({} - {}).",
                engine.player(seat).name(),
                engine.player(0).sets_won(),
                engine.player(1).sets_won()
            )?,
            SetOutcome::Draw => writeln!(out, "Set drawn, no one scores.")?,
        }
        if engine.game_is_over() {
            break;
        }
        engine.prepare_next_set();
        set_no += 1;
    }

    let winner = engine
        .game_winner()
        .ok_or_else(|| CliError::Engine("game ended without a winner".into()))?;
    writeln!(
        out,
        "{} wins the game {} - {}.",
        engine.player(winner).name(),
        engine.player(winner).sets_won(),
        engine.player(1 - winner).sets_won()
    )?;
    Ok(())
}

fn narrate_turn(engine: &Engine, report: &TurnReport, out: &mut dyn Write) -> std::io::Result<()> {
    let name = engine.player(report.seat).name();
    let Some(drew) = report.drew else {
        return writeln!(out, "{} stands at {}.", name, report.score);
    };
    let mut line = format!("{} drew {}", name, format_card(drew));
    if let Some(played) = report.played {
        line.push_str(&format!(", played {}", format_card(played)));
    }
    line.push_str(&format!(", score {}", report.score));
    if report.stands {
        line.push_str(", stands");
    }
    writeln!(out, "{}.", line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn no_input() -> Box<dyn BufRead> {
        Box::new(Cursor::new(Vec::new()))
    }

    #[test]
    fn ai_quick_match_runs_to_a_winner() {
        let mut out = Vec::new();
        handle_play_command(
            Vs::Ai,
            Some(42),
            true,
            "heuristic",
            None,
            no_input(),
            Box::new(std::io::sink()),
            &mut out,
        )
        .unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Seed: 42"));
        assert!(output.contains("-- set 1 --"));
        assert!(output.contains("wins the game"));
    }

    #[test]
    fn human_match_tolerates_eof_input() {
        // EOF means the human never acts; neutral draws bust them out.
        let mut out = Vec::new();
        handle_play_command(
            Vs::Human,
            Some(5),
            true,
            "heuristic",
            None,
            no_input(),
            Box::new(std::io::sink()),
            &mut out,
        )
        .unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("wins the game"));
    }

    #[test]
    fn human_prompts_go_to_the_prompt_stream() {
        let mut out = Vec::new();
        let mut prompts = Vec::new();
        {
            // Scripted human: stand immediately each set.
            let input: Box<dyn BufRead> = Box::new(Cursor::new(b"\ny\n".repeat(20)));
            struct Tee(std::rc::Rc<std::cell::RefCell<Vec<u8>>>);
            impl Write for Tee {
                fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                    self.0.borrow_mut().extend_from_slice(buf);
                    Ok(buf.len())
                }
                fn flush(&mut self) -> std::io::Result<()> {
                    Ok(())
                }
            }
            let shared = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
            handle_play_command(
                Vs::Human,
                Some(11),
                true,
                "heuristic",
                None,
                input,
                Box::new(Tee(shared.clone())),
                &mut out,
            )
            .unwrap();
            prompts.extend_from_slice(&shared.borrow());
        }
        let prompt_text = String::from_utf8(prompts).unwrap();
        assert!(prompt_text.contains("Stand?"));
        let narration = String::from_utf8(out).unwrap();
        assert!(narration.contains("wins the game"));
    }

    #[test]
    fn unknown_opponent_strategy_fails() {
        let mut out = Vec::new();
        let result = handle_play_command(
            Vs::Ai,
            Some(1),
            true,
            "bogus",
            None,
            no_input(),
            Box::new(std::io::sink()),
            &mut out,
        );
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn seeded_ai_matches_replay_identically() {
        let run = |out: &mut Vec<u8>| {
            handle_play_command(
                Vs::Ai,
                Some(99),
                false,
                "heuristic",
                None,
                Box::new(Cursor::new(Vec::new())),
                Box::new(std::io::sink()),
                out,
            )
            .unwrap();
        };
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();
        run(&mut out1);
        run(&mut out2);
        assert_eq!(out1, out2);
    }
}
