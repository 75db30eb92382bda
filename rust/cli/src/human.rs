//! Interactive decision provider for a human-controlled seat.

use std::io::{BufRead, Write};

use pazaak_engine::{Card, Decider, Decision};

use crate::io_utils::read_input_line;
use crate::ui::{format_card, format_hand};

/// Turns prompted terminal input into decisions.
///
/// Card input is a 1-based hand position; anything else (including EOF
/// and empty input) means "play nothing". The stand prompt accepts
/// y/yes/1; anything else means keep playing. Invalid input is never an
/// error, just inaction.
///
/// Hitting the goal score exactly stands automatically instead of
/// prompting.
pub struct HumanDecider {
    goal: i32,
    input: Box<dyn BufRead>,
    prompt: Box<dyn Write>,
}

impl HumanDecider {
    pub fn new(goal: i32, input: Box<dyn BufRead>, prompt: Box<dyn Write>) -> Self {
        Self { goal, input, prompt }
    }

    fn card_choice(&mut self, hand: &[Card]) -> Option<usize> {
        if hand.is_empty() {
            return None;
        }
        let _ = write!(
            self.prompt,
            "Your hand: {}. Play a card? [1-{}, enter to skip]: ",
            format_hand(hand),
            hand.len()
        );
        let _ = self.prompt.flush();
        let line = read_input_line(&mut self.input)?;
        match line.parse::<usize>() {
            Ok(n) if (1..=hand.len()).contains(&n) => Some(n - 1),
            _ => None,
        }
    }

    fn stand_choice(&mut self) -> bool {
        let _ = write!(self.prompt, "Stand? [y/N]: ");
        let _ = self.prompt.flush();
        match read_input_line(&mut self.input) {
            Some(line) => matches!(line.to_ascii_lowercase().as_str(), "y" | "yes" | "1"),
            None => false,
        }
    }
}

impl Decider for HumanDecider {
    fn decide(
        &mut self,
        hand: &[Card],
        self_score: i32,
        opp_score: i32,
        opp_stands: bool,
    ) -> Decision {
        let _ = writeln!(
            self.prompt,
            "Your score: {}. Opponent: {}{}.",
            self_score,
            opp_score,
            if opp_stands { " (stands)" } else { "" }
        );
        if self_score == self.goal {
            let _ = writeln!(self.prompt, "Standing on {}.", self_score);
            return Decision::stand();
        }
        if let Some(index) = self.card_choice(hand) {
            let reached = self_score + i32::from(hand[index]);
            let _ = writeln!(
                self.prompt,
                "Playing {} for {}.",
                format_card(hand[index]),
                reached
            );
            if reached == self.goal {
                let _ = writeln!(self.prompt, "Standing on {}.", reached);
                return Decision::play_and_stand(index);
            }
            if self.stand_choice() {
                Decision::play_and_stand(index)
            } else {
                Decision::play(index)
            }
        } else if self.stand_choice() {
            Decision::stand()
        } else {
            Decision::pass()
        }
    }

    fn name(&self) -> &str {
        "human"
    }
}
