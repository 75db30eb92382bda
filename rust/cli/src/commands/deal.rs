//! Deal inspection: show the hand and first neutral draw a seed yields.

use std::io::Write;

use pazaak_engine::{Dealer, Rules};

use crate::error::CliError;
use crate::ui::format_hand;

pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let s = seed.unwrap_or_else(rand::random);
    let mut dealer = Dealer::new(s, Rules::default())?;
    let hand = dealer.deal_hand();
    let neutral = dealer.draw_neutral();
    writeln!(out, "Seed: {}", s)?;
    writeln!(out, "Hand: {}", format_hand(&hand))?;
    writeln!(out, "First neutral draw: {}", neutral)?;
    Ok(())
}
