//! Terminal output helpers shared by the subcommands.

use std::io::Write;

use pazaak_engine::Card;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Signed card value, always with an explicit sign ("+3", "-2").
pub fn format_card(card: Card) -> String {
    format!("{:+}", card)
}

/// Hand as a bracketed list: "[+3 -2 +5]".
pub fn format_hand(hand: &[Card]) -> String {
    let inner: Vec<String> = hand.iter().map(|&c| format_card(c)).collect();
    format!("[{}]", inner.join(" "))
}
