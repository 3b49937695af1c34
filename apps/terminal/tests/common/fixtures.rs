//! Card file fixtures.

/// Two-card deck: one free-text card, one multiple-choice card.
pub const TWO_CARDS: &str = "type\tgerman\tanswer\tdistractors\n\
                             type\tIch esse\tI eat|i eat\tto eat|eating\n\
                             select\tDer Hund\tthe dog\tthe cat";

/// Generate a free-text deck whose every answer is `"a"`.
pub fn free_text_deck(num_cards: usize) -> String {
    let rows: Vec<String> = (0..num_cards)
        .map(|i| format!("type\tKarte {}\ta", i + 1))
        .collect();
    format!("type\tgerman\tanswer\n{}", rows.join("\n"))
}

/// Typed input lines joined as stdin would deliver them.
pub fn typed(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}
