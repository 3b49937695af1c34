//! Tab-separated card file parser.
//!
//! # Format
//! ```text
//! type	german	answer	distractors
//! select	Der Hund	the dog	the cat|the bird
//! type	Ich esse	I eat|i eat	to eat|eating
//! ```
//!
//! Header names are matched case-insensitively. `answer` and `distractors`
//! hold `|`-separated lists. The `distractors` column is optional.

use crate::error::{DataLoadError, Result};
use crate::types::{Card, CardKind};
use rand::Rng;

const FIELD_SEPARATOR: char = '\t';
const LIST_SEPARATOR: char = '|';

/// Parse card file content into cards, one per data row, in row order.
pub fn parse<R: Rng + ?Sized>(content: &str, rng: &mut R) -> Result<Vec<Card>> {
    let content = content.trim();
    if content.is_empty() {
        return Err(DataLoadError::MissingHeader);
    }

    let mut lines = content.split('\n');
    let header = lines.next().map(Header::parse).ok_or(DataLoadError::MissingHeader)?;

    let cards = lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| header.card_from_row(line, &mut *rng))
        .collect::<Vec<_>>();

    tracing::info!(count = cards.len(), "cards loaded");
    Ok(cards)
}

/// Column positions resolved from the header row.
struct Header {
    kind: Option<usize>,
    prompt: Option<usize>,
    answer: Option<usize>,
    distractors: Option<usize>,
}

impl Header {
    fn parse(line: &str) -> Self {
        let names: Vec<String> = line
            .split(FIELD_SEPARATOR)
            .map(|name| name.trim().to_lowercase())
            .collect();
        let position = |wanted: &str| names.iter().position(|name| name == wanted);

        Self {
            kind: position("type"),
            prompt: position("german"),
            answer: position("answer"),
            distractors: position("distractors"),
        }
    }

    fn card_from_row<R: Rng + ?Sized>(&self, line: &str, rng: &mut R) -> Card {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();

        let kind = CardKind::from_column(field(&fields, self.kind));
        let answers = split_list(field(&fields, self.answer));
        let distractors = match field(&fields, self.distractors) {
            "" => Vec::new(),
            value => split_list(value),
        };

        Card::new(kind, field(&fields, self.prompt), answers, distractors, rng)
    }
}

// Short rows and absent columns yield an empty field.
fn field<'a>(fields: &[&'a str], column: Option<usize>) -> &'a str {
    column.and_then(|i| fields.get(i).copied()).unwrap_or("")
}

/// Split a `|`-separated list, trimming every entry.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(LIST_SEPARATOR)
        .map(|item| item.trim().to_string())
        .collect()
}
