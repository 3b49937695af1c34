//! Core types for the quiz.

use crate::matching;
use crate::shuffle::shuffled;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How a card is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    FreeText,
    MultipleChoice,
}

impl Default for CardKind {
    fn default() -> Self {
        Self::FreeText
    }
}

impl CardKind {
    /// Map the `type` column of a card file. Only `select` means multiple choice.
    pub fn from_column(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("select") {
            Self::MultipleChoice
        } else {
            Self::FreeText
        }
    }
}

/// One quiz item. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    kind: CardKind,
    prompt: String,
    correct_answers: Vec<String>,
    distractors: Vec<String>,
    options: Vec<String>,
}

impl Card {
    /// Build a card. Answers and distractors are trimmed; empty distractors
    /// are dropped. Multiple-choice options are shuffled with `rng`.
    pub fn new<R: Rng + ?Sized>(
        kind: CardKind,
        prompt: impl Into<String>,
        correct_answers: Vec<String>,
        distractors: Vec<String>,
        rng: &mut R,
    ) -> Self {
        let prompt: String = prompt.into();
        let mut correct_answers: Vec<String> = correct_answers
            .into_iter()
            .map(|a| a.trim().to_string())
            .collect();
        if correct_answers.is_empty() {
            correct_answers.push(String::new());
        }

        let distractors: Vec<String> = distractors
            .into_iter()
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .collect();

        let options = match kind {
            CardKind::MultipleChoice => {
                shuffled(Self::option_set(&correct_answers, &distractors), rng)
            }
            CardKind::FreeText => Vec::new(),
        };

        Self {
            kind,
            prompt: prompt.trim().to_string(),
            correct_answers,
            distractors,
            options,
        }
    }

    /// Free-text card; never has options.
    pub fn free_text(prompt: &str, correct_answers: &[&str], distractors: &[&str]) -> Self {
        Self::new(
            CardKind::FreeText,
            prompt,
            to_owned(correct_answers),
            to_owned(distractors),
            &mut rand::thread_rng(),
        )
    }

    /// Multiple-choice card with options shuffled by `rng`.
    pub fn multiple_choice<R: Rng + ?Sized>(
        prompt: &str,
        correct_answers: &[&str],
        distractors: &[&str],
        rng: &mut R,
    ) -> Self {
        Self::new(
            CardKind::MultipleChoice,
            prompt,
            to_owned(correct_answers),
            to_owned(distractors),
            rng,
        )
    }

    // Answers first, then distractors; first occurrence wins.
    fn option_set(correct_answers: &[String], distractors: &[String]) -> Vec<String> {
        let mut options: Vec<String> = Vec::new();
        for candidate in correct_answers.iter().chain(distractors) {
            if !candidate.is_empty() && !options.contains(candidate) {
                options.push(candidate.clone());
            }
        }
        if options.is_empty() {
            // Blank answer column: keep the invariant that options is non-empty.
            options.push(correct_answers[0].clone());
        }
        options
    }

    pub fn kind(&self) -> CardKind {
        self.kind
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn correct_answers(&self) -> &[String] {
        &self.correct_answers
    }

    pub fn distractors(&self) -> &[String] {
        &self.distractors
    }

    /// Shuffled choices. Empty for free-text cards.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Whether `raw` (trimmed, case-sensitive) is an accepted answer.
    pub fn accepts(&self, raw: &str) -> bool {
        matching::is_accepted(raw, &self.correct_answers)
    }

    /// Distractors shown as a hint on free-text cards.
    pub fn hint(&self) -> Option<String> {
        match self.kind {
            CardKind::FreeText if !self.distractors.is_empty() => {
                Some(self.distractors.join(", "))
            }
            _ => None,
        }
    }

    /// Accepted answers joined for display.
    pub fn correct_answer_text(&self) -> String {
        self.correct_answers.join(", ")
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Quiz progress persisted between sessions.
///
/// Fields missing from a stored record fall back to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizProgress {
    #[serde(rename = "currentCardIndex")]
    pub card_index: usize,
    pub correct_count: u32,
    pub incorrect_count: u32,
    pub lives: i32,
    pub streak: u32,
}

impl Default for QuizProgress {
    fn default() -> Self {
        Self {
            card_index: 0,
            correct_count: 0,
            incorrect_count: 0,
            lives: crate::quiz::STARTING_LIVES,
            streak: 0,
        }
    }
}

impl QuizProgress {
    pub fn is_out_of_lives(&self) -> bool {
        self.lives <= 0
    }

    pub fn counters(&self) -> Counters {
        Counters {
            lives: self.lives,
            correct: self.correct_count,
            incorrect: self.incorrect_count,
            streak: self.streak,
        }
    }
}

/// Scoreboard shown after every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counters {
    pub lives: i32,
    pub correct: u32,
    pub incorrect: u32,
    pub streak: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn kind_from_column_is_case_insensitive() {
        assert_eq!(CardKind::from_column("select"), CardKind::MultipleChoice);
        assert_eq!(CardKind::from_column("SELECT"), CardKind::MultipleChoice);
        assert_eq!(CardKind::from_column("type"), CardKind::FreeText);
        assert_eq!(CardKind::from_column(""), CardKind::FreeText);
        assert_eq!(CardKind::from_column("anything"), CardKind::FreeText);
    }

    #[test]
    fn free_text_has_no_options() {
        let card = Card::free_text("Ich esse", &["I eat", "i eat"], &["to eat"]);
        assert!(card.options().is_empty());
        assert_eq!(card.hint(), Some("to eat".to_string()));
    }

    #[test]
    fn multiple_choice_options_cover_answers_and_distractors() {
        let mut rng = StdRng::seed_from_u64(7);
        let card = Card::multiple_choice("Der Hund", &["the dog"], &["the cat", "the bird"], &mut rng);

        let mut options = card.options().to_vec();
        options.sort();
        assert_eq!(options, vec!["the bird", "the cat", "the dog"]);
        assert_eq!(card.hint(), None);
    }

    #[test]
    fn duplicate_option_collapses() {
        let mut rng = StdRng::seed_from_u64(1);
        let card = Card::multiple_choice("Der Hund", &["the dog"], &["the dog", "the cat"], &mut rng);
        assert_eq!(card.options().len(), 2);
        assert!(card.options().contains(&"the dog".to_string()));
    }

    #[test]
    fn blank_answer_card_is_constructible_but_unsatisfiable() {
        let card = Card::free_text("Leer", &[""], &[]);
        assert_eq!(card.correct_answers(), &["".to_string()]);
        assert!(!card.accepts(""));
        assert!(!card.accepts("   "));

        let mut rng = StdRng::seed_from_u64(3);
        let choice = Card::multiple_choice("Leer", &[""], &[], &mut rng);
        assert_eq!(choice.options().len(), 1);
    }

    #[test]
    fn correct_answer_text_joins_answers() {
        let card = Card::free_text("Ich esse", &["I eat", "i eat"], &[]);
        assert_eq!(card.correct_answer_text(), "I eat, i eat");
    }

    #[test]
    fn progress_defaults() {
        let progress = QuizProgress::default();
        assert_eq!(progress.card_index, 0);
        assert_eq!(progress.lives, 5);
        assert!(!progress.is_out_of_lives());
    }

    #[test]
    fn progress_serializes_with_stored_field_names() {
        let progress = QuizProgress {
            card_index: 3,
            correct_count: 2,
            incorrect_count: 1,
            lives: 4,
            streak: 2,
        };
        let json = serde_json::to_value(progress).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "currentCardIndex": 3,
                "correctCount": 2,
                "incorrectCount": 1,
                "lives": 4,
                "streak": 2
            })
        );
    }
}
