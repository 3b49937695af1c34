//! Quiz state machine.
//!
//! ```text
//! start ─▶ Presenting ──submit──▶ Evaluated ──advance──▶ Presenting | Completed
//!                         └──────▶ GameOver (lives <= 0)
//! restart: any phase ─▶ Presenting | Completed
//! ```
//!
//! The card index moves forward when an answer is submitted, not when the
//! user continues, so saved progress always points at the next unseen card.

use crate::error::Result;
use crate::parser::parse;
use crate::progress::{KeyValueStore, ProgressStore};
use crate::types::{Card, QuizProgress};
use rand::Rng;

/// Lives at the start of a fresh quiz.
pub const STARTING_LIVES: i32 = 5;

/// Every this many consecutive correct answers award a bonus.
pub const STREAK_BONUS_INTERVAL: u32 = 5;

/// Lives added by a streak bonus.
pub const STREAK_BONUS_LIVES: i32 = 2;

/// Where the quiz currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for an answer to the current card.
    Presenting,
    /// An answer was checked; waiting for the user to continue.
    Evaluated,
    /// Every card has been answered.
    Completed,
    /// Out of lives.
    GameOver,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::GameOver)
    }
}

/// Result of checking one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// Index of the card that was answered.
    pub card_index: usize,
    pub is_correct: bool,
    /// Whether this answer completed a streak and earned bonus lives.
    pub streak_bonus: bool,
}

/// Owns the cards and the progress of one quiz session.
#[derive(Debug)]
pub struct Quiz<S> {
    cards: Vec<Card>,
    progress: QuizProgress,
    phase: Phase,
    last: Option<Evaluation>,
    store: ProgressStore<S>,
}

impl<S: KeyValueStore> Quiz<S> {
    /// Parse card file content and restore saved progress.
    pub fn start(content: &str, store: ProgressStore<S>) -> Result<Self> {
        Self::start_with_rng(content, store, &mut rand::thread_rng())
    }

    /// Like [`Quiz::start`], shuffling options with `rng`.
    pub fn start_with_rng<R: Rng + ?Sized>(
        content: &str,
        store: ProgressStore<S>,
        rng: &mut R,
    ) -> Result<Self> {
        let cards = parse(content, rng)?;
        Ok(Self::new(cards, store))
    }

    /// Build from parsed cards, restoring saved progress if present.
    pub fn new(cards: Vec<Card>, store: ProgressStore<S>) -> Self {
        let progress = match store.load() {
            Some(progress) => {
                tracing::info!(?progress, "progress restored");
                progress
            }
            None => QuizProgress::default(),
        };
        let phase = Self::resume_phase(&progress, cards.len());

        Self {
            cards,
            progress,
            phase,
            last: None,
            store,
        }
    }

    fn resume_phase(progress: &QuizProgress, card_count: usize) -> Phase {
        if progress.is_out_of_lives() {
            Phase::GameOver
        } else if progress.card_index >= card_count {
            Phase::Completed
        } else {
            Phase::Presenting
        }
    }

    /// Check an answer for the presented card.
    ///
    /// Returns `None` when no card is being presented.
    pub fn submit_answer(&mut self, raw: &str) -> Option<Evaluation> {
        if self.phase != Phase::Presenting {
            tracing::debug!(phase = ?self.phase, "answer ignored");
            return None;
        }

        let card_index = self.progress.card_index;
        let is_correct = self.cards.get(card_index)?.accepts(raw);
        let mut streak_bonus = false;

        let progress = &mut self.progress;
        if is_correct {
            progress.correct_count = progress.correct_count.saturating_add(1);
            progress.streak = progress.streak.saturating_add(1);
            if progress.streak % STREAK_BONUS_INTERVAL == 0 {
                progress.lives = progress.lives.saturating_add(STREAK_BONUS_LIVES);
                streak_bonus = true;
            }
        } else {
            progress.incorrect_count = progress.incorrect_count.saturating_add(1);
            progress.lives = progress.lives.saturating_sub(1);
            progress.streak = 0;
        }
        progress.card_index = progress.card_index.saturating_add(1);

        self.store.save(&self.progress);

        self.phase = if self.progress.is_out_of_lives() {
            Phase::GameOver
        } else {
            Phase::Evaluated
        };

        let evaluation = Evaluation {
            card_index,
            is_correct,
            streak_bonus,
        };
        self.last = Some(evaluation);
        Some(evaluation)
    }

    /// Move past an evaluated card. Returns `false` outside `Evaluated`.
    pub fn advance(&mut self) -> bool {
        if self.phase != Phase::Evaluated {
            tracing::debug!(phase = ?self.phase, "continue ignored");
            return false;
        }
        self.last = None;
        self.phase = Self::resume_phase(&self.progress, self.cards.len());
        true
    }

    /// Reset progress to defaults and clear the saved record.
    pub fn restart(&mut self) {
        self.progress = QuizProgress::default();
        self.store.clear();
        self.last = None;
        self.phase = Self::resume_phase(&self.progress, self.cards.len());
        tracing::info!(cards = self.cards.len(), "quiz restarted");
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn progress(&self) -> &QuizProgress {
        &self.progress
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Evaluation of the most recent answer while it is on screen.
    pub fn last_evaluation(&self) -> Option<Evaluation> {
        self.last
    }

    /// The card on screen: the one just answered, or the one awaiting an answer.
    pub fn current_card(&self) -> Option<&Card> {
        match (self.last, self.phase) {
            (Some(last), _) => self.cards.get(last.card_index),
            (None, Phase::Presenting) => self.cards.get(self.progress.card_index),
            _ => None,
        }
    }

    pub fn store(&self) -> &ProgressStore<S> {
        &self.store
    }

    /// Give the progress store back, e.g. to resume in a later session.
    pub fn into_store(self) -> ProgressStore<S> {
        self.store
    }
}
