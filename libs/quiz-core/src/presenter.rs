//! Boundary between the quiz and whatever draws it.
//!
//! A front end implements [`Presenter`] and forwards exactly three intents:
//! submit an answer, continue, restart.

use crate::error::DataLoadError;
use crate::progress::KeyValueStore;
use crate::quiz::{Phase, Quiz};
use crate::types::{Card, Counters};

/// User input forwarded to the quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SubmitAnswer(String),
    Continue,
    Restart,
}

/// How a quiz ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    GameOver,
}

/// What to show after an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback<'a> {
    pub card: &'a Card,
    pub is_correct: bool,
    pub streak_bonus: bool,
}

impl Feedback<'_> {
    pub fn correct_answer_text(&self) -> String {
        self.card.correct_answer_text()
    }
}

/// Renders quiz output.
pub trait Presenter {
    type Error;

    fn render_card(&mut self, card: &Card, hint: Option<&str>) -> Result<(), Self::Error>;
    fn render_feedback(&mut self, feedback: &Feedback<'_>) -> Result<(), Self::Error>;
    fn render_counters(&mut self, counters: Counters) -> Result<(), Self::Error>;
    fn render_terminal(&mut self, outcome: Outcome) -> Result<(), Self::Error>;
    fn render_failure(&mut self, error: &DataLoadError) -> Result<(), Self::Error>;
}

impl<S: KeyValueStore> Quiz<S> {
    /// Apply `intent` and render the new state if it was accepted.
    pub fn dispatch<P: Presenter>(&mut self, intent: Intent, presenter: &mut P) -> Result<bool, P::Error> {
        let accepted = match intent {
            Intent::SubmitAnswer(text) => self.submit_answer(&text).is_some(),
            Intent::Continue => self.advance(),
            Intent::Restart => {
                self.restart();
                true
            }
        };

        if accepted {
            self.render(presenter)?;
        }
        Ok(accepted)
    }

    /// Render the current phase.
    pub fn render<P: Presenter>(&self, presenter: &mut P) -> Result<(), P::Error> {
        presenter.render_counters(self.progress().counters())?;

        if let Some(feedback) = self.feedback() {
            presenter.render_feedback(&feedback)?;
        }

        match self.phase() {
            Phase::Presenting => {
                if let Some(card) = self.current_card() {
                    presenter.render_card(card, card.hint().as_deref())?;
                }
            }
            Phase::Evaluated => {}
            Phase::Completed => presenter.render_terminal(Outcome::Completed)?,
            Phase::GameOver => presenter.render_terminal(Outcome::GameOver)?,
        }
        Ok(())
    }

    /// Feedback for the answer currently on screen.
    pub fn feedback(&self) -> Option<Feedback<'_>> {
        let last = self.last_evaluation()?;
        Some(Feedback {
            card: self.cards().get(last.card_index)?,
            is_correct: last.is_correct,
            streak_bonus: last.streak_bonus,
        })
    }
}
