//! Plain-text rendering of the quiz.

use quiz_core::{
    Card, CardKind, Counters, DataLoadError, Feedback, Outcome, Phase, Presenter, STREAK_BONUS_LIVES,
};
use std::io::{self, Write};

/// Writes the quiz screen to any [`Write`], usually stdout.
pub struct TerminalPresenter<W> {
    out: W,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Tell the user what input the current phase expects.
    pub fn prompt(&mut self, phase: Phase, card: Option<&Card>) -> io::Result<()> {
        let text = match (phase, card.map(Card::kind)) {
            (Phase::Presenting, Some(CardKind::MultipleChoice)) => "Pick a number or type the answer:",
            (Phase::Presenting, _) => "Type the translation:",
            (Phase::Evaluated, _) => "Press Enter to continue.",
            (Phase::Completed | Phase::GameOver, _) => "Type r to restart or q to quit.",
        };
        writeln!(self.out, "{text}")?;
        write!(self.out, "> ")?;
        self.out.flush()
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    type Error = io::Error;

    fn render_card(&mut self, card: &Card, hint: Option<&str>) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", card.prompt())?;
        if let Some(hint) = hint {
            writeln!(self.out, "💡 Hint: {hint}")?;
        }
        for (i, option) in card.options().iter().enumerate() {
            writeln!(self.out, "  {}) {}", i + 1, option)?;
        }
        Ok(())
    }

    fn render_feedback(&mut self, feedback: &Feedback<'_>) -> io::Result<()> {
        if feedback.is_correct {
            writeln!(self.out, "✅ Correct!")?;
        } else {
            writeln!(
                self.out,
                "❌ Incorrect! Correct answer: {}",
                feedback.correct_answer_text()
            )?;
        }
        if feedback.streak_bonus {
            writeln!(self.out, "🎉 Streak bonus! +{STREAK_BONUS_LIVES} ❤️")?;
        }
        Ok(())
    }

    fn render_counters(&mut self, counters: Counters) -> io::Result<()> {
        writeln!(
            self.out,
            "{} ❤️ | Correct: {} | Incorrect: {} | Streak: {}",
            counters.lives, counters.correct, counters.incorrect, counters.streak
        )
    }

    fn render_terminal(&mut self, outcome: Outcome) -> io::Result<()> {
        match outcome {
            Outcome::Completed => writeln!(self.out, "🎉 Lesson Complete!"),
            Outcome::GameOver => writeln!(self.out, "💀 Game Over!"),
        }
    }

    fn render_failure(&mut self, error: &DataLoadError) -> io::Result<()> {
        writeln!(self.out, "Failed to load card file: {error}")
    }
}
