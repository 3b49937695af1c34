//! Interactive loop: typed lines in, rendered quiz out.

use crate::presenter::TerminalPresenter;
use quiz_core::{Card, CardKind, Intent, KeyValueStore, Phase, Quiz};
use std::io::{self, BufRead, Write};

/// What a typed line means in the current phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Intent(Intent),
    Quit,
    Ignore,
}

/// Map one typed line to a command.
///
/// `:restart` and `:quit` work everywhere. Multiple-choice cards accept the
/// option number as well as the option text.
pub fn interpret(line: &str, phase: Phase, card: Option<&Card>) -> Command {
    let line = line.trim();
    match line {
        ":quit" => return Command::Quit,
        ":restart" => return Command::Intent(Intent::Restart),
        _ => {}
    }

    match phase {
        Phase::Presenting if line.is_empty() => Command::Ignore,
        Phase::Presenting => {
            let answer = card
                .filter(|card| card.kind() == CardKind::MultipleChoice)
                .and_then(|card| pick_option(card, line))
                .unwrap_or(line);
            Command::Intent(Intent::SubmitAnswer(answer.to_string()))
        }
        Phase::Evaluated => match line {
            "" | "c" => Command::Intent(Intent::Continue),
            _ => Command::Ignore,
        },
        Phase::Completed | Phase::GameOver => match line {
            "r" => Command::Intent(Intent::Restart),
            "q" => Command::Quit,
            _ => Command::Ignore,
        },
    }
}

fn pick_option<'a>(card: &'a Card, line: &str) -> Option<&'a str> {
    // Option text wins over option numbers.
    if let Some(option) = card.options().iter().find(|option| *option == line) {
        return Some(option.as_str());
    }
    let number: usize = line.parse().ok()?;
    card.options()
        .get(number.checked_sub(1)?)
        .map(String::as_str)
}

/// Run the quiz until the user quits or input ends.
pub fn drive<S, R, W>(
    quiz: &mut Quiz<S>,
    input: R,
    presenter: &mut TerminalPresenter<W>,
) -> io::Result<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    quiz.render(presenter)?;
    presenter.prompt(quiz.phase(), quiz.current_card())?;

    for line in input.lines() {
        let line = line?;
        match interpret(&line, quiz.phase(), quiz.current_card()) {
            Command::Quit => break,
            Command::Intent(intent) => {
                quiz.dispatch(intent, presenter)?;
            }
            Command::Ignore => tracing::debug!(%line, "input ignored"),
        }
        presenter.prompt(quiz.phase(), quiz.current_card())?;
    }

    tracing::info!(progress = ?quiz.progress(), "session ended");
    Ok(())
}
