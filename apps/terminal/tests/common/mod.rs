//! Shared helpers for terminal session tests.
//!
//! Sessions run against an in-memory SQLite store and capture everything
//! the presenter writes.

pub mod fixtures;

use german_flashcards::db::SqliteStore;
use german_flashcards::presenter::TerminalPresenter;
use german_flashcards::session;
use quiz_core::{ProgressStore, Quiz};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Output of one finished session plus the store it left behind.
pub struct SessionRun {
    pub output: String,
    pub store: ProgressStore<SqliteStore>,
}

pub fn fresh_store() -> ProgressStore<SqliteStore> {
    ProgressStore::new(SqliteStore::open_in_memory().expect("in-memory database"))
}

/// Start a quiz over `deck` with `store`, feed it `input`, and collect the screen.
pub fn run_session(deck: &str, store: ProgressStore<SqliteStore>, input: &str) -> SessionRun {
    let mut rng = StdRng::seed_from_u64(17);
    let mut quiz = Quiz::start_with_rng(deck, store, &mut rng).expect("deck parses");
    let mut presenter = TerminalPresenter::new(Vec::new());

    session::drive(&mut quiz, input.as_bytes(), &mut presenter).expect("session runs");

    SessionRun {
        output: String::from_utf8(presenter.into_inner()).expect("utf-8 output"),
        store: quiz.into_store(),
    }
}
