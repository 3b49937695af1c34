//! Core of the vocabulary quiz shared by every front end.
//!
//! Provides:
//! - Tab-separated card file parser
//! - Unbiased shuffle for multiple-choice options
//! - Progress persistence over a key-value slot
//! - Quiz state machine (lives, streaks, card progression)
//! - Presenter trait and user intents for front ends

pub mod error;
pub mod matching;
pub mod parser;
pub mod presenter;
pub mod progress;
pub mod quiz;
pub mod shuffle;
pub mod types;

pub use error::{DataLoadError, PersistenceError, Result};
pub use matching::{is_accepted, normalize_answer};
pub use parser::parse;
pub use presenter::{Feedback, Intent, Outcome, Presenter};
pub use progress::{KeyValueStore, MemoryStore, ProgressStore, PROGRESS_KEY};
pub use quiz::{Evaluation, Phase, Quiz, STARTING_LIVES, STREAK_BONUS_INTERVAL, STREAK_BONUS_LIVES};
pub use shuffle::{shuffle, shuffled};
pub use types::{Card, CardKind, Counters, QuizProgress};
