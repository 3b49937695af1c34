pub mod config;
pub mod db;
pub mod presenter;
pub mod session;
pub mod source;

use quiz_core::{Presenter, ProgressStore, Quiz, PROGRESS_KEY};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::db::{DbError, SqliteStore};
use crate::presenter::TerminalPresenter;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env().with_args(std::env::args().skip(1));

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(card_file = %config.card_file.display(), "loading cards");
    let content = source::fetch_card_file(&config.card_file).await;

    let stdout = std::io::stdout();
    let mut presenter = TerminalPresenter::new(stdout.lock());

    let store = open_store(&config)?;
    let quiz = content.and_then(|content| Quiz::start(&content, ProgressStore::new(store)));
    let mut quiz = match quiz {
        Ok(quiz) => quiz,
        Err(error) => {
            presenter.render_failure(&error)?;
            return Err(error.into());
        }
    };

    let stdin = std::io::stdin();
    session::drive(&mut quiz, stdin.lock(), &mut presenter)?;
    Ok(())
}

/// Open the progress database, or an in-memory one when the file cannot be opened.
fn open_store(config: &Config) -> Result<SqliteStore, DbError> {
    let store = SqliteStore::open(&config.db_path).or_else(|error| {
        tracing::warn!(path = %config.db_path.display(), %error, "progress database unavailable, progress will not be kept");
        SqliteStore::open_in_memory()
    })?;

    if let Ok(Some(saved_at)) = store.updated_at(PROGRESS_KEY) {
        tracing::info!(%saved_at, "found saved progress");
    }
    Ok(store)
}
