//! Card file loading tests.

use german_flashcards::source::fetch_card_file;
use quiz_core::{DataLoadError, MemoryStore, ProgressStore, Quiz};

#[tokio::test]
async fn test_missing_file_is_unreachable() {
    let path = std::env::temp_dir().join("german-flashcards-does-not-exist.tsv");
    let result = fetch_card_file(&path).await;
    assert!(matches!(result, Err(DataLoadError::Unreachable { .. })));
}

#[tokio::test]
async fn test_reads_and_starts_quiz() {
    let path = std::env::temp_dir().join(format!("german-flashcards-{}.tsv", std::process::id()));
    tokio::fs::write(&path, "type\tgerman\tanswer\ntype\tDanke\tthanks\n")
        .await
        .unwrap();

    let content = fetch_card_file(&path).await.unwrap();
    let quiz = Quiz::start(&content, ProgressStore::new(MemoryStore::new())).unwrap();
    assert_eq!(quiz.cards().len(), 1);
    assert_eq!(quiz.cards()[0].prompt(), "Danke");

    tokio::fs::remove_file(&path).await.ok();
}

#[tokio::test]
async fn test_empty_file_has_no_header() {
    let path = std::env::temp_dir().join(format!("german-flashcards-empty-{}.tsv", std::process::id()));
    tokio::fs::write(&path, "").await.unwrap();

    let content = fetch_card_file(&path).await.unwrap();
    let result = Quiz::start(&content, ProgressStore::new(MemoryStore::new()));
    assert!(matches!(result, Err(DataLoadError::MissingHeader)));

    tokio::fs::remove_file(&path).await.ok();
}
