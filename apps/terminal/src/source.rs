//! Card file retrieval.

use quiz_core::DataLoadError;
use std::path::Path;

/// Read the whole card file. This is the only suspending step of a session.
pub async fn fetch_card_file(path: &Path) -> Result<String, DataLoadError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|error| DataLoadError::Unreachable {
            source_name: path.display().to_string(),
            reason: error.to_string(),
        })
}
