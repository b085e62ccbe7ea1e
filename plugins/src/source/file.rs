use std::path::PathBuf;

use async_trait::async_trait;

use contacts2bbdb_core::api::{split_lines, ContactSource, RawLine, SourceError};

use super::output::decode_utf8;

/// Reads output previously captured from the contacts program.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ContactSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch(&self) -> Result<Vec<RawLine>, SourceError> {
        let origin = self.path.display().to_string();
        tracing::info!(path = %origin, "reading captured contacts output");

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                origin: origin.clone(),
                source,
            })?;

        Ok(split_lines(&decode_utf8(bytes, &origin)))
    }
}
