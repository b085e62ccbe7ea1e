use async_trait::async_trait;

use crate::error::SourceError;

use super::RawLine;

/// Anything that can hand back the contacts program's output, one line per
/// contact, in the column order of the schema it was built with.
#[async_trait]
pub trait ContactSource: Send + Sync {
    fn name(&self) -> &str;
    async fn fetch(&self) -> Result<Vec<RawLine>, SourceError>;
}
