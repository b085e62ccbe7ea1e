#[allow(clippy::module_inception)]
pub mod error;
pub mod source;

pub use error::{CliError, ConvertError, SchemaError};
pub use source::SourceError;
