use thiserror::Error;

use super::source::SourceError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("conversion failed: {0}")]
    Convert(#[from] ConvertError),
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("contact source failed: {0}")]
    Source(#[from] SourceError),
    #[error("malformed line {line}: expected {expected} fields, found {found}")]
    MalformedLine {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("write failed: {0}")]
    Output(#[source] std::io::Error),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SchemaError {
    #[error("field schema is empty")]
    Empty,
    #[error("duplicate short key '{0}'")]
    DuplicateKey(String),
    #[error("duplicate field '{0}'")]
    DuplicateField(&'static str),
    #[error("unknown short key '{0}'")]
    UnknownKey(String),
    #[error("invalid delimiter {0:?}: line terminators cannot separate fields")]
    InvalidDelimiter(char),
}
