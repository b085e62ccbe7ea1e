//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `contacts2bbdb_core::api` instead of reaching into internal modules.

pub use crate::bbdb::{render_record, BbdbRecord, Phone, PhoneLabel, RecordStamp, HEADER_LINES};
pub use crate::config::{
    load_default, AppConfig, ContactsSourceConfig, FileSourceConfig, LoggingConfig,
    OutputConfig, RecordsConfig, SourceConfig,
};
pub use crate::convert::{convert, write_bbdb, ConvertOptions, ConvertOutcome};
pub use crate::error::{CliError, ConvertError, SchemaError, SourceError};
pub use crate::record::{decode_line, ContactRecord, Decoded, LinePolicy};
pub use crate::schema::{validate_delimiter, Field, FieldSchema, SchemaEntry, DEFAULT_DELIMITER};
pub use crate::source::{split_lines, ContactSource, ContactsCommand, RawLine};
