use serde::{Deserialize, Serialize};

use crate::bbdb::DEFAULT_STAMP_DATE;
use crate::record::LinePolicy;
use crate::schema::DEFAULT_DELIMITER;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub records: RecordsConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// Messages produced while loading, logged once tracing is up.
    #[serde(skip)]
    pub notices: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr. Stdout carries the BBDB records.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, log to a file under `directory` (or OS temp dir if unset).
    #[serde(default)]
    pub file: bool,

    /// EnvFilter string, e.g. "warn" or "contacts2bbdb_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    #[serde(default)]
    pub directory: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

fn default_logging_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: false,
            level: default_logging_level(),
            directory: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "provider")]
pub enum SourceConfig {
    #[serde(rename = "contacts")]
    Contacts(ContactsSourceConfig),
    #[serde(rename = "file")]
    File(FileSourceConfig),
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::Contacts(ContactsSourceConfig::default())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactsSourceConfig {
    #[serde(default = "default_program")]
    pub program: String,

    /// Flags selecting all contacts in long format.
    #[serde(default = "default_list_flags")]
    pub list_flags: Vec<String>,

    #[serde(default = "default_format_flag")]
    pub format_flag: String,
}

fn default_program() -> String {
    "contacts".to_string()
}

fn default_list_flags() -> Vec<String> {
    vec!["-H".to_string(), "-l".to_string()]
}

fn default_format_flag() -> String {
    "-f".to_string()
}

impl Default for ContactsSourceConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            list_flags: default_list_flags(),
            format_flag: default_format_flag(),
        }
    }
}

/// Output of a previous contacts run, captured to a file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileSourceConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordsConfig {
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    #[serde(default)]
    pub line_policy: LinePolicy,

    /// Short keys to request, in order. Unset means the full standard schema.
    #[serde(default)]
    pub fields: Option<Vec<String>>,
}

fn default_delimiter() -> char {
    DEFAULT_DELIMITER
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            line_policy: LinePolicy::default(),
            fields: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// `YYYY-MM-DD` or `today`.
    #[serde(default = "default_stamp_date")]
    pub creation_date: String,

    #[serde(default = "default_stamp_date")]
    pub timestamp: String,
}

fn default_stamp_date() -> String {
    DEFAULT_STAMP_DATE.to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            creation_date: default_stamp_date(),
            timestamp: default_stamp_date(),
        }
    }
}
