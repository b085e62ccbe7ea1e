use std::path::PathBuf;

use clap::Parser;
use contacts2bbdb_core::api::LinePolicy;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePolicyArg {
    Lenient,
    Skip,
    Strict,
}

impl From<LinePolicyArg> for LinePolicy {
    fn from(v: LinePolicyArg) -> Self {
        match v {
            LinePolicyArg::Lenient => LinePolicy::Lenient,
            LinePolicyArg::Skip => LinePolicy::Skip,
            LinePolicyArg::Strict => LinePolicy::Strict,
        }
    }
}

/// Convert the system address book (via the `contacts` program) to BBDB
/// records on stdout.
#[derive(Parser, Debug, Default)]
#[command(name = "contacts2bbdb", version)]
pub struct Args {
    /// Config file (default: ~/.contacts2bbdb/config.toml, then ./contacts2bbdb.toml).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path or name of the contacts program.
    #[arg(long, conflicts_with = "input")]
    pub contacts_bin: Option<String>,

    /// Read captured contacts output from a file instead of running the program.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Handling of lines whose field count differs from the schema.
    #[arg(long, value_enum)]
    pub line_policy: Option<LinePolicyArg>,

    /// creation-date and timestamp for every record: YYYY-MM-DD or "today".
    #[arg(long)]
    pub stamp_date: Option<String>,

    /// Print the contacts command line and exit.
    #[arg(long, default_value_t = false)]
    pub print_command: bool,
}
