mod load;
mod types;

pub use load::{get_data_dir, load_default, load_from_path, DATA_DIR_NAME, LOCAL_CONFIG_FILE};
pub use types::{
    AppConfig, ContactsSourceConfig, FileSourceConfig, LoggingConfig, OutputConfig,
    RecordsConfig, SourceConfig,
};
