use std::path::{Path, PathBuf};

use super::types::{AppConfig, SourceConfig};

pub const DATA_DIR_NAME: &str = ".contacts2bbdb";
pub const LOCAL_CONFIG_FILE: &str = "contacts2bbdb.toml";

/// Get the default data directory: ~/.contacts2bbdb
pub fn get_data_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(PathBuf::from(home).join(DATA_DIR_NAME))
}

pub fn load_from_path(path: &Path) -> anyhow::Result<AppConfig> {
    let s = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("read {} failed: {e}", path.display()))?;
    let cfg = toml::from_str::<AppConfig>(&s)
        .map_err(|e| anyhow::anyhow!("parse {} failed: {e}", path.display()))?;
    Ok(cfg)
}

/// Loads configuration and applies environment overrides.
///
/// Lookup: `explicit` path, then `~/.contacts2bbdb/config.toml`, then
/// `./contacts2bbdb.toml`, else built-in defaults.
pub fn load_default(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    let mut cfg = match explicit {
        Some(path) => load_from_path(path)?,
        None => {
            let home_config = get_data_dir().ok().map(|d| d.join("config.toml"));
            let local_config = Path::new(LOCAL_CONFIG_FILE);

            match home_config.filter(|p| p.exists()) {
                Some(p) => load_from_path(&p)?,
                None if local_config.exists() => load_from_path(local_config)?,
                None => AppConfig::default(),
            }
        }
    };

    apply_env_overrides(&mut cfg, |k| std::env::var(k).ok())?;
    Ok(cfg)
}

/// Runs before logging is initialized: invalid values are errors, and
/// anything worth reporting goes to `cfg.notices` for the caller to log.
fn apply_env_overrides<F>(cfg: &mut AppConfig, var: F) -> anyhow::Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let non_blank = |k: &str| var(k).filter(|v| !v.trim().is_empty());

    if let Some(v) = non_blank("CONTACTS2BBDB_BIN") {
        match cfg.source {
            SourceConfig::Contacts(ref mut c) => c.program = v,
            SourceConfig::File(_) => cfg
                .notices
                .push("CONTACTS2BBDB_BIN ignored: file source configured".to_string()),
        }
    }
    if let Some(v) = non_blank("CONTACTS2BBDB_STAMP_DATE") {
        cfg.output.creation_date = v.clone();
        cfg.output.timestamp = v;
    }
    if let Some(v) = non_blank("CONTACTS2BBDB_LINE_POLICY") {
        cfg.records.line_policy = v
            .parse()
            .map_err(|e| anyhow::anyhow!("CONTACTS2BBDB_LINE_POLICY: {e}"))?;
    }
    if let Some(v) = non_blank("CONTACTS2BBDB_LOG_LEVEL") {
        cfg.logging.level = v;
    }
    Ok(())
}
