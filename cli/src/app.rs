//! Applies CLI overrides to the loaded config, builds the source and runs the
//! conversion onto stdout.
use std::io::Write;

use contacts2bbdb_core::api as core_api;
use contacts2bbdb_plugins::factory;

use crate::commands::cli::Args;

/// Everything the run needs once config and flags are merged.
#[derive(Debug)]
pub struct RunPlan {
    pub schema: core_api::FieldSchema,
    pub source: core_api::SourceConfig,
    pub options: core_api::ConvertOptions,
}

pub fn apply_overrides(cfg: &mut core_api::AppConfig, args: &Args) {
    if let Some(path) = &args.input {
        cfg.source = core_api::SourceConfig::File(core_api::FileSourceConfig {
            path: path.to_string_lossy().to_string(),
        });
    }
    if let Some(bin) = &args.contacts_bin {
        match cfg.source {
            core_api::SourceConfig::Contacts(ref mut c) => c.program = bin.clone(),
            core_api::SourceConfig::File(_) => {
                cfg.source = core_api::SourceConfig::Contacts(core_api::ContactsSourceConfig {
                    program: bin.clone(),
                    ..core_api::ContactsSourceConfig::default()
                });
            }
        }
    }
    if let Some(policy) = args.line_policy {
        cfg.records.line_policy = policy.into();
    }
    if let Some(date) = &args.stamp_date {
        cfg.output.creation_date = date.clone();
        cfg.output.timestamp = date.clone();
    }
}

pub fn build_plan(cfg: &core_api::AppConfig) -> Result<RunPlan, core_api::CliError> {
    let schema = match &cfg.records.fields {
        Some(keys) => core_api::FieldSchema::from_short_keys(keys),
        None => Ok(core_api::FieldSchema::standard()),
    }
    .map_err(|e| core_api::CliError::Config(e.to_string()))?;

    let delimiter = core_api::validate_delimiter(cfg.records.delimiter)
        .map_err(|e| core_api::CliError::Config(e.to_string()))?;

    let stamp = core_api::RecordStamp::resolve(&cfg.output.creation_date, &cfg.output.timestamp)
        .map_err(core_api::CliError::Config)?;

    Ok(RunPlan {
        schema,
        source: cfg.source.clone(),
        options: core_api::ConvertOptions {
            delimiter,
            line_policy: cfg.records.line_policy,
            stamp,
        },
    })
}

#[tracing::instrument(name = "cli.run_app", skip_all)]
pub async fn run_app<W: Write>(
    args: &Args,
    mut cfg: core_api::AppConfig,
    out: &mut W,
) -> Result<i32, core_api::CliError> {
    apply_overrides(&mut cfg, args);
    let plan = build_plan(&cfg)?;

    if args.print_command {
        match factory::build_command(&plan.source, &plan.schema, plan.options.delimiter) {
            Some(cmd) => writeln!(out, "{}", cmd.display())?,
            None => tracing::warn!("file source configured, no command to print"),
        }
        return Ok(0);
    }

    let source = factory::build_source(&plan.source, &plan.schema, plan.options.delimiter);
    tracing::debug!(
        source = source.name(),
        fields = plan.schema.len(),
        line_policy = plan.options.line_policy.as_str(),
        "run planned"
    );

    core_api::convert(source.as_ref(), &plan.schema, &plan.options, out).await?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn args() -> Args {
        Args::default()
    }

    #[test]
    fn flags_override_config() {
        let mut cfg = core_api::AppConfig::default();
        let args = Args {
            contacts_bin: Some("/opt/contacts".into()),
            line_policy: Some(crate::commands::cli::LinePolicyArg::Skip),
            stamp_date: Some("2021-12-24".into()),
            ..args()
        };
        apply_overrides(&mut cfg, &args);

        let core_api::SourceConfig::Contacts(c) = &cfg.source else {
            panic!("expected contacts source");
        };
        assert_eq!(c.program, "/opt/contacts");
        assert_eq!(cfg.records.line_policy, core_api::LinePolicy::Skip);
        assert_eq!(cfg.output.creation_date, "2021-12-24");
        assert_eq!(cfg.output.timestamp, "2021-12-24");
    }

    #[test]
    fn input_switches_to_file_source() {
        let mut cfg = core_api::AppConfig::default();
        let args = Args {
            input: Some("dump.txt".into()),
            ..args()
        };
        apply_overrides(&mut cfg, &args);
        assert!(matches!(cfg.source, core_api::SourceConfig::File(ref f) if f.path == "dump.txt"));
    }

    #[test]
    fn invalid_stamp_is_a_config_error() {
        let mut cfg = core_api::AppConfig::default();
        cfg.output.timestamp = "yesterday".into();
        assert!(matches!(build_plan(&cfg), Err(core_api::CliError::Config(_))));
    }

    #[test]
    fn unknown_field_key_is_a_config_error() {
        let mut cfg = core_api::AppConfig::default();
        cfg.records.fields = Some(vec!["fn".into(), "xx".into()]);
        assert!(matches!(build_plan(&cfg), Err(core_api::CliError::Config(_))));
    }

    #[tokio::test]
    async fn print_command_writes_the_invocation() {
        let args = Args {
            contacts_bin: Some("contacts".into()),
            print_command: true,
            ..args()
        };
        let mut out = Vec::new();
        let code = run_app(&args, core_api::AppConfig::default(), &mut out)
            .await
            .unwrap();

        assert_eq!(code, 0);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("contacts -H -l -f '%fn'"));
    }

    #[tokio::test]
    async fn converts_a_captured_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Ada\tLovelace\t\t\t\t\t\t\t\t\t").unwrap();

        let args = Args {
            input: Some(file.path().to_path_buf()),
            ..args()
        };
        let mut out = Vec::new();
        run_app(&args, core_api::AppConfig::default(), &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[2].starts_with(r#"["Ada" "Lovelace" nil nil () nil () "#));
    }
}
