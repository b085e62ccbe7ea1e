use crate::schema::FieldSchema;

/// Command line for the contacts program: program, listing flags, then the
/// format flag followed by the per-contact template built from the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactsCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ContactsCommand {
    pub fn build(
        program: &str,
        list_flags: &[String],
        format_flag: &str,
        schema: &FieldSchema,
        delimiter: char,
    ) -> Self {
        let mut args: Vec<String> = list_flags.to_vec();
        args.push(format_flag.to_string());
        args.push(schema.format_template(delimiter));

        Self {
            program: program.to_string(),
            args,
        }
    }

    /// Shell-like rendering for logs and `--print-command`.
    pub fn display(&self) -> String {
        let mut out = quote_arg(&self.program);
        for arg in &self.args {
            out.push(' ');
            out.push_str(&quote_arg(arg));
        }
        out
    }
}

fn quote_arg(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:@%+,".contains(c));
    if plain {
        return arg.to_string();
    }

    let escaped = arg
        .replace('\'', r"'\''")
        .replace('\t', r"'$'\t''")
        .replace('\n', r"'$'\n''");
    format!("'{escaped}'")
}
