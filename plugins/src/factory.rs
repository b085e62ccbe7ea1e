use contacts2bbdb_core::api::{
    ContactSource, ContactsCommand, ContactsSourceConfig, FieldSchema, SourceConfig,
};

use crate::source::{ContactsCliSource, FileSource};

fn contacts_command(
    cfg: &ContactsSourceConfig,
    schema: &FieldSchema,
    delimiter: char,
) -> ContactsCommand {
    ContactsCommand::build(
        &cfg.program,
        &cfg.list_flags,
        &cfg.format_flag,
        schema,
        delimiter,
    )
}

/// Command the source would run, if it runs one.
pub fn build_command(
    cfg: &SourceConfig,
    schema: &FieldSchema,
    delimiter: char,
) -> Option<ContactsCommand> {
    match cfg {
        SourceConfig::Contacts(c) => Some(contacts_command(c, schema, delimiter)),
        SourceConfig::File(_) => None,
    }
}

pub fn build_source(
    cfg: &SourceConfig,
    schema: &FieldSchema,
    delimiter: char,
) -> Box<dyn ContactSource> {
    match cfg {
        SourceConfig::Contacts(c) => {
            Box::new(ContactsCliSource::new(contacts_command(c, schema, delimiter)))
        }
        SourceConfig::File(f) => Box::new(FileSource::new(&f.path)),
    }
}
