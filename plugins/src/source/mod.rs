pub mod contacts;
pub mod file;
mod output;

pub use contacts::ContactsCliSource;
pub use file::FileSource;
