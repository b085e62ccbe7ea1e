mod lines;
mod query;
mod traits;

pub use lines::{split_lines, RawLine};
pub use query::ContactsCommand;
pub use traits::ContactSource;
