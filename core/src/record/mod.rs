mod decode;
mod types;

pub use decode::{decode_line, Decoded, LineDecoder};
pub use types::{ContactRecord, LinePolicy};
