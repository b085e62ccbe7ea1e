//! BBDB (file-version 6) output records.

mod record;
mod render;
mod stamp;

pub use record::{BbdbRecord, Phone, PhoneLabel, MAIL_ORDER};
pub use render::{elisp_string, render_record, HEADER_LINES};
pub use stamp::{RecordStamp, DEFAULT_STAMP_DATE};
