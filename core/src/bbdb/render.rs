use super::{BbdbRecord, RecordStamp};

pub const HEADER_LINES: [&str; 2] = [";; -*-coding: utf-8-emacs;-*-", ";;; file-version: 6"];

/// Emacs Lisp string literal.
pub fn elisp_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

fn opt(value: &Option<String>) -> String {
    value
        .as_deref()
        .map(elisp_string)
        .unwrap_or_else(|| "nil".to_string())
}

fn stamp_alist(stamp: &RecordStamp) -> String {
    format!(
        "((creation-date . {}) (timestamp . {}))",
        elisp_string(&stamp.creation_date),
        elisp_string(&stamp.timestamp)
    )
}

/// `[first last aka org (phones) nil (mails) (metadata) nil]` on one line.
///
/// Elements are separated by exactly one space, with none just inside the
/// parentheses: `("a@example.com")` rather than `( "a@example.com") `. The
/// Lisp reader treats both spellings identically.
pub fn render_record(record: &BbdbRecord) -> String {
    let names = [
        &record.first_name,
        &record.last_name,
        &record.nickname,
        &record.organization,
    ]
    .into_iter()
    .map(opt)
    .collect::<Vec<_>>()
    .join(" ");

    let phones = record
        .phones
        .iter()
        .map(|p| {
            format!(
                "[{} {}]",
                elisp_string(p.label.as_str()),
                elisp_string(&p.number)
            )
        })
        .collect::<Vec<_>>()
        .join(" ");

    let mails = record
        .mails
        .iter()
        .map(|m| elisp_string(m))
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "[{names} ({phones}) nil ({mails}) {} nil]",
        stamp_alist(&record.stamp)
    )
}
