mod common;

use common::{row, FailingSource, FakeSource};
use contacts2bbdb_core::api::{
    convert, ConvertError, ConvertOptions, FieldSchema, LinePolicy, RecordStamp, SourceError,
};
use pretty_assertions::assert_eq;

const HEADER: &str = ";; -*-coding: utf-8-emacs;-*-\n;;; file-version: 6\n";
const META: &str = r#"((creation-date . "2009-02-08") (timestamp . "2009-02-08")) nil]"#;

async fn run(source: &FakeSource, opts: &ConvertOptions) -> Result<String, ConvertError> {
    let mut out = Vec::new();
    convert(source, &FieldSchema::standard(), opts, &mut out).await?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

fn record_lines(output: &str) -> Vec<&str> {
    output.lines().skip(2).collect()
}

#[tokio::test]
async fn zero_contacts_emit_header_only() {
    let out = run(&FakeSource::raw(""), &ConvertOptions::default())
        .await
        .unwrap();
    assert_eq!(out, HEADER);
}

#[tokio::test]
async fn converts_a_full_address_book() {
    let source = FakeSource::from_rows(&[
        &row(["First", "Last", "", "", "", "", "", "", "", "", ""]),
        &row([
            "Ada",
            "Lovelace",
            "Analytical Engines",
            "Addy",
            "ada@home.example",
            "ada@work.example",
            "",
            "555-1111",
            "",
            "",
            " 555-2222 ",
        ]),
        &row(["", "", "", "", "", "", "other@example.com", "", "", "", ""]),
    ]);

    let out = run(&source, &ConvertOptions::default()).await.unwrap();
    assert!(out.starts_with(HEADER));

    let lines = record_lines(&out);
    assert_eq!(
        lines,
        vec![
            format!(r#"["First" "Last" nil nil () nil () {META}"#),
            format!(
                r#"["Ada" "Lovelace" nil "Analytical Engines" (["Home" "555-1111"] ["Work" "555-2222"]) nil ("ada@home.example" "ada@work.example") {META}"#
            ),
            format!(r#"[nil nil nil nil () nil ("other@example.com") {META}"#),
        ]
    );
}

#[tokio::test]
async fn nicknames_never_reach_the_output() {
    let source = FakeSource::from_rows(&[
        &row(["A", "B", "", "Nicky", "", "", "", "", "", "", ""]),
        &row(["", "", "", "Nicky", "", "", "", "", "", "", ""]),
    ]);
    let out = run(&source, &ConvertOptions::default()).await.unwrap();
    assert!(!out.contains("Nicky"));
    assert_eq!(record_lines(&out).len(), 2);
}

#[tokio::test]
async fn whitespace_only_values_match_absent_values() {
    let blank = FakeSource::from_rows(&[&row([
        "Ada", " ", "\u{a0}", "  ", " ", " ", " ", " ", " ", " ", " ",
    ])]);
    let absent = FakeSource::from_rows(&[&row(["Ada", "", "", "", "", "", "", "", "", "", ""])]);

    let opts = ConvertOptions::default();
    assert_eq!(
        run(&blank, &opts).await.unwrap(),
        run(&absent, &opts).await.unwrap()
    );
}

#[tokio::test]
async fn phone_order_is_fixed_regardless_of_columns() {
    let source = FakeSource::from_rows(&[&row([
        "", "", "", "", "", "", "", "1", "2", "3", "4",
    ])]);
    let out = run(&source, &ConvertOptions::default()).await.unwrap();
    assert!(out.contains(r#"(["Home" "1"] ["Main" "3"] ["Mobile" "2"] ["Work" "4"])"#));
}

#[tokio::test]
async fn configured_stamp_is_used_for_every_record() {
    let source = FakeSource::from_rows(&[
        &row(["A", "", "", "", "", "", "", "", "", "", ""]),
        &row(["B", "", "", "", "", "", "", "", "", "", ""]),
    ]);
    let opts = ConvertOptions {
        stamp: RecordStamp::resolve("2024-03-01", "2024-03-02").unwrap(),
        ..ConvertOptions::default()
    };

    let out = run(&source, &opts).await.unwrap();
    for line in record_lines(&out) {
        assert!(line.ends_with(
            r#"((creation-date . "2024-03-01") (timestamp . "2024-03-02")) nil]"#
        ));
    }
}

#[tokio::test]
async fn short_lines_follow_the_line_policy() {
    let source = FakeSource::raw("Ada\tLovelace\nGrace\tHopper\t\t\t\t\t\t\t\t\t\n");

    let lenient = run(&source, &ConvertOptions::default()).await.unwrap();
    assert_eq!(record_lines(&lenient).len(), 2);
    assert!(lenient.contains(r#"["Ada" "Lovelace" nil nil ()"#));

    let skip = run(
        &source,
        &ConvertOptions {
            line_policy: LinePolicy::Skip,
            ..ConvertOptions::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(record_lines(&skip), vec![format!(r#"["Grace" "Hopper" nil nil () nil () {META}"#)]);

    let mut out = Vec::new();
    let err = convert(
        &source,
        &FieldSchema::standard(),
        &ConvertOptions {
            line_policy: LinePolicy::Strict,
            ..ConvertOptions::default()
        },
        &mut out,
    )
    .await
    .unwrap_err();
    assert!(matches!(
        err,
        ConvertError::MalformedLine {
            line: 1,
            expected: 11,
            found: 2
        }
    ));
    assert!(out.is_empty(), "strict failure must not write partial output");
}

#[tokio::test]
async fn blank_lines_are_not_contacts() {
    let source = FakeSource::raw("Ada\n\n   \nGrace\n");
    let mut out = Vec::new();
    let outcome = convert(
        &source,
        &FieldSchema::standard(),
        &ConvertOptions::default(),
        &mut out,
    )
    .await
    .unwrap();

    assert_eq!(outcome.lines, 4);
    assert_eq!(outcome.records, 2);
    assert_eq!(outcome.skipped, 2);
}

#[tokio::test]
async fn tab_only_row_is_one_empty_record() {
    let source = FakeSource::raw(&format!("{}\n", "\t".repeat(10)));
    let mut out = Vec::new();
    let outcome = convert(
        &source,
        &FieldSchema::standard(),
        &ConvertOptions::default(),
        &mut out,
    )
    .await
    .unwrap();

    assert_eq!(outcome.records, 1);
    assert_eq!(outcome.skipped, 0);
    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        record_lines(&text),
        vec![format!("[nil nil nil nil () nil () {META}")]
    );
}

#[tokio::test]
async fn source_failure_is_fatal_and_writes_nothing() {
    let mut out = Vec::new();
    let err = convert(
        &FailingSource,
        &FieldSchema::standard(),
        &ConvertOptions::default(),
        &mut out,
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        ConvertError::Source(SourceError::Exit { code: Some(1), .. })
    ));
    assert!(out.is_empty());
}

#[tokio::test]
async fn reduced_schema_decodes_its_own_columns() {
    let schema = FieldSchema::from_short_keys(&["ln", "wp", "fn"]).unwrap();
    let source = FakeSource::raw("Lovelace\t555-2222\tAda\n");
    let mut out = Vec::new();
    convert(&source, &schema, &ConvertOptions::default(), &mut out)
        .await
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        record_lines(&text),
        vec![format!(r#"["Ada" "Lovelace" nil nil (["Work" "555-2222"]) nil () {META}"#)]
    );
}
