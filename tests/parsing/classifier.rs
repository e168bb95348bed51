use finals::language::FormatVariant;
use finals::parsing::classify;

fn trim(s: &str) -> &str {
    s.strip_prefix('\n')
        .unwrap_or(s)
}

#[test]
fn standalone_labels_are_sections() {
    let text = trim(
        r#"
CRN
20101
EXAM-DATE
Monday, April 13, 2026
EXAM-TIME-OF-DAY
9:00 AM - 12:00 PM
        "#,
    );

    assert_eq!(classify(text), Some(FormatVariant::SectionLabeled));
    assert!(FormatVariant::SectionLabeled.matches(text));
    assert!(!FormatVariant::ColumnBlockZipper.matches(text));
}

#[test]
fn combined_header_wins_over_labels() {
    let text = trim(
        r#"
CRN COMBINED CRNs INSTRUCTOR
EXAM-DATE
EXAM-TIME-OF-DAY
        "#,
    );

    assert_eq!(classify(text), Some(FormatVariant::ColumnBlockZipper));
    assert!(!FormatVariant::SectionLabeled.matches(text));
}

#[test]
fn inline_labels_are_not_sections() {
    let text = "CRN INSTRUCTOR EXAM-DATE EXAM-TIME-OF-DAY EXAM-ROOM\n";

    assert_eq!(classify(text), None);
}

#[test]
fn combined_column_header() {
    assert_eq!(
        classify("CRN  Combined   CRNs  Instructor\n"),
        Some(FormatVariant::ColumnBlockZipper)
    );
}

#[test]
fn row_major_headers() {
    assert_eq!(
        classify("CRN INSTRUCTOR FINAL DAY TIME ROOM\n"),
        Some(FormatVariant::RowMajorWithCombinedColumn)
    );
    assert_eq!(
        classify("CRN INSTRUCTOR FINAL DATE\n"),
        Some(FormatVariant::RowMajorWithCombinedColumn)
    );
    assert_eq!(
        classify("CRN MULTI-SECTION CRNs INSTRUCTOR\n"),
        Some(FormatVariant::RowMajorWithCombinedColumn)
    );
}

#[test]
fn nothing_recognizable() {
    assert_eq!(classify(""), None);
    assert_eq!(classify("Fall 2025 Course Listing\n10001 Compilers\n"), None);
}
