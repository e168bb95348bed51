use finals::language::{FormatVariant, ParsingError};

/// The header tokens each layout is recognized by, for explaining why a
/// document was not.
fn signature(variant: FormatVariant) -> &'static str {
    match variant {
        FormatVariant::SectionLabeled => "EXAM-DATE and EXAM-TIME-OF-DAY, each on a line of its own",
        FormatVariant::ColumnBlockZipper => "a COMBINED CRNs column header",
        FormatVariant::RowMajorWithCombinedColumn => {
            "a FINAL DAY, FINAL DATE, or MULTI-SECTION CRNS column header"
        }
    }
}

/// Generate problem and detail messages for parsing errors
pub fn generate_error_message(error: &ParsingError) -> (String, String) {
    match error {
        ParsingError::UnrecognizedFormat => {
            let mut details = String::from(
                r#"
None of the known schedule layouts matched this document. Each layout is
recognized by the column headers that survive text extraction:
                "#
                .trim_ascii(),
            );
            details.push('\n');

            for variant in FormatVariant::ALL {
                details.push_str(&format!("\n    {}: {}", variant, signature(variant)));
            }

            ("Unrecognized schedule format".to_string(), details)
        }
    }
}
