//! Recognize which layout a schedule arrived in from its header tokens.

use tracing::debug;

use crate::language::FormatVariant;

/// Determine the layout of normalized schedule text, or None if no layout's
/// signature is present.
pub fn classify(text: &str) -> Option<FormatVariant> {
    let variant = FormatVariant::ALL
        .into_iter()
        .find(|variant| variant.matches(text));

    debug!(?variant);
    variant
}

/// The column labels each stand on a line of their own, and there is no
/// combined CRN column. Both conditions are needed because column-block
/// documents can mention EXAM-DATE inline in their header row.
pub(crate) fn is_section_labeled(text: &str) -> bool {
    let date = regex!(r"(?im)^[ \t]*EXAM-DATE[ \t]*$");
    let time = regex!(r"(?im)^[ \t]*EXAM-TIME-OF-DAY[ \t]*$");

    date.is_match(text) && time.is_match(text) && !has_combined_header(text)
}

pub(crate) fn is_column_block_zipper(text: &str) -> bool {
    has_combined_header(text)
}

pub(crate) fn is_row_major(text: &str) -> bool {
    let re = regex!(r"(?i)\bFINAL\s+DAY\b|\bFINAL\s+DATE\b|\bMULTI-SECTION\s+CRNS\b");

    re.is_match(text)
}

fn has_combined_header(text: &str) -> bool {
    let re = regex!(r"(?i)\bCOMBINED\s+CRNS\b");

    re.is_match(text)
}
