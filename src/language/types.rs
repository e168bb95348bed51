//! Types representing the exam sittings recovered from a finals schedule

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// One exam sitting for one course registration number.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ExamEntry {
    pub crn: u32,
    pub combined_crns: Vec<u32>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<u16>,
    pub end_time: Option<u16>,
    pub location: Option<String>,
}

/// Start and end of an exam, each encoded as a 24-hour clock integer, so
/// that 9:00 is 900 and 13:45 is 1345.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TimeRange {
    pub start: u16,
    pub end: u16,
}

/// The layouts a finals schedule is known to arrive in once a PDF has been
/// flattened to text.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum FormatVariant {
    /// Each physical row holds CRN, the multi-section CRN list, instructor,
    /// and (eventually) the date, time and room.
    RowMajorWithCombinedColumn,
    /// Each column was reflowed into its own blank-line separated block.
    ColumnBlockZipper,
    /// Each column appears under its own header label, one after another.
    SectionLabeled,
}

impl FormatVariant {
    /// In order of precedence when classifying.
    pub const ALL: [FormatVariant; 3] = [
        FormatVariant::SectionLabeled,
        FormatVariant::ColumnBlockZipper,
        FormatVariant::RowMajorWithCombinedColumn,
    ];
}

impl fmt::Display for FormatVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormatVariant::RowMajorWithCombinedColumn => "row-major with combined column",
            FormatVariant::ColumnBlockZipper => "column-block zipper",
            FormatVariant::SectionLabeled => "section labeled",
        };
        write!(f, "{}", name)
    }
}

/// Knobs that depend on the institution issuing the schedule rather than on
/// the document layout.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Options {
    /// Number of digits in every CRN; used to split runs of digits that the
    /// text extraction glued together.
    pub crn_width: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options { crn_width: 5 }
    }
}
