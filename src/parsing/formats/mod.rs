//! The layout-specific parsers, and what they have in common: the noise a
//! paginated table leaves behind, and turning recovered rows into entries.

use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::debug;

use crate::language::{ExamEntry, FormatVariant, Options, TimeRange};
use crate::parsing::classifier;

mod rows;
mod sections;
mod zipper;

impl FormatVariant {
    /// Whether this layout's signature headers are present in the
    /// (normalized) text.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            FormatVariant::SectionLabeled => classifier::is_section_labeled(text),
            FormatVariant::ColumnBlockZipper => classifier::is_column_block_zipper(text),
            FormatVariant::RowMajorWithCombinedColumn => classifier::is_row_major(text),
        }
    }

    /// Recover the exam entries from (normalized) text in this layout.
    pub fn parse(&self, text: &str, options: &Options) -> Vec<ExamEntry> {
        let sittings = match self {
            FormatVariant::SectionLabeled => sections::parse(text, options),
            FormatVariant::ColumnBlockZipper => zipper::parse(text, options),
            FormatVariant::RowMajorWithCombinedColumn => rows::parse(text, options),
        };

        collect(sittings)
    }
}

/// One exam sitting as recovered from the document, before duplicates are
/// resolved. Every CRN listed shares the date, time and room.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Sitting {
    pub crns: Vec<u32>,
    pub date: Option<NaiveDate>,
    pub times: Option<TimeRange>,
    pub location: Option<String>,
}

/// Turn sittings into entries, one per CRN. Sittings without a date and
/// start time are dropped, and a CRN already emitted by an earlier sitting is
/// not emitted again. The combined list an entry carries is the set of CRNs
/// its sitting actually emitted, so that every CRN named in a combined list
/// has an entry of its own carrying that same list.
pub(crate) fn collect(sittings: Vec<Sitting>) -> Vec<ExamEntry> {
    let mut seen: HashSet<u32> = HashSet::new();
    let mut entries = Vec::new();

    for sitting in sittings {
        let (date, times) = match (sitting.date, sitting.times) {
            (Some(date), Some(times)) => (date, times),
            _ => {
                debug!(crns = ?sitting.crns, "Dropping sitting without date and time");
                continue;
            }
        };

        let mut fresh = Vec::new();
        for crn in sitting.crns {
            if seen.contains(&crn) || fresh.contains(&crn) {
                debug!(crn, "Ignoring repeated CRN");
                continue;
            }
            fresh.push(crn);
        }

        for crn in &fresh {
            seen.insert(*crn);
            entries.push(ExamEntry {
                crn: *crn,
                combined_crns: fresh.clone(),
                date: Some(date),
                start_time: Some(times.start),
                end_time: Some(times.end),
                location: sitting
                    .location
                    .clone(),
            });
        }
    }

    entries
}

/// Lines that pagination leaves in the middle of a column. Extend this when a
/// new artifact turns up.
const NOISE: &[&str] = &[
    r"(?i)^(?:page\s+)?\d+\s+of\s+\d+$",
    r"(?i)^page\s+\d+$",
    r"(?i)^(?:fall|winter|spring|summer)\s+(?:term\s+|semester\s+)?\d{4}\b.*$",
];

pub(crate) fn is_noise(line: &str) -> bool {
    let set = regex_set!(NOISE);
    set.is_match(line.trim())
}

/// Words that only appear in column headers.
const HEADER_WORDS: &[&str] = &[
    "CRN",
    "CRNS",
    "CRN(S)",
    "COMBINED",
    "MULTI-SECTION",
    "SECTION",
    "SECTIONS",
    "COURSE",
    "TITLE",
    "INSTRUCTOR",
    "INSTRUCTORS",
    "FINAL",
    "EXAM",
    "EXAM-DATE",
    "EXAM-TIME",
    "EXAM-TIME-OF-DAY",
    "EXAM-ROOM",
    "DATE",
    "DAY",
    "TIME",
    "START",
    "END",
    "ROOM",
    "ROOMS",
    "LOCATION",
];

/// Whether a line is a (possibly partial) restatement of the column headers.
pub(crate) fn is_header_line(line: &str) -> bool {
    let mut words = line
        .split_whitespace()
        .peekable();

    if words
        .peek()
        .is_none()
    {
        return false;
    }

    words.all(|word| {
        let word = word
            .trim_matches(|c: char| c == ':' || c == ',')
            .to_ascii_uppercase();
        HEADER_WORDS.contains(&word.as_str())
    })
}
