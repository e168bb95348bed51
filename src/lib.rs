//! Recover final examination schedules from the text of a PDF.

#[macro_use]
mod regex;

pub mod language;
pub mod parsing;

pub use language::{ExamEntry, FormatVariant, Options, ParsingError, TimeRange};
pub use parsing::{parse_finals_schedule, parse_finals_schedule_with};
