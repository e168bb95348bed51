//! Schedules where every column of the table was emitted under its own
//! label, one column after another:
//!
//! ```text
//! CRN
//! 10001
//! 10002
//! EXAM-DATE
//! Monday, December 8, 2025
//! ONLINE
//! EXAM-TIME-OF-DAY
//! 9:00 AM - 11:00 AM
//! EXAM-ROOM
//! UA 1350
//! ```
//!
//! Rows without a scheduled exam fill their slot in the date column but have
//! no cell at all in the time and room columns, so those two columns are read
//! through cursors that only move forward for rows that do have an exam.

use tracing::debug;

use super::{is_noise, Sitting};
use crate::language::Options;
use crate::parsing::fields::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Label {
    Crn,
    Instructor,
    Date,
    Time,
    Room,
}

fn label(line: &str) -> Option<Label> {
    match line
        .trim()
        .to_ascii_uppercase()
        .as_str()
    {
        "CRN" => Some(Label::Crn),
        "INSTRUCTOR" => Some(Label::Instructor),
        "EXAM-DATE" => Some(Label::Date),
        "EXAM-TIME-OF-DAY" => Some(Label::Time),
        "EXAM-ROOM" => Some(Label::Room),
        _ => None,
    }
}

#[derive(Debug, Default)]
struct Sections<'i> {
    crns: Vec<&'i str>,
    dates: Vec<&'i str>,
    times: Vec<&'i str>,
    rooms: Vec<&'i str>,
}

/// Gather the lines under each label. A label that appears again (as it does
/// at the top of every page) continues the same section. Blank lines and
/// pagination artifacts are not cells and are left out.
fn partition(text: &str) -> Sections<'_> {
    let mut sections = Sections::default();
    let mut current: Option<Label> = None;

    for line in text.lines() {
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(found) = label(line) {
            current = Some(found);
            continue;
        }

        if is_noise(line) {
            continue;
        }

        match current {
            Some(Label::Crn) => sections
                .crns
                .push(line),
            Some(Label::Date) => sections
                .dates
                .push(line),
            Some(Label::Time) => sections
                .times
                .push(line),
            Some(Label::Room) => sections
                .rooms
                .push(line),
            Some(Label::Instructor) | None => {}
        }
    }

    sections
}

pub(super) fn parse(text: &str, options: &Options) -> Vec<Sitting> {
    let sections = partition(text);

    let crns: Vec<u32> = sections
        .crns
        .iter()
        .flat_map(|line| split_crns(line, options.crn_width))
        .collect();

    debug!(
        crns = crns.len(),
        dates = sections
            .dates
            .len(),
        times = sections
            .times
            .len(),
        rooms = sections
            .rooms
            .len(),
        "Partitioned sections"
    );

    let mut sittings = Vec::new();
    let mut time_cursor = 0;
    let mut room_cursor = 0;

    for (i, crn) in crns
        .into_iter()
        .enumerate()
    {
        let date_line = match sections
            .dates
            .get(i)
        {
            Some(line) => *line,
            None => {
                debug!(crn, "No date cell");
                continue;
            }
        };

        if is_no_exam_entry(date_line) {
            debug!(crn, "No scheduled exam");
            continue;
        }

        let time_line = sections
            .times
            .get(time_cursor)
            .copied();
        let room_line = sections
            .rooms
            .get(room_cursor)
            .copied();
        time_cursor += 1;
        room_cursor += 1;

        if time_line.is_some_and(is_no_exam_entry) {
            debug!(crn, "No scheduled exam");
            continue;
        }

        sittings.push(Sitting {
            crns: vec![crn],
            date: extract_date(date_line),
            times: time_line.and_then(extract_time_range),
            location: room_line.and_then(extract_location),
        });
    }

    sittings
}
