//! Schedules that survive text extraction row by row. Each row begins with
//! its CRN and the multi-section CRN list, followed by the instructor and
//! then the date, time and room:
//!
//! ```text
//! 10011 10011-10012 Smith, John
//! 10012 10011-10012 Smith, John Monday, December 8, 2025 9:00AM-11:00AM UA 1350
//! 10020 10020 Doe, Jane ONLINE
//! ```
//!
//! When a table merges the date, time and room cells across a combined
//! group, only the last row of the group carries them, and they are copied
//! back onto the rest of the group. Cells too wide for their column wrap
//! onto lines of their own, which belong to the row above.

use chrono::NaiveDate;
use tracing::debug;

use super::{is_header_line, is_noise, Sitting};
use crate::language::{Options, TimeRange};
use crate::parsing::fields::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Row {
    crn: u32,
    combined: Vec<u32>,
    cells: String,
    marked: bool,
    date: Option<NaiveDate>,
    times: Option<TimeRange>,
    location: Option<String>,
    absent: bool,
}

impl Row {
    fn is_dated(&self) -> bool {
        self.date
            .is_some()
            && self
                .times
                .is_some()
    }

    /// Append a wrapped line to this row's cells.
    fn extend(&mut self, line: &str) {
        if !self
            .cells
            .is_empty()
        {
            if is_no_exam_entry(line) {
                self.marked = true;
            }
            self.cells
                .push(' ');
        }
        self.cells
            .push_str(line);
    }

    /// Read the date, time and room out of the row's cells once every
    /// wrapped line has been seen.
    fn resolve(&mut self) {
        let cells = self
            .cells
            .as_str();

        self.date = extract_date(cells);
        self.times = extract_time_range(cells);
        self.location = extract_location(cells);
        self.absent = self
            .date
            .is_none()
            && (self.marked || says_no_exam(cells));
    }
}

/// The cells start with the instructor, and "TBA" is a common enough
/// instructor, so a no-exam keyword only counts once it is past the first
/// cell, where the date would otherwise be.
fn says_no_exam(cells: &str) -> bool {
    let re = regex!(r"\b(?:ONLINE|SEE\s+FACULTY|TBA|VIRTUAL)\b");

    re.find_iter(cells)
        .any(|m| m.start() > 0)
}

/// A run of digits as long as a CRN, or as several run together.
fn is_crn_run(run: &str, width: usize) -> bool {
    width > 0 && !run.is_empty() && run.len() % width == 0
}

/// Split the multi-section CRN list off the front of a row's cells, if the
/// row has one.
fn read_combined(text: &str, width: usize) -> (Vec<u32>, &str) {
    let re = regex!(r"^(\d+(?:\s*[-–]\s*\d+)*)(?:\s+(.*))?$");

    if let Some(cap) = re.captures(text) {
        let list = cap
            .get(1)
            .map_or("", |m| m.as_str());

        if regex!(r"\d+")
            .find_iter(list)
            .all(|m| is_crn_run(m.as_str(), width))
        {
            let rest = cap
                .get(2)
                .map_or("", |m| m.as_str());
            return (split_crns(list, width), rest);
        }
    }

    (Vec::new(), text)
}

/// Read a line that starts a row: its CRN, optionally the multi-section CRN
/// list, and the remaining cells. A line starting with a number that is not
/// CRN-shaped, such as a wrapped year or room number, is not a row.
fn read_row(line: &str, width: usize) -> Option<Row> {
    let re = regex!(r"^(\d+)(?:\s+(.*))?$");

    let cap = re.captures(line)?;

    if !is_crn_run(&cap[1], width) {
        return None;
    }

    let crn = split_crns(&cap[1], width)
        .first()
        .copied()?;

    let rest = cap
        .get(2)
        .map_or("", |m| m.as_str());

    let (mut combined, cells) = read_combined(rest, width);
    if !combined.contains(&crn) {
        combined.insert(0, crn);
    }

    Some(Row {
        crn,
        combined,
        cells: cells
            .trim()
            .to_string(),
        ..Default::default()
    })
}

fn scan(text: &str, width: usize) -> Vec<Row> {
    let mut rows: Vec<Row> = Vec::new();

    for line in text.lines() {
        let line = line.trim();

        if line.is_empty() || is_header_line(line) || is_noise(line) {
            continue;
        }

        if let Some(row) = read_row(line, width) {
            rows.push(row);
        } else if let Some(row) = rows.last_mut() {
            row.extend(line);
        }
    }

    for row in rows.iter_mut() {
        row.resolve();
    }

    rows
}

/// Copy the date, time and room from the last dated row of each group of
/// rows sharing a multi-section CRN list onto the rows of that group that
/// lack them.
fn backfill(rows: &mut [Row]) {
    let mut start = 0;

    while start < rows.len() {
        let mut end = start + 1;
        while end < rows.len() && rows[end].combined == rows[start].combined {
            end += 1;
        }

        let group = &mut rows[start..end];

        let source = group
            .iter()
            .rev()
            .find(|row| row.is_dated() && !row.absent)
            .map(|row| (row.date, row.times, row.location.clone()));

        if let Some((date, times, location)) = source {
            for row in group.iter_mut() {
                if row.absent || row.is_dated() {
                    continue;
                }
                row.date = date;
                row.times = times;
                if row
                    .location
                    .is_none()
                {
                    row.location = location.clone();
                }
            }
        }

        start = end;
    }
}

pub(super) fn parse(text: &str, options: &Options) -> Vec<Sitting> {
    let mut rows = scan(text, options.crn_width);

    debug!("Found {} row{}", rows.len(), if rows.len() == 1 { "" } else { "s" });

    backfill(&mut rows);

    let mut sittings: Vec<Sitting> = Vec::new();
    let mut start = 0;

    while start < rows.len() {
        let mut end = start + 1;
        while end < rows.len() && rows[end].combined == rows[start].combined {
            end += 1;
        }

        // members of a group that ended up with the same cells sit together
        let mut group: Vec<Sitting> = Vec::new();
        for row in &rows[start..end] {
            if row.absent {
                debug!(crn = row.crn, "No scheduled exam");
                continue;
            }

            let existing = group
                .iter_mut()
                .find(|s| s.date == row.date && s.times == row.times && s.location == row.location);

            match existing {
                Some(sitting) => sitting
                    .crns
                    .push(row.crn),
                None => group.push(Sitting {
                    crns: vec![row.crn],
                    date: row.date,
                    times: row.times,
                    location: row
                        .location
                        .clone(),
                }),
            }
        }

        sittings.extend(group);
        start = end;
    }

    sittings
}
