//! Schedules where the text extraction emitted the table one column at a
//! time. Each column arrives as a block of lines separated from the next by a
//! blank line, in the order CRN, instructor, date, time, room, and the n-th
//! line of every block belongs to the n-th row of the table:
//!
//! ```text
//! 14612-14613-14614
//! 15001
//!
//! Smith, J
//! Doe, A
//!
//! Thursday, December 11, 2025
//! Friday, December 12, 2025
//! ```
//!
//! and so on. Blocks are told apart by what they contain rather than purely
//! by position, so a title block or a header row ahead of the table does not
//! shift the columns, and a table that starts over on every page zips up one
//! page at a time.

use tracing::debug;

use super::{is_header_line, is_noise, Sitting};
use crate::language::Options;
use crate::parsing::fields::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Column {
    Crns,
    Dates,
    Times,
    Locations,
    Other,
}

#[derive(Debug, Default)]
struct Group<'i> {
    crns: Vec<&'i str>,
    dates: Vec<&'i str>,
    times: Vec<&'i str>,
    locations: Vec<&'i str>,
}

impl<'i> Group<'i> {
    fn column(&mut self, column: Column) -> Option<&mut Vec<&'i str>> {
        match column {
            Column::Crns => Some(&mut self.crns),
            Column::Dates => Some(&mut self.dates),
            Column::Times => Some(&mut self.times),
            Column::Locations => Some(&mut self.locations),
            Column::Other => None,
        }
    }
}

pub(super) fn parse(text: &str, options: &Options) -> Vec<Sitting> {
    let width = options.crn_width;
    let groups = zip(blocks(text), width);

    debug!("Found {} column group{}", groups.len(), if groups.len() == 1 { "" } else { "s" });

    let mut sittings = Vec::new();

    for group in &groups {
        for (i, line) in group
            .crns
            .iter()
            .enumerate()
        {
            let crns = split_crns(line, width);
            if crns.is_empty() {
                continue;
            }

            let date_line = group
                .dates
                .get(i)
                .copied();
            let time_line = group
                .times
                .get(i)
                .copied();
            let location_line = group
                .locations
                .get(i)
                .copied();

            if date_line.is_some_and(is_no_exam_entry) {
                debug!(?crns, "No scheduled exam");
                continue;
            }

            let date = date_line.and_then(extract_date);
            let times = time_line
                .and_then(extract_time_range)
                .or_else(|| date_line.and_then(extract_time_range));
            let location = location_line
                .and_then(extract_location)
                .or_else(|| date_line.and_then(extract_location));

            sittings.push(Sitting {
                crns,
                date,
                times,
                location,
            });
        }
    }

    sittings
}

/// Split the text into blank-line separated blocks, leaving out header rows
/// and pagination artifacts.
fn blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for line in text.lines() {
        let line = line.trim();

        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            continue;
        }

        if is_header_line(line) || is_noise(line) {
            continue;
        }

        current.push(line);
    }

    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

/// Decide which column a block holds by what the majority of its lines look
/// like.
fn identify(block: &[&str], width: usize) -> Column {
    let majority = |count: usize| count * 2 > block.len();

    let crns = block
        .iter()
        .filter(|line| is_crn_line(line, width))
        .count();
    if majority(crns) {
        return Column::Crns;
    }

    let dates = block
        .iter()
        .filter(|line| extract_date(line).is_some())
        .count();
    let absent = block
        .iter()
        .filter(|line| is_no_exam_entry(line))
        .count();
    if dates > 0 && majority(dates + absent) {
        return Column::Dates;
    }

    let times = block
        .iter()
        .filter(|line| extract_time_range(line).is_some())
        .count();
    if times > 0 && majority(times + absent) {
        return Column::Times;
    }

    let locations = block
        .iter()
        .filter(|line| extract_location(line).is_some())
        .count();
    if majority(locations) {
        return Column::Locations;
    }

    Column::Other
}

/// Assemble blocks into groups, each starting with a block of CRNs. A block
/// of the same column as the one before it continues that column.
fn zip(blocks: Vec<Vec<&str>>, width: usize) -> Vec<Group<'_>> {
    let mut groups: Vec<Group> = Vec::new();
    let mut previous = Column::Other;

    for block in blocks {
        let column = identify(&block, width);

        if column == Column::Crns && previous != Column::Crns {
            groups.push(Group::default());
        }

        if let Some(group) = groups.last_mut() {
            let continues = column == previous;
            if let Some(lines) = group.column(column) {
                if lines.is_empty() || continues {
                    lines.extend(block);
                } else {
                    debug!(?column, "Ignoring repeated column block");
                }
            }
        }

        previous = column;
    }

    groups
}
