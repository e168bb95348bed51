//! Recognizers for the individual cells of a schedule row. These are shared
//! by every layout and never fail: anything they cannot make sense of comes
//! back as None.

use chrono::NaiveDate;

use crate::language::TimeRange;

/// Named venues that have no building code and room number.
const AUDITORIUMS: &[&str] = &["REGENT THEATRE"];

/// Upper-case words that can sit in front of a number at the end of a line
/// without being a building code.
const NOT_BUILDINGS: &[&str] = &[
    "AM", "PM", "CRN", "CRNS", "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP",
    "SEPT", "OCT", "NOV", "DEC", "PAGE",
];

/// Recover a calendar date from a line. Full weekday and month names are
/// tried first, then the month name alone, then abbreviated month names, and
/// finally numeric MM/DD/YYYY.
pub fn extract_date(line: &str) -> Option<NaiveDate> {
    let named = [
        regex!(
            r"(?i)\b(?:mon|tues|wednes|thurs|fri|satur|sun)day,?\s+(january|february|march|april|may|june|july|august|september|october|november|december)\s+(\d{1,2}),?\s+(\d{4})\b"
        ),
        regex!(
            r"(?i)\b(january|february|march|april|may|june|july|august|september|october|november|december)\s+(\d{1,2}),?\s+(\d{4})\b"
        ),
        regex!(r"(?i)\b(jan|feb|mar|apr|may|jun|jul|aug|sept?|oct|nov|dec)\.?\s+(\d{1,2}),?\s+(\d{4})\b"),
    ];

    for re in named {
        if let Some(cap) = re.captures(line) {
            let month = month_number(&cap[1]);
            let day = cap[2].parse::<u32>();
            let year = cap[3].parse::<i32>();

            if let (Some(month), Ok(day), Ok(year)) = (month, day, year) {
                if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                    return Some(date);
                }
            }
        }
    }

    let re = regex!(r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b");
    let cap = re.captures(line)?;

    let month = cap[1]
        .parse::<u32>()
        .ok()?;
    let day = cap[2]
        .parse::<u32>()
        .ok()?;
    let year = cap[3]
        .parse::<i32>()
        .ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_number(name: &str) -> Option<u32> {
    const MONTHS: [&str; 12] = [
        "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
    ];

    let name = name.to_ascii_lowercase();
    MONTHS
        .iter()
        .position(|prefix| name.starts_with(prefix))
        .map(|i| i as u32 + 1)
}

/// Recover the start and end of an exam from a line such as
///
/// ```text
/// 8:00AM-10:00AM
/// 10:15 AM - 12:15 PM
/// 11:00AM-1PM
/// ```
///
/// A start time without its own AM/PM borrows the end time's, unless that
/// would put it after the end.
pub fn extract_time_range(line: &str) -> Option<TimeRange> {
    let re = regex!(
        r"(?i)\b(\d{1,2})(?::([0-5]\d))?\s*(?:([ap])\.?\s*m\b\.?)?\s*[-–—]\s*(\d{1,2})(?::([0-5]\d))?\s*([ap])\.?\s*m\b\.?"
    );

    let cap = re.captures(line)?;

    let start_hour = cap[1]
        .parse::<u16>()
        .ok()?;
    let start_minute = minutes(cap.get(2));
    let end_hour = cap[4]
        .parse::<u16>()
        .ok()?;
    let end_minute = minutes(cap.get(5));
    let end_meridiem = meridiem(&cap[6]);

    let end = clock(end_hour, end_minute, end_meridiem)?;

    let start = match cap.get(3) {
        Some(m) => clock(start_hour, start_minute, meridiem(m.as_str()))?,
        None => {
            let borrowed = clock(start_hour, start_minute, end_meridiem)?;
            if borrowed > end {
                clock(start_hour, start_minute, Meridiem::Ante)?
            } else {
                borrowed
            }
        }
    };

    Some(TimeRange { start, end })
}

#[derive(Clone, Copy)]
enum Meridiem {
    Ante,
    Post,
}

fn meridiem(marker: &str) -> Meridiem {
    if marker.eq_ignore_ascii_case("p") {
        Meridiem::Post
    } else {
        Meridiem::Ante
    }
}

fn minutes(m: Option<regex::Match>) -> u16 {
    m.and_then(|m| {
        m.as_str()
            .parse::<u16>()
            .ok()
    })
    .unwrap_or(0)
}

/// Convert a 12-hour clock reading into the HHMM integer encoding.
fn clock(hour: u16, minute: u16, meridiem: Meridiem) -> Option<u16> {
    if hour == 0 || hour > 12 || minute > 59 {
        return None;
    }

    let hour = match meridiem {
        Meridiem::Ante if hour == 12 => 0,
        Meridiem::Ante => hour,
        Meridiem::Post if hour == 12 => 12,
        Meridiem::Post => hour + 12,
    };

    Some(hour * 100 + minute)
}

/// Recover an exam room from the end of a line. Building and room pairs are
/// normalized so that a list of rooms in one building is spelled out in
/// full, with `CEIS 414A/B` becoming `CEIS 414A / CEIS 414B`. Named venues,
/// `SEE FACULTY` and `ONLINE` are returned as they are.
pub fn extract_location(line: &str) -> Option<String> {
    let line = line.trim();

    let re = regex!(r"\b([A-Z]{2,6})\s+(\d{1,4}[A-Z]?(?:\s*/\s*(?:\d{1,4}[A-Z]?|[A-Z]))*)$");
    if let Some(cap) = re.captures(line) {
        let building = &cap[1];
        if !NOT_BUILDINGS.contains(&building) {
            return Some(expand_rooms(building, &cap[2]));
        }
    }

    let upper = line.to_ascii_uppercase();
    for name in AUDITORIUMS {
        if upper.contains(name) {
            return Some(name.to_string());
        }
    }

    let re = regex!(r"(?i)\bSEE\s+FACULTY\b.*$");
    if let Some(m) = re.find(line) {
        return Some(
            m.as_str()
                .trim()
                .to_string(),
        );
    }

    let re = regex!(r"(?i)\bONLINE\b");
    if re.is_match(line) {
        return Some("ONLINE".to_string());
    }

    None
}

/// Spell out each alternative in a slash-separated room list against its
/// building. A bare letter shares the room number of the first alternative.
fn expand_rooms(building: &str, rooms: &str) -> String {
    let mut parts = rooms
        .split('/')
        .map(str::trim)
        .filter(|part| !part.is_empty());

    let first = match parts.next() {
        Some(first) => first,
        None => return building.to_string(),
    };

    let number = first.trim_end_matches(|c: char| c.is_ascii_alphabetic());

    let mut result = vec![format!("{} {}", building, first)];
    for part in parts {
        if part
            .chars()
            .all(|c| c.is_ascii_alphabetic())
        {
            result.push(format!("{} {}{}", building, number, part));
        } else {
            result.push(format!("{} {}", building, part));
        }
    }

    result.join(" / ")
}

/// Whether a cell says there is no scheduled exam: ONLINE, SEE FACULTY
/// (with whatever follows), TBA, or VIRTUAL.
pub fn is_no_exam_entry(line: &str) -> bool {
    let re = regex!(r"(?i)^\s*(?:ONLINE|SEE\s+FACULTY|TBA|VIRTUAL)");

    re.is_match(line)
}

/// Pull the CRNs out of a cell. Dashes, commas and whitespace separate them;
/// a run of digits that is a whole multiple of the CRN width is several CRNs
/// that lost their separators during extraction.
pub fn split_crns(text: &str, width: usize) -> Vec<u32> {
    let mut result = Vec::new();

    let tokens = text
        .split(|c: char| c == '-' || c == '–' || c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty());

    for token in tokens {
        if !token
            .bytes()
            .all(|b| b.is_ascii_digit())
        {
            continue;
        }

        if width > 0 && token.len() > width && token.len() % width == 0 {
            for i in (0..token.len()).step_by(width) {
                if let Ok(crn) = token[i..i + width].parse::<u32>() {
                    result.push(crn);
                }
            }
        } else if let Ok(crn) = token.parse::<u32>() {
            result.push(crn);
        }
    }

    result
}

/// Whether a line holds nothing but CRNs of the expected width.
pub fn is_crn_line(line: &str, width: usize) -> bool {
    let re = regex!(r"^[\d\s,\-–]+$");
    let line = line.trim();

    if !re.is_match(line) {
        return false;
    }

    line.split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .all(|run| run.len() >= width)
}
