//! Output generation for the finals CLI application

use serde::Serialize;
use tinytemplate::{format_unescaped, TinyTemplate};
use tracing::debug;

use finals::language::ExamEntry;

static TEMPLATE: &'static str = "{{ for entry in entries }}{entry.crn}  {entry.date}  {entry.time}  {entry.location}{{ if entry.combined }}  [{entry.combined}]{{ endif }}\n{{ endfor }}";

#[derive(Serialize)]
struct Context {
    entries: Vec<Line>,
}

#[derive(Serialize)]
struct Line {
    crn: u32,
    date: String,
    time: String,
    location: String,
    combined: String,
}

/// Render entries as pretty-printed JSON.
pub fn via_json(entries: &[ExamEntry]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(entries)
}

/// Render entries as a plain text table, one sitting per line, listing the
/// combined CRNs only where there is more than one.
pub fn via_text(entries: &[ExamEntry]) -> Result<String, tinytemplate::error::Error> {
    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&format_unescaped);
    tt.add_template("entries", TEMPLATE)?;

    let context = Context {
        entries: entries
            .iter()
            .map(line)
            .collect(),
    };

    debug!("Rendering {} entries", context.entries.len());

    tt.render("entries", &context)
}

fn line(entry: &ExamEntry) -> Line {
    let combined = if entry
        .combined_crns
        .len()
        > 1
    {
        entry
            .combined_crns
            .iter()
            .map(|crn| crn.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    } else {
        String::new()
    };

    Line {
        crn: entry.crn,
        date: match entry.date {
            Some(date) => date
                .format("%a %Y-%m-%d")
                .to_string(),
            None => "-".to_string(),
        },
        time: format!("{}-{}", clock(entry.start_time), clock(entry.end_time)),
        location: entry
            .location
            .clone()
            .unwrap_or_else(|| "-".to_string()),
        combined,
    }
}

fn clock(time: Option<u16>) -> String {
    match time {
        Some(time) => format!("{:02}:{:02}", time / 100, time % 100),
        None => "--:--".to_string(),
    }
}
