//! Recovering exam entries from the text of a finals schedule

use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::language::{ExamEntry, LoadingError, Options, ParsingError};

pub mod classifier;
pub mod fields;
mod formats;
pub mod normalizer;

pub use classifier::classify;
pub use normalizer::normalize;

/// Read a file (or standard input, if the filename is "-") and return an
/// owned String.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    if filename.to_str() == Some("-") {
        let mut content = String::new();
        return match std::io::stdin().read_to_string(&mut content) {
            Ok(_) => Ok(content),
            Err(error) => {
                debug!(?error);
                Err(LoadingError {
                    problem: "Failed reading standard input".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                })
            }
        };
    }

    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Parse the text of a finals schedule into exam entries, using the default
/// options. This is the entry point the rest of a system should call.
pub fn parse_finals_schedule(raw: &str) -> Result<Vec<ExamEntry>, ParsingError> {
    parse_finals_schedule_with(raw, &Options::default())
}

/// Normalize the text, work out which layout it is in, and hand it to the
/// parser for that layout. A document in no known layout is an error rather
/// than an empty schedule.
pub fn parse_finals_schedule_with(
    raw: &str,
    options: &Options,
) -> Result<Vec<ExamEntry>, ParsingError> {
    let text = normalize(raw);

    let variant = match classify(&text) {
        Some(variant) => variant,
        None => {
            warn!("No known schedule layout matched");
            return Err(ParsingError::UnrecognizedFormat);
        }
    };

    info!("Parsing schedule as {}", variant);

    let entries = variant.parse(&text, options);

    debug!(
        "Found {} entr{}",
        entries.len(),
        if entries.len() == 1 { "y" } else { "ies" }
    );

    Ok(entries)
}
