use super::messages::generate_error_message;
use finals::language::{LoadingError, ParsingError};
use owo_colors::OwoColorize;
use std::path::Path;

/// Format a parsing error with its full explanation
pub fn full_parsing_error(error: &ParsingError, filename: &Path) -> String {
    let (problem, details) = generate_error_message(error);

    format!(
        r#"
{}: {}: {}

{}
        "#,
        "error".bright_red(),
        filename.to_string_lossy(),
        problem.bold(),
        details
    )
    .trim_ascii()
    .to_string()
}

/// Format a parsing error with concise single-line output
pub fn concise_parsing_error(error: &ParsingError, filename: &Path) -> String {
    let (problem, _) = generate_error_message(error);

    format!(
        "{}: {}: {}",
        "error".bright_red(),
        filename.to_string_lossy(),
        problem.bold(),
    )
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>) -> String {
    let mut result = format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .problem
            .bold()
    );

    if !error
        .details
        .is_empty()
    {
        result.push_str(&format!(" ({})", error.details));
    }

    result
}
