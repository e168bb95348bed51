use std::{fmt, path::Path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}

impl<'i> std::error::Error for LoadingError<'i> {}

/// Failures that abandon a whole document. Rows that cannot be resolved are
/// not errors; they are left out of the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    UnrecognizedFormat,
}

impl ParsingError {
    pub fn message(&self) -> String {
        match self {
            ParsingError::UnrecognizedFormat => "unrecognized schedule format".to_string(),
        }
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ParsingError {}
