/// Compile a regular expression once and hand back a static reference to it
/// on every subsequent use.
macro_rules! regex {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<::regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| ::regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}

/// The same, for a table of patterns matched together.
macro_rules! regex_set {
    ($patterns:expr) => {{
        use std::sync::OnceLock;
        static SET: OnceLock<::regex::RegexSet> = OnceLock::new();
        SET.get_or_init(|| ::regex::RegexSet::new($patterns).unwrap_or_else(|e| panic!("{}", e)))
    }};
}
