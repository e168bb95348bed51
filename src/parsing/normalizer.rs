//! Removal of the annotations registrars add to a schedule as it is revised.

/// Strip amendment markers, change annotations, the "Schedule as of" footer
/// and stale UPDATED prefixes. Each step is idempotent and the absence of a
/// pattern leaves the text alone.
pub fn normalize(raw: &str) -> String {
    let text = line_endings(raw);
    let text = strip_amendment_markers(&text);
    let text = strip_change_annotations(&text);
    let text = strip_footer(&text);
    strip_updated_prefix(&text)
}

/// PDF-to-text tools separate pages with form feeds and sometimes emit
/// carriage returns.
fn line_endings(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\x0c', "")
}

fn strip_amendment_markers(text: &str) -> String {
    let re = regex!(r"(?m)^([ \t]*)\*+[ \t]*");

    re.replace_all(text, "$1")
        .into_owned()
}

fn strip_change_annotations(text: &str) -> String {
    let re = regex!(r"(?i)[ \t]*[(*]*[ \t]*\bDate[ \t]*(?:&|and)[ \t]*Time[ \t]+Change\b[)*]*");

    re.replace_all(text, "")
        .into_owned()
}

fn strip_footer(text: &str) -> String {
    let re = regex!(r"(?im)^[ \t]*Schedule[ \t]+as[ \t]+of\b[^\n]*(?:\n|$)");

    re.replace_all(text, "")
        .into_owned()
}

fn strip_updated_prefix(text: &str) -> String {
    let re = regex!(r"(?im)^([ \t]*)UPDATED:?[ \t]+((?:Fall|Winter|Spring|Summer)\b)");

    re.replace_all(text, "$1$2")
        .into_owned()
}
