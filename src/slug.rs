use once_cell::sync::Lazy;
use regex::Regex;

static STRIP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\p{N}\s]").unwrap());
static SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Heading id: lowercase letters and digits, words joined by single hyphens.
///
/// Works on Unicode letters and digits, so non-Latin headings keep their
/// characters. Identical texts yield identical ids; nothing is de-duplicated.
pub fn slugify(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let stripped = STRIP_RE.replace_all(&lowered, "");
    let hyphenated = SPACE_RE.replace_all(&stripped, "-");
    hyphenated.trim_matches('-').to_string()
}
