use regex::Regex;

/// Per-field cleanup rules shared by the provider mappers
#[derive(Debug, Clone)]
pub struct ResultNormalizer {
    emphasis_tags: Regex,
}

impl ResultNormalizer {
    pub fn new() -> Self {
        Self {
            emphasis_tags: Regex::new(r"(?i)</?b>").unwrap(),
        }
    }

    /// Strip the query-highlighting markup some providers embed in titles
    pub fn strip_emphasis_tags(&self, text: &str) -> String {
        self.emphasis_tags.replace_all(text, "").into_owned()
    }

    /// Leading 4-character year of a provider date string, display-only.
    /// `None` for absent or too-short input.
    pub fn release_year(released: Option<&str>) -> Option<String> {
        released.and_then(|date| date.get(..4)).map(str::to_string)
    }

    /// Absent or empty artwork fields map to `None`, never an empty string
    pub fn image_url(url: Option<String>) -> Option<String> {
        url.filter(|u| !u.is_empty())
    }
}
