//! Free-text search terms.
//!
//! A search string is split on whitespace. A video matches when its title or
//! its author contains any of the terms, ignoring case. Adding words widens
//! the result set.

/// Escape character used in generated `LIKE` patterns.
pub const LIKE_ESCAPE: char = '\\';

/// Non-empty list of whitespace-separated search terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerms(Vec<String>);

impl SearchTerms {
    /// Tokenize `text`; `None` when it holds no terms at all.
    pub fn parse(text: &str) -> Option<Self> {
        let terms: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        if terms.is_empty() {
            None
        } else {
            Some(Self(terms))
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.0
    }

    /// `LIKE` patterns matching each term as a substring.
    pub fn like_patterns(&self) -> impl Iterator<Item = String> + '_ {
        self.0
            .iter()
            .map(|term| format!("%{}%", escape_like(term)))
    }

    /// In-memory equivalent of the SQL filter. Like SQLite `LIKE`, only
    /// ASCII letters are folded.
    pub fn matches(&self, title: &str, author: &str) -> bool {
        let title = title.to_ascii_lowercase();
        let author = author.to_ascii_lowercase();
        self.0.iter().any(|term| {
            let term = term.to_ascii_lowercase();
            title.contains(&term) || author.contains(&term)
        })
    }
}

/// Escape `LIKE` wildcards so `value` is matched literally.
pub fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}
