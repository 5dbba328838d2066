//! Search Query Value Object
//!
//! A case-folded substring query. The empty query means "no filter".

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    raw: String,
    folded: String,
}

impl Query {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let folded = raw.to_lowercase();
        Self { raw, folded }
    }

    /// The query as typed
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }

    /// Case-insensitive substring test. The empty query matches everything.
    pub fn matches(&self, name: &str) -> bool {
        self.is_empty() || name.to_lowercase().contains(&self.folded)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for Query {
    fn from(raw: &str) -> Self {
        Query::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_case_insensitively() {
        let query = Query::new("q1");
        assert!(query.matches("Q1.pdf"));
        assert!(query.matches("report-q1"));
        assert!(!query.matches("Q2.pdf"));
    }

    #[test]
    fn empty_query_matches_everything() {
        let query = Query::new("");
        assert!(query.is_empty());
        assert!(query.matches("anything"));
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        let query = Query::new(" ");
        assert!(!query.is_empty());
        assert!(query.matches("Verbale 01"));
        assert!(!query.matches("Verbale_01"));
    }

    #[test]
    fn keeps_raw_text_for_display() {
        assert_eq!(Query::new("Verbale").to_string(), "Verbale");
    }
}
