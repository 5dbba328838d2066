//! Section Value Objects
//!
//! Section naming rules, user selections and the startup selection policy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Display names derived from a raw section key such as `01_Capitolati_Esterni`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionName {
    pub key: String,
    /// Ordinal prefix removed, underscores as spaces
    pub title: String,
    /// Raw key with underscores as spaces
    pub heading: String,
    /// Anchor id usable in links
    pub anchor: String,
}

impl SectionName {
    pub fn new(key: &str, index: usize) -> Self {
        let title = section_title(key);
        let anchor = section_anchor(&title, index);
        Self {
            key: key.to_string(),
            heading: key.replace('_', " "),
            title,
            anchor,
        }
    }
}

fn section_title(key: &str) -> String {
    let digits = key.bytes().take_while(u8::is_ascii_digit).count();
    let stripped = if digits > 0 && key.as_bytes().get(digits) == Some(&b'_') {
        &key[digits + 1..]
    } else {
        key
    };
    stripped.replace('_', " ")
}

fn section_anchor(title: &str, index: usize) -> String {
    let mut anchor = String::with_capacity(title.len());
    let mut in_space = false;
    for ch in title.to_lowercase().chars() {
        if ch.is_whitespace() {
            if !in_space {
                anchor.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' || ch == '_' {
            anchor.push(ch);
        }
    }

    if anchor.is_empty() {
        format!("section-{}", index)
    } else {
        anchor
    }
}

/// A user's section choice
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selection {
    Section(String),
    /// The aggregate "all sections" view
    All,
}

impl Selection {
    pub const ALL_KEYWORD: &'static str = "*";
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Section(key) => f.write_str(key),
            Selection::All => f.write_str(Self::ALL_KEYWORD),
        }
    }
}

impl FromStr for Selection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_KEYWORD {
            Ok(Selection::All)
        } else {
            Ok(Selection::Section(s.to_string()))
        }
    }
}

/// Which selection the navigator starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InitialSection {
    /// First section in canonical key order
    #[default]
    First,
    /// Aggregate view of every section
    All,
}
