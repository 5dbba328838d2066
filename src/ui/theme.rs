use crossterm::style::Color;

/// Design tokens for the Doccat terminal UI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PROGRESS: &str = "●";
    pub const ARROW: &str = "↳";
    pub const CURSOR: &str = "›";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";

    pub const FILE: &str = "•";
    pub const SIGNED: &str = "✎";
    pub const SEARCH: &str = "⌕";

    // Command identifiers (used in headers).
    pub const CATALOG: &str = "📚";
    pub const BUILD: &str = "📦";
    pub const WATCH: &str = "⟳";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PROGRESS: &str = "[..]";
    pub const ARROW: &str = "[>]";
    pub const CURSOR: &str = ">";

    // Tree expansion.
    pub const EXPAND: &str = "[-]";
    pub const COLLAPSE: &str = "[+]";

    pub const FILE: &str = "*";
    pub const SIGNED: &str = "[signed]";
    pub const SEARCH: &str = "/";

    pub const CATALOG: &str = "[CATALOG]";
    pub const BUILD: &str = "[BUILD]";
    pub const WATCH: &str = "[~]";
}

/// User-facing strings shared by the CLI views and the browser.
pub mod labels {
    pub const NO_DOCUMENTS: &str = "No documents";
    pub const NO_SECTIONS: &str = "No sections in this catalog";
    pub const NO_MATCHES: &str = "No matching documents";
    pub const EMPTY_FOLDER: &str = "(empty)";
    pub const LOADING: &str = "Loading catalog...";
    pub const ALL_SECTIONS: &str = "All";
}
