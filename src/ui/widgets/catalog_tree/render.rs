//! Terminal rendering functions for the catalog browser.
//!
//! Widths are measured on the plain text before styling, so ANSI escapes
//! never count against the terminal width.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use doccat::application::FileRow;
use doccat::domain::services::{NavState, Navigator};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{tag, ColoredText};
use crate::ui::theme::labels;

use super::menu::{CatalogLine, LineKind};

/// Shorten `text` to at most `max` columns, marking the cut.
pub fn truncate_to_width(text: &str, max: usize, supports_unicode: bool) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let marker = if supports_unicode { "…" } else { "..." };
    let budget = max.saturating_sub(marker.width());
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str(marker);
    out
}

fn file_tags(file: &FileRow, supports_color: bool, supports_unicode: bool) -> Vec<String> {
    let mut tags = Vec::new();
    if let Some(version) = &file.version {
        tags.push(tag(version, supports_color));
    }
    if let Some(date) = &file.date {
        tags.push(tag(date, supports_color));
    }
    if file.signed == Some(true) {
        tags.push(Icon::Signed.colored(supports_color, supports_unicode));
    }
    if let Some(score) = file.gulpease {
        tags.push(tag(&format!("gulpease {:.0}", score), supports_color));
    }
    tags
}

fn plain_tags_width(file: &FileRow, supports_unicode: bool) -> usize {
    file_tags(file, false, supports_unicode)
        .iter()
        .map(|t| t.width() + 1)
        .sum()
}

/// Render one line, fitting the name into `max_width` columns when given.
pub fn render_line(
    line: &CatalogLine,
    supports_color: bool,
    supports_unicode: bool,
    max_width: Option<usize>,
) -> String {
    let indent = "  ".repeat(line.depth);
    let fit = |text: &str, reserved: usize| match max_width {
        Some(max) => truncate_to_width(
            text,
            max.saturating_sub(indent.width() + reserved).max(1),
            supports_unicode,
        ),
        None => text.to_string(),
    };

    match &line.kind {
        LineKind::SectionHeader { title, .. } => {
            let icon = Icon::Catalog.render(supports_unicode);
            let title = fit(title, icon.width() + 1);
            format!(
                "{}{} {}",
                indent,
                Icon::Catalog.colored(supports_color, supports_unicode),
                ColoredText::info(title).bold().render(supports_color)
            )
        }
        LineKind::Folder { name, expanded, .. } => {
            let icon = if *expanded {
                Icon::Expanded
            } else {
                Icon::Collapsed
            };
            let name = fit(name, icon.render(supports_unicode).width() + 1);
            format!(
                "{}{} {}",
                indent,
                icon.colored(supports_color, supports_unicode),
                ColoredText::plain(name).bold().render(supports_color)
            )
        }
        LineKind::File(file) => {
            let reserved =
                Icon::File.render(supports_unicode).width() + 1 + plain_tags_width(file, supports_unicode);
            let mut out = format!(
                "{}{} {}",
                indent,
                Icon::File.colored(supports_color, supports_unicode),
                fit(&file.name, reserved)
            );
            for t in file_tags(file, supports_color, supports_unicode) {
                out.push(' ');
                out.push_str(&t);
            }
            out
        }
        LineKind::Notice(text) => format!(
            "{}{}",
            indent,
            ColoredText::dim(fit(text, 0)).render(supports_color)
        ),
        LineKind::Failure(message) => format!(
            "{}{} {}",
            indent,
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(fit(message, 2)).render(supports_color)
        ),
        LineKind::Anomaly { location, message } => format!(
            "{}{} {}",
            indent,
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning(fit(&format!("{}: {}", location, message), 2))
                .render(supports_color)
        ),
    }
}

/// Section tabs; the active one (or "All") is shown in reverse video.
pub fn render_tabs(navigator: &Navigator, supports_color: bool) -> String {
    let state = navigator.state();
    let mut tabs = Vec::with_capacity(navigator.sections().len() + 1);

    let all = format!(" {} ", labels::ALL_SECTIONS);
    tabs.push(tab_label(all, *state == NavState::All, supports_color));
    for (index, section) in navigator.sections().iter().enumerate() {
        let label = format!(" {} ", section.title);
        tabs.push(tab_label(
            label,
            *state == NavState::Section(index),
            supports_color,
        ));
    }
    tabs.join(" ")
}

fn tab_label(label: String, active: bool, supports_color: bool) -> String {
    if !active {
        return ColoredText::dim(label).render(supports_color);
    }
    if supports_color {
        ColoredText::info(label).bold().reverse().render(true)
    } else {
        format!("[{}]", label.trim())
    }
}

/// Status bar: active section, query, and the last action's result
pub fn render_status_bar(
    navigator: &Navigator,
    query: &str,
    searching: bool,
    status: Option<(&str, bool)>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let section = match navigator.state() {
        NavState::NoSections => "-".to_string(),
        NavState::All => labels::ALL_SECTIONS.to_string(),
        NavState::Section(index) => format!(
            "{} ({}/{})",
            navigator.sections()[*index].title,
            index + 1,
            navigator.sections().len()
        ),
    };

    let mut out = format!("Section: {}", section);
    if searching || !query.is_empty() {
        let cursor = if searching { "_" } else { "" };
        out.push_str(&format!(
            "    {} {}{}",
            Icon::Search.colored(supports_color, supports_unicode),
            query,
            cursor
        ));
    }
    if let Some((text, is_error)) = status {
        let text = if is_error {
            ColoredText::error(text)
        } else {
            ColoredText::success(text)
        };
        out.push_str("    ");
        out.push_str(&text.render(supports_color));
    }
    out
}

/// Keyboard shortcuts for the current mode
pub fn render_help_bar(searching: bool) -> String {
    if searching {
        return String::from("Type to filter    [Enter] Done    [Esc] Clear search");
    }
    String::from(
        "[Enter] Toggle/Open  [Tab] Next section  [*] All  [/] Search  [o] Open  [d] Download\n\
         [E] Expand all  [C] Collapse all  [r] Reload  [q] Quit  (↑↓ move, →← expand/collapse)",
    )
}
