use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Arrow,
    Cursor,
    Expanded,
    Collapsed,
    File,
    Signed,
    Search,
    Catalog,
    Build,
    Watch,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        if supports_unicode {
            match self {
                Icon::Success => theme::icons::SUCCESS,
                Icon::Error => theme::icons::ERROR,
                Icon::Warning => theme::icons::WARNING,
                Icon::Progress => theme::icons::PROGRESS,
                Icon::Arrow => theme::icons::ARROW,
                Icon::Cursor => theme::icons::CURSOR,
                Icon::Expanded => theme::icons::EXPAND,
                Icon::Collapsed => theme::icons::COLLAPSE,
                Icon::File => theme::icons::FILE,
                Icon::Signed => theme::icons::SIGNED,
                Icon::Search => theme::icons::SEARCH,
                Icon::Catalog => theme::icons::CATALOG,
                Icon::Build => theme::icons::BUILD,
                Icon::Watch => theme::icons::WATCH,
            }
        } else {
            match self {
                Icon::Success => theme::icons_ascii::SUCCESS,
                Icon::Error => theme::icons_ascii::ERROR,
                Icon::Warning => theme::icons_ascii::WARNING,
                Icon::Progress => theme::icons_ascii::PROGRESS,
                Icon::Arrow => theme::icons_ascii::ARROW,
                Icon::Cursor => theme::icons_ascii::CURSOR,
                Icon::Expanded => theme::icons_ascii::EXPAND,
                Icon::Collapsed => theme::icons_ascii::COLLAPSE,
                Icon::File => theme::icons_ascii::FILE,
                Icon::Signed => theme::icons_ascii::SIGNED,
                Icon::Search => theme::icons_ascii::SEARCH,
                Icon::Catalog => theme::icons_ascii::CATALOG,
                Icon::Build => theme::icons_ascii::BUILD,
                Icon::Watch => theme::icons_ascii::WATCH,
            }
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success | Icon::Signed => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Progress => theme::colors::WARNING,
            Icon::Arrow | Icon::File => theme::colors::DIM,
            Icon::Cursor
            | Icon::Expanded
            | Icon::Collapsed
            | Icon::Search
            | Icon::Catalog
            | Icon::Build
            | Icon::Watch => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
