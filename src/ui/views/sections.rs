use serde::Serialize;

use doccat::domain::services::Navigator;
use doccat::DocumentTree;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::labels;

/// One section as listed by `doccat sections`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionSummary {
    pub key: String,
    pub title: String,
    pub heading: String,
    pub anchor: String,
    pub files: usize,
}

pub fn summarize(navigator: &Navigator, tree: &DocumentTree) -> Vec<SectionSummary> {
    navigator
        .sections()
        .iter()
        .map(|section| SectionSummary {
            key: section.key.clone(),
            title: section.title.clone(),
            heading: section.heading.clone(),
            anchor: section.anchor.clone(),
            files: tree
                .section(&section.key)
                .map(|nodes| nodes.iter().map(|n| n.file_count()).sum())
                .unwrap_or(0),
        })
        .collect()
}

pub fn render_sections(
    source: &str,
    sections: &[SectionSummary],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Catalog, "Doccat Sections");
    header.add("Catalog", source);
    let mut out = header.render(supports_color, supports_unicode);
    out.push('\n');

    if sections.is_empty() {
        out.push_str(&format!(
            "  {}\n",
            ColoredText::dim(labels::NO_SECTIONS).render(supports_color)
        ));
        return out;
    }

    let width = sections.iter().map(|s| s.title.chars().count()).max().unwrap_or(0);
    for section in sections {
        let noun = if section.files == 1 { "document" } else { "documents" };
        out.push_str(&format!(
            "  {:width$}  {}\n",
            section.title,
            ColoredText::dim(format!(
                "{} · #{} · {} {}",
                section.key, section.anchor, section.files, noun
            ))
            .render(supports_color),
            width = width
        ));
    }
    out
}
