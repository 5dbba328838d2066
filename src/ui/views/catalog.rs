use doccat::View;

use crate::ui::widgets::catalog_tree::{flatten_view, render_line, LineKind};

/// Plain-text tree for `doccat show`, one entry per line.
pub fn render_catalog(view: &View, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = String::new();
    for (index, line) in flatten_view(view).iter().enumerate() {
        if index > 0 && matches!(line.kind, LineKind::SectionHeader { .. }) {
            out.push('\n');
        }
        out.push_str(&render_line(line, supports_color, supports_unicode, None));
        out.push('\n');
    }
    out
}
