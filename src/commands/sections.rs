use anyhow::Result;

use doccat::domain::services::Navigator;
use doccat::{load_tree, source_from_id, InitialSection};

use crate::ui::context::UiContext;
use crate::ui::views::sections::{render_sections, summarize};

pub fn cmd_sections(ui: &UiContext, source: &str) -> Result<()> {
    let source = source_from_id(source);
    let source_id = source.id();
    let tree = load_tree(source.as_ref())?;
    let navigator = Navigator::new(&tree, InitialSection::First);
    let sections = summarize(&navigator, &tree);

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "sections",
            "source": source_id,
            "sections": sections,
        }))?;
        return Ok(());
    }

    print!(
        "{}",
        render_sections(&source_id, &sections, ui.color, ui.unicode)
    );
    Ok(())
}
