use anyhow::Result;

use doccat::{load_tree, source_from_id, Catalog, Config, InitialSection, Selection};

use crate::ui::context::UiContext;
use crate::ui::views::catalog::render_catalog;

pub struct ShowArgs {
    pub source: String,
    pub section: Option<String>,
    pub all: bool,
    pub query: Option<String>,
    pub expand_all: bool,
}

pub fn cmd_show(ui: &UiContext, config: &Config, args: ShowArgs) -> Result<()> {
    let source = source_from_id(&args.source);
    let tree = load_tree(source.as_ref())?;

    let initial = if args.all {
        InitialSection::All
    } else {
        config.navigation.initial
    };
    let mut catalog = Catalog::with_tree(tree, initial);

    if let Some(key) = &args.section {
        let selection = match key.parse::<Selection>() {
            Ok(selection) => selection,
            Err(never) => match never {},
        };
        catalog.on_section_select(&selection)?;
    }
    if let Some(query) = &args.query {
        catalog.on_search_input(query);
    }
    if args.expand_all {
        catalog.expand_all();
    }

    let view = catalog.view();
    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "catalog",
            "source": source.id(),
            "query": catalog.query().as_str(),
            "view": view,
        }))?;
        return Ok(());
    }

    print!("{}", render_catalog(&view, ui.color, ui.unicode));
    Ok(())
}
