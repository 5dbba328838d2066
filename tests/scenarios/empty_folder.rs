use doccat::application::RenderedNode;
use doccat::infrastructure::loader::parse_document;
use doccat::{Catalog, InitialSection, NodeKey};

const EMPTY_FOLDER: &str = r#"{"Archive": [{"type": "folder", "name": "Old", "children": []}]}"#;

fn folder_state(catalog: &Catalog) -> (bool, usize) {
    match &catalog.view().sections()[0].body.nodes()[0] {
        RenderedNode::Folder(folder) => (folder.expanded, folder.children.len()),
        other => panic!("expected folder, got {other:?}"),
    }
}

#[test]
fn empty_folder_renders_toggle_and_container() {
    let tree = parse_document(EMPTY_FOLDER, "archive").unwrap();
    let catalog = Catalog::with_tree(tree, InitialSection::First);
    assert_eq!(folder_state(&catalog), (false, 0));
}

#[test]
fn toggling_an_empty_folder_flips_state() {
    let tree = parse_document(EMPTY_FOLDER, "archive").unwrap();
    let mut catalog = Catalog::with_tree(tree, InitialSection::First);
    let key = NodeKey::root("Archive", 0);

    assert!(catalog.on_folder_toggle(&key));
    assert_eq!(folder_state(&catalog), (true, 0));

    assert!(!catalog.on_folder_toggle(&key));
    assert_eq!(folder_state(&catalog), (false, 0));
}

#[test]
fn empty_folder_never_matches_a_query() {
    let tree = parse_document(EMPTY_FOLDER, "archive").unwrap();
    let mut catalog = Catalog::with_tree(tree, InitialSection::First);
    catalog.on_search_input("old");

    assert!(catalog.view().sections()[0].body.nodes().is_empty());
}
