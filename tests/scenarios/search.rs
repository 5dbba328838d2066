use doccat::application::{RenderedNode, SectionBody};
use doccat::infrastructure::loader::parse_document;
use doccat::{Catalog, InitialSection, NodeKey, View};

use crate::common::{OFFICE_CATALOG, REPORTS_CATALOG};

fn reports() -> Catalog {
    let tree = parse_document(REPORTS_CATALOG, "reports").unwrap();
    Catalog::with_tree(tree, InitialSection::First)
}

fn body(view: &View) -> &SectionBody {
    &view.sections()[0].body
}

#[test]
fn matching_query_force_expands_the_folder() {
    let mut catalog = reports();
    catalog.on_search_input("q1");

    let view = catalog.view();
    let nodes = body(&view).nodes();
    assert_eq!(nodes.len(), 1);
    match &nodes[0] {
        RenderedNode::Folder(folder) => {
            assert_eq!(folder.name, "2023");
            assert!(folder.expanded);
            assert_eq!(folder.children.len(), 1);
            assert!(matches!(&folder.children[0], RenderedNode::File(f) if f.name == "Q1.pdf"));
        }
        other => panic!("expected folder, got {other:?}"),
    }
}

#[test]
fn query_without_matches_hides_everything_without_error() {
    let mut catalog = reports();
    catalog.on_search_input("zzz");

    let view = catalog.view();
    assert_eq!(body(&view), &SectionBody::NoMatches);
}

#[test]
fn clearing_the_query_restores_manual_collapse_state() {
    let mut catalog = reports();
    let folder = NodeKey::root("Reports", 0);

    catalog.on_search_input("q1");
    assert!(matches!(&body(&catalog.view()).nodes()[0], RenderedNode::Folder(f) if f.expanded));

    catalog.on_search_input("");
    assert!(matches!(&body(&catalog.view()).nodes()[0], RenderedNode::Folder(f) if !f.expanded));
    assert!(!catalog.collapse().has_forced());
    assert!(!catalog.collapse().is_expanded(&folder));
}

#[test]
fn query_is_reapplied_after_section_switch() {
    let tree = parse_document(OFFICE_CATALOG, "office").unwrap();
    let mut catalog = Catalog::with_tree(tree, InitialSection::First);

    catalog.on_search_input("verbale");
    assert_eq!(body(&catalog.view()), &SectionBody::NoMatches);

    catalog.next_section();
    assert_eq!(catalog.query().as_str(), "verbale");
    let view = catalog.view();
    assert_eq!(view.sections()[0].key, "02_Verbali");
    let names: Vec<_> = body(&view)
        .nodes()
        .iter()
        .filter_map(|n| match n {
            RenderedNode::File(f) => Some(f.name.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(names, vec!["Verbale Marzo"]);
}

#[test]
fn nested_match_expands_every_ancestor() {
    let tree = parse_document(OFFICE_CATALOG, "office").unwrap();
    let mut catalog = Catalog::with_tree(tree, InitialSection::First);
    catalog.on_search_input("allegato b");

    let view = catalog.view();
    let allegati = match &body(&view).nodes()[0] {
        RenderedNode::Folder(folder) => folder,
        other => panic!("expected folder, got {other:?}"),
    };
    assert!(allegati.expanded);
    assert_eq!(allegati.children.len(), 1);
    match &allegati.children[0] {
        RenderedNode::Folder(year) => {
            assert_eq!(year.name, "2024");
            assert!(year.expanded);
            assert!(matches!(&year.children[0], RenderedNode::File(f) if f.name == "Allegato B"));
        }
        other => panic!("expected folder, got {other:?}"),
    }
}

#[test]
fn expand_all_then_collapse_all_round_trip() {
    let tree = parse_document(OFFICE_CATALOG, "office").unwrap();
    let mut catalog = Catalog::with_tree(tree, InitialSection::All);

    catalog.expand_all();
    for section in catalog.view().sections() {
        for node in section.body.nodes() {
            if let RenderedNode::Folder(folder) = node {
                assert!(folder.expanded, "{} should be expanded", folder.name);
            }
        }
    }

    catalog.collapse_all();
    for section in catalog.view().sections() {
        for node in section.body.nodes() {
            if let RenderedNode::Folder(folder) = node {
                assert!(!folder.expanded, "{} should be collapsed", folder.name);
            }
        }
    }
}
