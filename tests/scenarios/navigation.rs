use doccat::domain::services::NavState;
use doccat::infrastructure::loader::parse_document;
use doccat::{Catalog, ErrorKind, InitialSection, NodeKey, Selection, View};

use crate::common::{EMPTY_CATALOG, OFFICE_CATALOG};

fn office(initial: InitialSection) -> Catalog {
    let tree = parse_document(OFFICE_CATALOG, "office").unwrap();
    Catalog::with_tree(tree, initial)
}

#[test]
fn empty_tree_has_defined_empty_state() {
    let tree = parse_document(EMPTY_CATALOG, "empty").unwrap();
    let mut catalog = Catalog::with_tree(tree, InitialSection::First);

    assert_eq!(catalog.navigator().state(), &NavState::NoSections);
    assert_eq!(catalog.view(), View::NoDocuments);

    catalog.next_section();
    catalog.prev_section();
    assert_eq!(catalog.view(), View::NoDocuments);
}

#[test]
fn sections_follow_key_order_with_display_titles() {
    let catalog = office(InitialSection::All);
    let titles: Vec<_> = catalog
        .view()
        .sections()
        .iter()
        .map(|s| s.title.clone())
        .collect();
    assert_eq!(titles, vec!["Capitolati Esterni", "Verbali"]);
}

#[test]
fn unknown_section_is_rejected_and_state_kept() {
    let mut catalog = office(InitialSection::First);
    let err = catalog
        .on_section_select(&Selection::Section("99_Nope".into()))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Navigation);
    assert_eq!(catalog.navigator().state(), &NavState::Section(0));
}

#[test]
fn manual_expansion_survives_section_switches() {
    let mut catalog = office(InitialSection::First);
    let allegati = NodeKey::root("01_Capitolati_Esterni", 0);
    catalog.on_folder_toggle(&allegati);

    catalog
        .on_section_select(&Selection::Section("02_Verbali".into()))
        .unwrap();
    catalog.on_section_select(&Selection::All).unwrap();

    assert!(catalog.collapse().is_expanded(&allegati));
}

#[test]
fn next_and_prev_cycle_through_the_aggregate_view() {
    let mut catalog = office(InitialSection::First);
    catalog.prev_section();
    assert_eq!(catalog.navigator().state(), &NavState::All);
    catalog.prev_section();
    assert_eq!(catalog.navigator().state(), &NavState::Section(1));
    catalog.next_section();
    catalog.next_section();
    assert_eq!(catalog.navigator().state(), &NavState::Section(0));
}
