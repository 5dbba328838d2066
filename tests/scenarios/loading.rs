use doccat::infrastructure::loader::parse_document;
use doccat::{Catalog, CatalogError, ErrorKind, InitialSection, LoadOutcome, Selection, View};

use crate::common::{MISSING_TYPE_CATALOG, OFFICE_CATALOG, REPORTS_CATALOG};

#[test]
fn catalog_starts_loading_then_shows_tree() {
    let mut catalog = Catalog::new(InitialSection::First);
    assert_eq!(catalog.view(), View::Loading);

    let ticket = catalog.begin_load();
    assert!(catalog.is_loading());
    let outcome = catalog.finish_load(ticket, parse_document(REPORTS_CATALOG, "reports"));

    assert_eq!(outcome, LoadOutcome::Applied);
    assert!(!catalog.is_loading());
    assert_eq!(catalog.view().sections()[0].key, "Reports");
}

#[test]
fn schema_failure_blanks_the_view_with_message() {
    let mut catalog = Catalog::new(InitialSection::First);
    let ticket = catalog.begin_load();
    let outcome = catalog.finish_load(ticket, parse_document(MISSING_TYPE_CATALOG, "bad"));

    assert_eq!(outcome, LoadOutcome::Failed);
    match catalog.view() {
        View::Failed { kind, message } => {
            assert_eq!(kind, ErrorKind::Schema);
            assert!(message.contains("Reports[0]"));
        }
        other => panic!("expected failure view, got {other:?}"),
    }
}

#[test]
fn load_failure_is_distinct_from_schema_failure() {
    let mut catalog = Catalog::new(InitialSection::First);
    let ticket = catalog.begin_load();
    catalog.finish_load(ticket, Err(CatalogError::load("http://x/t.json", "HTTP 503")));

    assert!(matches!(catalog.view(), View::Failed { kind: ErrorKind::Load, .. }));
}

#[test]
fn stale_load_result_is_dropped() {
    let mut catalog = Catalog::new(InitialSection::First);
    let first = catalog.begin_load();
    let second = catalog.begin_load();

    let applied = catalog.finish_load(second, parse_document(OFFICE_CATALOG, "office"));
    let stale = catalog.finish_load(first, parse_document(REPORTS_CATALOG, "reports"));

    assert_eq!(applied, LoadOutcome::Applied);
    assert_eq!(stale, LoadOutcome::Stale);
    assert_eq!(catalog.view().sections()[0].key, "01_Capitolati_Esterni");
}

#[test]
fn reload_keeps_selected_section() {
    let tree = parse_document(OFFICE_CATALOG, "office").unwrap();
    let mut catalog = Catalog::with_tree(tree, InitialSection::First);
    catalog
        .on_section_select(&Selection::Section("02_Verbali".into()))
        .unwrap();

    let ticket = catalog.begin_load();
    catalog.finish_load(ticket, parse_document(OFFICE_CATALOG, "office"));
    assert_eq!(catalog.view().sections()[0].key, "02_Verbali");
}

#[test]
fn failed_reload_then_recovery() {
    let tree = parse_document(OFFICE_CATALOG, "office").unwrap();
    let mut catalog = Catalog::with_tree(tree, InitialSection::First);

    let ticket = catalog.begin_load();
    catalog.finish_load(ticket, parse_document("not json", "office"));
    assert!(catalog.failure().is_some());
    assert!(catalog.tree().is_none());

    let ticket = catalog.begin_load();
    assert_eq!(
        catalog.finish_load(ticket, parse_document(OFFICE_CATALOG, "office")),
        LoadOutcome::Applied
    );
    assert!(catalog.failure().is_none());
    assert_eq!(catalog.view().sections().len(), 1);
}
