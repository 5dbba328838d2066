//! Catalog documents shared by the integration tests.

/// One section, one folder, one file.
pub const REPORTS_CATALOG: &str = r#"{
  "Reports": [
    {"type": "folder", "name": "2023", "children": [
      {"type": "file", "name": "Q1.pdf", "path": "/r/q1.pdf"}
    ]}
  ]
}"#;

/// Two numbered sections with tags, nested folders and an empty folder.
pub const OFFICE_CATALOG: &str = r#"{
  "02_Verbali": [
    {"type": "file", "name": "Verbale Marzo", "path": "./docs/02_Verbali/Verbale_Marzo.pdf", "date": "2024-03-28"},
    {"type": "folder", "name": "Archivio", "children": []}
  ],
  "01_Capitolati_Esterni": [
    {"type": "file", "name": "Capitolato v1.2", "path": "./docs/01_Capitolati_Esterni/Capitolato_v1.2.pdf", "version": "v1.2", "signed": true},
    {"type": "folder", "name": "Allegati", "children": [
      {"type": "folder", "name": "2024", "children": [
        {"type": "file", "name": "Allegato B", "path": "./docs/01_Capitolati_Esterni/Allegati/2024/Allegato_B.pdf"}
      ]},
      {"type": "file", "name": "allegato a", "path": "./docs/01_Capitolati_Esterni/Allegati/allegato_a.pdf"}
    ]}
  ]
}"#;

pub const EMPTY_CATALOG: &str = "{}";

/// The first node lacks `type`.
pub const MISSING_TYPE_CATALOG: &str = r#"{"Reports": [{"name": "Q1.pdf", "path": "/r/q1.pdf"}]}"#;

/// A nested folder without `children`.
pub const FOLDER_WITHOUT_CHILDREN_CATALOG: &str = r#"{
  "Reports": [
    {"type": "folder", "name": "2023", "children": [
      {"type": "folder", "name": "Q1"}
    ]}
  ]
}"#;
