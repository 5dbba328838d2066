//! Directory scanner
//!
//! Builds a catalog from a documents directory: each top-level directory is a
//! section, nested directories become folders and matching files become file
//! nodes. Hidden entries and paths listed in `.doccatignore` are skipped.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use std::sync::OnceLock;

use chrono::{DateTime, Local};
use ignore::WalkBuilder;
use regex::Regex;

use crate::config::ScanConfig;
use crate::domain::entities::{DocumentTree, FileNode, FolderNode, Node};
use crate::error::{CatalogError, CatalogResult};

/// Per-directory ignore file honored by the scanner
pub const IGNORE_FILE: &str = ".doccatignore";

/// Extensions read as plain text for readability scoring
const TEXT_EXTENSIONS: &[&str] = &["txt", "md"];

/// Extensions whose text layer is extracted for readability scoring
const PDF_EXTENSIONS: &[&str] = &["pdf"];

/// Fewer words than this gives no readability score
const MIN_READABILITY_WORDS: usize = 10;

#[derive(Debug, Default)]
struct DirEntries {
    dirs: BTreeMap<String, DirEntries>,
    files: Vec<FileNode>,
}

impl DirEntries {
    fn descend(&mut self, parts: &[String]) -> &mut DirEntries {
        parts.iter().fold(self, |dir, part| {
            dir.dirs.entry(part.clone()).or_default()
        })
    }

    fn into_nodes(self) -> Vec<Node> {
        let mut nodes: Vec<Node> = self
            .dirs
            .into_iter()
            .map(|(name, dir)| Node::Folder(FolderNode::with_children(name, dir.into_nodes())))
            .collect();
        nodes.extend(self.files.into_iter().map(Node::File));
        nodes
    }
}

/// Scan `docs_dir` into a catalog.
pub fn scan(docs_dir: &Path, config: &ScanConfig) -> CatalogResult<DocumentTree> {
    if !docs_dir.is_dir() {
        return Err(CatalogError::Scan {
            path: docs_dir.to_path_buf(),
            message: "not a directory".to_string(),
        });
    }

    let docs_name = docs_dir_name(docs_dir);
    let mut root = DirEntries::default();

    let walker = WalkBuilder::new(docs_dir)
        .standard_filters(false)
        .hidden(true)
        .add_custom_ignore_filename(IGNORE_FILE)
        .build();

    for entry in walker {
        let entry = entry.map_err(|e| CatalogError::Scan {
            path: docs_dir.to_path_buf(),
            message: e.to_string(),
        })?;

        let relative = match entry.path().strip_prefix(docs_dir) {
            Ok(rel) => rel,
            Err(_) => continue,
        };
        let parts = path_parts(relative);
        if parts.is_empty() {
            continue;
        }

        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if is_dir {
            root.descend(&parts);
            continue;
        }

        // Files directly under the docs directory belong to no section.
        if parts.len() < 2 {
            tracing::debug!(path = %relative.display(), "skipping file outside any section");
            continue;
        }

        if !has_extension(entry.path(), config.extensions.as_slice()) {
            continue;
        }

        let file = file_node(entry.path(), &docs_name, &parts, config);
        tracing::trace!(path = %file.path, "catalogued");
        let (dirs, _) = parts.split_at(parts.len() - 1);
        root.descend(dirs).files.push(file);
    }

    let tree: DocumentTree = root
        .dirs
        .into_iter()
        .map(|(key, dir)| (key, dir.into_nodes()))
        .collect();

    tracing::info!(
        dir = %docs_dir.display(),
        sections = tree.len(),
        files = tree.file_count(),
        "scan complete"
    );
    Ok(tree)
}

/// Serialize a catalog and replace `output` atomically.
pub fn write_catalog(tree: &DocumentTree, output: &Path) -> CatalogResult<()> {
    let json = serde_json::to_string_pretty(tree)?;
    let parent = match output.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            std::fs::create_dir_all(parent)?;
            parent.to_path_buf()
        }
        None => PathBuf::from("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(&parent)?;
    std::io::Write::write_all(&mut temp, json.as_bytes())?;
    std::io::Write::write_all(&mut temp, b"\n")?;
    temp.persist(output).map_err(|e| CatalogError::Io(e.error))?;
    Ok(())
}

fn file_node(path: &Path, docs_name: &str, parts: &[String], config: &ScanConfig) -> FileNode {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = stem.replace('_', " ");

    let web_path = format!("{}{}/{}", config.web_prefix, docs_name, parts.join("/"));
    let mut file = FileNode::new(name, web_path);
    file.version = extract_version(&file.name);

    if config.dates {
        file.date = modified_date(path);
    }
    if config.readability {
        file.gulpease = readability(path);
    }
    file
}

/// Gulpease index of a document's text, when its text can be read.
fn readability(path: &Path) -> Option<f64> {
    let text = if has_extension(path, TEXT_EXTENSIONS) {
        String::from_utf8_lossy(&std::fs::read(path).ok()?).into_owned()
    } else if has_extension(path, PDF_EXTENSIONS) {
        pdf_text(path)?
    } else {
        return None;
    };
    gulpease_index(&text)
}

/// Text layer of a PDF. The extractor panics on some malformed files; a
/// panic counts as an extraction failure and the scan goes on.
fn pdf_text(path: &Path) -> Option<String> {
    match std::panic::catch_unwind(|| pdf_extract::extract_text(path)) {
        Ok(Ok(text)) => Some(text),
        Ok(Err(e)) => {
            tracing::debug!(path = %path.display(), error = ?e, "no text layer");
            None
        }
        Err(_) => {
            tracing::warn!(path = %path.display(), "PDF text extraction failed");
            None
        }
    }
}

fn docs_dir_name(docs_dir: &Path) -> String {
    docs_dir
        .canonicalize()
        .ok()
        .as_deref()
        .unwrap_or(docs_dir)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn path_parts(relative: &Path) -> Vec<String> {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}

fn has_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    let ext = match path.extension() {
        Some(ext) => ext.to_string_lossy().to_lowercase(),
        None => return false,
    };
    extensions
        .iter()
        .any(|allowed| allowed.as_ref().trim_start_matches('.').eq_ignore_ascii_case(&ext))
}

fn modified_date(path: &Path) -> Option<String> {
    let modified = std::fs::metadata(path).and_then(|m| m.modified()).ok()?;
    let local: DateTime<Local> = modified.into();
    Some(local.format("%Y-%m-%d").to_string())
}

/// First `v<major>.<minor>[.<patch>]` tag in a name, including the `v`.
pub fn extract_version(name: &str) -> Option<String> {
    static VERSION: OnceLock<Option<Regex>> = OnceLock::new();
    let re = VERSION
        .get_or_init(|| Regex::new(r"v(\d+\.\d+(\.\d+)?)").ok())
        .as_ref()?;
    re.find(name).map(|m| m.as_str().to_string())
}

/// Gulpease readability index of Italian text.
///
/// `89 + (300 * sentences - 10 * letters) / words`, clamped to 0..=100 and
/// rounded to two decimals.
pub fn gulpease_index(text: &str) -> Option<f64> {
    static WORDS: OnceLock<Option<Regex>> = OnceLock::new();
    static SENTENCES: OnceLock<Option<Regex>> = OnceLock::new();

    let words_re = WORDS.get_or_init(|| Regex::new(r"\w+").ok()).as_ref()?;
    let sentences_re = SENTENCES
        .get_or_init(|| Regex::new(r"[.!?]+\s|;+\s").ok())
        .as_ref()?;

    let words = words_re.find_iter(text).count();
    if words < MIN_READABILITY_WORDS {
        return None;
    }
    let letters: usize = words_re
        .find_iter(text)
        .map(|m| m.as_str().chars().count())
        .sum();
    let sentences = sentences_re.find_iter(text).count();

    let index = 89.0 + (300.0 * sentences as f64 - 10.0 * letters as f64) / words as f64;
    let clamped = index.clamp(0.0, 100.0);
    Some((clamped * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"%PDF").unwrap();
    }

    #[test]
    fn scan_builds_sections_from_top_level_dirs() {
        let tmp = tempdir().unwrap();
        let docs = tmp.path().join("docs");
        touch(&docs.join("01_Capitolati/Esterni/Piano_v1.2.pdf"));
        touch(&docs.join("01_Capitolati/intro.pdf"));
        touch(&docs.join("02_Verbali/notes.txt"));
        touch(&docs.join("root.pdf"));
        fs::create_dir_all(docs.join("03_Vuota")).unwrap();

        let config = ScanConfig {
            dates: false,
            ..ScanConfig::default()
        };
        let tree = scan(&docs, &config).unwrap();

        assert_eq!(
            tree.keys().collect::<Vec<_>>(),
            vec!["01_Capitolati", "02_Verbali", "03_Vuota"]
        );
        assert!(tree.section("02_Verbali").unwrap().is_empty());
        assert!(tree.section("03_Vuota").unwrap().is_empty());

        let capitolati = tree.section("01_Capitolati").unwrap();
        assert_eq!(capitolati.len(), 2);
        let folder = &capitolati[0];
        assert_eq!(folder.name(), "Esterni");
        match &folder.children()[0] {
            Node::File(file) => {
                assert_eq!(file.name, "Piano v1.2");
                assert_eq!(file.path, "./docs/01_Capitolati/Esterni/Piano_v1.2.pdf");
                assert_eq!(file.version.as_deref(), Some("v1.2"));
                assert!(file.date.is_none());
            }
            other => panic!("expected file, got {other:?}"),
        }
    }

    #[test]
    fn scan_skips_hidden_and_ignored_entries() {
        let tmp = tempdir().unwrap();
        let docs = tmp.path().join("docs");
        touch(&docs.join("A/.secret.pdf"));
        touch(&docs.join("A/.drafts/x.pdf"));
        touch(&docs.join("A/old/y.pdf"));
        touch(&docs.join("A/keep.PDF"));
        fs::write(docs.join("A").join(IGNORE_FILE), "old/\n").unwrap();

        let tree = scan(&docs, &ScanConfig::default()).unwrap();
        let section = tree.section("A").unwrap();
        assert_eq!(section.len(), 1);
        assert_eq!(section[0].name(), "keep");
        assert!(matches!(&section[0], Node::File(f) if f.date.is_some()));
    }

    #[test]
    fn scan_uses_web_prefix_and_extensions() {
        let tmp = tempdir().unwrap();
        let docs = tmp.path().join("archive");
        touch(&docs.join("S/a.md"));
        touch(&docs.join("S/b.pdf"));

        let config = ScanConfig {
            extensions: vec!["md".to_string()],
            web_prefix: "/static/".to_string(),
            ..ScanConfig::default()
        };
        let tree = scan(&docs, &config).unwrap();
        let section = tree.section("S").unwrap();
        assert_eq!(section.len(), 1);
        assert!(matches!(&section[0], Node::File(f) if f.path == "/static/archive/S/a.md"));
    }

    #[test]
    fn scan_rejects_missing_directory() {
        let tmp = tempdir().unwrap();
        let err = scan(&tmp.path().join("missing"), &ScanConfig::default()).unwrap_err();
        assert!(matches!(err, CatalogError::Scan { .. }));
    }

    #[test]
    fn write_catalog_round_trips_through_loader() {
        let tmp = tempdir().unwrap();
        let out = tmp.path().join("site/docs_tree.json");
        let tree = DocumentTree::new().with_section(
            "A",
            vec![Node::File(FileNode::new("a", "./docs/A/a.pdf").with_version("v1.0"))],
        );

        write_catalog(&tree, &out).unwrap();
        let text = fs::read_to_string(&out).unwrap();
        let loaded = crate::infrastructure::loader::parse_document(&text, "out").unwrap();
        assert_eq!(loaded, tree);
    }

    /// Single-page PDF with `text` drawn in Helvetica.
    fn write_text_pdf(path: &Path, text: &str) {
        let content = format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", text);
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
                .to_string(),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_string(),
            format!("<< /Length {} >>\nstream\n{}\nendstream", content.len(), content),
        ];

        let mut out = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::new();
        for (i, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
        }
        let xref = out.len();
        out.extend_from_slice(format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1).as_bytes());
        for offset in offsets {
            out.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }
        out.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
                objects.len() + 1,
                xref
            )
            .as_bytes(),
        );

        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, out).unwrap();
    }

    const PDF_TEXT: &str =
        "Il verbale riporta le decisioni prese. La riunione si chiude alle sei di sera.";

    #[test]
    fn readability_scores_pdf_text_layer() {
        let tmp = tempdir().unwrap();
        let docs = tmp.path().join("docs");
        write_text_pdf(&docs.join("A/verbale.pdf"), PDF_TEXT);

        let config = ScanConfig {
            readability: true,
            dates: false,
            ..ScanConfig::default()
        };
        let tree = scan(&docs, &config).unwrap();
        match &tree.section("A").unwrap()[0] {
            Node::File(file) => {
                let score = file.gulpease.expect("pdf text should be scored");
                assert!((0.0..=100.0).contains(&score));
            }
            other => panic!("expected file, got {other:?}"),
        }
    }

    #[test]
    fn readability_off_skips_pdf_text() {
        let tmp = tempdir().unwrap();
        let docs = tmp.path().join("docs");
        write_text_pdf(&docs.join("A/verbale.pdf"), PDF_TEXT);

        let tree = scan(&docs, &ScanConfig::default()).unwrap();
        assert!(matches!(&tree.section("A").unwrap()[0], Node::File(f) if f.gulpease.is_none()));
    }

    #[test]
    fn unreadable_pdf_has_no_score() {
        let tmp = tempdir().unwrap();
        let docs = tmp.path().join("docs");
        touch(&docs.join("A/broken.pdf"));

        let config = ScanConfig {
            readability: true,
            ..ScanConfig::default()
        };
        let tree = scan(&docs, &config).unwrap();
        assert!(matches!(&tree.section("A").unwrap()[0], Node::File(f) if f.gulpease.is_none()));
    }

    #[test]
    fn readability_scores_plain_text() {
        let tmp = tempdir().unwrap();
        let docs = tmp.path().join("docs");
        fs::create_dir_all(docs.join("A")).unwrap();
        fs::write(docs.join("A/note.txt"), PDF_TEXT).unwrap();

        let config = ScanConfig {
            extensions: vec!["txt".to_string()],
            readability: true,
            ..ScanConfig::default()
        };
        let tree = scan(&docs, &config).unwrap();
        assert!(matches!(
            &tree.section("A").unwrap()[0],
            Node::File(f) if f.gulpease == gulpease_index(PDF_TEXT)
        ));
    }

    #[test]
    fn version_extraction() {
        assert_eq!(extract_version("Piano v1.0.3 finale"), Some("v1.0.3".to_string()));
        assert_eq!(extract_version("Verbale v2.1"), Some("v2.1".to_string()));
        assert_eq!(extract_version("Verbale 2.1"), None);
        assert_eq!(extract_version("v3"), None);
    }

    #[test]
    fn gulpease_needs_ten_words() {
        assert_eq!(gulpease_index("troppo poche parole qui."), None);
    }

    #[test]
    fn gulpease_scores_simple_text() {
        // 12 words, 36 letters, 2 sentence breaks
        let text = "il cane va. il gatto sta; io vado a casa ora bene";
        let words = 12;
        let letters = 36;
        let expected = 89.0 + (300.0 * 2.0 - 10.0 * letters as f64) / words as f64;
        let expected = (expected.clamp(0.0, 100.0) * 100.0).round() / 100.0;
        assert_eq!(gulpease_index(text), Some(expected));
    }

    #[test]
    fn gulpease_is_clamped() {
        let long_words = "precipitevolissimevolmente ".repeat(12);
        assert_eq!(gulpease_index(&long_words), Some(0.0));
    }
}
