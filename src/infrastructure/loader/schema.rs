//! Node contract validation
//!
//! Walks a parsed JSON value and builds the typed tree, failing on the first
//! violation with its location (`Reports[0].children[1]`).

use serde_json::{Map, Value};

use crate::domain::entities::{DocumentTree, FileNode, FolderNode, Node};
use crate::error::{CatalogError, CatalogResult};

/// Convert a parsed payload into a [`DocumentTree`].
pub fn tree_from_value(value: &Value) -> CatalogResult<DocumentTree> {
    let sections = value
        .as_object()
        .ok_or_else(|| CatalogError::schema("$", "expected an object of sections"))?;

    let mut tree = DocumentTree::new();
    for (key, entries) in sections {
        let entries = entries
            .as_array()
            .ok_or_else(|| CatalogError::schema(key.as_str(), "expected an array of nodes"))?;
        let nodes = nodes_from_array(entries, key)?;
        tree.insert(key.clone(), nodes);
    }
    Ok(tree)
}

fn nodes_from_array(entries: &[Value], location: &str) -> CatalogResult<Vec<Node>> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| node_from_value(entry, &format!("{}[{}]", location, i)))
        .collect()
}

fn node_from_value(value: &Value, location: &str) -> CatalogResult<Node> {
    let object = value
        .as_object()
        .ok_or_else(|| CatalogError::schema(location, "expected a node object"))?;

    let kind = match object.get("type") {
        None | Some(Value::Null) => return Err(CatalogError::schema(location, "missing 'type'")),
        Some(Value::String(kind)) => kind.as_str(),
        Some(_) => return Err(CatalogError::schema(location, "'type' must be a string")),
    };

    match kind {
        "folder" => folder_from_object(object, location).map(Node::Folder),
        "file" => file_from_object(object, location).map(Node::File),
        other => Err(CatalogError::schema(
            location,
            format!("unknown type '{}' (expected \"folder\" or \"file\")", other),
        )),
    }
}

fn folder_from_object(object: &Map<String, Value>, location: &str) -> CatalogResult<FolderNode> {
    let name = required_string(object, "name", location)?;
    let children = match object.get("children") {
        None | Some(Value::Null) => {
            return Err(CatalogError::schema(location, "folder is missing 'children'"))
        }
        Some(Value::Array(children)) => children,
        Some(_) => return Err(CatalogError::schema(location, "'children' must be an array")),
    };
    let children = nodes_from_array(children, &format!("{}.children", location))?;
    Ok(FolderNode::with_children(name, children))
}

fn file_from_object(object: &Map<String, Value>, location: &str) -> CatalogResult<FileNode> {
    let name = required_string(object, "name", location)?;
    let path = match object.get("path") {
        None | Some(Value::Null) => {
            return Err(CatalogError::schema(location, "file is missing 'path'"))
        }
        Some(Value::String(path)) => path.clone(),
        Some(_) => return Err(CatalogError::schema(location, "'path' must be a string")),
    };

    let mut file = FileNode::new(name, path);
    file.version = optional_string(object, "version", location)?;
    file.date = optional_string(object, "date", location)?;
    file.signed = match object.get("signed") {
        None | Some(Value::Null) => None,
        Some(Value::Bool(signed)) => Some(*signed),
        Some(_) => return Err(CatalogError::schema(location, "'signed' must be a boolean")),
    };
    file.gulpease = match object.get("gulpease") {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => n.as_f64(),
        Some(_) => return Err(CatalogError::schema(location, "'gulpease' must be a number")),
    };
    Ok(file)
}

fn required_string(
    object: &Map<String, Value>,
    field: &str,
    location: &str,
) -> CatalogResult<String> {
    match object.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        None | Some(Value::Null) => Err(CatalogError::schema(
            location,
            format!("missing '{}'", field),
        )),
        Some(_) => Err(CatalogError::schema(
            location,
            format!("'{}' must be a string", field),
        )),
    }
}

fn optional_string(
    object: &Map<String, Value>,
    field: &str,
    location: &str,
) -> CatalogResult<Option<String>> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(CatalogError::schema(
            location,
            format!("'{}' must be a string", field),
        )),
    }
}
