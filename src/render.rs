//! Graphviz output for a [`BinaryTree`].
//!
//! Nodes are keyed by slot so that equal values stay distinct vertices.

use std::fmt::{Display, Write};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::RenderError;
use crate::tree::BinaryTree;

pub fn to_dot<T>(tree: &mut BinaryTree<T>) -> String
where
    T: std::fmt::Debug + std::cmp::PartialEq + std::cmp::PartialOrd + Display,
{
    tree.repair_positions();
    let size = tree.len();
    let mut out = String::from("digraph tree {\n    node [shape=circle];\n");
    for node in tree.nodes() {
        let label = node.value().to_string().replace('\\', "\\\\").replace('"', "\\\"");
        // writing into a String cannot fail
        let _ = writeln!(out, "    n{} [label=\"{}\"];", node.position(), label);
    }
    for node in tree.nodes() {
        for child in [node.left_index(), node.right_index()] {
            if child < size {
                let _ = writeln!(out, "    n{} -> n{};", node.position(), child);
            }
        }
    }
    out.push_str("}\n");
    out
}

/// `<prefix>_<unix seconds>.<extension>`. Times before the epoch map to 0.
pub fn timestamped_file_name(prefix: &str, extension: &str, time: SystemTime) -> String {
    let secs = time
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{prefix}_{secs}.{extension}")
}

/// Writes the tree as `tree_<unix seconds>.dot` under `dir`.
pub fn write_dot<T>(tree: &mut BinaryTree<T>, dir: &Path) -> Result<PathBuf, RenderError>
where
    T: std::fmt::Debug + std::cmp::PartialEq + std::cmp::PartialOrd + Display,
{
    let path = dir.join(timestamped_file_name("tree", "dot", SystemTime::now()));
    fs::write(&path, to_dot(tree))?;
    log::info!("wrote {} nodes to {}", tree.len(), path.display());
    Ok(path)
}
