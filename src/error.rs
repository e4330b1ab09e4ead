//! # Errors
//!
//! `TreeError` is returned when a caller hands the tree an index that does not
//! name a node. `RenderError` covers writing a rendered tree to disk.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum TreeError {
    #[error("index {index} is out of bounds for a tree of {size} nodes")]
    IndexOutOfBounds { index: usize, size: usize },
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
