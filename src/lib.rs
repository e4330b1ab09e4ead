//! An array-backed complete binary tree that can be reordered into a max-heap.

pub mod error;
pub mod node;
pub mod render;
pub mod shared;
pub mod tree;

pub use error::{RenderError, TreeError};
pub use node::Node;
pub use shared::SharedTree;
pub use tree::BinaryTree;
