//! BEM Markup Writer
//!
//! Walks a `BemTree` depth-first and writes the opening tag of each node,
//! its children, then its closing tag.

mod writer;

pub use writer::{MarkupOptions, MarkupWriter};

use bem_node::{BemTree, NodeError, NodeId};

/// Render a subtree with default options
pub fn render(tree: &BemTree, root: NodeId) -> Result<String, MarkupError> {
    MarkupWriter::new(tree).render(root)
}

/// Markup writing error
#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    #[error(transparent)]
    Node(#[from] NodeError),

    #[error("Write failed: {0}")]
    Write(#[from] std::fmt::Error),
}
