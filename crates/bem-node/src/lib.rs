//! BEM Node Model
//!
//! Tree of Block/Element nodes with mixin resolution.
//! Renders each node into an opening tag (class + inline style) and a
//! closing tag.

mod case;
mod config;
mod directives;
mod node;
mod properties;
mod render;
mod tree;

pub use case::to_kebab_case;
pub use config::{ElementClassMode, RenderConfig};
pub use directives::{Directive, DirectiveHandle, DirectiveRegistry};
pub use node::{Node, NodeKind};
pub use properties::{PropertyNamespace, PropertyStore, CSS_NAMESPACE, HTML_NAMESPACE, TAG_PROPERTY};
pub use tree::BemTree;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Node identifier (index into a `BemTree` arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Id for an arena index, `None` past `u32::MAX`
    pub(crate) fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(NodeId)
    }

    /// Raw arena index
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Node model error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    #[error("Node name must not be empty")]
    EmptyName,

    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    #[error("Property namespace not found: {namespace}")]
    MissingNamespace { namespace: String },

    #[error("Tree is full: node ids are limited to u32")]
    TreeFull,

    #[error("Cannot append {child} under {parent}: would create a cycle")]
    HierarchyRequest { parent: NodeId, child: NodeId },
}
