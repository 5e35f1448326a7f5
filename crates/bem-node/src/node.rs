//! BEM Node
//!
//! A node is either a block (name starts with an uppercase letter) or an
//! element. The classification is fixed when the node is created.
//!
//! Children and mixins are stored as `NodeId`s into the owning `BemTree`:
//! - children are owned, a node has at most one parent
//! - mixins are plain references and may be shared or cyclic

use crate::case::to_kebab_case;
use crate::config::RenderConfig;
use crate::directives::{DirectiveHandle, DirectiveRegistry};
use crate::properties::{PropertyNamespace, PropertyStore};
use crate::{NodeError, NodeId};

/// Block / Element classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Block,
    Element,
}

impl NodeKind {
    /// Classify a node name by its first character
    pub fn classify(name: &str) -> Self {
        match name.chars().next() {
            Some(c) if c.is_uppercase() => NodeKind::Block,
            _ => NodeKind::Element,
        }
    }
}

/// BEM node
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) mixins: Vec<NodeId>,
    properties: PropertyStore,
    directives: DirectiveRegistry,
}

impl Node {
    pub(crate) fn new(name: &str) -> Result<Self, NodeError> {
        if name.is_empty() {
            return Err(NodeError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            kind: NodeKind::classify(name),
            parent: None,
            children: Vec::new(),
            mixins: Vec::new(),
            properties: PropertyStore::new(),
            directives: DirectiveRegistry::new(),
        })
    }

    /// Name as written
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Block / Element classification
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Check if this is a block
    #[inline]
    pub fn is_block(&self) -> bool {
        self.kind == NodeKind::Block
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        self.kind == NodeKind::Element
    }

    /// Block name, empty for elements
    pub fn block_name(&self) -> &str {
        match self.kind {
            NodeKind::Block => &self.name,
            NodeKind::Element => "",
        }
    }

    /// Element name, empty for blocks
    pub fn element_name(&self) -> &str {
        match self.kind {
            NodeKind::Element => &self.name,
            NodeKind::Block => "",
        }
    }

    // Tree

    /// Parent node (None if detached)
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in document order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Check if the node has children
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Check if the node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Mixins in priority order, lowest first
    pub fn mixins(&self) -> &[NodeId] {
        &self.mixins
    }

    // Directives

    /// Attach a directive, replacing one with the same name
    pub fn add_directive(&mut self, name: impl Into<String>, directive: DirectiveHandle) {
        self.directives.add(name, directive);
    }

    /// Get a directive by name
    pub fn directive(&self, name: &str) -> Option<&DirectiveHandle> {
        self.directives.get(name)
    }

    /// Check if a directive exists
    pub fn has_directive(&self, name: &str) -> bool {
        self.directives.has(name)
    }

    /// All directives of this node
    pub fn directives(&self) -> &DirectiveRegistry {
        &self.directives
    }

    // Properties

    /// Set `namespace.name = value`, overwriting
    pub fn set_property(&mut self, namespace: &str, name: impl Into<String>, value: impl Into<String>) {
        self.properties.set(namespace, name, value);
    }

    /// Get a namespace, `None` if nothing was ever set under it
    pub fn property_namespace(&self, namespace: &str) -> Option<&PropertyNamespace> {
        self.properties.namespace(namespace)
    }

    /// Check if a namespace exists
    pub fn has_property_namespace(&self, namespace: &str) -> bool {
        self.properties.has_namespace(namespace)
    }

    /// Get a property; the namespace must exist
    ///
    /// Returns `NodeError::MissingNamespace` if nothing was ever set under
    /// `namespace`. Check with `has_property` first when unsure.
    pub fn property(&self, namespace: &str, name: &str) -> Result<Option<&str>, NodeError> {
        self.properties.get(namespace, name)
    }

    /// Check if `namespace.name` exists; safe for missing namespaces
    pub fn has_property(&self, namespace: &str, name: &str) -> bool {
        self.properties.has(namespace, name)
    }

    /// Raw property store
    pub fn properties(&self) -> &PropertyStore {
        &self.properties
    }

    // Rendering

    /// Class of this node alone, ignoring mixins and ancestors
    ///
    /// Elements render as `__element` because a node never knows its block
    /// by itself. `BemTree::html_class` can resolve the owning block.
    pub fn html_class(&self, config: &RenderConfig) -> String {
        match self.kind {
            NodeKind::Block => to_kebab_case(&self.name),
            NodeKind::Element => self.element_class("", config),
        }
    }

    /// `block` + separator + `element`, both kebab-cased
    pub(crate) fn element_class(&self, block_name: &str, config: &RenderConfig) -> String {
        format!(
            "{}{}{}",
            to_kebab_case(block_name),
            config.element_separator,
            to_kebab_case(&self.name)
        )
    }
}
