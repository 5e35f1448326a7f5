//! BEM Tree (arena-based allocation)

use crate::config::RenderConfig;
use crate::{Node, NodeError, NodeId};

/// Arena owning every node of a BEM tree
#[derive(Debug, Default)]
pub struct BemTree {
    nodes: Vec<Node>,
    config: RenderConfig,
}

impl BemTree {
    /// Create a new empty tree with default render settings
    pub fn new() -> Self {
        Self::with_config(RenderConfig::default())
    }

    /// Create a new empty tree with the given render settings
    pub fn with_config(config: RenderConfig) -> Self {
        Self { nodes: Vec::new(), config }
    }

    /// Render settings
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Create a detached node, classified by its name
    pub fn create_node(&mut self, name: &str) -> Result<NodeId, NodeError> {
        let node = Node::new(name)?;
        let id = NodeId::from_index(self.nodes.len()).ok_or(NodeError::TreeFull)?;
        tracing::debug!("Created {:?} node {} ({})", node.kind(), name, id);
        self.nodes.push(node);
        Ok(id)
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Get a node, failing on ids that are not part of this tree
    pub fn node(&self, id: NodeId) -> Result<&Node, NodeError> {
        self.get(id).ok_or(NodeError::UnknownNode(id))
    }

    /// Get a mutable node, failing on ids that are not part of this tree
    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, NodeError> {
        self.get_mut(id).ok_or(NodeError::UnknownNode(id))
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes with their ids
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        // create_node keeps every index within u32
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i as u32), n))
    }

    /// Append `child` to the end of `parent`'s children
    ///
    /// A child that is already attached elsewhere is moved.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), NodeError> {
        self.check_insert(parent, child)?;
        self.detach(child);
        self.nodes[parent.index()].children.push(child);
        self.nodes[child.index()].parent = Some(parent);
        Ok(())
    }

    /// Replace `parent`'s children with `children`
    ///
    /// Previous children are detached. The list is validated before anything
    /// is modified.
    pub fn set_children(&mut self, parent: NodeId, children: Vec<NodeId>) -> Result<(), NodeError> {
        self.node(parent)?;
        for &child in &children {
            self.check_insert(parent, child)?;
        }

        let old = std::mem::take(&mut self.nodes[parent.index()].children);
        tracing::debug!("Replacing {} children of {} with {}", old.len(), parent, children.len());
        for id in old {
            self.nodes[id.index()].parent = None;
        }

        for child in children {
            // Duplicates in the new list collapse to their last position
            self.detach(child);
            self.nodes[parent.index()].children.push(child);
            self.nodes[child.index()].parent = Some(parent);
        }
        Ok(())
    }

    /// Detach a node from its parent, if any
    pub fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.get(id).and_then(Node::parent) else {
            return;
        };
        self.nodes[parent.index()].children.retain(|&c| c != id);
        self.nodes[id.index()].parent = None;
    }

    /// Append `mixin` to `id`'s mixins (later mixins take priority)
    ///
    /// Mixins are references: sharing and cycles are allowed.
    pub fn add_mixin(&mut self, id: NodeId, mixin: NodeId) -> Result<(), NodeError> {
        self.node(mixin)?;
        self.node_mut(id)?.mixins.push(mixin);
        Ok(())
    }

    /// `[id] ++ mixins`, lowest priority first
    ///
    /// Only the node's own mixin list is used; mixins of mixins are not
    /// followed, so cyclic mixin graphs resolve like any other.
    pub fn mixed_nodes(&self, id: NodeId) -> Result<Vec<&Node>, NodeError> {
        let node = self.node(id)?;
        let mut mixed = Vec::with_capacity(node.mixins.len() + 1);
        mixed.push(node);
        for &mixin in &node.mixins {
            mixed.push(self.node(mixin)?);
        }
        Ok(mixed)
    }

    /// Nearest block ancestor of a node in the child tree
    pub fn owning_block(&self, id: NodeId) -> Result<Option<NodeId>, NodeError> {
        let mut current = self.node(id)?.parent;
        while let Some(parent) = current {
            let node = self.node(parent)?;
            if node.is_block() {
                return Ok(Some(parent));
            }
            current = node.parent;
        }
        Ok(None)
    }

    /// Check whether `ancestor` is `id` or one of its ancestors
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.get(node).and_then(Node::parent);
        }
        false
    }

    fn check_insert(&self, parent: NodeId, child: NodeId) -> Result<(), NodeError> {
        self.node(parent)?;
        self.node(child)?;
        if self.is_inclusive_ancestor(child, parent) {
            return Err(NodeError::HierarchyRequest { parent, child });
        }
        Ok(())
    }
}
