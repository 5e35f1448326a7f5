//! Depth-first markup writer

use std::fmt::Write;

use bem_node::{BemTree, NodeId};

use crate::MarkupError;

/// Output formatting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkupOptions {
    /// `None` writes everything on one line; `Some(n)` puts each tag on its
    /// own line, indented `n` spaces per level
    pub indent: Option<usize>,
}

impl MarkupOptions {
    /// Everything on one line
    pub fn compact() -> Self {
        Self { indent: None }
    }

    /// One tag per line, `width` spaces per level
    pub fn indented(width: usize) -> Self {
        Self { indent: Some(width) }
    }
}

/// Pending work of the depth-first walk
enum Step {
    Open { id: NodeId, depth: usize },
    Close { id: NodeId, depth: usize, has_children: bool },
}

/// Writes a node subtree as markup
pub struct MarkupWriter<'a> {
    tree: &'a BemTree,
    options: MarkupOptions,
}

impl<'a> MarkupWriter<'a> {
    /// Writer with compact output
    pub fn new(tree: &'a BemTree) -> Self {
        Self { tree, options: MarkupOptions::default() }
    }

    /// Set output formatting
    pub fn with_options(mut self, options: MarkupOptions) -> Self {
        self.options = options;
        self
    }

    /// Render `root` and its descendants into a new string
    pub fn render(&self, root: NodeId) -> Result<String, MarkupError> {
        let mut out = String::new();
        self.render_into(root, &mut out)?;
        Ok(out)
    }

    /// Render `root` and its descendants into `out`
    ///
    /// Uses an explicit stack, so tree depth is bounded by memory only.
    pub fn render_into(&self, root: NodeId, out: &mut impl Write) -> Result<(), MarkupError> {
        tracing::debug!("Rendering markup from {}", root);
        let mut stack = vec![Step::Open { id: root, depth: 0 }];

        while let Some(step) = stack.pop() {
            match step {
                Step::Open { id, depth } => {
                    let node = self.tree.node(id)?;
                    self.write_indent(depth, depth > 0, out)?;
                    out.write_str(&self.tree.html_tag_start(id)?)?;

                    stack.push(Step::Close { id, depth, has_children: node.has_children() });
                    for &child in node.children().iter().rev() {
                        stack.push(Step::Open { id: child, depth: depth + 1 });
                    }
                }
                Step::Close { id, depth, has_children } => {
                    // Leaves close on the same line
                    if has_children {
                        self.write_indent(depth, true, out)?;
                    }
                    out.write_str(&self.tree.html_tag_end(id)?)?;
                }
            }
        }
        Ok(())
    }

    fn write_indent(&self, depth: usize, newline: bool, out: &mut impl Write) -> Result<(), MarkupError> {
        if let Some(width) = self.options.indent {
            if newline {
                out.write_char('\n')?;
            }
            write!(out, "{:1$}", "", depth * width)?;
        }
        Ok(())
    }
}
