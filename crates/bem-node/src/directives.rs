//! Directive Registry
//!
//! Directives are attached by the embedding application and looked up by
//! name. The node model stores them and never inspects them.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Directive implemented outside this crate
pub trait Directive: fmt::Debug + Send + Sync {}

/// Shared directive handle
pub type DirectiveHandle = Arc<dyn Directive>;

/// Name -> directive map
#[derive(Debug, Clone, Default)]
pub struct DirectiveRegistry {
    directives: HashMap<String, DirectiveHandle>,
}

impl DirectiveRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a directive, replacing any previous one with the same name
    pub fn add(&mut self, name: impl Into<String>, directive: DirectiveHandle) -> Option<DirectiveHandle> {
        self.directives.insert(name.into(), directive)
    }

    /// Get a directive by name
    pub fn get(&self, name: &str) -> Option<&DirectiveHandle> {
        self.directives.get(name)
    }

    /// Check if a directive exists
    pub fn has(&self, name: &str) -> bool {
        self.directives.contains_key(name)
    }

    /// Number of directives
    pub fn len(&self) -> usize {
        self.directives.len()
    }

    /// Check if no directive is registered
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// Full name -> directive map
    pub fn all(&self) -> &HashMap<String, DirectiveHandle> {
        &self.directives
    }
}
