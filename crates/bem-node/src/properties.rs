//! Node Properties
//!
//! Two-level property storage: namespace -> (name -> value).
//! Namespaces are created lazily by the first `set`.

use std::collections::HashMap;

use crate::NodeError;

/// Namespace for html attributes (`tag`, ...)
pub const HTML_NAMESPACE: &str = "html";
/// Namespace for inline style rules
pub const CSS_NAMESPACE: &str = "css";
/// Tag name property under `HTML_NAMESPACE`
pub const TAG_PROPERTY: &str = "tag";

/// Ordered name -> value map for one namespace
///
/// Keys keep the position of their first insertion; overwriting
/// a key replaces the value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyNamespace {
    entries: Vec<(String, String)>,
    by_name: HashMap<String, usize>,
}

impl PropertyNamespace {
    /// Create an empty namespace
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no property is set
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get a property value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(|&i| self.entries[i].1.as_str())
    }

    /// Check if a property exists
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Set a property, returning the previous value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        if let Some(&index) = self.by_name.get(&name) {
            Some(std::mem::replace(&mut self.entries[index].1, value))
        } else {
            self.by_name.insert(name.clone(), self.entries.len());
            self.entries.push((name, value));
            None
        }
    }

    /// Merge all entries of `other` into this map (last writer wins)
    pub fn merge(&mut self, other: &PropertyNamespace) {
        for (name, value) in other.iter() {
            self.set(name, value);
        }
    }

    /// Iterate in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// Namespaced property store of a node
#[derive(Debug, Clone, Default)]
pub struct PropertyStore {
    namespaces: HashMap<String, PropertyNamespace>,
}

impl PropertyStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `namespace.name = value`, creating the namespace if needed
    pub fn set(&mut self, namespace: &str, name: impl Into<String>, value: impl Into<String>) {
        self.namespaces
            .entry(namespace.to_string())
            .or_default()
            .set(name, value);
    }

    /// Get a namespace, `None` if nothing was ever set under it
    pub fn namespace(&self, namespace: &str) -> Option<&PropertyNamespace> {
        self.namespaces.get(namespace)
    }

    /// Check if a namespace exists
    pub fn has_namespace(&self, namespace: &str) -> bool {
        self.namespaces.contains_key(namespace)
    }

    /// Get a property from a namespace that must exist
    ///
    /// Fails with `MissingNamespace` when the namespace was never created;
    /// use `has` to probe without that precondition.
    pub fn get(&self, namespace: &str, name: &str) -> Result<Option<&str>, NodeError> {
        self.namespaces
            .get(namespace)
            .map(|ns| ns.get(name))
            .ok_or_else(|| NodeError::MissingNamespace { namespace: namespace.to_string() })
    }

    /// Check if `namespace.name` exists
    pub fn has(&self, namespace: &str, name: &str) -> bool {
        self.namespaces.get(namespace).is_some_and(|ns| ns.contains(name))
    }

    /// Namespace names (unordered)
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.namespaces.keys().map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_set_get() {
        let mut ns = PropertyNamespace::new();
        assert_eq!(ns.set("color", "red"), None);
        assert_eq!(ns.set("color", "blue"), Some("red".to_string()));

        assert_eq!(ns.len(), 1);
        assert_eq!(ns.get("color"), Some("blue"));
        assert!(!ns.contains("margin"));
    }

    #[test]
    fn test_namespace_keeps_first_insertion_order() {
        let mut ns = PropertyNamespace::new();
        ns.set("b", "1");
        ns.set("a", "2");
        ns.set("b", "3");

        let entries: Vec<_> = ns.iter().collect();
        assert_eq!(entries, vec![("b", "3"), ("a", "2")]);
    }

    #[test]
    fn test_namespace_merge() {
        let mut base = PropertyNamespace::new();
        base.set("color", "red");
        base.set("margin", "0");

        let mut over = PropertyNamespace::new();
        over.set("color", "blue");
        over.set("padding", "4px");

        base.merge(&over);
        let entries: Vec<_> = base.iter().collect();
        assert_eq!(entries, vec![("color", "blue"), ("margin", "0"), ("padding", "4px")]);
    }

    #[test]
    fn test_store_lazy_namespace() {
        let mut store = PropertyStore::new();
        assert!(!store.has_namespace("css"));
        assert!(store.namespace("css").is_none());

        store.set("css", "color", "red");
        assert!(store.has_namespace("css"));
        assert_eq!(store.namespace("css").map(|ns| ns.len()), Some(1));
    }

    #[test]
    fn test_store_get_missing_namespace() {
        let store = PropertyStore::new();
        assert_eq!(
            store.get("html", "tag"),
            Err(NodeError::MissingNamespace { namespace: "html".to_string() })
        );
        assert!(!store.has("html", "tag"));
    }

    #[test]
    fn test_store_get_missing_name() {
        let mut store = PropertyStore::new();
        store.set("html", "tag", "a");
        assert_eq!(store.get("html", "href"), Ok(None));
        assert_eq!(store.get("html", "tag"), Ok(Some("a")));
    }
}
