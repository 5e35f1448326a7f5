//! Mixed Attribute Rendering
//!
//! Every derived value folds over `BemTree::mixed_nodes`: the node itself
//! first, then its mixins in the order they were added. Later nodes win on
//! a per-key basis.

use crate::case::to_kebab_case;
use crate::config::ElementClassMode;
use crate::properties::{PropertyNamespace, CSS_NAMESPACE, HTML_NAMESPACE, TAG_PROPERTY};
use crate::{BemTree, NodeError, NodeId};

impl BemTree {
    /// Tag name: last mixed node setting `html.tag`, else the default tag
    pub fn html_tag(&self, id: NodeId) -> Result<String, NodeError> {
        let mut tag = self.config().default_tag.as_str();
        for node in self.mixed_nodes(id)? {
            if let Some(value) = node.property_namespace(HTML_NAMESPACE).and_then(|ns| ns.get(TAG_PROPERTY)) {
                tag = value;
            }
        }
        Ok(tag.to_string())
    }

    /// Merged `css` namespace of all mixed nodes
    ///
    /// Keys keep the position of their first contributor and the value of
    /// the last one.
    pub fn css_mixed_properties(&self, id: NodeId) -> Result<PropertyNamespace, NodeError> {
        let mut merged = PropertyNamespace::new();
        for node in self.mixed_nodes(id)? {
            if let Some(css) = node.property_namespace(CSS_NAMESPACE) {
                merged.merge(css);
            }
        }
        tracing::trace!("Merged {} css rules for {}", merged.len(), id);
        Ok(merged)
    }

    /// Inline style string: `key:value` pairs joined by `;`, keys kebab-cased
    pub fn css_mixed_rules(&self, id: NodeId) -> Result<String, NodeError> {
        let rules: Vec<String> = self
            .css_mixed_properties(id)?
            .iter()
            .map(|(name, value)| format!("{}:{}", to_kebab_case(name), value))
            .collect();
        Ok(rules.join(";"))
    }

    /// Class of a single node, ignoring its mixins
    pub fn html_class(&self, id: NodeId) -> Result<String, NodeError> {
        let node = self.node(id)?;
        if node.is_element() && self.config().element_class == ElementClassMode::OwningBlock {
            if let Some(block) = self.owning_block(id)? {
                return Ok(node.element_class(self.node(block)?.block_name(), self.config()));
            }
        }
        Ok(node.html_class(self.config()))
    }

    /// Space-separated classes of all mixed nodes, duplicates kept
    pub fn html_mixed_class(&self, id: NodeId) -> Result<String, NodeError> {
        let node = self.node(id)?;
        let mut classes = Vec::with_capacity(node.mixins().len() + 1);
        for class_of in std::iter::once(id).chain(node.mixins().iter().copied()) {
            classes.push(self.html_class(class_of)?);
        }
        Ok(classes.join(" "))
    }

    /// `class` then `style`, empty values omitted
    pub fn html_attributes(&self, id: NodeId) -> Result<Vec<(&'static str, String)>, NodeError> {
        let attrs = [
            ("class", self.html_mixed_class(id)?),
            ("style", self.css_mixed_rules(id)?),
        ];
        Ok(attrs.into_iter().filter(|(_, value)| !value.is_empty()).collect())
    }

    /// `name="value"` pairs joined by a space
    pub fn html_attribute_string(&self, id: NodeId) -> Result<String, NodeError> {
        let pairs: Vec<String> = self
            .html_attributes(id)?
            .into_iter()
            .map(|(name, value)| format!("{}=\"{}\"", name, value))
            .collect();
        Ok(pairs.join(" "))
    }

    /// Opening tag
    ///
    /// With `pad_empty_tag_start` (the default) the space before the
    /// attributes is always written, so a node without attributes renders
    /// as `<div >`.
    pub fn html_tag_start(&self, id: NodeId) -> Result<String, NodeError> {
        let tag = self.html_tag(id)?;
        let attrs = self.html_attribute_string(id)?;
        if attrs.is_empty() && !self.config().pad_empty_tag_start {
            return Ok(format!("<{}>", tag));
        }
        Ok(format!("<{} {}>", tag, attrs))
    }

    /// Closing tag
    pub fn html_tag_end(&self, id: NodeId) -> Result<String, NodeError> {
        Ok(format!("</{}>", self.html_tag(id)?))
    }
}

#[cfg(test)]
mod tests {
    use crate::{BemTree, ElementClassMode, RenderConfig};

    #[test]
    fn test_default_tag() {
        let mut tree = BemTree::new();
        let id = tree.create_node("Box").unwrap();
        assert_eq!(tree.html_tag(id).unwrap(), "div");
        assert_eq!(tree.html_tag_end(id).unwrap(), "</div>");
    }

    #[test]
    fn test_configured_default_tag() {
        let mut tree = BemTree::with_config(RenderConfig::default().with_default_tag("span"));
        let id = tree.create_node("Box").unwrap();
        assert_eq!(tree.html_tag(id).unwrap(), "span");
    }

    #[test]
    fn test_tag_from_mixin() {
        let mut tree = BemTree::new();
        let link = tree.create_node("Link").unwrap();
        let button = tree.create_node("Button").unwrap();
        tree.node_mut(link).unwrap().set_property("html", "tag", "a");
        tree.node_mut(button).unwrap().set_property("html", "tag", "button");
        tree.add_mixin(link, button).unwrap();

        assert_eq!(tree.html_tag(link).unwrap(), "button");
        assert_eq!(tree.html_tag(button).unwrap(), "button");
    }

    #[test]
    fn test_html_namespace_without_tag() {
        let mut tree = BemTree::new();
        let id = tree.create_node("Box").unwrap();
        tree.node_mut(id).unwrap().set_property("html", "title", "x");
        assert_eq!(tree.html_tag(id).unwrap(), "div");
    }

    #[test]
    fn test_css_merge_order() {
        let mut tree = BemTree::new();
        let a = tree.create_node("A").unwrap();
        let b = tree.create_node("B").unwrap();
        tree.node_mut(a).unwrap().set_property("css", "color", "red");
        tree.node_mut(a).unwrap().set_property("css", "fontSize", "12px");
        tree.node_mut(b).unwrap().set_property("css", "marginTop", "4px");
        tree.node_mut(b).unwrap().set_property("css", "color", "blue");
        tree.add_mixin(a, b).unwrap();

        assert_eq!(
            tree.css_mixed_rules(a).unwrap(),
            "color:blue;font-size:12px;margin-top:4px"
        );
    }

    #[test]
    fn test_element_class_standalone() {
        let mut tree = BemTree::new();
        let card = tree.create_node("Card").unwrap();
        let title = tree.create_node("title").unwrap();
        tree.append_child(card, title).unwrap();

        assert_eq!(tree.html_class(title).unwrap(), "__title");
    }

    #[test]
    fn test_element_class_owning_block() {
        let config = RenderConfig::default().with_element_class(ElementClassMode::OwningBlock);
        let mut tree = BemTree::with_config(config);
        let card = tree.create_node("ProductCard").unwrap();
        let body = tree.create_node("body").unwrap();
        let title = tree.create_node("mainTitle").unwrap();
        let orphan = tree.create_node("orphan").unwrap();
        tree.append_child(card, body).unwrap();
        tree.append_child(body, title).unwrap();

        assert_eq!(tree.html_class(title).unwrap(), "product-card__main-title");
        assert_eq!(tree.html_class(orphan).unwrap(), "__orphan");
        assert_eq!(tree.html_class(card).unwrap(), "product-card");
    }

    #[test]
    fn test_custom_separator() {
        let mut tree = BemTree::with_config(RenderConfig::default().with_element_separator("-"));
        let id = tree.create_node("icon").unwrap();
        assert_eq!(tree.html_class(id).unwrap(), "-icon");
    }

    #[test]
    fn test_mixed_class_keeps_duplicates() {
        let mut tree = BemTree::new();
        let a = tree.create_node("Tile").unwrap();
        let b = tree.create_node("Tile").unwrap();
        tree.add_mixin(a, b).unwrap();
        tree.add_mixin(a, b).unwrap();

        assert_eq!(tree.html_mixed_class(a).unwrap(), "tile tile tile");
    }

    #[test]
    fn test_attribute_string() {
        let mut tree = BemTree::new();
        let id = tree.create_node("Alert").unwrap();
        tree.node_mut(id).unwrap().set_property("css", "color", "red");

        assert_eq!(
            tree.html_attribute_string(id).unwrap(),
            "class=\"alert\" style=\"color:red\""
        );
        assert_eq!(
            tree.html_tag_start(id).unwrap(),
            "<div class=\"alert\" style=\"color:red\">"
        );
    }

    #[test]
    fn test_separator_only_element_class() {
        let mut tree = BemTree::new();
        let chip = tree.create_node("Chip").unwrap();
        let bare = tree.create_node("_").unwrap();
        tree.add_mixin(chip, bare).unwrap();

        assert_eq!(tree.html_class(bare).unwrap(), "__");
        assert_eq!(tree.html_mixed_class(chip).unwrap(), "chip __");
        assert_eq!(tree.html_tag_start(bare).unwrap(), "<div class=\"__\">");
    }

    #[test]
    fn test_mixed_class_keeps_empty_entries() {
        let mut tree = BemTree::with_config(RenderConfig::default().with_element_separator(""));
        let chip = tree.create_node("Chip").unwrap();
        let bare = tree.create_node("-").unwrap();
        let icon = tree.create_node("icon").unwrap();
        tree.add_mixin(chip, bare).unwrap();
        tree.add_mixin(chip, icon).unwrap();

        assert_eq!(tree.html_mixed_class(chip).unwrap(), "chip  icon");
    }

    #[test]
    fn test_style_omitted_when_empty() {
        let mut tree = BemTree::new();
        let id = tree.create_node("Alert").unwrap();
        let attrs = tree.html_attributes(id).unwrap();
        assert_eq!(attrs, vec![("class", "alert".to_string())]);
    }
}
