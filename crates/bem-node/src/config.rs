//! Render Configuration

/// How an element node renders its own class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ElementClassMode {
    /// `__element`: no block prefix, the element is rendered on its own
    #[default]
    Standalone,
    /// `block__element`, using the nearest block ancestor in the child tree.
    /// Falls back to `Standalone` when there is no block ancestor.
    OwningBlock,
}

/// Render configuration options
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Tag used when no mixed node sets `html.tag`
    pub default_tag: String,

    /// Separator between block and element parts of a class
    pub element_separator: String,

    /// Element class rendering
    pub element_class: ElementClassMode,

    /// Keep the space in `<div >` when there are no attributes
    pub pad_empty_tag_start: bool,
}

impl RenderConfig {
    /// Set the fallback tag
    pub fn with_default_tag(mut self, tag: impl Into<String>) -> Self {
        self.default_tag = tag.into();
        self
    }

    /// Set the block/element separator
    pub fn with_element_separator(mut self, separator: impl Into<String>) -> Self {
        self.element_separator = separator.into();
        self
    }

    /// Set how element classes are rendered
    pub fn with_element_class(mut self, mode: ElementClassMode) -> Self {
        self.element_class = mode;
        self
    }

    /// Keep or drop the space in `<div >`
    pub fn with_pad_empty_tag_start(mut self, pad: bool) -> Self {
        self.pad_empty_tag_start = pad;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_tag: "div".to_string(),
            element_separator: "__".to_string(),
            element_class: ElementClassMode::Standalone,
            pad_empty_tag_start: true,
        }
    }
}
