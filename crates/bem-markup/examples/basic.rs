//! Example: build a small BEM tree and print its markup

use bem_markup::{MarkupOptions, MarkupWriter};
use bem_node::BemTree;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tree = BemTree::new();
    let card = tree.create_node("Card")?;
    let title = tree.create_node("title")?;
    let action = tree.create_node("action")?;
    let button = tree.create_node("Button")?;

    tree.node_mut(title)?.set_property("html", "tag", "h2");
    tree.node_mut(button)?.set_property("html", "tag", "button");
    tree.node_mut(button)?.set_property("css", "backgroundColor", "red");

    tree.append_child(card, title)?;
    tree.append_child(card, action)?;
    tree.add_mixin(action, button)?;

    let html = MarkupWriter::new(&tree)
        .with_options(MarkupOptions::indented(2))
        .render(card)?;

    println!("bem-node v{}", bem_node::VERSION);
    println!("{html}");
    Ok(())
}
