//! Replacement production.
//!
//! A [`Replacer`] turns each matched string into a [`Replacement`], which is
//! then coerced into the ordered list of nodes spliced in place of the match.
//!
//! Computed replacers receive a [`NodeFactory`] so they can build nodes in
//! the document being edited:
//!
//! ```rust
//! use replace_in_html::{replace_in_html, Pattern, Replacement, Replacer};
//!
//! let linker = Replacer::computed(|m, nodes| {
//!     let a = nodes.element("a");
//!     a.set_attr("href", &format!("https://{m}"));
//!     a.append_child(&nodes.text(m));
//!     Replacement::Node(a)
//! });
//!
//! let pattern = Pattern::new(r"\w+\.example\.org")?.global();
//! let html = replace_in_html("see meow.example.org", pattern, linker)?;
//! assert_eq!(html, r#"see <a href="https://meow.example.org">meow.example.org</a>"#);
//! # Ok::<(), replace_in_html::Error>(())
//! ```

use std::fmt;

use dom_query::{NodeRef, Selection, Tree};

use crate::dom;
use crate::error::{Error, Result};

/// Builds nodes owned by the document being edited.
pub struct NodeFactory<'a> {
    tree: &'a Tree,
}

impl<'a> NodeFactory<'a> {
    pub(crate) fn new(tree: &'a Tree) -> Self {
        Self { tree }
    }

    /// A detached text node.
    #[must_use]
    pub fn text(&self, text: &str) -> NodeRef<'a> {
        self.tree.new_text(text)
    }

    /// A detached, empty HTML element.
    #[must_use]
    pub fn element(&self, name: &str) -> NodeRef<'a> {
        dom::new_html_element(self.tree, name)
    }

    /// Detached top-level nodes parsed from `html`.
    #[must_use]
    pub fn markup(&self, html: &str) -> Vec<NodeRef<'a>> {
        dom::parse_nodes(self.tree, html)
    }
}

/// What a replacer produces for one match.
pub enum Replacement<'a> {
    /// Parsed as markup; the resulting top-level nodes are inserted.
    Markup(String),
    /// Inserted as is.
    Node(NodeRef<'a>),
    /// Inserted in order.
    Nodes(Vec<NodeRef<'a>>),
    /// The selected nodes, inserted in order.
    Selection(Selection<'a>),
}

impl<'a> Replacement<'a> {
    /// Coerce into the nodes to insert before `anchor`.
    ///
    /// Every node must belong to the anchor's document and must not contain
    /// the anchor's parent.
    pub(crate) fn into_nodes(
        self,
        factory: &NodeFactory<'a>,
        anchor: &NodeRef<'a>,
    ) -> Result<Vec<NodeRef<'a>>> {
        let nodes = match self {
            Self::Markup(html) => return Ok(factory.markup(&html)),
            Self::Node(node) => vec![node],
            Self::Nodes(nodes) => nodes,
            Self::Selection(selection) => selection.nodes().to_vec(),
        };

        for node in &nodes {
            check_insertable(node, anchor)?;
        }
        Ok(nodes)
    }
}

fn check_insertable(node: &NodeRef, anchor: &NodeRef) -> Result<()> {
    if !dom::same_tree(node, anchor) {
        return Err(Error::UnsupportedReplacement(
            "node belongs to a different document".to_string(),
        ));
    }

    let contains_insertion_point = anchor
        .parent()
        .is_some_and(|parent| dom::is_inclusive_ancestor(node, &parent));
    if contains_insertion_point {
        return Err(Error::UnsupportedReplacement(
            "node contains the insertion point".to_string(),
        ));
    }

    Ok(())
}

impl From<String> for Replacement<'_> {
    fn from(html: String) -> Self {
        Self::Markup(html)
    }
}

impl From<&str> for Replacement<'_> {
    fn from(html: &str) -> Self {
        Self::Markup(html.to_string())
    }
}

impl<'a> From<NodeRef<'a>> for Replacement<'a> {
    fn from(node: NodeRef<'a>) -> Self {
        Self::Node(node)
    }
}

impl<'a> From<Vec<NodeRef<'a>>> for Replacement<'a> {
    fn from(nodes: Vec<NodeRef<'a>>) -> Self {
        Self::Nodes(nodes)
    }
}

impl<'a> From<Selection<'a>> for Replacement<'a> {
    fn from(selection: Selection<'a>) -> Self {
        Self::Selection(selection)
    }
}

type ReplaceFn<'r> = dyn for<'a> FnMut(&str, &NodeFactory<'a>) -> Replacement<'a> + 'r;

/// The replacer argument of [`crate::replace_in_html`].
pub enum Replacer<'r> {
    /// The same markup for every match.
    Constant(String),
    /// Called with each matched string, left to right, in document order.
    Computed(Box<ReplaceFn<'r>>),
}

impl<'r> Replacer<'r> {
    /// Wrap a function from matched text to replacement.
    pub fn computed<F>(f: F) -> Self
    where
        F: for<'a> FnMut(&str, &NodeFactory<'a>) -> Replacement<'a> + 'r,
    {
        Self::Computed(Box::new(f))
    }

    pub(crate) fn produce<'a>(&mut self, matched: &str, factory: &NodeFactory<'a>) -> Replacement<'a> {
        match self {
            Self::Constant(html) => Replacement::Markup(html.clone()),
            Self::Computed(f) => f(matched, factory),
        }
    }
}

impl fmt::Debug for Replacer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(html) => f.debug_tuple("Constant").field(html).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<&str> for Replacer<'_> {
    fn from(html: &str) -> Self {
        Self::Constant(html.to_string())
    }
}

impl From<String> for Replacer<'_> {
    fn from(html: String) -> Self {
        Self::Constant(html)
    }
}
