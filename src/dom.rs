//! DOM Operations Adapter
//!
//! Wraps the `dom_query` primitives the splice engine needs: parsing a
//! fragment under a synthetic container, splitting text nodes, creating
//! HTML elements, and walking text nodes in document order with a cursor
//! that survives mutation.

use std::ops::Range;

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

pub use tendril::StrTendril;

use dom_query::{Element, LocalName, NodeData, NodeId, Tree};

use crate::patterns::{CONTAINER_TAG, MARKUP_CONTEXT_TAG};

// === Fragment ===

/// An HTML fragment parsed under a synthetic `<body>` container.
///
/// The container is not part of the caller's content; only its children
/// are serialized back.
pub struct Fragment {
    document: Document,
}

impl Fragment {
    /// Parse `html` as the content of the container.
    ///
    /// Parsing is as tolerant as any HTML parser: unclosed tags are closed,
    /// implied tags are added.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self {
            document: Document::from(format!("<{CONTAINER_TAG}>{html}</{CONTAINER_TAG}>")),
        }
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The synthetic container element.
    #[must_use]
    pub fn container(&self) -> Option<NodeRef<'_>> {
        self.document.select(CONTAINER_TAG).nodes().first().cloned()
    }

    /// Serialized markup of the container's children.
    #[must_use]
    pub fn inner_html(&self) -> String {
        self.document.select(CONTAINER_TAG).inner_html().to_string()
    }
}

// === Node Information ===

/// Tag name (lowercase) of the node's parent element, if any.
#[must_use]
pub fn parent_tag(node: &NodeRef) -> Option<StrTendril> {
    node.parent()
        .filter(NodeRef::is_element)
        .and_then(|parent| parent.node_name())
}

/// Whether `ancestor` is `node` or one of its ancestors.
#[must_use]
pub fn is_inclusive_ancestor(ancestor: &NodeRef, node: &NodeRef) -> bool {
    let mut current = Some(node.clone());
    while let Some(n) = current {
        if n.id == ancestor.id {
            return true;
        }
        current = n.parent();
    }
    false
}

/// Whether both nodes live in the same tree.
#[must_use]
pub fn same_tree(a: &NodeRef, b: &NodeRef) -> bool {
    std::ptr::eq(a.tree, b.tree)
}

/// All child nodes, text included, in order.
#[must_use]
pub fn child_nodes<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let mut out = Vec::new();
    let mut child = node.first_child();
    while let Some(c) = child {
        child = c.next_sibling();
        out.push(c);
    }
    out
}

// === Tree Manipulation ===

/// Split a text node at byte `offset`.
///
/// `data` is the node's character data, as read before any split. The node
/// is replaced in its parent by two new text siblings holding the data
/// before and after `offset`, in that order. Either part may be empty. Both
/// parts share `data`'s buffer.
pub fn split_text<'a>(
    node: &NodeRef<'a>,
    data: &StrTendril,
    offset: usize,
) -> (NodeRef<'a>, NodeRef<'a>) {
    let left = node.tree.new_text(slice_text(data, 0..offset));
    let right = node.tree.new_text(slice_text(data, offset..data.len()));
    node.insert_before(&left);
    node.insert_before(&right);
    node.remove_from_parent();

    (left, right)
}

/// The bytes of `data` in `range`, sharing `data`'s buffer.
///
/// `range` must fall on char boundaries.
#[must_use]
pub fn slice_text(data: &StrTendril, range: Range<usize>) -> StrTendril {
    let offset = u32::try_from(range.start);
    let length = u32::try_from(range.len());
    match (offset, length) {
        (Ok(offset), Ok(length)) => data.subtendril(offset, length),
        _ => StrTendril::from(&data[range]),
    }
}

/// A detached, empty element in the HTML namespace.
///
/// `Tree::new_element` leaves the namespace empty, which makes the
/// serializer close void elements (`<img></img>`). The name is built from
/// the document element's qualified name instead.
#[must_use]
pub fn new_html_element<'a>(tree: &'a Tree, name: &str) -> NodeRef<'a> {
    let html_name = tree
        .root()
        .first_element_child()
        .and_then(|html| html.qual_name_ref().map(|qual| (*qual).clone()));

    let Some(mut qual) = html_name else {
        return tree.new_element(name);
    };
    qual.local = LocalName::from(name.to_ascii_lowercase());

    let id = tree.create_node(NodeData::Element(Element::new(qual, Vec::new(), None, false)));
    NodeRef::new(id, tree)
}

/// Parse `html` into detached top-level nodes owned by `tree`'s document.
///
/// The markup is parsed in a `<div>` context, so table parts and other
/// context-sensitive tags are dropped the same way `innerHTML` would.
#[must_use]
pub fn parse_nodes<'a>(tree: &'a Tree, html: &str) -> Vec<NodeRef<'a>> {
    let holder = new_html_element(tree, MARKUP_CONTEXT_TAG);
    Selection::from(holder.clone()).set_html(html);

    let nodes = child_nodes(&holder);
    for node in &nodes {
        node.remove_from_parent();
    }
    nodes
}

// === Traversal ===

/// Document-order cursor over the text nodes below a root.
///
/// The cursor only remembers its current position, so the tree can be
/// mutated between steps. After replacing content around a text node, call
/// [`TextCursor::resume_at`] with the last node that should count as
/// visited; anything inserted before it is never reached.
pub struct TextCursor<'a> {
    root: NodeId,
    position: NodeRef<'a>,
}

impl<'a> TextCursor<'a> {
    #[must_use]
    pub fn new(root: NodeRef<'a>) -> Self {
        Self {
            root: root.id,
            position: root,
        }
    }

    /// Move to `node`. The next step continues from there in document order.
    pub fn resume_at(&mut self, node: NodeRef<'a>) {
        self.position = node;
    }

    /// Advance to the next text node in document order.
    pub fn next_text(&mut self) -> Option<NodeRef<'a>> {
        loop {
            let next = self.following()?;
            self.position = next.clone();
            if next.is_text() {
                return Some(next);
            }
        }
    }

    fn following(&self) -> Option<NodeRef<'a>> {
        if let Some(child) = self.position.first_child() {
            return Some(child);
        }

        let mut node = self.position.clone();
        loop {
            if node.id == self.root {
                return None;
            }
            if let Some(sibling) = node.next_sibling() {
                return Some(sibling);
            }
            node = node.parent()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(fragment: &Fragment) -> Vec<String> {
        let mut cursor = TextCursor::new(fragment.container().expect("container"));
        let mut out = Vec::new();
        while let Some(node) = cursor.next_text() {
            out.push(node.text().to_string());
        }
        out
    }

    #[test]
    fn test_fragment_round_trip() {
        let fragment = Fragment::parse(r#"<p class="a">hi <b>there</b></p>tail"#);

        assert_eq!(fragment.inner_html(), r#"<p class="a">hi <b>there</b></p>tail"#);
    }

    #[test]
    fn test_fragment_closes_unclosed_tags() {
        let fragment = Fragment::parse("<p>one<p>two");

        assert_eq!(fragment.inner_html(), "<p>one</p><p>two</p>");
    }

    #[test]
    fn test_cursor_visits_text_in_document_order() {
        let fragment = Fragment::parse("a<p>b<i>c</i>d</p><ul><li>e</li></ul>f");

        assert_eq!(texts(&fragment), vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_cursor_on_empty_fragment() {
        let fragment = Fragment::parse("");

        assert!(texts(&fragment).is_empty());
    }

    #[test]
    fn test_split_text_keeps_order_and_parent() {
        let fragment = Fragment::parse("<p>hello world</p>");
        let p = fragment.document().select("p");
        let text = p.nodes()[0].first_child().expect("text node");
        let data = text.text();

        let (left, right) = split_text(&text, &data, 5);

        assert_eq!(&*left.text(), "hello");
        assert_eq!(&*right.text(), " world");
        assert_eq!(left.next_sibling().map(|n| n.id), Some(right.id));
        assert_eq!(child_nodes(&p.nodes()[0]).len(), 2);
        assert_eq!(fragment.inner_html(), "<p>hello world</p>");
    }

    #[test]
    fn test_split_text_at_edges() {
        let fragment = Fragment::parse("abc");
        let text = fragment
            .container()
            .and_then(|c| c.first_child())
            .expect("text node");
        let data = text.text();

        let (left, right) = split_text(&text, &data, 0);
        assert_eq!(&*left.text(), "");
        assert_eq!(&*right.text(), "abc");

        let (left, right) = split_text(&right, &data, 3);
        assert_eq!(&*left.text(), "abc");
        assert_eq!(&*right.text(), "");
    }

    #[test]
    fn test_slice_text_shares_data() {
        let data = StrTendril::from("hello, wide world");

        assert_eq!(&*slice_text(&data, 0..5), "hello");
        assert_eq!(&*slice_text(&data, 7..17), "wide world");
        assert_eq!(&*slice_text(&data, 17..17), "");
    }

    #[test]
    fn test_slice_text_multibyte() {
        let data = StrTendril::from("café 中文");

        assert_eq!(&*slice_text(&data, 0..5), "café");
        assert_eq!(&*slice_text(&data, 6..12), "中文");
    }

    #[test]
    fn test_html_element_serializes_void_tags() {
        let fragment = Fragment::parse("<p>x</p>");
        let p = fragment.document().select("p").nodes()[0].clone();

        let img = new_html_element(&fragment.document().tree, "img");
        img.set_attr("src", "a.png");
        p.append_child(&img);
        p.append_child(&new_html_element(&fragment.document().tree, "BR"));

        assert_eq!(fragment.inner_html(), r#"<p>x<img src="a.png"><br></p>"#);
    }

    #[test]
    fn test_parent_tag() {
        let fragment = Fragment::parse("<script>x</script>y");
        let container = fragment.container().expect("container");
        let mut cursor = TextCursor::new(container);

        let x = cursor.next_text().expect("x");
        assert_eq!(parent_tag(&x).as_deref(), Some("script"));
        let y = cursor.next_text().expect("y");
        assert_eq!(parent_tag(&y).as_deref(), Some("body"));
    }

    #[test]
    fn test_parse_nodes_are_detached_and_ordered() {
        let fragment = Fragment::parse("x");
        let tree = &fragment.document().tree;

        let nodes = parse_nodes(tree, "<b>1</b>two<i>3</i>");

        assert_eq!(nodes.len(), 3);
        assert!(nodes.iter().all(|n| n.parent().is_none()));
        assert_eq!(nodes[0].node_name().as_deref(), Some("b"));
        assert!(nodes[1].is_text());
        assert_eq!(nodes[2].node_name().as_deref(), Some("i"));
    }

    #[test]
    fn test_ancestry_and_tree_identity() {
        let fragment = Fragment::parse("<p><b>x</b></p>");
        let other = Fragment::parse("<p>y</p>");
        let container = fragment.container().expect("container");
        let b = fragment.document().select("b").nodes()[0].clone();

        assert!(is_inclusive_ancestor(&container, &b));
        assert!(is_inclusive_ancestor(&b, &b));
        assert!(!is_inclusive_ancestor(&b, &container));

        let foreign = other.container().expect("container");
        assert!(same_tree(&container, &b));
        assert!(!same_tree(&container, &foreign));
    }
}
