//! Text Splice Engine
//!
//! Walks the text nodes of a [`Fragment`] in document order and replaces
//! pattern occurrences inside each node's data with replacement nodes.
//!
//! Each text node is matched on its own, so an occurrence never spans an
//! element boundary. For every occurrence the current text node is split
//! into `before | matched | after`, the replacement nodes are inserted
//! before `after`, and `matched` is removed. `after` becomes the current
//! node for the next occurrence, and the walk resumes from it once the node
//! is done, so inserted content is never scanned again.
//!
//! The node's data is read once. Every piece is a slice of that buffer, so
//! a node with many occurrences costs time and memory linear in its length.

use std::ops::Range;

use tracing::{debug, trace};

use crate::dom::{self, Fragment, NodeRef, StrTendril, TextCursor};
use crate::error::Result;
use crate::options::Options;
use crate::replacer::{NodeFactory, Replacer};
use crate::search::Pattern;

/// Replace every occurrence of `pattern` in the fragment's text.
///
/// Text directly inside a tag listed in `options.skip_tags` is left alone,
/// as are attribute values. A non-global (or sticky) pattern replaces at
/// most one occurrence per text node.
///
/// On error the walk stops. Occurrences already replaced stay replaced.
pub fn process(
    fragment: &Fragment,
    pattern: &Pattern,
    replacer: &mut Replacer<'_>,
    options: &Options,
) -> Result<()> {
    let Some(container) = fragment.container() else {
        return Ok(());
    };

    let factory = NodeFactory::new(&fragment.document().tree);
    let mut cursor = TextCursor::new(container);
    let mut visited = 0usize;
    let mut replaced = 0usize;

    while let Some(node) = cursor.next_text() {
        visited += 1;

        if let Some(tag) = dom::parent_tag(&node) {
            if options.skips(&tag) {
                trace!(tag = %tag, "skipping raw text");
                continue;
            }
        }

        let data = node.text();
        if data.is_empty() {
            continue;
        }

        let occurrences = pattern.occurrences(&data)?;
        if occurrences.is_empty() {
            continue;
        }

        let last = splice_node(node, &data, &occurrences, replacer, &factory)?;
        replaced += occurrences.len();
        cursor.resume_at(last);
    }

    debug!(visited, replaced, "text splice finished");
    Ok(())
}

/// Splice `occurrences` (ranges into `data`, left to right) out of `node`.
///
/// Returns the trailing remainder left after the last occurrence.
fn splice_node<'a>(
    node: NodeRef<'a>,
    data: &StrTendril,
    occurrences: &[Range<usize>],
    replacer: &mut Replacer<'_>,
    factory: &NodeFactory<'a>,
) -> Result<NodeRef<'a>> {
    let mut current = node;
    // Data of `current`, which starts at byte `consumed` of `data`.
    let mut rest = data.clone();
    let mut consumed = 0;

    for range in occurrences {
        let matched = &data[range.clone()];
        let nodes = replacer
            .produce(matched, factory)
            .into_nodes(factory, &current)?;

        let start = range.start - consumed;
        let (_, tail) = dom::split_text(&current, &rest, start);
        let tail_data = dom::slice_text(&rest, start..rest.len());
        let (target, trailing) = dom::split_text(&tail, &tail_data, range.len());

        for inserted in &nodes {
            if inserted.parent().is_some() {
                inserted.remove_from_parent();
            }
            trailing.insert_before(inserted);
        }
        target.remove_from_parent();

        trace!(
            start = range.start,
            len = range.len(),
            inserted = nodes.len(),
            "spliced occurrence"
        );

        rest = dom::slice_text(&tail_data, range.len()..tail_data.len());
        consumed = range.end;
        current = trailing;
    }

    Ok(current)
}
