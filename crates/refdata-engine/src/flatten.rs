//! Tree Flattener
//!
//! Depth-first, pre-order walk of a forest that emits one display row per
//! visible node. Children of collapsed nodes are not emitted at all, so a
//! change of expansion means flattening again.

use std::collections::HashSet;

use refdata_types::{Record, RecordId};
use serde::Serialize;

use crate::expansion::ExpansionState;
use crate::tree::Node;

/// One visible line of the hierarchy
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Row<'a> {
    #[serde(flatten)]
    pub record: &'a Record,
    /// Depth below the root level (roots are 0)
    pub level: usize,
    pub has_children: bool,
}

impl<'a> Row<'a> {
    pub fn id(&self) -> &'a RecordId {
        &self.record.id
    }
}

/// Flatten `roots` in display order, descending only into expanded nodes.
///
/// Ids already on the current path are not descended into again and are
/// reported as leaves, which bounds the walk even for inconsistent trees.
pub fn flatten<'a>(roots: &[Node<'a>], expansion: &ExpansionState) -> Vec<Row<'a>> {
    let mut rows = Vec::new();
    let mut path: HashSet<&'a RecordId> = HashSet::new();
    // One entry per open child frame, so popping a frame releases its id.
    let mut open_ids: Vec<&'a RecordId> = Vec::new();
    let mut stack = vec![roots.iter()];

    while let Some(frame) = stack.last_mut() {
        let Some(node) = frame.next() else {
            stack.pop();
            if let Some(id) = open_ids.pop() {
                path.remove(id);
            }
            continue;
        };

        let id = node.id();
        let level = stack.len() - 1;
        let revisit = path.contains(id);

        rows.push(Row {
            record: node.record,
            level,
            has_children: node.has_children() && !revisit,
        });

        if !revisit && node.has_children() && expansion.is_expanded(id) {
            path.insert(id);
            open_ids.push(id);
            stack.push(node.children.iter());
        }
    }

    rows
}
