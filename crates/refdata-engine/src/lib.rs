// Engine module - hierarchical record tree (build, flatten, expand, pick)
// Pure and synchronous: callers fetch records first, then re-run these
// functions whenever the data or the expansion set changes.

mod expansion;
mod flatten;
mod picker;
mod tree;

pub use expansion::ExpansionState;
pub use flatten::{Row, flatten};
pub use picker::{AncestorPicker, DEFAULT_PAGE_SIZE};
pub use tree::{Forest, Node, build_forest, descendant_ids};

use refdata_types::Record;

// Façade API - Stable public interface for the CLI layer

/// Build the forest for `records` and flatten it for display.
pub fn build_and_flatten<'a>(records: &'a [Record], expansion: &ExpansionState) -> Vec<Row<'a>> {
    let forest = build_forest(records);
    flatten(&forest.roots, expansion)
}
