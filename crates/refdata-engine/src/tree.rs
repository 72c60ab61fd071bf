//! Tree Builder
//!
//! Turns a flat, unvalidated list of parent-linked records into a forest.
//! Parent references are resolved once per record through
//! [`Record::effective_parent_id`], so both upstream shapes (flat `parentId`
//! and nested `parent`) are accepted.
//!
//! Malformed input degrades instead of failing:
//! - a parent id that matches no record makes the record a root
//! - records whose parent chain loops back onto themselves (self references
//!   included) are all promoted to roots, which drops the in-cycle edges
//! - duplicate ids still yield one node per record; parent lookups resolve
//!   to the first record carrying the id

use std::collections::{HashMap, HashSet, VecDeque};

use refdata_types::{Record, RecordId};

/// A record decorated with its resolved children, in source order
#[derive(Debug, Clone, PartialEq)]
pub struct Node<'a> {
    pub record: &'a Record,
    pub children: Vec<Node<'a>>,
}

impl<'a> Node<'a> {
    pub fn id(&self) -> &'a RecordId {
        &self.record.id
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Ordered root nodes built from one snapshot of records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forest<'a> {
    pub roots: Vec<Node<'a>>,
    /// Records promoted to roots because their parent chain was cyclic
    pub cycle_breaks: Vec<&'a RecordId>,
    /// Records whose parent id matched nothing in the snapshot
    pub dangling: Vec<&'a RecordId>,
}

impl<'a> Forest<'a> {
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes in the forest
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Node<'a>> = self.roots.iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }
}

/// Build a forest from a flat list of records.
///
/// Roots and children keep the relative order of the source list.
pub fn build_forest(records: &[Record]) -> Forest<'_> {
    let index = first_index_by_id(records);

    let mut dangling = Vec::new();
    let parents: Vec<Option<usize>> = records
        .iter()
        .map(|record| {
            let parent_id = record.effective_parent_id()?;
            let parent = index.get(parent_id).copied();
            if parent.is_none() {
                dangling.push(&record.id);
            }
            parent
        })
        .collect();

    let on_cycle = cycle_members(&parents);

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); records.len()];
    let mut roots = Vec::new();
    let mut cycle_breaks = Vec::new();

    for (i, parent) in parents.iter().enumerate() {
        match parent {
            Some(p) if !on_cycle[i] => children[*p].push(i),
            Some(_) => {
                cycle_breaks.push(&records[i].id);
                roots.push(i);
            }
            None => roots.push(i),
        }
    }

    Forest {
        roots: assemble(records, &roots, &children),
        cycle_breaks,
        dangling,
    }
}

/// Ids of every record below `id`, following parent links present in `records`.
///
/// The walk carries a visited set, so cyclic input terminates.
pub fn descendant_ids<'a>(records: &'a [Record], id: &RecordId) -> HashSet<&'a RecordId> {
    let mut children_of: HashMap<&RecordId, Vec<&RecordId>> = HashMap::new();
    for record in records {
        if let Some(parent_id) = record.effective_parent_id() {
            children_of.entry(parent_id).or_default().push(&record.id);
        }
    }

    let mut found: HashSet<&'a RecordId> = HashSet::new();
    let mut queue: VecDeque<&RecordId> = VecDeque::from([id]);
    while let Some(current) = queue.pop_front() {
        for child in children_of.get(current).into_iter().flatten() {
            if *child != id && found.insert(*child) {
                queue.push_back(*child);
            }
        }
    }
    found
}

fn first_index_by_id(records: &[Record]) -> HashMap<&RecordId, usize> {
    let mut index = HashMap::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        index.entry(&record.id).or_insert(i);
    }
    index
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unseen,
    OnPath,
    Done,
}

/// Marks every index that lies on a cycle of parent pointers.
fn cycle_members(parents: &[Option<usize>]) -> Vec<bool> {
    let mut state = vec![Visit::Unseen; parents.len()];
    let mut on_cycle = vec![false; parents.len()];
    let mut path = Vec::new();

    for start in 0..parents.len() {
        let mut current = Some(start);
        while let Some(i) = current {
            match state[i] {
                Visit::Unseen => {
                    state[i] = Visit::OnPath;
                    path.push(i);
                    current = parents[i];
                }
                Visit::OnPath => {
                    if let Some(pos) = path.iter().position(|&p| p == i) {
                        for &member in &path[pos..] {
                            on_cycle[member] = true;
                        }
                    }
                    break;
                }
                Visit::Done => break,
            }
        }
        for i in path.drain(..) {
            state[i] = Visit::Done;
        }
    }

    on_cycle
}

/// Materialise nested nodes bottom-up. The child lists are acyclic here, so
/// every index is reached exactly once from the roots.
fn assemble<'a>(records: &'a [Record], roots: &[usize], children: &[Vec<usize>]) -> Vec<Node<'a>> {
    let mut preorder = Vec::with_capacity(records.len());
    let mut stack: Vec<usize> = roots.iter().rev().copied().collect();
    while let Some(i) = stack.pop() {
        preorder.push(i);
        stack.extend(children[i].iter().rev());
    }

    let mut built: Vec<Option<Node<'a>>> = (0..records.len()).map(|_| None).collect();
    for &i in preorder.iter().rev() {
        let kids = children[i]
            .iter()
            .filter_map(|&c| built[c].take())
            .collect();
        built[i] = Some(Node {
            record: &records[i],
            children: kids,
        });
    }

    roots.iter().filter_map(|&r| built[r].take()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: &str, parent: Option<&str>) -> Record {
        let record = Record::new(id, id.to_uppercase(), format!("Record {}", id));
        match parent {
            Some(p) => record.with_parent(p),
            None => record,
        }
    }

    fn shape(nodes: &[Node<'_>]) -> Vec<(String, Vec<String>)> {
        nodes
            .iter()
            .map(|n| {
                (
                    n.id().to_string(),
                    n.children.iter().map(|c| c.id().to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_children_follow_source_order() {
        let records = vec![
            rec("root", None),
            rec("b", Some("root")),
            rec("a", Some("root")),
            rec("other", None),
        ];
        let forest = build_forest(&records);

        assert_eq!(
            shape(&forest.roots),
            vec![
                ("root".to_string(), vec!["b".to_string(), "a".to_string()]),
                ("other".to_string(), vec![]),
            ]
        );
    }

    #[test]
    fn test_child_listed_before_parent() {
        let records = vec![rec("child", Some("parent")), rec("parent", None)];
        let forest = build_forest(&records);

        assert_eq!(forest.roots.len(), 1);
        assert_eq!(forest.roots[0].id().as_str(), "parent");
        assert_eq!(forest.roots[0].children[0].id().as_str(), "child");
    }

    #[test]
    fn test_dangling_parent_becomes_root() {
        let records = vec![rec("a", None), rec("orphan", Some("missing"))];
        let forest = build_forest(&records);

        assert_eq!(forest.roots.len(), 2);
        assert_eq!(forest.dangling, vec![&RecordId::new("orphan")]);
    }

    #[test]
    fn test_self_reference_becomes_root() {
        let records = vec![rec("loop", Some("loop"))];
        let forest = build_forest(&records);

        assert_eq!(forest.roots.len(), 1);
        assert!(forest.roots[0].children.is_empty());
        assert_eq!(forest.cycle_breaks, vec![&RecordId::new("loop")]);
    }

    #[test]
    fn test_cycle_members_are_promoted_but_hangers_on_stay() {
        let records = vec![
            rec("a", Some("b")),
            rec("b", Some("a")),
            rec("leaf", Some("a")),
        ];
        let forest = build_forest(&records);

        assert_eq!(
            shape(&forest.roots),
            vec![
                ("a".to_string(), vec!["leaf".to_string()]),
                ("b".to_string(), vec![]),
            ]
        );
        assert_eq!(forest.node_count(), 3);
    }

    #[test]
    fn test_longer_cycle() {
        let records = vec![
            rec("a", Some("c")),
            rec("b", Some("a")),
            rec("c", Some("b")),
        ];
        let forest = build_forest(&records);
        assert_eq!(forest.roots.len(), 3);
        assert_eq!(forest.cycle_breaks.len(), 3);
    }

    #[test]
    fn test_duplicate_ids_keep_every_record() {
        let records = vec![rec("x", None), rec("x", None), rec("y", Some("x"))];
        let forest = build_forest(&records);

        assert_eq!(forest.node_count(), 3);
        assert_eq!(forest.roots[0].children.len(), 1);
        assert!(forest.roots[1].children.is_empty());
    }

    #[test]
    fn test_deep_chain_does_not_recurse() {
        let mut records = vec![rec("0", None)];
        for i in 1..5_000 {
            records.push(rec(&i.to_string(), Some(&(i - 1).to_string())));
        }
        let forest = build_forest(&records);

        assert_eq!(forest.roots.len(), 1);
        assert_eq!(forest.node_count(), 5_000);
    }

    #[test]
    fn test_descendant_ids() {
        let records = vec![
            rec("a", None),
            rec("b", Some("a")),
            rec("c", Some("b")),
            rec("d", None),
        ];
        let found = descendant_ids(&records, &RecordId::new("a"));
        let mut ids: Vec<_> = found.into_iter().map(|id| id.to_string()).collect();
        ids.sort();
        assert_eq!(ids, vec!["b", "c"]);
    }

    #[test]
    fn test_descendant_ids_terminates_on_cycle() {
        let records = vec![rec("a", Some("b")), rec("b", Some("a"))];
        let found = descendant_ids(&records, &RecordId::new("a"));
        assert_eq!(found.len(), 1);
        assert!(found.contains(&RecordId::new("b")));
    }
}
