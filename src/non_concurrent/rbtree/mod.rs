//! A red-black tree of `i64` keys.
//!
//! Nodes live in an arena owned by the tree and link to each other by index, so the parent
//! back-reference never owns anything and rotations can rewire links freely.
//! There is no deletion: nodes are only ever appended.

use std::fmt;

use log::trace;

mod fixup;
mod node;
mod rotate;
mod validate;

pub use node::{Color, NodeRef};
pub use validate::InvariantViolation;

use node::{NodeId, RBTreeNode};


// PROVE: any node with height `h` has black height at least `h/2`
// PROVE: the subtree located at any node `x` contains at least `2^bh(x) - 1` nodes (use induction)
// LEMMA: An RBTree with `n` internal nodes has height at most `2*log₂(n+1)`

#[derive(Default)]
pub struct RBTree {
    nodes: Vec<RBTreeNode>,
    root: Option<NodeId>,
}

/// Which child slot of a parent a node hangs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl RBTree {
    pub const fn new() -> Self {
        Self { nodes: Vec::new(), root: None }
    }

    /// The amount of keys in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn root(&self) -> Option<NodeRef<'_>> {
        self.root.map(|id| NodeRef::new(self, id))
    }

    /// Find the node holding `target`.
    ///
    /// Complexity: O(log(n))
    pub fn search(&self, target: i64) -> Option<NodeRef<'_>> {
        self.search_from(self.root, target).map(|id| NodeRef::new(self, id))
    }

    pub fn contains(&self, target: i64) -> bool {
        self.search(target).is_some()
    }

    pub(crate) fn search_from(&self, start: Option<NodeId>, target: i64) -> Option<NodeId> {
        let mut current = start;
        while let Some(id) = current {
            let node = &self.nodes[id];
            current = match target.cmp(&node.key) {
                std::cmp::Ordering::Less => node.left,
                std::cmp::Ordering::Greater => node.right,
                std::cmp::Ordering::Equal => return Some(id),
            };
        }
        None
    }

    /// Inserts `target` into the tree, rebalancing as needed.
    ///
    /// Returns whether a node was added; inserting a key that is already present does nothing.
    ///
    /// Complexity: O(log(n))
    pub fn insert(&mut self, target: i64) -> bool {
        let Some(mut current) = self.root else {
            self.root = Some(self.alloc(RBTreeNode::new(target, Color::Black, None)));
            return true
        };

        // walk down to the slot `target` belongs in, remembering who will own it
        let (parent, side) = loop {
            let node = &self.nodes[current];
            let (next, side) = match target.cmp(&node.key) {
                std::cmp::Ordering::Less => (node.left, Side::Left),
                std::cmp::Ordering::Greater => (node.right, Side::Right),
                std::cmp::Ordering::Equal => {
                    trace!("Ignoring duplicate key {target}");
                    return false
                }
            };
            match next {
                Some(next) => current = next,
                None => break (current, side),
            }
        };

        let z = self.alloc(RBTreeNode::new(target, Color::Red, Some(parent)));
        self.set_child(parent, side, Some(z));
        trace!("Attached {target} as {side:?} child of {}", self.nodes[parent].key);

        // a red child of the (black) root can't break anything
        if self.nodes[parent].parent.is_some() {
            self.insert_fixup(z);
        }
        true
    }

    /// Number of edges on the longest root-to-leaf path, or `-1` for an empty tree.
    pub fn height(&self) -> isize {
        self.root().map_or(-1, |root| root.height() as isize)
    }

    fn alloc(&mut self, node: RBTreeNode) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.nodes[id].left,
            Side::Right => self.nodes[id].right,
        }
    }

    fn set_child(&mut self, id: NodeId, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.nodes[id].left = child,
            Side::Right => self.nodes[id].right = child,
        }
    }

    /// Which side of its parent `id` is on. `None` for the root.
    fn side_of(&self, id: NodeId) -> Option<Side> {
        let parent = self.nodes[id].parent?;
        Some(self.side_under(parent, id))
    }

    /// Which child slot of `parent` holds `child`.
    fn side_under(&self, parent: NodeId, child: NodeId) -> Side {
        if self.nodes[parent].left == Some(child) { Side::Left } else { Side::Right }
    }

    fn color(&self, id: Option<NodeId>) -> Color {
        Color::of(id.map(|id| &self.nodes[id]))
    }
}

impl Side {
    fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl FromIterator<i64> for RBTree {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut tree = RBTree::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<i64> for RBTree {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl fmt::Debug for RBTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RBTree")
            .field("len", &self.len())
            .field("height", &self.height())
            .field("root", &self.root())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree() {
        let tree = RBTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), -1);
        assert!(tree.search(0).is_none());
        assert!(tree.root().is_none());
    }

    #[test]
    fn single_node_is_black_root() {
        let mut tree = RBTree::new();
        assert!(tree.insert(42));

        let root = tree.root().unwrap();
        assert_eq!(root.key(), 42);
        assert!(root.is_black());
        assert!(root.parent().is_none());
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn children_of_root_stay_red() {
        let tree: RBTree = [5, 3, 8].into_iter().collect();

        let root = tree.root().unwrap();
        assert_eq!(root.key(), 5);
        assert_eq!(root.left().unwrap().key(), 3);
        assert_eq!(root.right().unwrap().key(), 8);
        assert!(root.left().unwrap().is_red());
        assert!(root.right().unwrap().is_red());
        assert_eq!(root.left().unwrap().parent(), Some(root));
    }

    #[test]
    fn duplicates_are_ignored() {
        let mut tree: RBTree = [7, 3, 10].into_iter().collect();
        assert!(!tree.insert(3));
        assert!(!tree.insert(7));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.height(), 1);
    }

    #[test]
    fn search_from_subtree() {
        let tree: RBTree = (1..=15).collect();
        let root = tree.root.unwrap();
        let left = tree.nodes[root].left;

        // everything left of the root is smaller than it
        let root_key = tree.nodes[root].key;
        assert!(tree.search_from(left, root_key).is_none());
        assert!(tree.search_from(left, 1).is_some());
        assert_eq!(tree.search_from(Some(root), root_key), Some(root));
    }

    #[test]
    fn extreme_keys() {
        let tree: RBTree = [i64::MIN, 0, i64::MAX].into_iter().collect();
        assert!(tree.contains(i64::MIN));
        assert!(tree.contains(i64::MAX));
        assert!(!tree.contains(1));
        assert!(tree.is_valid());
    }
}
