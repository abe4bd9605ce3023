use std::fmt;

use super::RBTree;


/// Index of a node inside the tree's arena.
///
/// Nodes are never removed, so an id handed out by the tree stays valid for as long as the tree
/// lives.
pub(super) type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Color of an optional link; absent links are the (black) nil leaves.
    pub(super) fn of(node: Option<&RBTreeNode>) -> Color {
        node.map_or(Color::Black, |n| n.color)
    }
}

pub(super) struct RBTreeNode {
    pub(super) key: i64,
    pub(super) color: Color,
    pub(super) left: Option<NodeId>,
    pub(super) right: Option<NodeId>,
    // NOTE: back-reference only, the arena owns every node
    pub(super) parent: Option<NodeId>,
}

impl RBTreeNode {
    pub(super) fn new(key: i64, color: Color, parent: Option<NodeId>) -> Self {
        Self { key, color, left: None, right: None, parent }
    }
}


/// A read-only handle to a node in an [`RBTree`].
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a RBTree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub(super) fn new(tree: &'a RBTree, id: NodeId) -> Self {
        Self { tree, id }
    }

    fn node(&self) -> &'a RBTreeNode {
        &self.tree.nodes[self.id]
    }

    fn link(&self, id: Option<NodeId>) -> Option<NodeRef<'a>> {
        id.map(|id| NodeRef::new(self.tree, id))
    }

    pub fn key(&self) -> i64 {
        self.node().key
    }

    pub fn color(&self) -> Color {
        self.node().color
    }

    pub fn is_red(&self) -> bool {
        self.color() == Color::Red
    }

    pub fn is_black(&self) -> bool {
        self.color() == Color::Black
    }

    pub fn left(&self) -> Option<NodeRef<'a>> {
        self.link(self.node().left)
    }

    pub fn right(&self) -> Option<NodeRef<'a>> {
        self.link(self.node().right)
    }

    /// `None` for the root.
    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.link(self.node().parent)
    }

    /// Number of edges on the longest downward path from this node to a leaf.
    ///
    /// Complexity: O(size of subtree)
    pub fn height(&self) -> usize {
        let left = self.left().map_or(0, |n| n.height() + 1);
        let right = self.right().map_or(0, |n| n.height() + 1);
        left.max(right)
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", &self.key())
            .field("color", &self.color())
            .finish()
    }
}
