use thiserror::Error;

use super::{Color, NodeId, RBTree};


/// A broken red-black or search-tree property, as reported by [`RBTree::validate`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("root {key} is red")]
    RedRoot { key: i64 },
    #[error("red node {parent} has red child {child}")]
    RedRedEdge { parent: i64, child: i64 },
    #[error("node {key} has black height {left} on the left but {right} on the right")]
    BlackHeightMismatch { key: i64, left: usize, right: usize },
    #[error("child {key} does not point back at its parent")]
    BrokenParentLink { key: i64 },
    #[error("node {key} is out of order")]
    OrderViolation { key: i64 },
}

impl RBTree {
    /// Whether the tree satisfies the red-black properties: the root is black, no red node has a
    /// red child, and every path down to a nil leaf sees as many black nodes.
    ///
    /// Complexity: O(n)
    pub fn is_valid(&self) -> bool {
        let Some(root) = self.root else { return true };
        self.nodes[root].color == Color::Black && self.black_height(Some(root)).is_some()
    }

    /// Black height of the subtree at `id` (nil leaves count as 1), or `None` if it breaks a
    /// property.
    ///
    /// Both subtrees are always walked, even when one of them is already known to be broken.
    fn black_height(&self, id: Option<NodeId>) -> Option<usize> {
        let Some(id) = id else { return Some(1) };
        let node = &self.nodes[id];

        let left = self.black_height(node.left);
        let right = self.black_height(node.right);

        let red_red = node.color == Color::Red
            && (self.color(node.left) == Color::Red || self.color(node.right) == Color::Red);
        match (left, right) {
            (Some(l), Some(r)) if l == r && !red_red => {
                Some(l + (node.color == Color::Black) as usize)
            }
            _ => None,
        }
    }

    /// Checks every structural property of the tree, returning the black height of the root (1 for
    /// an empty tree).
    ///
    /// On top of what [`RBTree::is_valid`] checks, this also verifies that parent links match child
    /// links and that keys are in search-tree order, and reports the first problem found.
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        let Some(root) = self.root else { return Ok(1) };
        let root_node = &self.nodes[root];

        if root_node.parent.is_some() {
            return Err(InvariantViolation::BrokenParentLink { key: root_node.key })
        }
        if root_node.color == Color::Red {
            return Err(InvariantViolation::RedRoot { key: root_node.key })
        }
        self.validate_subtree(root, None, None)
    }

    /// Every key under `id` must be strictly between `lower` and `upper`.
    fn validate_subtree(
        &self,
        id: NodeId,
        lower: Option<i64>,
        upper: Option<i64>,
    ) -> Result<usize, InvariantViolation> {
        let node = &self.nodes[id];

        if lower.is_some_and(|lower| node.key <= lower)
            || upper.is_some_and(|upper| node.key >= upper)
        {
            return Err(InvariantViolation::OrderViolation { key: node.key })
        }

        let mut heights = [1; 2];
        for (height, (child, lower, upper)) in heights.iter_mut().zip([
            (node.left, lower, Some(node.key)),
            (node.right, Some(node.key), upper),
        ]) {
            let Some(child) = child else { continue };
            let child_node = &self.nodes[child];

            if child_node.parent != Some(id) {
                return Err(InvariantViolation::BrokenParentLink { key: child_node.key })
            }
            if node.color == Color::Red && child_node.color == Color::Red {
                return Err(InvariantViolation::RedRedEdge {
                    parent: node.key,
                    child: child_node.key,
                })
            }
            *height = self.validate_subtree(child, lower, upper)?;
        }

        let [left, right] = heights;
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch { key: node.key, left, right })
        }
        Ok(left + (node.color == Color::Black) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(keys: impl IntoIterator<Item = i64>) -> RBTree {
        keys.into_iter().collect()
    }

    #[test]
    fn empty_tree_is_valid() {
        let tree = RBTree::new();
        assert!(tree.is_valid());
        assert_eq!(tree.validate(), Ok(1));
    }

    #[test]
    fn black_height_of_built_trees() {
        assert_eq!(tree_of([1]).validate(), Ok(2));
        assert_eq!(tree_of([2, 1, 3]).validate(), Ok(2));
        assert_eq!(tree_of([20, 10, 30, 5]).validate(), Ok(3));
    }

    #[test]
    fn red_root_is_rejected() {
        let mut tree = tree_of([1]);
        let root = tree.root.unwrap();
        tree.nodes[root].color = Color::Red;

        assert!(!tree.is_valid());
        assert_eq!(tree.validate(), Err(InvariantViolation::RedRoot { key: 1 }));
    }

    #[test]
    fn red_red_edge_is_rejected() {
        let mut tree = tree_of([20, 10, 30, 5]);
        let ten = tree.search_from(tree.root, 10).unwrap();
        let thirty = tree.search_from(tree.root, 30).unwrap();
        tree.nodes[ten].color = Color::Red;
        // keep black heights balanced so only the red-red edge is wrong
        tree.nodes[thirty].color = Color::Red;

        assert!(!tree.is_valid());
        assert_eq!(tree.validate(), Err(InvariantViolation::RedRedEdge { parent: 10, child: 5 }));
    }

    #[test]
    fn unequal_black_heights_are_rejected() {
        let mut tree = tree_of([2, 1, 3]);
        let one = tree.search_from(tree.root, 1).unwrap();
        tree.nodes[one].color = Color::Black;

        assert!(!tree.is_valid());
        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::BlackHeightMismatch { key: 2, left: 2, right: 1 })
        );
    }

    #[test]
    fn broken_parent_link_is_reported() {
        let mut tree = tree_of([2, 1, 3]);
        let one = tree.search_from(tree.root, 1).unwrap();
        let three = tree.search_from(tree.root, 3).unwrap();
        tree.nodes[one].parent = Some(three);

        // colors are still fine
        assert!(tree.is_valid());
        assert_eq!(tree.validate(), Err(InvariantViolation::BrokenParentLink { key: 1 }));
    }

    #[test]
    fn out_of_order_key_is_reported() {
        let mut tree = tree_of([2, 1, 3]);
        let one = tree.search_from(tree.root, 1).unwrap();
        tree.nodes[one].key = 7;

        assert!(tree.is_valid());
        assert_eq!(tree.validate(), Err(InvariantViolation::OrderViolation { key: 7 }));
    }

    #[test]
    fn violation_messages() {
        assert_eq!(
            InvariantViolation::RedRedEdge { parent: 4, child: 2 }.to_string(),
            "red node 4 has red child 2"
        );
        assert_eq!(
            InvariantViolation::BlackHeightMismatch { key: 9, left: 3, right: 2 }.to_string(),
            "node 9 has black height 3 on the left but 2 on the right"
        );
    }
}
