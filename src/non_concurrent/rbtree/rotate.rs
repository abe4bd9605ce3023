use log::debug;

use super::{NodeId, RBTree, Side};


impl RBTree {
    /// Rotates the subtree at `x` towards `direction`, promoting the child on the other side into
    /// `x`'s slot.
    ///
    /// ```text
    ///       x                 y
    ///      / \               / \
    ///     a   y     <=>     x   c
    ///        / \           / \
    ///       b   c         a   b
    /// ```
    /// (left rotation is left-to-right, right rotation is the mirror image)
    ///
    /// The in-order key sequence is unchanged. Every parent link touched is rewritten together
    /// with the child link that owns it.
    pub(super) fn rotate(&mut self, x: NodeId, direction: Side) {
        let promoted_side = direction.opposite();
        let Some(y) = self.child(x, promoted_side) else {
            debug_assert!(
                false,
                "rotated {direction:?} at {} without a {promoted_side:?} child",
                self.nodes[x].key
            );
            return
        };
        debug!(
            "Rotating {direction:?} at {} (promoting {})",
            self.nodes[x].key, self.nodes[y].key
        );

        // `b` moves from under `y` to under `x`
        let inner = self.child(y, direction);
        self.set_child(x, promoted_side, inner);
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(x);
        }

        // `y` takes over `x`'s slot
        let parent = self.nodes[x].parent;
        match (parent, self.side_of(x)) {
            (Some(parent), Some(side)) => self.set_child(parent, side, Some(y)),
            _ => self.root = Some(y),
        }
        self.nodes[y].parent = parent;

        self.set_child(y, direction, Some(x));
        self.nodes[x].parent = Some(y);
    }
}
