use log::{debug, trace};

use super::{Color, NodeId, RBTree};


impl RBTree {
    /// Restores the red-black properties after `z` was attached as a red leaf.
    ///
    /// The only property an insertion can break is "a red node has no red children" (between `z`
    /// and its parent), plus the root being black once a recoloring reaches it.
    pub(super) fn insert_fixup(&mut self, mut z: NodeId) {
        while let Some(parent) = self.nodes[z].parent
            && self.nodes[parent].color == Color::Red
        {
            // a red parent is never the root, so the grandparent exists
            let Some(grandparent) = self.nodes[parent].parent else {
                debug_assert!(false, "red node {} has no parent", self.nodes[parent].key);
                break
            };
            let parent_side = self.side_under(grandparent, parent);
            let uncle = self.child(grandparent, parent_side.opposite());

            // an absent uncle is a nil leaf, which is black
            if let Some(uncle) = uncle && self.nodes[uncle].color == Color::Red {
                trace!("Fixup at {}: red uncle, recoloring", self.nodes[z].key);
                self.nodes[parent].color = Color::Black;
                self.nodes[uncle].color = Color::Black;
                self.nodes[grandparent].color = Color::Red;
                z = grandparent;
                continue
            }

            let mut parent = parent;
            if self.side_of(z) != Some(parent_side) {
                // inner grandchild: rotate it into the outer position
                trace!("Fixup at {}: inner grandchild, rotating at parent", self.nodes[z].key);
                self.rotate(parent, parent_side);
                (z, parent) = (parent, z);
            }

            trace!("Fixup at {}: outer grandchild, rotating at grandparent", self.nodes[z].key);
            self.nodes[parent].color = Color::Black;
            self.nodes[grandparent].color = Color::Red;
            self.rotate(grandparent, parent_side.opposite());
            break
        }

        if let Some(root) = self.root
            && self.nodes[root].color == Color::Red
        {
            debug!("Recoloring root {} black", self.nodes[root].key);
            self.nodes[root].color = Color::Black;
        }
    }
}
