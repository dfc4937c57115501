use super::quadtree::Entry;
use crate::body::Body;
use ultraviolet::Vec2;

/// One node of a spatial partition as seen by a search visitor. `entries`
/// is empty for internal nodes; leaves expose the bodies they cover.
pub struct NodeView<'a> {
    /// Largest body radius in this subtree.
    pub r: f32,
    pub min: Vec2,
    pub max: Vec2,
    pub entries: &'a [Entry],
}

impl NodeView<'_> {
    pub fn is_leaf(&self) -> bool {
        !self.entries.is_empty()
    }
}

/// The two traversal capabilities the collide force needs from a spatial
/// partition. Any index implementing this trait can back the force in
/// place of [`Quadtree`](super::Quadtree).
pub trait SpatialIndex {
    /// Rebuild the partition over the bodies' predicted positions
    /// (`pos + vel`). Called once per resolution iteration; the partition
    /// is a single-iteration artifact and may reuse allocations freely.
    fn rebuild(&mut self, bodies: &[Body]);

    /// Children-before-parent sweep assigning every node the largest
    /// radius found in its subtree: leaves take the max of
    /// `radii[entry.index]` over their entries, internal nodes the max of
    /// their children, empty subtrees 0.
    fn aggregate_max_radius(&mut self, radii: &[f32]);

    /// Top-down traversal. The visitor sees every non-empty node with its
    /// bounds and aggregated radius; returning `true` for an internal node
    /// skips its subtree, and the return value is ignored for leaves.
    fn search(&self, visit: &mut dyn FnMut(&NodeView<'_>) -> bool);
}
