pub mod node;
pub mod quad;
pub mod traits;

pub use node::Node;
pub use traits::{NodeView, SpatialIndex};

mod quadtree;
pub use quadtree::{Entry, Quadtree};
