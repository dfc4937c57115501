// Centralized defaults for the collide force and quadtree construction.

// ====================
// Collide force
// ====================
pub const DEFAULT_RADIUS: f32 = 1.0;
pub const DEFAULT_STRENGTH: f32 = 1.0;
pub const DEFAULT_ITERATIONS: usize = 1;

/// Half-range of the symmetric perturbation used to split exactly
/// coincident bodies. Small enough to be invisible in any layout, large
/// enough that its square survives f32.
pub const JIGGLE_SCALE: f32 = 1e-6;

// ====================
// Quadtree
// ====================
/// One body per leaf except for coincident clusters; the resolver's leaf
/// handling tolerates either.
pub const LEAF_CAPACITY: usize = 1;

/// Quads smaller than this stop subdividing; whatever bodies remain share
/// the leaf.
pub const MIN_QUAD_SIZE: f32 = 1e-6;

// ====================
// Demo host loop
// ====================
/// Fraction of velocity kept after each committed tick in the demo binary.
pub const VELOCITY_DECAY: f32 = 0.6;
pub const DEMO_BODY_COUNT: usize = 200;
pub const DEMO_TICKS: usize = 120;
