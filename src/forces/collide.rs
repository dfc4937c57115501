// Circle collision force: one velocity-space "force" contributor for an
// iterative layout loop. Detects pairs whose predicted next positions
// overlap and pushes them apart, weighted by circle area so large bodies
// move less than small ones. Positions are never touched.

use crate::body::Body;
use crate::config;
use crate::profile_scope;
use crate::quadtree::{Quadtree, SpatialIndex};
use ultraviolet::Vec2;

/// Per-body radius accessor: body, slot in the set, full set.
pub type RadiusFn = Box<dyn Fn(&Body, usize, &[Body]) -> f32>;

/// Perturbation source used to split exactly coincident bodies. Injectable
/// so tests can pin it down.
pub type JiggleFn = Box<dyn FnMut() -> f32>;

fn default_jiggle() -> f32 {
    (fastrand::f32() - 0.5) * config::JIGGLE_SCALE
}

/// Collision-resolution force over a spatial partition.
///
/// The caller owns the bodies and passes them to [`apply`](Self::apply)
/// once per tick; the force mutates velocities only. Body `index` fields
/// must equal array slots and be unique — violations are not detected and
/// leave radius-table lookups undefined. The radius accessor must return a
/// finite non-negative number; non-finite or negative radii are not
/// guarded and propagate into the distance tests (NaN comparisons simply
/// never trigger a collision).
pub struct CollideForce<I: SpatialIndex = Quadtree> {
    radius: RadiusFn,
    strength: f32,
    iterations: usize,
    /// Radius table, indexed by body index. Stale until the first
    /// `initialize` and after every radius change.
    radii: Vec<f32>,
    stale: bool,
    jiggle: JiggleFn,
    index: I,
}

impl CollideForce<Quadtree> {
    pub fn new() -> Self {
        Self::with_index(Quadtree::new(config::LEAF_CAPACITY, config::MIN_QUAD_SIZE))
    }
}

impl Default for CollideForce<Quadtree> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: SpatialIndex> CollideForce<I> {
    /// Build the force over a caller-supplied spatial partition.
    pub fn with_index(index: I) -> Self {
        Self {
            radius: Box::new(|_, _, _| config::DEFAULT_RADIUS),
            strength: config::DEFAULT_STRENGTH,
            iterations: config::DEFAULT_ITERATIONS,
            radii: Vec::new(),
            stale: true,
            jiggle: Box::new(default_jiggle),
            index,
        }
    }

    /// Use a fixed radius for every body.
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = Box::new(move |_, _, _| radius);
        self.stale = true;
    }

    /// Use a per-body radius accessor.
    pub fn set_radius_fn(&mut self, radius: impl Fn(&Body, usize, &[Body]) -> f32 + 'static) {
        self.radius = Box::new(radius);
        self.stale = true;
    }

    pub fn set_strength(&mut self, strength: f32) {
        self.strength = strength;
    }

    pub fn strength(&self) -> f32 {
        self.strength
    }

    /// Resolution passes per `apply` call. More passes converge harder on
    /// a separated configuration; 0 turns the force off.
    pub fn set_iterations(&mut self, iterations: usize) {
        self.iterations = iterations;
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Replace the coincidence perturbation source.
    pub fn set_jiggle(&mut self, jiggle: impl FnMut() -> f32 + 'static) {
        self.jiggle = Box::new(jiggle);
    }

    /// Rebuild the radius table from the current particle set. Runs
    /// automatically on the next `apply` after a radius change or a change
    /// in particle count; calling it directly is only needed when radii
    /// depend on body state mutated between ticks.
    pub fn initialize(&mut self, bodies: &[Body]) {
        self.radii.clear();
        self.radii.resize(bodies.len(), 0.0);
        for (i, body) in bodies.iter().enumerate() {
            self.radii[body.index] = (self.radius)(body, i, bodies);
        }
        self.stale = false;
    }

    /// Run the full resolution cycle against `bodies`, mutating velocities
    /// in place. A no-op on an empty set.
    pub fn apply(&mut self, bodies: &mut [Body]) {
        profile_scope!("collide_apply");
        if bodies.is_empty() {
            return;
        }
        if self.stale || self.radii.len() != bodies.len() {
            self.initialize(bodies);
        }

        for _ in 0..self.iterations {
            self.index.rebuild(bodies);
            self.index.aggregate_max_radius(&self.radii);

            let index = &self.index;
            let radii = &self.radii;
            let jiggle = &mut self.jiggle;
            let strength = self.strength;

            for i in 0..bodies.len() {
                let idx_i = bodies[i].index;
                let ri = radii[idx_i];
                let ri2 = ri * ri;
                // Frozen for the whole traversal; partner positions below
                // are read live so later pairs see earlier corrections.
                let pi = bodies[i].predicted();
                let mut dv = Vec2::zero();

                index.search(&mut |node| {
                    if !node.is_leaf() {
                        // No body in this subtree, even at the aggregated
                        // max radius, can reach `i`.
                        let reach = ri + node.r;
                        return node.min.x > pi.x + reach
                            || node.max.x < pi.x - reach
                            || node.min.y > pi.y + reach
                            || node.max.y < pi.y - reach;
                    }
                    for entry in node.entries {
                        let j = entry.index;
                        // Strict ordering: each unordered pair is resolved
                        // exactly once per iteration.
                        if j <= idx_i {
                            continue;
                        }
                        let rj = radii[j];
                        let r = ri + rj;
                        let other = &mut bodies[j];
                        let pj = other.pos + other.vel;
                        let mut dx = pi.x - pj.x;
                        let mut dy = pi.y - pj.y;
                        let mut l = dx * dx + dy * dy;
                        if l < r * r {
                            if dx == 0.0 {
                                dx = jiggle();
                                l += dx * dx;
                            }
                            if dy == 0.0 {
                                dy = jiggle();
                                l += dy * dy;
                            }
                            let dist = l.sqrt();
                            let k = (r - dist) / dist * strength;
                            // Area-weighted split: the partner's share of
                            // the correction grows with its area, so the
                            // smaller body of the pair moves more.
                            let rj2 = rj * rj;
                            let q = rj2 / (ri2 + rj2);
                            dv.x += dx * k * q;
                            dv.y += dy * k * q;
                            other.vel.x -= dx * k * (1.0 - q);
                            other.vel.y -= dy * k * (1.0 - q);
                        }
                    }
                    false
                });

                // `i`'s own velocity is not re-read during its traversal.
                bodies[i].vel += dv;
            }
        }
    }
}
