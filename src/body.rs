// Particle state owned by the hosting layout loop. The collide force only
// ever mutates `vel`; positions are advanced by the host.

use ultraviolet::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Stable identity, equal to the body's slot in the particle array.
    /// Duplicate or non-contiguous indices are a caller error and leave the
    /// force's radius-table lookups undefined.
    pub index: usize,
}

impl Body {
    pub fn new(index: usize, pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel, index }
    }

    /// Position this body would occupy on the next tick if the host applied
    /// the full velocity. Collision testing runs against these, not the
    /// committed positions.
    pub fn predicted(&self) -> Vec2 {
        self.pos + self.vel
    }
}

/// Assign `index = slot` across the whole set. Hosts that splice or reorder
/// their particle array call this before handing it back to the force.
pub fn reindex(bodies: &mut [Body]) {
    for (i, body) in bodies.iter_mut().enumerate() {
        body.index = i;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicted_adds_velocity() {
        let body = Body::new(0, Vec2::new(1.0, -2.0), Vec2::new(0.5, 0.25));
        assert_eq!(body.predicted(), Vec2::new(1.5, -1.75));
    }

    #[test]
    fn reindex_matches_slots() {
        let mut bodies = vec![
            Body::new(7, Vec2::zero(), Vec2::zero()),
            Body::new(3, Vec2::one(), Vec2::zero()),
        ];
        reindex(&mut bodies);
        assert_eq!(bodies[0].index, 0);
        assert_eq!(bodies[1].index, 1);
    }
}
