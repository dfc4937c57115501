use super::quadtree::Entry;
use ultraviolet::Vec2;

/// Square region of the plane, stored as center plus side length.
#[derive(Clone, Copy, Debug)]
pub struct Quad {
    pub center: Vec2,
    pub size: f32,
}

impl Quad {
    pub fn new_containing(entries: &[Entry]) -> Self {
        if entries.is_empty() {
            return Self {
                center: Vec2::zero(),
                size: 1.0,
            };
        }

        let mut min_x = f32::MAX;
        let mut min_y = f32::MAX;
        let mut max_x = f32::MIN;
        let mut max_y = f32::MIN;

        for entry in entries {
            min_x = min_x.min(entry.pos.x);
            min_y = min_y.min(entry.pos.y);
            max_x = max_x.max(entry.pos.x);
            max_y = max_y.max(entry.pos.y);
        }

        let center = Vec2::new(min_x + max_x, min_y + max_y) * 0.5;
        let size = (max_x - min_x).max(max_y - min_y);

        Self { center, size }
    }

    pub fn min(&self) -> Vec2 {
        self.center - Vec2::one() * (self.size * 0.5)
    }

    pub fn max(&self) -> Vec2 {
        self.center + Vec2::one() * (self.size * 0.5)
    }

    pub fn into_quadrant(mut self, quadrant: usize) -> Self {
        self.size *= 0.5;
        self.center.x += ((quadrant & 1) as f32 - 0.5) * self.size;
        self.center.y += ((quadrant >> 1) as f32 - 0.5) * self.size;
        self
    }

    pub fn subdivide(&self) -> [Quad; 4] {
        [0, 1, 2, 3].map(|i| self.into_quadrant(i))
    }
}
