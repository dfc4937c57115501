use crate::body::Body;
use ultraviolet::Vec2;

/// Scatter `n` stationary bodies over a disc sized so that same-radius
/// circles are packed at roughly unit density, i.e. plenty of initial
/// overlap for the collide force to work against.
pub fn scatter_disc(n: usize, radius: f32, seed: u64) -> Vec<Body> {
    fastrand::seed(seed);
    let outer = (n as f32).sqrt() * radius;

    let mut bodies = Vec::with_capacity(n);
    for i in 0..n {
        let a = fastrand::f32() * std::f32::consts::TAU;
        let (sin, cos) = a.sin_cos();
        let r = outer * fastrand::f32().sqrt();
        bodies.push(Body::new(i, Vec2::new(cos, sin) * r, Vec2::zero()));
    }

    bodies
}

/// Worst pairwise overlap depth at the committed positions, 0 when fully
/// separated. Brute force; diagnostic use only.
pub fn max_overlap(bodies: &[Body], radius: f32) -> f32 {
    let mut worst = 0.0f32;
    for i in 0..bodies.len() {
        for j in i + 1..bodies.len() {
            let d = (bodies[i].pos - bodies[j].pos).mag();
            worst = worst.max(2.0 * radius - d);
        }
    }
    worst
}
