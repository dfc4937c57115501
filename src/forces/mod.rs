pub mod collide;

pub use collide::CollideForce;

#[cfg(test)]
mod tests;
