use crate::activity::ActivityTier;
use crate::tween::Tween;
use crate::types::PointId;
use glam::Vec2;

#[derive(Debug)]
pub struct FieldPoint {
    /// Live display position, rewritten by the drift phase every frame.
    pub pos: Vec2,
    /// Fixed anchor the point drifts around.
    pub origin: Vec2,
    pub radius: f32,
    pub tier: ActivityTier,
    /// Ids of the nearest other points, computed once at build time.
    pub neighbors: Vec<PointId>,
    pub tween: Tween,
}

impl FieldPoint {
    pub fn at_origin(origin: Vec2, radius: f32, neighbors: Vec<PointId>, tween: Tween) -> Self {
        Self {
            pos: origin,
            origin,
            radius,
            tier: ActivityTier::Idle,
            neighbors,
            tween,
        }
    }
}
