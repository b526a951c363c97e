use crate::config::Config;
use crate::point::FieldPoint;
use crate::tween::Tween;
use crate::types::PointId;
use glam::Vec2;
use rand::Rng;

/// The full set of animated points covering the viewport.
///
/// Built once when the effect is mounted; resizing the viewport afterwards
/// does not rebuild it (points keep their origins, which is accepted visual
/// drift rather than a correctness concern).
#[derive(Debug)]
pub struct PointField {
    pub points: Vec<FieldPoint>,
}

impl PointField {
    /// Lays a jittered grid of points across a `width` x `height` viewport.
    ///
    /// The grid has `cfg.grid_cols` x `cfg.grid_rows` cells of size
    /// `width / cols` by `height / rows`, with each point placed uniformly at
    /// random inside its cell. Degenerate inputs (zero extent or zero grid
    /// dimensions) produce an empty field.
    pub fn jittered_grid(width: f32, height: f32, cfg: &Config, rng: &mut impl Rng) -> Self {
        if width <= 0.0 || height <= 0.0 || cfg.grid_cols == 0 || cfg.grid_rows == 0 {
            return Self { points: Vec::new() };
        }

        let cell_w = width / cfg.grid_cols as f32;
        let cell_h = height / cfg.grid_rows as f32;

        let mut positions = Vec::with_capacity(cfg.grid_cols * cfg.grid_rows);
        for col in 0..cfg.grid_cols {
            for row in 0..cfg.grid_rows {
                let x = col as f32 * cell_w + rng.random_range(0.0..cell_w);
                let y = row as f32 * cell_h + rng.random_range(0.0..cell_h);
                positions.push(Vec2::new(x, y));
            }
        }

        Self::from_positions(positions, cfg, rng)
    }

    /// Builds a field from explicit origin positions.
    ///
    /// Each position becomes a [`FieldPoint`] with:
    /// - a radius uniform in `[cfg.radius_min, cfg.radius_max)`,
    /// - its `cfg.neighbor_count` nearest other points precomputed by squared
    ///   Euclidean distance (ties broken by first-encountered order),
    /// - an initial randomized drift tween starting at the origin.
    ///
    /// The neighbor scan is O(n²) over the full list, which is fine at the
    /// few hundred points this effect uses.
    pub fn from_positions(positions: Vec<Vec2>, cfg: &Config, rng: &mut impl Rng) -> Self {
        let points = positions
            .iter()
            .enumerate()
            .map(|(id, &origin)| {
                let neighbors = nearest_neighbors(&positions, id, cfg.neighbor_count);
                let radius = rng.random_range(cfg.radius_min..cfg.radius_max);
                let tween = Tween::drift(origin, origin, cfg, rng);
                FieldPoint::at_origin(origin, radius, neighbors, tween)
            })
            .collect();

        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Finds the `k` nearest points to `positions[id]`, excluding itself.
///
/// Distances are compared squared; a stable sort keeps first-encountered
/// order for exact ties. Returns fewer than `k` ids when the field has fewer
/// than `k + 1` points.
fn nearest_neighbors(positions: &[Vec2], id: PointId, k: usize) -> Vec<PointId> {
    let mut dist_list: Vec<(PointId, f32)> = positions
        .iter()
        .enumerate()
        .filter(|&(other, _)| other != id)
        .map(|(other, p)| (other, (*p - positions[id]).length_squared()))
        .collect();

    dist_list.sort_by(|a, b| a.1.total_cmp(&b.1));
    dist_list.truncate(k);
    dist_list.into_iter().map(|(other, _)| other).collect()
}
