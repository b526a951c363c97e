//! Per-frame update pipeline for the point field.
//!
//! The typical frame looks like:
//! 1. [`drift_phase`] — advance every point's drift tween, replacing
//!    finished tweens with fresh randomized ones.
//! 2. [`activity_phase`] — bucket every point into an activity tier from
//!    its distance to the target.
//! 3. Drawing (owned by the viewer) — lines and circles for active points.
//!
//! The drift phase runs unconditionally every frame; the activity phase and
//! drawing are skipped while rendering is suppressed, matching the effect's
//! behavior of letting points keep drifting under a paused canvas.

use crate::activity::ActivityTier;
use crate::config::Config;
use crate::field::PointField;
use crate::tween::Tween;
use glam::Vec2;
use rand::Rng;

/// Advances every point's drift tween by `dt` seconds.
///
/// For each point:
///
/// 1. Advance its [`Tween`] and write the sampled position into `pos`.
/// 2. If the tween finished, clamp the position to the tween's end and
///    immediately start a new randomized tween from there via
///    [`Tween::drift`].
///
/// Step 2 is what keeps the field in motion forever: each completed hop
/// schedules the next one, with a fresh random duration and a fresh random
/// offset around the point's origin. The loop has no stop condition;
/// dropping the field is the only teardown.
///
/// ### Parameters
/// - `field` - The point field to animate; positions and tweens are mutated.
/// - `dt` - Seconds elapsed since the previous frame.
/// - `cfg` - Global configuration for drift range and durations.
/// - `rng` - Random number generator for replacement tweens.
pub fn drift_phase(field: &mut PointField, dt: f32, cfg: &Config, rng: &mut impl Rng) {
    for p in &mut field.points {
        if p.tween.advance(dt) {
            p.pos = p.tween.end();
            p.tween = Tween::drift(p.origin, p.pos, cfg, rng);
        } else {
            p.pos = p.tween.sample();
        }
    }
}

/// Rewrites every point's activity tier from its distance to `target`.
///
/// Uses the point's **live** position (not its origin), so drifting points
/// flicker between tiers as they cross threshold radii.
///
/// ### Parameters
/// - `field` - The point field; only `tier` fields are mutated.
/// - `target` - Current pointer position (or viewport center by default).
/// - `cfg` - Global configuration providing the tier thresholds.
pub fn activity_phase(field: &mut PointField, target: Vec2, cfg: &Config) {
    for p in &mut field.points {
        let dist_sq = (p.pos - target).length_squared();
        p.tier = ActivityTier::classify(dist_sq, cfg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rng;

    fn small_field(cfg: &Config) -> PointField {
        let positions = vec![
            Vec2::new(10.0, 10.0),
            Vec2::new(50.0, 50.0),
            Vec2::new(300.0, 300.0),
        ];
        PointField::from_positions(positions, cfg, &mut rng())
    }

    #[test]
    fn activity_phase_buckets_points_by_distance() {
        let cfg = Config::default();
        let mut field = small_field(&cfg);

        activity_phase(&mut field, Vec2::ZERO, &cfg);

        // d2 = 200 -> Near, d2 = 5000 -> Mid, d2 = 180000 -> Idle.
        assert_eq!(field.points[0].tier, ActivityTier::Near);
        assert_eq!(field.points[1].tier, ActivityTier::Mid);
        assert_eq!(field.points[2].tier, ActivityTier::Idle);
    }

    #[test]
    fn activity_phase_follows_a_moving_target() {
        let cfg = Config::default();
        let mut field = small_field(&cfg);

        activity_phase(&mut field, Vec2::new(300.0, 300.0), &cfg);

        assert_eq!(field.points[2].tier, ActivityTier::Near);
        assert_eq!(field.points[0].tier, ActivityTier::Idle);
    }

    #[test]
    fn activity_phase_uses_live_position_not_origin() {
        let cfg = Config::default();
        let mut field = small_field(&cfg);

        // Drag the far point next to the target by hand.
        field.points[2].pos = Vec2::new(5.0, 5.0);
        activity_phase(&mut field, Vec2::ZERO, &cfg);

        assert_eq!(field.points[2].tier, ActivityTier::Near);
    }

    #[test]
    fn drift_phase_moves_points_along_their_tweens() {
        let cfg = Config::default();
        let mut field = small_field(&cfg);

        let start = Vec2::new(10.0, 10.0);
        field.points[0].tween = Tween::fixed(start, Vec2::new(20.0, 10.0), 2.0);

        drift_phase(&mut field, 1.0, &cfg, &mut rng());

        // Halfway through a 2 s tween; ease(0.5) == 0.5.
        assert_eq!(field.points[0].pos, Vec2::new(15.0, 10.0));
    }

    #[test]
    fn drift_phase_restarts_finished_tweens() {
        let cfg = Config::default();
        let mut field = small_field(&cfg);

        let end = Vec2::new(20.0, 10.0);
        field.points[0].tween = Tween::fixed(Vec2::new(10.0, 10.0), end, 0.5);

        drift_phase(&mut field, 1.0, &cfg, &mut rng());

        // The point lands exactly on the tween end, and a fresh tween is in
        // place, starting from the landing position.
        assert_eq!(field.points[0].pos, end);
        assert!(!field.points[0].tween.finished());
        assert_eq!(field.points[0].tween.sample(), end);
    }

    #[test]
    fn drift_phase_keeps_points_within_drift_range_of_origin() {
        let cfg = Config::default();
        let mut rng = rng();
        let mut field = PointField::jittered_grid(800.0, 600.0, &cfg, &mut rng);

        // Run a few seconds of animation at 60 fps.
        for _ in 0..240 {
            drift_phase(&mut field, 1.0 / 60.0, &cfg, &mut rng);
        }

        // Every hop targets origin +- drift_range, and easing never
        // overshoots its endpoints.
        let limit = cfg.drift_range;
        for p in &field.points {
            let offset = p.pos - p.origin;
            assert!(offset.x.abs() <= limit, "x drifted {} past limit", offset.x);
            assert!(offset.y.abs() <= limit, "y drifted {} past limit", offset.y);
        }
    }

    #[test]
    fn drift_phase_leaves_origins_and_neighbors_untouched() {
        let cfg = Config::default();
        let mut rng = rng();
        let mut field = PointField::jittered_grid(400.0, 400.0, &cfg, &mut rng);

        let origins: Vec<Vec2> = field.points.iter().map(|p| p.origin).collect();
        let neighbors: Vec<Vec<usize>> =
            field.points.iter().map(|p| p.neighbors.clone()).collect();

        for _ in 0..60 {
            drift_phase(&mut field, 1.0 / 60.0, &cfg, &mut rng);
        }

        for (i, p) in field.points.iter().enumerate() {
            assert_eq!(p.origin, origins[i]);
            assert_eq!(p.neighbors, neighbors[i]);
        }
    }
}
