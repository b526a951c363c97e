use crate::config::Config;
use glam::Vec2;
use rand::Rng;

/// Quadratic ease-in-out curve on `t` in `[0, 1]`.
///
/// Accelerates through the first half and decelerates through the second,
/// so a drifting point starts and ends each hop at rest.
#[inline]
pub fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u / 2.0
    }
}

/// A timed, eased interpolation between two positions.
///
/// A `Tween` carries a start position, an end position, a total duration and
/// the time elapsed so far. Sampling maps elapsed time through
/// [`ease_in_out_quad`] and interpolates between the endpoints.
///
/// Tweens never restart themselves; the drift phase replaces a finished
/// tween with a fresh randomized one (see
/// [`crate::phases::drift_phase`]), which is what makes the field drift
/// indefinitely.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    from: Vec2,
    to: Vec2,
    duration: f32,
    elapsed: f32,
}

impl Tween {
    /// Creates a randomized drift tween for a point.
    ///
    /// The destination is a uniform random offset in
    /// `[-cfg.drift_range, +cfg.drift_range)` from the point's **origin** on
    /// both axes (not from its current position), and the duration is uniform
    /// in `[cfg.drift_duration_min, cfg.drift_duration_max)` seconds.
    ///
    /// ### Parameters
    /// - `origin` - The point's fixed anchor position.
    /// - `from` - Where the point currently is; the tween starts here.
    /// - `cfg` - Global configuration providing drift range and durations.
    /// - `rng` - Random number generator for the offset and duration.
    pub fn drift(origin: Vec2, from: Vec2, cfg: &Config, rng: &mut impl Rng) -> Self {
        let to = origin
            + Vec2::new(
                rng.random_range(-cfg.drift_range..cfg.drift_range),
                rng.random_range(-cfg.drift_range..cfg.drift_range),
            );
        let duration = rng.random_range(cfg.drift_duration_min..cfg.drift_duration_max);

        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
        }
    }

    /// Creates a deterministic tween between two fixed positions.
    pub fn fixed(from: Vec2, to: Vec2, duration: f32) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
        }
    }

    /// Advances the tween by `dt` seconds.
    ///
    /// Elapsed time is clamped to the duration, so overshooting `dt` values
    /// simply finish the tween.
    ///
    /// ### Returns
    /// `true` if the tween has reached its duration after this call.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.finished()
    }

    /// Whether the tween has run for its full duration.
    #[inline]
    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Samples the eased position at the current elapsed time.
    ///
    /// A zero or negative duration samples at the end position.
    pub fn sample(&self) -> Vec2 {
        let t = if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        };
        self.from.lerp(self.to, ease_in_out_quad(t))
    }

    /// The position this tween ends at.
    #[inline]
    pub fn end(&self) -> Vec2 {
        self.to
    }
}
