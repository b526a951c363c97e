use crate::config::Config;

/// Proximity bucket for a point relative to the current target.
///
/// Tiers are assigned from the **squared** distance between a point's live
/// position and the target, using the thresholds in [`Config`]
/// (`near_dist_sq` / `mid_dist_sq` / `far_dist_sq`). Closer tiers draw
/// brighter lines and circles; [`ActivityTier::Idle`] draws nothing at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityTier {
    Near,
    Mid,
    Far,
    Idle,
}

impl ActivityTier {
    /// Buckets a squared distance into a tier.
    ///
    /// ### Parameters
    /// - `dist_sq` - Squared Euclidean distance from the point to the target.
    /// - `cfg` - Global configuration providing the three tier thresholds.
    pub fn classify(dist_sq: f32, cfg: &Config) -> Self {
        if dist_sq < cfg.near_dist_sq {
            Self::Near
        } else if dist_sq < cfg.mid_dist_sq {
            Self::Mid
        } else if dist_sq < cfg.far_dist_sq {
            Self::Far
        } else {
            Self::Idle
        }
    }

    /// Stroke alpha for the lines from a point to its neighbors.
    #[inline]
    pub fn line_alpha(self) -> f32 {
        match self {
            Self::Near => 0.3,
            Self::Mid => 0.1,
            Self::Far => 0.02,
            Self::Idle => 0.0,
        }
    }

    /// Fill alpha for the point's circle.
    #[inline]
    pub fn circle_alpha(self) -> f32 {
        match self {
            Self::Near => 0.6,
            Self::Mid => 0.3,
            Self::Far => 0.1,
            Self::Idle => 0.0,
        }
    }

    /// Whether the point should be drawn at all this frame.
    #[inline]
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Idle)
    }
}
