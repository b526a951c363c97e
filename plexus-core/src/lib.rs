//! Core point-field animation library for the plexus background effect.
//!
//! Main components:
//! - [`field`] — jittered point grid and nearest-neighbor precomputation.
//! - [`point`] — individual field points.
//! - [`tween`] — eased random drift interpolation.
//! - [`activity`] — pointer-proximity activity tiers.
//! - [`phases`] — per-frame update pipeline.
//! - [`config`] — global configuration for the effect.
//! - [`types`] — shared type aliases and IDs.

pub mod activity;
pub mod config;
pub mod field;
pub mod phases;
pub mod point;
pub mod tween;
pub mod types;
