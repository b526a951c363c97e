//! Fullscreen animated point-field background built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the effect state (point field,
//! target, configuration) and implements [`eframe::App`] to drive the
//! per-frame phases and paint the result.

use eframe::App;
use glam::Vec2;
use plexus_core::{config::Config, field::PointField, phases};
use rand::rng;

/// Tint shared by lines and circles; per-tier alpha is applied at draw time.
const TINT: (u8, u8, u8) = (156, 217, 249);

/// Background fill behind the field.
const BACKDROP: egui::Color32 = egui::Color32::from_rgb(23, 29, 36);

/// Main application state for the animated background.
///
/// [`Viewer`] glues together:
/// - The effect core: [`PointField`], [`Config`], the drift/activity phases.
/// - The target (pointer position, or viewport center by default).
/// - eframe/egui callbacks for input handling and painting.
///
/// The per-frame update is:
/// 1. Track viewport size, scroll offset and pointer position.
/// 2. Advance [`phases::drift_phase`] with the frame's `dt` (always).
/// 3. If animation is not suppressed by scrolling, run
///    [`phases::activity_phase`] and paint lines and circles.
/// 4. Request a repaint, so the loop keeps rescheduling itself even while
///    drawing is suppressed.
pub struct Viewer {
    field: PointField,
    target: Vec2,
    cfg: Config,

    rng: rand::rngs::ThreadRng,

    width: f32,
    height: f32,
    scroll_offset: f32,
    track_pointer: bool,
}

impl Viewer {
    /// Creates a viewer with a freshly built point field for the given
    /// viewport size.
    ///
    /// The target starts at the viewport center. `track_pointer` decides
    /// whether pointer motion moves the target; touch-primary builds pass
    /// `false` so the target stays centered.
    pub fn new(width: f32, height: f32, track_pointer: bool) -> Self {
        let cfg = Config::default();
        let mut rng = rng();
        let field = PointField::jittered_grid(width, height, &cfg, &mut rng);
        log::debug!("built point field: {} points", field.len());

        Self {
            field,
            target: Vec2::new(width / 2.0, height / 2.0),
            cfg,
            rng,
            width,
            height,
            scroll_offset: 0.0,
            track_pointer,
        }
    }

    /// Records a new viewport size.
    ///
    /// The field is deliberately not rebuilt: points keep their origins and
    /// neighbor lists, trading exact coverage for continuity of the effect.
    fn set_viewport(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Accumulates scroll input into a scrolled-from-top offset.
    ///
    /// egui reports scrolling down as a negative y delta.
    fn on_scroll(&mut self, delta_y: f32) {
        self.scroll_offset = (self.scroll_offset - delta_y).max(0.0);
    }

    /// Whether the field should be classified and painted this frame.
    ///
    /// Animation runs while scrolled within one viewport height of the top
    /// and pauses beyond that.
    fn animating(&self) -> bool {
        self.scroll_offset <= self.height
    }

    /// The shared tint at a given alpha in `[0, 1]`.
    fn tint(alpha: f32) -> egui::Color32 {
        let (r, g, b) = TINT;
        egui::Color32::from_rgba_unmultiplied(r, g, b, (alpha * 255.0).round() as u8)
    }

    /// Paints lines and circles for every active point.
    ///
    /// Idle points are skipped entirely rather than drawn at zero alpha.
    fn draw_field(&self, painter: &egui::Painter, rect: egui::Rect) {
        let offset = rect.min;

        for p in &self.field.points {
            if !p.tier.is_active() {
                continue;
            }

            let at = egui::pos2(offset.x + p.pos.x, offset.y + p.pos.y);
            let stroke = egui::Stroke::new(1.0, Self::tint(p.tier.line_alpha()));

            for &n in &p.neighbors {
                let q = self.field.points[n].pos;
                let to = egui::pos2(offset.x + q.x, offset.y + q.y);
                painter.line_segment([at, to], stroke);
            }

            painter.circle_filled(at, p.radius, Self::tint(p.tier.circle_alpha()));
        }
    }
}

impl App for Viewer {
    /// eframe callback that runs the effect for one frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(BACKDROP))
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;

                if rect.width() != self.width || rect.height() != self.height {
                    self.set_viewport(rect.width(), rect.height());
                }

                let scroll = ctx.input(|i| i.raw_scroll_delta.y);
                if scroll != 0.0 {
                    self.on_scroll(scroll);
                }

                if self.track_pointer
                    && let Some(pos) = response.hover_pos()
                {
                    self.target = Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y);
                }

                // Clamp dt so a stalled frame doesn't teleport the field.
                let dt = ctx.input(|i| i.stable_dt).min(0.1);
                phases::drift_phase(&mut self.field, dt, &self.cfg, &mut self.rng);

                if self.animating() {
                    phases::activity_phase(&mut self.field, self.target, &self.cfg);
                    self.draw_field(&ui.painter_at(rect), rect);
                }

                // Keep the loop scheduled even while drawing is suppressed.
                ctx.request_repaint();
            });
    }
}
