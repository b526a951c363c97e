//! Application entry point for the plexus background viewer.
//!
//! This binary sets up eframe/egui and delegates all animation logic and
//! painting to [`Viewer`] from the `viewer` module.

mod viewer;

use viewer::Viewer;

const INITIAL_SIZE: [f32; 2] = [1280.0, 720.0];

/// Starts the native eframe application.
///
/// The point field is built once for the initial window size; later resizes
/// only update the stored extent.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(INITIAL_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "Plexus Field",
        options,
        Box::new(|_cc| {
            // Desktop build: the pointer is the primary input, so the target
            // follows it. Touch-primary builds would pass `false` here.
            Ok(Box::new(Viewer::new(INITIAL_SIZE[0], INITIAL_SIZE[1], true)))
        }),
    )
}
