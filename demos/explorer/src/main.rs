mod camera;
mod draw;

use camera::Camera;
use eframe::egui;
use egui::Sense;
use env_logger::Env;
use log::{debug, error, info};
use strum::IntoEnumIterator;
use upslope::{Scene, SceneConfig, Surface};

/// Initial window size
const WINDOW_WIDTH: f32 = 960.0;
const WINDOW_HEIGHT: f32 = 600.0;

/// Query point sliders cover `[-2, 2]`, comfortably inside the sampled domain
const POINT_LIMIT: f64 = 2.0;
const POINT_STEP: f64 = 0.1;
const POINT_DEFAULT: f64 = 0.5;

struct ExplorerApp {
    surface: Surface,
    x: f64,
    y: f64,
    config: SceneConfig,
    scene: Scene,
    camera: Camera,
}

impl ExplorerApp {
    fn new() -> Self {
        let surface = Surface::Bowl;
        let config = SceneConfig::default();
        let scene =
            Scene::new(surface, POINT_DEFAULT, POINT_DEFAULT, &config).unwrap();
        ExplorerApp {
            surface,
            x: POINT_DEFAULT,
            y: POINT_DEFAULT,
            config,
            scene,
            camera: Camera::default(),
        }
    }

    /// Rebuilds the scene after an input change
    fn rebuild(&mut self) {
        debug!("rebuilding scene for {}", self.surface);
        match Scene::new(self.surface, self.x, self.y, &self.config) {
            Ok(scene) => self.scene = scene,
            Err(e) => error!("could not rebuild scene: {e}"),
        }
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls").show(ctx, |ui| {
            ui.heading("Gradient explorer");
            ui.separator();

            let mut changed = false;
            egui::ComboBox::from_label("Surface")
                .selected_text(self.surface.name())
                .show_ui(ui, |ui| {
                    for s in Surface::iter() {
                        changed |= ui
                            .selectable_value(&mut self.surface, s, s.name())
                            .changed();
                    }
                });
            ui.monospace(self.surface.formula());
            ui.separator();

            changed |= ui
                .add(
                    egui::Slider::new(&mut self.x, -POINT_LIMIT..=POINT_LIMIT)
                        .step_by(POINT_STEP)
                        .text("x"),
                )
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut self.y, -POINT_LIMIT..=POINT_LIMIT)
                        .step_by(POINT_STEP)
                        .text("y"),
                )
                .changed();
            if changed {
                self.rebuild();
            }
            ui.separator();

            let p = &self.scene.point;
            ui.monospace(format!("f(x, y)  = {:.2}", p.z));
            ui.monospace(format!("df/dx    = {:.2}", p.grad.x));
            ui.monospace(format!("df/dy    = {:.2}", p.grad.y));
            ui.monospace(format!("|grad f| = {:.2}", p.magnitude()));
            ui.separator();

            ui.collapsing("What am I looking at?", |ui| {
                ui.label(
                    "The red marker sits on the surface at the chosen point. \
                     The arrow points in the direction of steepest ascent; \
                     its length scales with the gradient's magnitude, so it \
                     shrinks to nothing at a flat spot. Drag to orbit, \
                     scroll to zoom.",
                );
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) = ui
                .allocate_painter(ui.available_size(), Sense::click_and_drag());
            let mut moved = false;
            if response.dragged() {
                let delta = response.drag_delta();
                moved |= self.camera.drag(delta.x, delta.y);
            }
            if response.hovered() {
                let scroll = ctx.input(|i| i.smooth_scroll_delta.y);
                moved |= self.camera.zoom(scroll);
            }
            if moved {
                // Keep frames coming while the view is in motion
                ctx.request_repaint();
            }
            draw::paint(&painter, response.rect, &self.scene, &self.camera);
        });
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .init();

    let mut options = eframe::NativeOptions::default();
    options.viewport.inner_size =
        Some(egui::Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT));

    info!("starting explorer");
    eframe::run_native(
        "Upslope",
        options,
        Box::new(move |_cc| Ok(Box::new(ExplorerApp::new()))),
    )?;

    Ok(())
}
