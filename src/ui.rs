use egui;

use crate::config;
use crate::scene::Scene;

/// Tracks which debug overlays are open.
pub struct UiState {
    pub show_debug: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { show_debug: false }
    }
}

/// Draw the tuning panel. Every write here lands between ticks; the next
/// tick sees the adjusted values atomically.
pub fn draw_ui(scene: &mut Scene, ui_state: &mut UiState) {
    egui_macroquad::ui(|ctx| {
        draw_panel(ctx, scene, ui_state);
    });
    egui_macroquad::draw();
}

fn draw_panel(ctx: &egui::Context, scene: &mut Scene, ui_state: &mut UiState) {
    egui::Window::new("Steering Sandbox")
        .default_pos(egui::pos2(540.0, 40.0))
        .resizable(true)
        .show(ctx, |ui| {
            ui.checkbox(&mut ui_state.show_debug, "Show collider bounds");
            ui.checkbox(&mut scene.craft.enabled, "Enable craft");

            ui.separator();
            ui.heading("Placement");

            let mut target = [scene.target.pos.x, scene.target.pos.y];
            if slider_pair(ui, "Target", &mut target) {
                scene.target.pos = macroquad::prelude::vec2(target[0], target[1]);
                scene.craft.set_desired_velocity(scene.target.pos);
            }

            let mut obstacle = [scene.obstacle.pos.x, scene.obstacle.pos.y];
            if slider_pair(ui, "Obstacle", &mut obstacle) {
                scene.obstacle.pos = macroquad::prelude::vec2(obstacle[0], obstacle[1]);
            }

            ui.separator();
            ui.heading("Motion");

            let mut acceleration = scene.craft.acceleration_rate();
            if ui
                .add(egui::Slider::new(&mut acceleration, 0.0..=50.0).text("Acceleration rate"))
                .changed()
            {
                scene.craft.set_acceleration_rate(acceleration);
                // Re-seed acceleration along the current facing so the new
                // rate takes effect immediately.
                scene.craft.acceleration =
                    scene.craft.direction() * scene.craft.acceleration_rate();
            }

            let mut turn_rate = scene.craft.turn_rate();
            if ui
                .add(egui::Slider::new(&mut turn_rate, 0.0..=20.0).text("Turn rate"))
                .changed()
            {
                scene.craft.set_turn_rate(turn_rate);
            }

            let mut whisker_angle = scene.whiskers.half_angle();
            if ui
                .add(
                    egui::Slider::new(
                        &mut whisker_angle,
                        config::WHISKER_HALF_ANGLE_MIN..=config::WHISKER_HALF_ANGLE_MAX,
                    )
                    .text("Whisker angle"),
                )
                .changed()
            {
                scene.whiskers.set_half_angle(whisker_angle);
            }

            ui.separator();

            if ui.button("Reset").clicked() {
                scene.reset();
            }

            ui.label(format!(
                "pos ({:.0}, {:.0})  heading {:.1}\u{00b0}  speed {:.1}",
                scene.craft.pos.x,
                scene.craft.pos.y,
                scene.craft.heading(),
                scene.craft.velocity.length(),
            ));
        });
}

fn slider_pair(ui: &mut egui::Ui, label: &str, pos: &mut [f32; 2]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        changed |= ui
            .add(egui::Slider::new(&mut pos[0], 0.0..=config::WINDOW_WIDTH as f32).text("x"))
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut pos[1], 0.0..=config::WINDOW_HEIGHT as f32).text("y"))
            .changed();
    });
    changed
}
