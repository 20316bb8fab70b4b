/*
 * UI Module
 *
 * This module contains functions for creating and updating the control panel
 * using nannou_egui, and for drawing the debug overlay. Parameter change
 * detection is handled by the GraphParams struct.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::{GraphParams, ParamChanges};

// Update the UI; returns whether a reseed was requested and what changed
pub fn update_ui(
    egui: &mut Egui,
    params: &mut GraphParams,
    debug_info: &DebugInfo,
) -> (bool, ParamChanges) {
    let mut reseed_clicked = false;

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Graph Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Edges", |ui| {
                ui.add(egui::Slider::new(&mut params.edge_threshold, GraphParams::edge_threshold_range()).text("Visibility Threshold"));
                ui.add(egui::Slider::new(&mut params.base_alpha, GraphParams::base_alpha_range()).text("Base Opacity"));
            });

            ui.collapsing("Motion", |ui| {
                ui.add(egui::Slider::new(&mut params.max_axis_speed, GraphParams::max_axis_speed_range()).text("Max Axis Speed"));

                if ui.button("Reseed").clicked() {
                    reseed_clicked = true;
                }
            });

            ui.separator();
            ui.label(format!("Skills: {}", params.labels.len()));
            ui.label(format!("Edges drawn: {}", debug_info.edges_drawn));

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    (reseed_clicked, params.detect_changes())
}

// Draw debug information in the top-left corner
pub fn draw_debug_info(draw: &nannou::Draw, debug_info: &DebugInfo, window_rect: nannou::geom::Rect) {
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 200.0;
    let lines = debug_info.lines();
    let panel_height = line_height * lines.len() as f32 + margin;
    let panel_x = window_rect.left() + panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    // Light panel so it reads on the white background
    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(1.0, 1.0, 1.0, 0.8));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    for (i, text) in lines.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(nannou::color::rgba(0.118, 0.161, 0.231, 1.0))
            .font_size(14);
    }
}
