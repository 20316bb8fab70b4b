/*
 * Input Module
 *
 * This module handles window events for the skill graph host:
 * - Resizes, which reseed the graph for the new surface
 * - Pointer moves, which retarget the ambient parallax
 * - Raw events, forwarded to egui
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::renderer;
use crate::store::SurfaceSize;
use crate::timeline::parallax_target;

// Window resized event handler; `size` is in points
pub fn resized(_app: &App, model: &mut Model, size: Vec2) {
    let surface = SurfaceSize::new(size.x, size.y);
    model.apply_resize(surface);
}

// Mouse moved event handler
pub fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    // Ignore the pointer while it is over the control panel
    if model.egui.ctx().is_pointer_over_area() {
        return;
    }

    let pointer = renderer::from_window(pos, app.window_rect());
    model.parallax.retarget(parallax_target(pointer, model.surface));
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
