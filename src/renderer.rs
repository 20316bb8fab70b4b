/*
 * Renderer Module
 *
 * This module paints the recorded frame onto the nannou window.
 * The simulation draws in surface coordinates (origin top-left, y down);
 * nannou's window space has its origin in the middle with y pointing up,
 * so every point goes through `to_window` first.
 *
 * Text uses nannou's built-in font. The recorded font family is kept for
 * other surfaces but only the size is honoured here.
 */

use nannou::color::Rgba;
use nannou::prelude::*;

use crate::app::Model;
use crate::surface::{self, CommandBuffer, DrawCommand, TextAlign};
use crate::ui;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // Begin drawing
    let draw = app.draw();

    // Clear the background
    draw.background().color(to_nannou(model.graph.params().background));

    let window_rect = app.window_rect();
    replay(&draw, &model.frame, window_rect, model.parallax.current());

    // Draw debug overlay if enabled
    if model.graph.params().show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, window_rect);
    }

    // Finish drawing
    if let Err(err) = draw.to_frame(app, &frame) {
        log::error!("failed to draw frame: {err:?}");
    }

    // Draw the egui UI
    if let Err(err) = model.egui.draw_to_frame(&frame) {
        log::error!("failed to draw controls: {err:?}");
    }
}

// Paint every recorded command, shifted by `offset` (surface units)
pub fn replay(draw: &Draw, buffer: &CommandBuffer, window_rect: Rect, offset: Vec2) {
    for command in buffer.commands() {
        match command {
            DrawCommand::Line { from, to, color } => {
                draw.line()
                    .start(to_window(*from + offset, window_rect))
                    .end(to_window(*to + offset, window_rect))
                    .weight(1.0)
                    .color(to_nannou(*color));
            }
            DrawCommand::Text { text, at, align, color, font } => {
                let text = draw
                    .text(text)
                    .xy(to_window(*at + offset, window_rect))
                    .color(to_nannou(*color))
                    .font_size(font.size);
                match align {
                    TextAlign::Left => text.left_justify(),
                    TextAlign::Center => text.center_justify(),
                    TextAlign::Right => text.right_justify(),
                };
            }
        }
    }
}

// Surface coordinates to window coordinates
pub fn to_window(point: Vec2, window_rect: Rect) -> Vec2 {
    vec2(window_rect.left() + point.x, window_rect.top() - point.y)
}

// Window coordinates back to surface coordinates
pub fn from_window(point: Vec2, window_rect: Rect) -> Vec2 {
    vec2(point.x - window_rect.left(), window_rect.top() - point.y)
}

pub fn to_nannou(color: surface::Color) -> Rgba {
    rgba(
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
        color.a,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_maps_to_top_left_corner() {
        let rect = Rect::from_w_h(800.0, 600.0);
        assert_eq!(to_window(vec2(0.0, 0.0), rect), vec2(-400.0, 300.0));
        assert_eq!(to_window(vec2(800.0, 600.0), rect), vec2(400.0, -300.0));
        assert_eq!(to_window(vec2(400.0, 300.0), rect), vec2(0.0, 0.0));
    }

    #[test]
    fn window_round_trip() {
        let rect = Rect::from_w_h(640.0, 480.0);
        let point = vec2(12.5, 300.0);
        assert_eq!(from_window(to_window(point, rect), rect), point);
    }

    #[test]
    fn colours_keep_their_alpha() {
        let color = to_nannou(surface::Color::rgb(80, 0, 0).with_alpha(0.25));
        assert!((color.red - 80.0 / 255.0).abs() < 1e-6);
        assert_eq!(color.alpha, 0.25);
    }
}
