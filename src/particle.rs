/*
 * Particle Module
 *
 * This module defines the Particle struct: one labeled node of the skill graph.
 * Motion is ballistic. Each tick a particle moves by its velocity and, when it
 * ends up outside the surface on an axis, the velocity component on that axis
 * flips sign. The position is never clamped, so a particle can be drawn one
 * tick past the edge before it comes back.
 */

use nannou::prelude::Vec2;

use crate::store::SurfaceSize;
use crate::surface::{DrawSurface, TextAlign};

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    label: String,
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Particle {
    pub fn new(label: impl Into<String>, position: Vec2, velocity: Vec2) -> Self {
        Self {
            label: label.into(),
            position,
            velocity,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    // Euler step, one unit of time per frame
    pub fn advance(&mut self) {
        self.position += self.velocity;
    }

    // Flip the velocity on every axis where the particle is out of range
    pub fn reflect(&mut self, bounds: SurfaceSize) {
        if self.position.x < 0.0 || self.position.x > bounds.width {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > bounds.height {
            self.velocity.y = -self.velocity.y;
        }
    }

    // Draw the label centered below the particle's coordinate
    pub fn draw_label(&self, surface: &mut dyn DrawSurface, label_offset: f32) {
        let anchor = Vec2::new(self.position.x, self.position.y + label_offset);
        surface.fill_text(&self.label, anchor, TextAlign::Center);
    }
}
