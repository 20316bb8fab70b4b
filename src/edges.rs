/*
 * Edges Module
 *
 * Edges are derived every frame from particle positions and never stored.
 * Two distinct particles closer than the threshold are joined by a line whose
 * opacity fades linearly from `base_alpha` at distance 0 to nothing at the
 * threshold. Each unordered pair is considered once and self pairs are skipped.
 */

use nannou::prelude::Vec2;

use crate::particle::Particle;
use crate::surface::{Color, DrawSurface};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: Vec2,
    pub to: Vec2,
    pub distance: f32,
    pub opacity: f32,
}

/// Stroke opacity for a pair at distance `distance`, or `None` when the pair is
/// at or beyond `threshold`.
pub fn edge_opacity(distance: f32, threshold: f32, base_alpha: f32) -> Option<f32> {
    if threshold <= 0.0 || distance >= threshold {
        return None;
    }
    Some(base_alpha * (1.0 - distance / threshold))
}

// All visible edges for this frame
pub fn compute_edges(particles: &[Particle], threshold: f32, base_alpha: f32) -> Vec<Edge> {
    let mut edges = Vec::new();

    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let distance = a.position.distance(b.position);
            if let Some(opacity) = edge_opacity(distance, threshold, base_alpha) {
                edges.push(Edge {
                    from: a.position,
                    to: b.position,
                    distance,
                    opacity,
                });
            }
        }
    }

    edges
}

// Stroke every edge with the base colour at its own opacity; returns the count
pub fn draw_edges(surface: &mut dyn DrawSurface, edges: &[Edge], color: Color) -> usize {
    for edge in edges {
        surface.set_stroke(color.with_alpha(edge.opacity));
        surface.stroke_line(edge.from, edge.to);
    }
    edges.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(label: &str, x: f32, y: f32) -> Particle {
        Particle::new(label, Vec2::new(x, y), Vec2::ZERO)
    }

    #[test]
    fn opacity_is_base_alpha_at_zero() {
        assert_eq!(edge_opacity(0.0, 150.0, 0.3), Some(0.3));
    }

    #[test]
    fn opacity_decreases_with_distance() {
        let near = edge_opacity(20.0, 150.0, 0.3).unwrap();
        let far = edge_opacity(120.0, 150.0, 0.3).unwrap();
        assert!(near > far);
        assert!(far > 0.0);
    }

    #[test]
    fn no_edge_at_or_past_threshold() {
        assert_eq!(edge_opacity(150.0, 150.0, 0.3), None);
        assert_eq!(edge_opacity(400.0, 150.0, 0.3), None);
        assert_eq!(edge_opacity(1.0, 0.0, 0.3), None);
    }

    #[test]
    fn pairs_are_unordered_and_skip_self() {
        let particles = [at("A", 0.0, 0.0), at("B", 10.0, 0.0), at("C", 0.0, 500.0)];
        let edges = compute_edges(&particles, 150.0, 0.3);

        assert_eq!(edges.len(), 1);
        let edge = edges[0];
        assert_eq!(edge.from, Vec2::new(0.0, 0.0));
        assert_eq!(edge.to, Vec2::new(10.0, 0.0));
        assert!((edge.distance - 10.0).abs() < 1e-6);
    }

    #[test]
    fn coincident_particles_get_full_opacity() {
        let particles = [at("A", 5.0, 5.0), at("B", 5.0, 5.0)];
        let edges = compute_edges(&particles, 150.0, 0.3);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].opacity, 0.3);
    }
}
