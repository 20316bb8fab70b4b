/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * and graph statistics to be displayed in the UI.
 */

use std::time::Duration;

use crate::animation::TickStats;
use crate::store::SurfaceSize;

// Debug information to display
#[derive(Debug, Clone)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub particles: usize,
    pub edges_drawn: usize,
    pub ticks: u64,
    pub surface: SurfaceSize,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            particles: 0,
            edges_drawn: 0,
            ticks: 0,
            surface: SurfaceSize::new(0.0, 0.0),
        }
    }
}

impl DebugInfo {
    pub fn record_tick(&mut self, stats: TickStats) {
        self.particles = stats.particles;
        self.edges_drawn = stats.edges;
        self.ticks += 1;
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Particles: {}", self.particles),
            format!("Edges: {}", self.edges_drawn),
            format!("Ticks: {}", self.ticks),
            format!("Surface: {:.0}x{:.0}", self.surface.width, self.surface.height),
        ]
    }
}
