/*
 * Skill Graph - Module Definitions
 *
 * This file defines the module structure for the skill graph: a set of labeled
 * particles drifting across a surface, bouncing off its edges and joined by
 * fading lines when they come close to each other.
 */

// Re-export key components for easier access
pub use animation::{LoopState, SkillGraph, TickStats};
pub use debug::DebugInfo;
pub use edges::{compute_edges, edge_opacity, Edge};
pub use params::GraphParams;
pub use particle::Particle;
pub use scheduler::{FrameClock, FrameHandle};
pub use store::{SimulationState, SurfaceSize};
pub use surface::{Color, CommandBuffer, DrawCommand, DrawSurface, Font, TextAlign};

// Define modules
pub mod animation;
pub mod app;
pub mod config;
pub mod debug;
pub mod edges;
pub mod input;
pub mod params;
pub mod particle;
pub mod renderer;
pub mod scheduler;
pub mod store;
pub mod surface;
pub mod timeline;
pub mod ui;

// Constants
pub const EDGE_THRESHOLD: f32 = 150.0;
pub const BASE_ALPHA: f32 = 0.3;
pub const MAX_AXIS_SPEED: f32 = 0.5;
pub const LABEL_OFFSET: f32 = 4.0;

pub const DEFAULT_SKILLS: [&str; 9] = [
    "C#",
    "Python",
    "SQL",
    "HTML/CSS",
    "JavaScript",
    "WordPress",
    "Vercel",
    "Git",
    "DB Design",
];
