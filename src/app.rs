/*
 * Application Module
 *
 * This module defines the nannou host for the skill graph. The window plays the
 * part of the page section: its size is the drawing surface, its resize events
 * reseed the graph and every display refresh runs one frame of the loop.
 *
 * Frames are recorded into a CommandBuffer during `update` and replayed onto the
 * window in `renderer::view`, since nannou only lets `update` mutate the model.
 */

use std::path::Path;

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::animation::SkillGraph;
use crate::config;
use crate::debug::DebugInfo;
use crate::input;
use crate::renderer;
use crate::store::SurfaceSize;
use crate::surface::CommandBuffer;
use crate::timeline::{parallax_tween, ParallaxMotion};
use crate::ui;

// Looked up in the working directory
pub const CONFIG_FILE: &str = "skillgraph.yaml";

// Main model for the application
pub struct Model {
    pub graph: SkillGraph,
    pub frame: CommandBuffer,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub parallax: ParallaxMotion,
    pub surface: SurfaceSize,
}

impl Model {
    // Resize notification: the graph reseeds, the recorded surface follows
    pub fn apply_resize(&mut self, surface: SurfaceSize) {
        self.surface = surface;
        self.frame.set_size(surface);
        self.debug_info.surface = surface;
        self.graph.resize(surface);
    }
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Size the window at 80% of the primary monitor when there is one
    let (window_width, window_height) = match app.primary_monitor() {
        Some(monitor) => {
            let size = monitor.size();
            (size.width as f32 * 0.8, size.height as f32 * 0.8)
        }
        None => (1024.0, 768.0),
    };

    let window_id = app
        .new_window()
        .title("Skill Graph")
        .size(window_width as u32, window_height as u32)
        .view(renderer::view)
        .resized(input::resized)
        .mouse_moved(input::mouse_moved)
        .raw_event(input::raw_window_event)
        .build()
        .expect("failed to build the main window");

    let window = app.window(window_id).expect("main window closed during setup");
    let egui = Egui::from_window(&window);

    let params = config::load_or_default(Path::new(CONFIG_FILE));

    let (width, height) = window.inner_size_points();
    let surface = SurfaceSize::new(width, height);

    let mut model = Model {
        graph: SkillGraph::new(params),
        frame: CommandBuffer::new(surface),
        egui,
        debug_info: DebugInfo::default(),
        parallax: ParallaxMotion::new(&parallax_tween(Vec2::ZERO)),
        surface,
    };

    // The initial measurement counts as the first resize
    model.apply_resize(surface);
    model
}

// Update the model: one display refresh
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let (reseed_clicked, changes) =
        ui::update_ui(&mut model.egui, model.graph.params_mut(), &model.debug_info);
    if reseed_clicked || changes.reseed_needed {
        model.graph.reseed();
    }

    model.parallax.advance(update.since_last.as_secs_f32());

    if let Some(stats) = model.graph.refresh(&mut model.frame) {
        model.debug_info.record_tick(stats);
    }
}

// Stop the loop before the window goes away
pub fn exit(_app: &App, mut model: Model) {
    model.graph.stop();
}
