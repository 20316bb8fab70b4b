/*
 * Animation Module
 *
 * This module defines SkillGraph, the owned simulation object that drives the
 * render/update loop. Each tick:
 * 1. Clears the surface
 * 2. Moves every particle by its velocity
 * 3. Flips velocity components of particles that left the surface
 * 4. Draws the labels
 * 5. Draws proximity edges between nearby particles
 * 6. Requests the next frame
 *
 * The loop is started explicitly, re-seeded on every resize and stopped on
 * teardown, which cancels the pending frame request.
 */

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::edges::{compute_edges, draw_edges};
use crate::params::GraphParams;
use crate::scheduler::{FrameClock, FrameHandle};
use crate::store::{SimulationState, SurfaceSize};
use crate::surface::DrawSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    // Constructed, not seeded yet
    Idle,
    Running,
    // Torn down; resizes and refreshes are ignored
    Stopped,
}

/// What one tick drew.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    pub particles: usize,
    pub edges: usize,
}

pub struct SkillGraph<R: Rng = StdRng> {
    params: GraphParams,
    state: Option<SimulationState>,
    lifecycle: LoopState,
    clock: FrameClock,
    frame: Option<FrameHandle>,
    ticks: u64,
    rng: R,
}

impl SkillGraph<StdRng> {
    pub fn new(params: GraphParams) -> Self {
        Self::with_rng(params, StdRng::from_entropy())
    }
}

impl<R: Rng> SkillGraph<R> {
    pub fn with_rng(params: GraphParams, rng: R) -> Self {
        Self {
            params,
            state: None,
            lifecycle: LoopState::Idle,
            clock: FrameClock::new(),
            frame: None,
            ticks: 0,
            rng,
        }
    }

    /// Seed the particles and begin requesting frames.
    ///
    /// A missing surface is not an error: the graph stays idle and
    /// returns `false`.
    pub fn start(&mut self, surface: Option<SurfaceSize>) -> bool {
        match self.lifecycle {
            LoopState::Running => return true,
            LoopState::Stopped => {
                log::debug!("skill graph already stopped, not restarting");
                return false;
            }
            LoopState::Idle => {}
        }

        let Some(size) = surface else {
            log::warn!("no drawing surface attached, skill graph not started");
            return false;
        };

        self.reseed_to(size);
        self.lifecycle = LoopState::Running;
        self.frame = Some(self.clock.request());
        log::info!(
            "skill graph started with {} particles on {}x{}",
            self.params.labels.len(),
            size.width,
            size.height
        );
        true
    }

    // Resize notification from the host; the first one starts the loop
    pub fn resize(&mut self, size: SurfaceSize) {
        match self.lifecycle {
            LoopState::Idle => {
                self.start(Some(size));
            }
            LoopState::Running => {
                self.reseed_to(size);
                log::debug!("reseeded skill graph for {}x{}", size.width, size.height);
            }
            LoopState::Stopped => {
                log::debug!("ignoring resize to {}x{} after stop", size.width, size.height);
            }
        }
    }

    // Reseed within the current bounds, e.g. after a speed change
    pub fn reseed(&mut self) {
        if let Some(size) = self.state.as_ref().map(SimulationState::size) {
            self.reseed_to(size);
        }
    }

    // Tear down: cancel the pending frame and refuse further work
    pub fn stop(&mut self) {
        if let Some(handle) = self.frame.take() {
            self.clock.cancel(handle);
        }
        if self.lifecycle != LoopState::Stopped {
            log::info!("skill graph stopped after {} ticks", self.ticks);
        }
        self.lifecycle = LoopState::Stopped;
    }

    /// One display refresh from the host. Runs a tick only if a frame was
    /// requested, so a stopped or idle graph leaves the surface untouched.
    pub fn refresh(&mut self, surface: &mut dyn DrawSurface) -> Option<TickStats> {
        let handle = self.clock.fire()?;
        if self.frame != Some(handle) {
            return None;
        }
        self.frame = None;
        Some(self.tick(surface))
    }

    /// Advance and draw one frame, then request the next one while running.
    pub fn tick(&mut self, surface: &mut dyn DrawSurface) -> TickStats {
        surface.clear();

        let mut stats = TickStats::default();
        if let Some(state) = self.state.as_mut() {
            let params = &self.params;
            let bounds = state.size();

            if !params.pause_simulation {
                for particle in state.particles_mut() {
                    particle.advance();
                    particle.reflect(bounds);
                }
            }

            surface.set_fill(params.text_color);
            surface.set_font(&params.font());
            for particle in state.particles() {
                particle.draw_label(surface, params.label_offset);
            }

            let edges = compute_edges(state.particles(), params.edge_threshold, params.base_alpha);
            stats = TickStats {
                particles: state.len(),
                edges: draw_edges(surface, &edges, params.edge_color),
            };
        }

        self.ticks += 1;
        if self.lifecycle == LoopState::Running {
            self.frame = Some(self.clock.request());
        }
        stats
    }

    fn reseed_to(&mut self, size: SurfaceSize) {
        // Built whole, then swapped in
        let state = SimulationState::seed(
            &self.params.labels,
            size,
            self.params.max_axis_speed,
            &mut self.rng,
        );
        self.state = Some(state);
    }

    pub fn lifecycle(&self) -> LoopState {
        self.lifecycle
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle == LoopState::Running
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.frame
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn params(&self) -> &GraphParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut GraphParams {
        &mut self.params
    }

    pub fn state(&self) -> Option<&SimulationState> {
        self.state.as_ref()
    }

    pub fn state_mut(&mut self) -> Option<&mut SimulationState> {
        self.state.as_mut()
    }
}
