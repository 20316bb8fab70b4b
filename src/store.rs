/*
 * Simulation State Store
 *
 * Owns the particle list and the surface dimensions. A store is only ever
 * built whole by `seed`: a resize produces a brand new store that replaces the
 * old one, so no tick can observe half-updated dimensions.
 */

use nannou::prelude::Vec2;
use rand::Rng;

use crate::particle::Particle;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[derive(Debug, Clone)]
pub struct SimulationState {
    particles: Vec<Particle>,
    size: SurfaceSize,
}

impl SimulationState {
    /// Build one particle per label, uniformly placed in `[0, width) x [0, height)`
    /// with each velocity component uniform in `[-max_axis_speed, max_axis_speed)`.
    pub fn seed<S, R>(labels: &[S], size: SurfaceSize, max_axis_speed: f32, rng: &mut R) -> Self
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let particles = labels
            .iter()
            .map(|label| {
                let position = Vec2::new(
                    sample_span(rng, size.width),
                    sample_span(rng, size.height),
                );
                let velocity = Vec2::new(
                    sample_speed(rng, max_axis_speed),
                    sample_speed(rng, max_axis_speed),
                );
                Particle::new(label.as_ref(), position, velocity)
            })
            .collect();

        Self { particles, size }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

// Uniform in [0, extent); a collapsed axis pins everything to 0
fn sample_span<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> f32 {
    if extent > 0.0 {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}

fn sample_speed<R: Rng + ?Sized>(rng: &mut R, max_axis_speed: f32) -> f32 {
    if max_axis_speed > 0.0 {
        rng.gen_range(-max_axis_speed..max_axis_speed)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn seed_places_one_particle_per_label_inside_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let labels = ["C#", "Python", "SQL", "Git"];
        let size = SurfaceSize::new(640.0, 360.0);
        let state = SimulationState::seed(&labels, size, 0.5, &mut rng);

        assert_eq!(state.len(), labels.len());
        assert_eq!(state.size(), size);
        for (particle, label) in state.particles().iter().zip(labels) {
            assert_eq!(particle.label(), label);
            assert!((0.0..640.0).contains(&particle.position.x));
            assert!((0.0..360.0).contains(&particle.position.y));
            assert!((-0.5..0.5).contains(&particle.velocity.x));
            assert!((-0.5..0.5).contains(&particle.velocity.y));
        }
    }

    #[test]
    fn seed_is_deterministic_for_a_seeded_source() {
        let labels = vec!["A".to_string(), "B".to_string()];
        let size = SurfaceSize::new(300.0, 300.0);
        let a = SimulationState::seed(&labels, size, 0.5, &mut StdRng::seed_from_u64(1));
        let b = SimulationState::seed(&labels, size, 0.5, &mut StdRng::seed_from_u64(1));
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn empty_labels_give_an_empty_store() {
        let labels: [&str; 0] = [];
        let state = SimulationState::seed(&labels, SurfaceSize::new(10.0, 10.0), 0.5, &mut StdRng::seed_from_u64(3));
        assert!(state.is_empty());
    }

    #[test]
    fn collapsed_surface_pins_positions_to_origin() {
        let state = SimulationState::seed(&["A"], SurfaceSize::new(0.0, 50.0), 0.0, &mut StdRng::seed_from_u64(3));
        let particle = &state.particles()[0];
        assert_eq!(particle.position.x, 0.0);
        assert!((0.0..50.0).contains(&particle.position.y));
        assert_eq!(particle.velocity, Vec2::ZERO);
    }
}
