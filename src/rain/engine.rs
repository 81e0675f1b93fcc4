use std::time::Duration;

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::{
    constants::{CANVAS, RAIN_SETTINGS},
    seed::SeedType,
};

use super::{
    clock::{Clock, SystemClock},
    particle::SeedDrop,
};

/// Size of the area seeds fall through, in canvas units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: CANVAS.width,
            height: CANVAS.height,
        }
    }
}

/// Runs one celebratory rain at a time. Idle until `start`, then active until
/// the configured duration has elapsed on its clock.
pub struct RainController<C = SystemClock, R = StdRng> {
    clock: C,
    rng: R,
    viewport: Viewport,
    duration: Duration,
    seed: Option<SeedType>,
    started_at: Duration,
    active: bool,
    particles: Vec<SeedDrop>,
}

impl<C: Clock> RainController<C, StdRng> {
    pub fn new(viewport: Viewport, clock: C) -> Self {
        Self::with_rng(viewport, clock, StdRng::from_entropy())
    }
}

impl<C: Clock, R: Rng> RainController<C, R> {
    pub fn with_rng(viewport: Viewport, clock: C, rng: R) -> Self {
        Self {
            clock,
            rng,
            viewport,
            duration: Duration::from_millis(RAIN_SETTINGS.duration_ms),
            seed: None,
            started_at: Duration::ZERO,
            active: false,
            particles: Vec::new(),
        }
    }

    /// Starts a fresh rain, replacing whatever batch was falling before.
    pub fn start(&mut self, seed: SeedType) {
        self.seed = Some(seed);
        self.started_at = self.clock.now();
        self.active = true;

        let viewport = self.viewport;
        self.particles = (0..RAIN_SETTINGS.particle_count)
            .map(|_| SeedDrop::spawn(&mut self.rng, seed, viewport))
            .collect();

        debug!(%seed, count = self.particles.len(), "rain started");
    }

    /// Advances every particle by one frame. Returns false once the rain is
    /// idle, in which case nothing moved.
    pub fn update(&mut self) -> bool {
        if !self.active {
            return false;
        }

        if self.elapsed() >= self.duration {
            self.active = false;
            self.particles.clear();
            debug!("rain finished");
            return false;
        }

        for particle in &mut self.particles {
            particle.update(&mut self.rng, self.viewport);
        }
        true
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn seed(&self) -> Option<SeedType> {
        self.seed
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_sub(self.started_at)
    }

    /// Particles to draw this frame; empty while idle.
    pub fn particles(&self) -> &[SeedDrop] {
        if self.active { &self.particles[..] } else { &[] }
    }
}
