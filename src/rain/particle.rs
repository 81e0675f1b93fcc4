use rand::Rng;

use crate::{constants::RAIN_SETTINGS, seed::SeedType};

use super::engine::Viewport;

/// One falling seed. `y` below zero means the seed is still above the
/// visible area.
#[derive(Clone, Debug, PartialEq)]
pub struct SeedDrop {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub fall_speed: f32,
    pub seed: SeedType,
}

impl SeedDrop {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, seed: SeedType, viewport: Viewport) -> Self {
        Self {
            x: random_x(rng, viewport),
            y: rng.gen_range(RAIN_SETTINGS.spawn_y_min..RAIN_SETTINGS.spawn_y_max),
            size: rng.gen_range(RAIN_SETTINGS.size_min..RAIN_SETTINGS.size_max),
            fall_speed: rng.gen_range(RAIN_SETTINGS.speed_min..RAIN_SETTINGS.speed_max),
            seed,
        }
    }

    /// Advances one frame. A seed that falls past the bottom edge is moved
    /// back above the top at a fresh column, keeping its size and speed.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Viewport) {
        self.y += self.fall_speed;
        if self.y > viewport.height {
            self.y = rng.gen_range(RAIN_SETTINGS.recycle_y_min..RAIN_SETTINGS.recycle_y_max);
            self.x = random_x(rng, viewport);
        }
    }

    pub fn is_visible(&self, viewport: Viewport) -> bool {
        self.y >= 0.0 && self.y < viewport.height && self.x >= 0.0 && self.x < viewport.width
    }

    pub fn is_large(&self) -> bool {
        self.size >= (RAIN_SETTINGS.size_min + RAIN_SETTINGS.size_max) / 2.0
    }
}

fn random_x<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> f32 {
    if viewport.width > 0.0 {
        rng.gen_range(0.0..viewport.width)
    } else {
        0.0
    }
}
