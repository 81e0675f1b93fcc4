mod clock;
mod engine;
mod particle;

pub use clock::SystemClock;
#[cfg(test)]
pub use clock::ManualClock;
pub use engine::{RainController, Viewport};
pub use particle::SeedDrop;
