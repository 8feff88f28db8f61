use glam::Vec2;

use crate::resources::RandomSource;

/// Which end of the court something belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Paddle - an axis-aligned rectangle that only moves vertically
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub x: f32, // Left edge, fixed after creation
    pub y: f32, // Top edge, clamped to the surface
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Keep the paddle inside `[0, surface_height - height]`
    pub fn clamp(&mut self, surface_height: f32) {
        self.y = self.y.min(surface_height - self.height).max(0.0);
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn right_edge(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom_edge(&self) -> f32 {
        self.y + self.height
    }
}

/// Ball - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Reset ball to the surface center with a random serve.
    ///
    /// Horizontal speed is always `speed` toward a random side; vertical
    /// speed is `speed * Uniform(-1, 1)`.
    pub fn reset(&mut self, speed: f32, width: f32, height: f32, rng: &mut impl RandomSource) {
        self.pos = Vec2::new(width / 2.0, height / 2.0);
        self.vel = Vec2::new(speed * rng.coin(), speed * rng.signed_unit());
    }
}
