use rand::{Rng, SeedableRng};

use crate::components::Side;

/// Source of uniform random numbers for serves and bounce jitter
pub trait RandomSource {
    /// Uniform in `[0, 1)`
    fn unit(&mut self) -> f32;

    /// Uniform in `[-1, 1)`
    fn signed_unit(&mut self) -> f32 {
        (self.unit() - 0.5) * 2.0
    }

    /// `1.0` or `-1.0` with equal probability
    fn coin(&mut self) -> f32 {
        if self.unit() < 0.5 {
            1.0
        } else {
            -1.0
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Nondeterministic generator for real play
    pub fn from_entropy() -> Self {
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl RandomSource for GameRng {
    fn unit(&mut self) -> f32 {
        self.0.gen::<f32>()
    }
}

/// Events that occurred during the last step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: Option<Side>,
    pub ball_reset: Option<Side>, // Side the ball left through
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.ball_hit_paddle = None;
        self.ball_reset = None;
    }
}
