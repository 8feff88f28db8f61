use glam::Vec2;

use crate::{Ball, Config, ConfigError, Paddle, RandomSource, Side};

/// The whole simulation: one ball, two paddles, and the surface they live on
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: Config,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
}

impl GameState {
    /// Build a fresh game with centered paddles and a served ball
    pub fn new(config: Config, rng: &mut impl RandomSource) -> Result<Self, ConfigError> {
        config.validate()?;

        let paddle_y = config.surface_height / 2.0 - config.paddle_height / 2.0;
        let left_paddle = Paddle::new(
            config.paddle_x(Side::Left),
            paddle_y,
            config.paddle_width,
            config.paddle_height,
        );
        let right_paddle = Paddle::new(
            config.paddle_x(Side::Right),
            paddle_y,
            config.paddle_width,
            config.paddle_height,
        );

        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO, config.ball_radius);
        ball.reset(
            config.ball_speed_init,
            config.surface_width,
            config.surface_height,
            rng,
        );

        Ok(Self {
            config,
            left_paddle,
            right_paddle,
            ball,
        })
    }
}
