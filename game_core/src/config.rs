use thiserror::Error;

use crate::components::Side;
use crate::params::Params;

/// Reasons a surface cannot host a game
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("surface dimensions must be finite and positive, got {width}x{height}")]
    InvalidSurface { width: f32, height: f32 },

    #[error("surface width {width} leaves no room between paddles (need more than {min})")]
    SurfaceTooNarrow { width: f32, min: f32 },

    #[error("surface height {height} cannot fit a paddle of height {paddle_height}")]
    SurfaceTooShort { height: f32, paddle_height: f32 },
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub surface_width: f32,
    pub surface_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_speed_init: f32,
    pub bounce_jitter: f32,
    pub ai_dead_zone: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface_width: Params::DEFAULT_WIDTH,
            surface_height: Params::DEFAULT_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_init: Params::BALL_SPEED_INIT,
            bounce_jitter: Params::BOUNCE_JITTER,
            ai_dead_zone: Params::AI_DEAD_ZONE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the host surface dimensions, read once at startup
    pub fn with_surface(mut self, width: f32, height: f32) -> Self {
        self.surface_width = width;
        self.surface_height = height;
        self
    }

    /// Get X position (left edge) for the paddle on `side`
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.surface_width - self.paddle_width - self.paddle_margin,
        }
    }

    /// Check that paddles fit on the surface.
    ///
    /// Only checked when a game is built; the per-frame operations assume it holds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.surface_width, self.surface_height);
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidSurface { width, height });
        }

        let min = 2.0 * (self.paddle_margin + self.paddle_width);
        if width <= min {
            return Err(ConfigError::SurfaceTooNarrow { width, min });
        }

        if height <= self.paddle_height {
            return Err(ConfigError::SurfaceTooShort {
                height,
                paddle_height: self.paddle_height,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 20.0, "Left paddle X position");
        assert_eq!(
            config.paddle_x(Side::Right),
            800.0 - 12.0 - 20.0,
            "Right paddle X position"
        );
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_narrow_surface_rejected() {
        let config = Config::new().with_surface(64.0, 400.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SurfaceTooNarrow { .. })
        ));
    }

    #[test]
    fn test_short_surface_rejected() {
        let config = Config::new().with_surface(800.0, 80.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SurfaceTooShort { .. })
        ));
    }

    #[test]
    fn test_non_finite_surface_rejected() {
        let config = Config::new().with_surface(f32::NAN, 400.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSurface { .. })
        ));
    }
}
