use log::debug;

use crate::{Ball, Config, Events, RandomSource, Side};

/// Serve again if the ball left the court through either end
pub fn check_out_of_bounds(
    ball: &mut Ball,
    config: &Config,
    rng: &mut impl RandomSource,
    events: &mut Events,
) {
    let exited = if ball.pos.x < 0.0 {
        Side::Left
    } else if ball.pos.x > config.surface_width {
        Side::Right
    } else {
        return;
    };

    debug!("ball left through the {:?} end, serving again", exited);
    ball.reset(
        config.ball_speed_init,
        config.surface_width,
        config.surface_height,
        rng,
    );
    events.ball_reset = Some(exited);
}
