pub mod components;
pub mod config;
pub mod input;
pub mod params;
pub mod render;
pub mod resources;
pub mod scheduler;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use input::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use scheduler::*;
pub use state::*;

use systems::*;

/// Advance the ball by one frame against both paddles.
///
/// Order matters: integrate, walls, left paddle, right paddle, then the
/// out-of-bounds serve. The paddles are read as they stand, so the AI paddle
/// is one frame behind the ball.
pub fn advance(
    ball: &mut Ball,
    left: &Paddle,
    right: &Paddle,
    config: &Config,
    rng: &mut impl RandomSource,
    events: &mut Events,
) {
    // 1. Move ball
    move_ball(ball);

    // 2. Top/bottom walls
    bounce_off_walls(ball, config.surface_height, events);

    // 3-4. Paddles
    bounce_off_paddle(ball, left, Side::Left, config.bounce_jitter, rng, events);
    bounce_off_paddle(ball, right, Side::Right, config.bounce_jitter, rng, events);

    // 5. Ball exited the court
    check_out_of_bounds(ball, config, rng, events);
}

/// Run the simulation for one frame: physics, then the AI paddle
pub fn step(state: &mut GameState, rng: &mut impl RandomSource, events: &mut Events) {
    // Clear events at start of frame
    events.clear();

    advance(
        &mut state.ball,
        &state.left_paddle,
        &state.right_paddle,
        &state.config,
        rng,
        events,
    );

    let config = &state.config;
    update_ai_paddle(
        &mut state.right_paddle,
        &state.ball,
        config.paddle_speed,
        config.ai_dead_zone,
        config.surface_height,
    );
}
