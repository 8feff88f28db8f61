use log::debug;

use crate::{Ball, Events, Paddle, RandomSource, Side};

/// Reflect the ball off the top and bottom walls
pub fn bounce_off_walls(ball: &mut Ball, surface_height: f32, events: &mut Events) {
    if ball.pos.y - ball.radius < 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    }
    if ball.pos.y + ball.radius > surface_height {
        ball.pos.y = surface_height - ball.radius;
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    }
}

/// Reflect the ball off a paddle.
///
/// The contact test uses the ball's leading edge against the paddle's face
/// horizontally, but only the ball's center vertically, so corner grazes
/// pass through. On contact the ball is pushed out past the face, `vx` is
/// reversed, and `vy` gains `jitter * Uniform(-1, 1)`.
pub fn bounce_off_paddle(
    ball: &mut Ball,
    paddle: &Paddle,
    side: Side,
    jitter: f32,
    rng: &mut impl RandomSource,
    events: &mut Events,
) {
    let within_span = ball.pos.y > paddle.y && ball.pos.y < paddle.bottom_edge();
    if !within_span {
        return;
    }

    let contact = match side {
        Side::Left => {
            let edge = ball.pos.x - ball.radius;
            edge < paddle.right_edge() && edge > paddle.x
        }
        Side::Right => {
            let edge = ball.pos.x + ball.radius;
            edge > paddle.x && edge < paddle.right_edge()
        }
    };
    if !contact {
        return;
    }

    ball.pos.x = match side {
        Side::Left => paddle.right_edge() + ball.radius,
        Side::Right => paddle.x - ball.radius,
    };
    ball.vel.x = -ball.vel.x;
    ball.vel.y += rng.signed_unit() * jitter;

    debug!("ball hit {:?} paddle at y={:.1}", side, ball.pos.y);
    events.ball_hit_paddle = Some(side);
}
