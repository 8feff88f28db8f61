use crate::{Ball, Paddle};

/// Steer the AI paddle one step toward the ball.
///
/// The paddle holds still while the ball is within `dead_zone` of its center,
/// otherwise it moves `speed` toward the ball. Clamped afterwards.
pub fn update_ai_paddle(
    paddle: &mut Paddle,
    ball: &Ball,
    speed: f32,
    dead_zone: f32,
    surface_height: f32,
) {
    let center = paddle.center_y();
    if ball.pos.y < center - dead_zone {
        paddle.y -= speed;
    } else if ball.pos.y > center + dead_zone {
        paddle.y += speed;
    }

    paddle.clamp(surface_height);
}
