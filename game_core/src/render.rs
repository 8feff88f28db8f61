//! Drawing contract for hosts and frame composition

use crate::GameState;

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const WHITE: Color = Color(0xff, 0xff, 0xff);
    pub const NET: Color = Color(0x66, 0x66, 0x66);

    /// `#rrggbb`
    pub fn css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Dash pattern of the center net: 8 on, 12 off
pub const NET_DASH: [f32; 2] = [8.0, 12.0];

/// Host drawing surface. Read-only with respect to game state.
pub trait RenderAdapter {
    type Error;

    fn clear(&mut self, width: f32, height: f32) -> Result<(), Self::Error>;

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color)
        -> Result<(), Self::Error>;

    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: Color) -> Result<(), Self::Error>;

    fn draw_dashed_line(
        &mut self,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        dash: &[f32],
        color: Color,
    ) -> Result<(), Self::Error>;
}

/// Draw one frame: background, net, paddles, then ball
pub fn draw_frame<R: RenderAdapter>(state: &GameState, renderer: &mut R) -> Result<(), R::Error> {
    let width = state.config.surface_width;
    let height = state.config.surface_height;

    renderer.clear(width, height)?;
    renderer.draw_dashed_line(width / 2.0, 0.0, width / 2.0, height, &NET_DASH, Color::NET)?;

    for paddle in [&state.left_paddle, &state.right_paddle] {
        renderer.fill_rect(paddle.x, paddle.y, paddle.width, paddle.height, Color::WHITE)?;
    }

    let ball = &state.ball;
    renderer.fill_circle(ball.pos.x, ball.pos.y, ball.radius, Color::WHITE)
}
