/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Surface (used when the host does not supply one)
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_MARGIN: f32 = 20.0; // gap to the nearest vertical edge
    pub const PADDLE_SPEED: f32 = 5.0; // units per frame

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_INIT: f32 = 5.0; // units per frame
    pub const BOUNCE_JITTER: f32 = 1.0; // vy += Uniform(-1, 1) on paddle hit

    // AI
    pub const AI_DEAD_ZONE: f32 = 8.0;

    // Scheduling
    pub const FRAME_INTERVAL: f32 = 1.0 / 60.0; // seconds, fixed-interval hosts only
}
