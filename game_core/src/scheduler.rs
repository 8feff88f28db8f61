//! Frame driving: one simulation + render cycle per display refresh

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::trace;

use crate::input::{apply_pointer, PointerSlot};
use crate::render::{draw_frame, RenderAdapter};
use crate::{step, Config, ConfigError, Events, GameState, RandomSource};

/// Shared stop flag for a running frame loop
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Owns the game and runs it one frame at a time
pub struct FrameScheduler<G: RandomSource> {
    pub state: GameState,
    pub events: Events,
    rng: G,
    pointer: PointerSlot,
    frame: u64,
}

impl<G: RandomSource> FrameScheduler<G> {
    pub fn new(config: Config, mut rng: G, pointer: PointerSlot) -> Result<Self, ConfigError> {
        let state = GameState::new(config, &mut rng)?;
        Ok(Self {
            state,
            events: Events::new(),
            rng,
            pointer,
            frame: 0,
        })
    }

    /// Frames run so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Run one frame: latest pointer, physics, AI, then draw
    pub fn tick<R: RenderAdapter>(&mut self, renderer: &mut R) -> Result<(), R::Error> {
        if let Some(pointer_y) = self.pointer.take() {
            let height = self.state.config.surface_height;
            apply_pointer(&mut self.state.left_paddle, pointer_y, height);
        }

        step(&mut self.state, &mut self.rng, &mut self.events);
        self.frame += 1;
        trace!(
            "frame {}: ball at ({:.1}, {:.1})",
            self.frame,
            self.state.ball.pos.x,
            self.state.ball.pos.y
        );

        draw_frame(&self.state, renderer)
    }

    /// Tick at the default 60 Hz cadence until `token` is cancelled
    #[cfg(not(target_arch = "wasm32"))]
    pub fn run<R: RenderAdapter>(
        &mut self,
        renderer: &mut R,
        token: &CancelToken,
    ) -> Result<u64, R::Error> {
        let interval = std::time::Duration::from_secs_f32(crate::Params::FRAME_INTERVAL);
        self.run_fixed_interval(renderer, interval, token)
    }

    /// Tick at a fixed cadence until `token` is cancelled.
    ///
    /// For hosts without a display-refresh callback. Returns the number of
    /// frames run by this call.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn run_fixed_interval<R: RenderAdapter>(
        &mut self,
        renderer: &mut R,
        interval: std::time::Duration,
        token: &CancelToken,
    ) -> Result<u64, R::Error> {
        use std::time::Instant;

        log::info!("frame loop started, interval {:?}", interval);
        let mut frames = 0;
        let mut deadline = Instant::now();
        while !token.is_cancelled() {
            self.tick(renderer)?;
            frames += 1;

            deadline += interval;
            let now = Instant::now();
            if deadline > now {
                std::thread::sleep(deadline - now);
            } else {
                // Running behind; don't try to catch up
                deadline = now;
            }
        }
        log::info!("frame loop stopped after {} frames", frames);
        Ok(frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Color;
    use crate::GameRng;
    use std::time::Duration;

    /// Counts frames and cancels after a fixed number
    struct StopAfter {
        remaining: u32,
        token: CancelToken,
        balls: Vec<glam::Vec2>,
    }

    impl RenderAdapter for StopAfter {
        type Error = String;

        fn clear(&mut self, _w: f32, _h: f32) -> Result<(), String> {
            self.remaining -= 1;
            if self.remaining == 0 {
                self.token.cancel();
            }
            Ok(())
        }

        fn fill_rect(&mut self, _: f32, _: f32, _: f32, _: f32, _: Color) -> Result<(), String> {
            Ok(())
        }

        fn fill_circle(&mut self, x: f32, y: f32, _r: f32, _c: Color) -> Result<(), String> {
            self.balls.push(glam::Vec2::new(x, y));
            Ok(())
        }

        fn draw_dashed_line(
            &mut self,
            _: f32,
            _: f32,
            _: f32,
            _: f32,
            _: &[f32],
            _: Color,
        ) -> Result<(), String> {
            Ok(())
        }
    }

    struct Broken;

    impl RenderAdapter for Broken {
        type Error = String;

        fn clear(&mut self, _w: f32, _h: f32) -> Result<(), String> {
            Err("surface lost".to_string())
        }

        fn fill_rect(&mut self, _: f32, _: f32, _: f32, _: f32, _: Color) -> Result<(), String> {
            Ok(())
        }

        fn fill_circle(&mut self, _: f32, _: f32, _: f32, _: Color) -> Result<(), String> {
            Ok(())
        }

        fn draw_dashed_line(
            &mut self,
            _: f32,
            _: f32,
            _: f32,
            _: f32,
            _: &[f32],
            _: Color,
        ) -> Result<(), String> {
            Ok(())
        }
    }

    fn scheduler(pointer: PointerSlot) -> FrameScheduler<GameRng> {
        FrameScheduler::new(Config::new(), GameRng::new(8), pointer).unwrap()
    }

    #[test]
    fn test_cancel_token_shared_between_clones() {
        let token = CancelToken::new();
        let other = token.clone();
        assert!(!other.is_cancelled());
        token.cancel();
        assert!(other.is_cancelled());
    }

    #[test]
    fn test_tick_applies_pointer_before_physics() {
        let pointer = PointerSlot::new();
        let mut scheduler = scheduler(pointer.clone());
        let token = CancelToken::new();
        let mut renderer = StopAfter {
            remaining: 10,
            token,
            balls: Vec::new(),
        };

        pointer.set(100.0);
        scheduler.tick(&mut renderer).unwrap();

        assert_eq!(scheduler.state.left_paddle.y, 60.0);
        assert_eq!(scheduler.frame(), 1);
        assert_eq!(pointer.take(), None, "Pointer value is consumed");
    }

    #[test]
    fn test_fixed_interval_runs_until_cancelled() {
        let mut scheduler = scheduler(PointerSlot::new());
        let token = CancelToken::new();
        let mut renderer = StopAfter {
            remaining: 5,
            token: token.clone(),
            balls: Vec::new(),
        };

        let frames = scheduler
            .run_fixed_interval(&mut renderer, Duration::ZERO, &token)
            .unwrap();

        assert_eq!(frames, 5);
        assert_eq!(scheduler.frame(), 5);
        assert_eq!(renderer.balls.len(), 5, "One ball drawn per frame");
    }

    #[test]
    fn test_default_cadence_paces_frames() {
        let mut scheduler = scheduler(PointerSlot::new());
        let token = CancelToken::new();
        let mut renderer = StopAfter {
            remaining: 3,
            token: token.clone(),
            balls: Vec::new(),
        };

        let started = std::time::Instant::now();
        let frames = scheduler.run(&mut renderer, &token).unwrap();

        assert_eq!(frames, 3);
        assert!(
            started.elapsed() >= Duration::from_millis(40),
            "Three frames take about three refresh intervals"
        );
    }

    #[test]
    fn test_cancelled_token_runs_no_frames() {
        let mut scheduler = scheduler(PointerSlot::new());
        let token = CancelToken::new();
        token.cancel();
        let mut renderer = StopAfter {
            remaining: 1,
            token: token.clone(),
            balls: Vec::new(),
        };

        let frames = scheduler
            .run_fixed_interval(&mut renderer, Duration::from_millis(1), &token)
            .unwrap();

        assert_eq!(frames, 0);
    }

    #[test]
    fn test_render_error_stops_loop() {
        let mut scheduler = scheduler(PointerSlot::new());
        let token = CancelToken::new();

        let result = scheduler.run_fixed_interval(&mut Broken, Duration::ZERO, &token);

        assert_eq!(result, Err("surface lost".to_string()));
        assert_eq!(scheduler.frame(), 1, "The failing frame was simulated");
    }
}
