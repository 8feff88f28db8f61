//! Pointer input for the left paddle

use std::cell::Cell;
use std::rc::Rc;

use crate::Paddle;

/// Latest pointer position reported by the host.
///
/// Holds a single value: every new event overwrites the previous one, and the
/// frame loop takes whatever is there once per frame. Clones share the slot,
/// so the host's event callback and the scheduler can each hold one. The slot
/// is single-threaded; hosts that deliver input from another thread need
/// their own synchronisation.
#[derive(Debug, Clone, Default)]
pub struct PointerSlot {
    latest: Rc<Cell<Option<f32>>>,
}

impl PointerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer y in surface coordinates
    pub fn set(&self, y: f32) {
        self.latest.set(Some(y));
    }

    /// Take the pending position, leaving the slot empty
    pub fn take(&self) -> Option<f32> {
        self.latest.take()
    }
}

/// Center the paddle on the pointer, then clamp
pub fn apply_pointer(paddle: &mut Paddle, pointer_y: f32, surface_height: f32) {
    paddle.y = pointer_y - paddle.height / 2.0;
    paddle.clamp(surface_height);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_keeps_only_latest() {
        let slot = PointerSlot::new();
        slot.set(10.0);
        slot.set(20.0);
        slot.set(30.0);
        assert_eq!(slot.take(), Some(30.0));
        assert_eq!(slot.take(), None, "Slot is empty after take");
    }

    #[test]
    fn test_clones_share_slot() {
        let writer = PointerSlot::new();
        let reader = writer.clone();
        writer.set(42.0);
        assert_eq!(reader.take(), Some(42.0));
        assert_eq!(writer.take(), None);
    }

    #[test]
    fn test_apply_pointer_centers_paddle() {
        let mut paddle = Paddle::new(20.0, 0.0, 12.0, 80.0);
        apply_pointer(&mut paddle, 200.0, 400.0);
        assert_eq!(paddle.y, 160.0);
    }

    #[test]
    fn test_apply_pointer_clamps() {
        let mut paddle = Paddle::new(20.0, 100.0, 12.0, 80.0);
        apply_pointer(&mut paddle, 5.0, 400.0);
        assert_eq!(paddle.y, 0.0, "Pointer near top pins paddle to top");

        apply_pointer(&mut paddle, 399.0, 400.0);
        assert_eq!(paddle.y, 320.0, "Pointer near bottom pins paddle to bottom");

        apply_pointer(&mut paddle, -250.0, 400.0);
        assert_eq!(paddle.y, 0.0, "Pointer outside the surface is clamped");
    }
}
