//! Direction input handling
//!
//! A single pending-direction slot sits between raw input events and the
//! tick loop: events overwrite it (last accepted write wins, no queue) and
//! the engine reads it once per tick. One writer, one reader, same thread.
//!
//! A new direction is accepted only if it changes the axis of movement, so
//! the snake can never reverse into itself in one input. The check runs
//! against the pending value, matching how the reference behaves: two quick
//! orthogonal inputs inside one tick interval can chain into a reversal.

use glam::Vec2;

use crate::consts::SWIPE_THRESHOLD;
use crate::sim::Direction;

/// Maps raw directional events to the pending movement direction
#[derive(Debug, Clone)]
pub struct InputDirector {
    pending: Direction,
}

impl Default for InputDirector {
    fn default() -> Self {
        Self::new(Direction::Right)
    }
}

impl InputDirector {
    pub fn new(initial: Direction) -> Self {
        Self { pending: initial }
    }

    /// Direction the next tick will move in
    #[inline]
    pub fn pending(&self) -> Direction {
        self.pending
    }

    /// Overwrite the slot unconditionally (level start, reset)
    pub fn reset(&mut self, direction: Direction) {
        self.pending = direction;
    }

    /// Feed a key press; returns whether it was accepted
    pub fn press(&mut self, direction: Direction) -> bool {
        if direction.same_axis(self.pending) {
            return false;
        }
        self.pending = direction;
        true
    }

    /// Feed a swipe gesture from touch start to touch end positions
    /// (display pixels); returns the accepted direction, if any
    ///
    /// The dominant axis is whichever has the larger absolute displacement;
    /// gestures under [`SWIPE_THRESHOLD`] on that axis are ignored.
    pub fn swipe(&mut self, start: Vec2, end: Vec2) -> Option<Direction> {
        let delta = end - start;

        let direction = if delta.x.abs() > delta.y.abs() {
            if delta.x > SWIPE_THRESHOLD {
                Direction::Right
            } else if delta.x < -SWIPE_THRESHOLD {
                Direction::Left
            } else {
                return None;
            }
        } else if delta.y > SWIPE_THRESHOLD {
            Direction::Down
        } else if delta.y < -SWIPE_THRESHOLD {
            Direction::Up
        } else {
            return None;
        };

        self.press(direction).then_some(direction)
    }
}
