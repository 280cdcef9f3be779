//! Input arbitration
//!
//! Front-ends forward raw key presses and pointer clicks here. A command is
//! checked against the heading the snake is actually moving in; accepted
//! commands overwrite the single pending slot, rejected ones are dropped.
//! The pending command is latched into the next tick and cleared.

use glam::Vec2;

use super::geometry::{Cell, Field};
use super::snake::{Direction, Snake};
use super::tick::TickInput;

/// Direction for a `KeyboardEvent.key`-style name (arrows and WASD)
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Direction::Up),
        "ArrowDown" | "s" | "S" => Some(Direction::Down),
        "ArrowLeft" | "a" | "A" => Some(Direction::Left),
        "ArrowRight" | "d" | "D" => Some(Direction::Right),
        _ => None,
    }
}

/// Directions a click could mean, in priority order (up, right, down, left)
///
/// `pointer` is relative to the field's top-left corner. A candidate is only
/// offered when the pointer lies strictly inside the field on the other axis.
pub fn pointer_candidates(head: &Cell, field: &Field, pointer: Vec2) -> Vec<Direction> {
    let head_x = head.pos.x as f32;
    let head_y = head.pos.y as f32;
    let in_columns = pointer.x > 0.0 && pointer.x < field.width as f32;
    let in_rows = pointer.y > 0.0 && pointer.y < field.height as f32;

    Direction::ALL
        .into_iter()
        .filter(|dir| match dir {
            Direction::Up => in_columns && pointer.y < head_y,
            Direction::Right => in_rows && pointer.x > head_x,
            Direction::Down => in_columns && pointer.y > head_y,
            Direction::Left => in_rows && pointer.x < head_x,
        })
        .collect()
}

/// Holds at most one pending heading between ticks
#[derive(Debug, Clone, Default)]
pub struct InputArbiter {
    pending: Option<Direction>,
}

impl InputArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a direction if the snake may turn that way
    pub fn submit(&mut self, snake: &Snake, dir: Direction) -> bool {
        if !snake.accepts(dir) {
            log::debug!("Dropped {:?}: reversal", dir);
            return false;
        }
        self.pending = Some(dir);
        true
    }

    /// Queue a direction from a key name; unknown keys are ignored
    pub fn submit_key(&mut self, snake: &Snake, key: &str) -> bool {
        match direction_for_key(key) {
            Some(dir) => self.submit(snake, dir),
            None => false,
        }
    }

    /// Queue the first click candidate the snake accepts
    pub fn submit_pointer(&mut self, snake: &Snake, field: &Field, pointer: Vec2) -> bool {
        let candidate = pointer_candidates(&snake.head(), field, pointer)
            .into_iter()
            .find(|&dir| snake.accepts(dir));
        match candidate {
            Some(dir) => self.submit(snake, dir),
            None => false,
        }
    }

    pub fn pending(&self) -> Option<Direction> {
        self.pending
    }

    /// Hand the pending command to the next tick and clear it
    pub fn latch(&mut self) -> TickInput {
        TickInput {
            direction: self.pending.take(),
        }
    }
}
