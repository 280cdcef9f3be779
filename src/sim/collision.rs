//! Collision checks
//!
//! Two checks run every tick after the snake moves: did the head reach the
//! apple, and did the head leave the field or run into the body.

use serde::{Deserialize, Serialize};

use super::apple::Apple;
use super::geometry::{Cell, Field, intersects};
use super::snake::Snake;

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminalCause {
    /// Head left the field
    Wall,
    /// Head landed on its own body
    SelfCollision,
    /// No free cell left for the apple
    BoardFull,
}

impl TerminalCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminalCause::Wall => "wall",
            TerminalCause::SelfCollision => "self collision",
            TerminalCause::BoardFull => "board full",
        }
    }
}

/// Whether the head overlaps the apple (equal-size rectangles, open interval)
#[inline]
pub fn check_acquisition(head: &Cell, apple: &Apple) -> bool {
    let target = Cell::at(apple.position(), head.size);
    intersects(&head.rect(), &target.rect())
}

/// First index checked for self-collision.
///
/// Segment 1 trails directly behind the head and can only be reached by a
/// reversal, which the heading guard rejects.
pub const SELF_COLLISION_START: usize = 2;

/// Terminal condition for the snake's current position, if any
pub fn terminal_cause(snake: &Snake, field: &Field) -> Option<TerminalCause> {
    let head = snake.head();
    let r = head.rect();
    if r.top < 0 || r.left < 0 || r.bottom > field.height || r.right > field.width {
        return Some(TerminalCause::Wall);
    }

    let bitten = snake
        .body()
        .iter()
        .skip(SELF_COLLISION_START)
        .any(|c| c.pos == head.pos);
    bitten.then_some(TerminalCause::SelfCollision)
}

#[inline]
pub fn check_terminal(snake: &Snake, field: &Field) -> bool {
    terminal_cause(snake, field).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    fn field() -> Field {
        Field::new(200, 100, 20).unwrap()
    }

    fn single(x: i32, y: i32) -> Snake {
        Snake::from_segments([Cell::new(x, y, 20)], IVec2::ZERO).unwrap()
    }

    #[test]
    fn test_acquisition_exact_overlap() {
        let head = Cell::new(40, 60, 20);
        assert!(check_acquisition(&head, &Apple::at(Cell::new(40, 60, 20))));
    }

    #[test]
    fn test_acquisition_adjacent_misses() {
        let head = Cell::new(40, 60, 20);
        assert!(!check_acquisition(&head, &Apple::at(Cell::new(60, 60, 20))));
        assert!(!check_acquisition(&head, &Apple::at(Cell::new(40, 40, 20))));
    }

    #[test]
    fn test_terminal_boundary() {
        let field = field();
        assert_eq!(terminal_cause(&single(-20, 0), &field), Some(TerminalCause::Wall));
        assert_eq!(terminal_cause(&single(200, 0), &field), Some(TerminalCause::Wall));
        assert_eq!(terminal_cause(&single(0, -20), &field), Some(TerminalCause::Wall));
        assert_eq!(terminal_cause(&single(0, 100), &field), Some(TerminalCause::Wall));
    }

    #[test]
    fn test_inside_is_not_terminal() {
        let field = field();
        assert!(!check_terminal(&single(0, 0), &field));
        assert!(!check_terminal(&single(180, 80), &field));
        assert!(!check_terminal(&single(100, 40), &field));
    }

    #[test]
    fn test_self_collision_from_index_two() {
        let field = field();
        // Head on the segment at index 3
        let cells = [
            Cell::new(40, 40, 20),
            Cell::new(60, 40, 20),
            Cell::new(60, 60, 20),
            Cell::new(40, 40, 20),
        ];
        let snake = Snake::from_segments(cells, IVec2::new(-20, 0)).unwrap();
        assert_eq!(terminal_cause(&snake, &field), Some(TerminalCause::SelfCollision));
    }

    #[test]
    fn test_neck_is_not_checked() {
        let field = field();
        let cells = [Cell::new(40, 40, 20), Cell::new(40, 40, 20)];
        let snake = Snake::from_segments(cells, IVec2::ZERO).unwrap();
        assert!(!check_terminal(&snake, &field));
    }

    #[test]
    fn test_grown_tail_duplicate_is_not_a_bite() {
        let field = field();
        let cells = [
            Cell::new(80, 40, 20),
            Cell::new(60, 40, 20),
            Cell::new(40, 40, 20),
            Cell::new(40, 40, 20),
        ];
        let snake = Snake::from_segments(cells, IVec2::new(20, 0)).unwrap();
        assert!(!check_terminal(&snake, &field));
    }
}
