//! The player's snake
//!
//! Head is index 0, tail is the last segment. The snake moves one cell per
//! tick along its heading; a zero heading means it has not been steered yet.

use std::collections::VecDeque;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::geometry::Cell;

/// Cardinal steering command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    /// Movement per tick for a given cell size (screen y grows downward)
    pub fn vector(self, size: i32) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -size),
            Direction::Down => IVec2::new(0, size),
            Direction::Left => IVec2::new(-size, 0),
            Direction::Right => IVec2::new(size, 0),
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Direction matching a non-zero axis-aligned heading
    pub fn from_heading(heading: IVec2) -> Option<Self> {
        match (heading.x.signum(), heading.y.signum()) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Ordered body segments plus the current heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    body: VecDeque<Cell>,
    heading: IVec2,
}

impl Snake {
    /// Single idle segment at `head`
    pub fn new(head: Cell) -> Self {
        let mut body = VecDeque::with_capacity(16);
        body.push_back(head);
        Self {
            body,
            heading: IVec2::ZERO,
        }
    }

    /// Build a snake from explicit segments (head first)
    ///
    /// Returns `None` for an empty body, mixed or non-positive segment sizes,
    /// segments off the grid, or a heading that is not one cell along a
    /// single axis.
    pub fn from_segments(segments: impl IntoIterator<Item = Cell>, heading: IVec2) -> Option<Self> {
        let body: VecDeque<Cell> = segments.into_iter().collect();
        let size = body.front()?.size;
        if size <= 0 || body.iter().any(|c| c.size != size || !c.is_aligned()) {
            return None;
        }
        let idle = heading == IVec2::ZERO;
        let one_step = Direction::from_heading(heading).is_some_and(|d| d.vector(size) == heading);
        if !idle && !one_step {
            return None;
        }
        Some(Self { body, heading })
    }

    #[inline]
    pub fn head(&self) -> Cell {
        // Non-empty by construction
        self.body[0]
    }

    #[inline]
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Never true for a constructed snake; a deserialized one is unchecked
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn heading(&self) -> IVec2 {
        self.heading
    }

    pub fn direction(&self) -> Option<Direction> {
        Direction::from_heading(self.heading)
    }

    pub fn is_idle(&self) -> bool {
        self.heading == IVec2::ZERO
    }

    pub fn cell_size(&self) -> i32 {
        self.head().size
    }

    /// Whether a turn would pass the reversal guard
    ///
    /// Vertical turns need no vertical motion; horizontal turns need no
    /// horizontal motion. Turning into the current axis is always rejected.
    pub fn accepts(&self, dir: Direction) -> bool {
        if dir.is_vertical() {
            self.heading.y == 0
        } else {
            self.heading.x == 0
        }
    }

    /// Replace the heading if the reversal guard allows it
    pub fn set_heading(&mut self, dir: Direction) -> bool {
        if !self.accepts(dir) {
            return false;
        }
        self.heading = dir.vector(self.cell_size());
        true
    }

    /// Move one cell: new head in front, tail dropped
    ///
    /// An idle snake stays put, body included.
    pub fn advance(&mut self) {
        if self.is_idle() {
            return;
        }
        let new_head = self.head().offset(self.heading);
        self.body.push_front(new_head);
        self.body.pop_back();
    }

    /// Duplicate the tail; the copy trails behind once the snake moves
    ///
    /// On a single-segment snake the copy sits under the head until the next
    /// `advance` pulls them apart.
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.body.push_back(tail);
    }

    /// Whether any segment sits at `pos`
    pub fn occupies(&self, pos: IVec2) -> bool {
        self.body.iter().any(|c| c.pos == pos)
    }

    /// Positions of every segment, head first
    pub fn positions(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.body.iter().map(|c| c.pos)
    }
}
