//! Apple placement
//!
//! The apple always sits on a free cell. Placement draws random cells a
//! bounded number of times, then falls back to picking among the cells that
//! are actually free so a crowded board never stalls the tick.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::{Cell, Field};
use crate::error::{Result, SimError};

/// Random draws before scanning the board for free cells
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 64;

/// The single target on the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Apple {
    cell: Cell,
}

impl Apple {
    pub fn at(cell: Cell) -> Self {
        Self { cell }
    }

    #[inline]
    pub fn cell(&self) -> Cell {
        self.cell
    }

    #[inline]
    pub fn position(&self) -> IVec2 {
        self.cell.pos
    }

    /// A new apple on a uniformly random free cell
    ///
    /// `occupied` reports whether a position is taken (normally the snake body).
    pub fn randomize<R, F>(rng: &mut R, field: &Field, occupied: F) -> Result<Self>
    where
        R: Rng,
        F: Fn(IVec2) -> bool,
    {
        let (cols, rows) = (field.columns(), field.rows());

        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let cell = field.cell_at(rng.random_range(0..cols), rng.random_range(0..rows));
            if !occupied(cell.pos) {
                return Ok(Self::at(cell));
            }
        }

        let free: Vec<Cell> = field.cells().filter(|c| !occupied(c.pos)).collect();
        if free.is_empty() {
            return Err(SimError::PlacementExhausted {
                attempts: MAX_PLACEMENT_ATTEMPTS,
                occupied: field.capacity(),
                capacity: field.capacity(),
            });
        }

        log::warn!(
            "Apple placement fell back to scan: {} free of {} cells",
            free.len(),
            field.capacity()
        );
        let cell = free[rng.random_range(0..free.len())];
        Ok(Self::at(cell))
    }
}
