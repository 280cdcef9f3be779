//! Grid geometry: cells, rectangles and the play field
//!
//! Everything here is a plain value with no state. Coordinates are pixels on
//! the field, always a multiple of the cell size.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// One grid-aligned square: a snake segment or the apple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub pos: IVec2,
    pub size: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32, size: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size,
        }
    }

    pub const fn at(pos: IVec2, size: i32) -> Self {
        Self { pos, size }
    }

    /// Same size, moved by `delta`
    #[inline]
    pub fn offset(&self, delta: IVec2) -> Self {
        Self::at(self.pos + delta, self.size)
    }

    /// Whether both coordinates are whole multiples of the size
    pub fn is_aligned(&self) -> bool {
        self.size > 0 && self.pos.x.rem_euclid(self.size) == 0 && self.pos.y.rem_euclid(self.size) == 0
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        rect_of(self)
    }
}

/// Axis-aligned rectangle in field pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

/// Bounding rectangle of a cell
#[inline]
pub fn rect_of(cell: &Cell) -> Rect {
    Rect {
        top: cell.pos.y,
        right: cell.pos.x + cell.size,
        bottom: cell.pos.y + cell.size,
        left: cell.pos.x,
    }
}

/// Open-interval overlap test: rectangles that only share an edge do not intersect
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.right > b.left && a.left < b.right && a.top < b.bottom && a.bottom > b.top
}

/// Play-field bounds, fixed for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
}

impl Default for Field {
    fn default() -> Self {
        use crate::consts::{CELL_SIZE, FIELD_HEIGHT, FIELD_WIDTH};
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            cell_size: CELL_SIZE,
        }
    }
}

impl Field {
    /// Build a field, rejecting sizes that are not whole multiples of the cell
    pub fn new(width: i32, height: i32, cell_size: i32) -> Result<Self> {
        let field = Self {
            width,
            height,
            cell_size,
        };
        field.validate()?;
        Ok(field)
    }

    pub fn validate(&self) -> Result<()> {
        let ok = self.cell_size > 0
            && self.width >= self.cell_size
            && self.height >= self.cell_size
            && self.width % self.cell_size == 0
            && self.height % self.cell_size == 0;
        if ok {
            Ok(())
        } else {
            Err(SimError::InvalidField {
                width: self.width,
                height: self.height,
                cell_size: self.cell_size,
            })
        }
    }

    #[inline]
    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// Total number of cells on the field
    pub fn capacity(&self) -> usize {
        (self.columns() as usize) * (self.rows() as usize)
    }

    /// Whether a cell lies entirely inside the field
    pub fn contains(&self, cell: &Cell) -> bool {
        let r = cell.rect();
        r.top >= 0 && r.left >= 0 && r.bottom <= self.height && r.right <= self.width
    }

    /// Whether a cell is one of this field's grid cells
    pub fn fits(&self, cell: &Cell) -> bool {
        cell.size == self.cell_size && cell.is_aligned() && self.contains(cell)
    }

    /// Pixel position of the cell at grid column/row
    #[inline]
    pub fn cell_at(&self, column: i32, row: i32) -> Cell {
        Cell::new(column * self.cell_size, row * self.cell_size, self.cell_size)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows()).flat_map(move |row| (0..self.columns()).map(move |col| self.cell_at(col, row)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_of() {
        let r = rect_of(&Cell::new(40, 60, 20));
        assert_eq!(
            r,
            Rect {
                top: 60,
                right: 60,
                bottom: 80,
                left: 40
            }
        );
    }

    #[test]
    fn test_intersects_overlap() {
        let a = Cell::new(20, 20, 20).rect();
        assert!(intersects(&a, &a));
        let b = Cell::new(30, 30, 20).rect();
        assert!(intersects(&a, &b));
        assert!(intersects(&b, &a));
    }

    #[test]
    fn test_edge_touching_is_not_a_hit() {
        let a = Cell::new(0, 0, 20).rect();
        let right = Cell::new(20, 0, 20).rect();
        let below = Cell::new(0, 20, 20).rect();
        let corner = Cell::new(20, 20, 20).rect();
        assert!(!intersects(&a, &right));
        assert!(!intersects(&a, &below));
        assert!(!intersects(&a, &corner));
    }

    #[test]
    fn test_field_validation() {
        assert!(Field::new(400, 400, 20).is_ok());
        assert!(Field::new(410, 400, 20).is_err());
        assert!(Field::new(400, 400, 0).is_err());
        assert!(Field::new(0, 400, 20).is_err());
    }

    #[test]
    fn test_field_contains() {
        let field = Field::new(100, 60, 20).unwrap();
        assert!(field.contains(&Cell::new(0, 0, 20)));
        assert!(field.contains(&Cell::new(80, 40, 20)));
        assert!(!field.contains(&Cell::new(100, 0, 20)));
        assert!(!field.contains(&Cell::new(-20, 0, 20)));
        assert!(!field.contains(&Cell::new(0, 60, 20)));
    }

    #[test]
    fn test_cell_alignment() {
        assert!(Cell::new(40, 60, 20).is_aligned());
        assert!(Cell::new(-20, 0, 20).is_aligned());
        assert!(!Cell::new(7, 3, 20).is_aligned());
        assert!(!Cell::new(0, 0, 0).is_aligned());
    }

    #[test]
    fn test_field_fits() {
        let field = Field::new(100, 60, 20).unwrap();
        assert!(field.fits(&Cell::new(80, 40, 20)));
        assert!(!field.fits(&Cell::new(80, 40, 10)));
        assert!(!field.fits(&Cell::new(70, 40, 20)));
        assert!(!field.fits(&Cell::new(100, 40, 20)));
    }

    #[test]
    fn test_field_cells() {
        let field = Field::new(60, 40, 20).unwrap();
        assert_eq!(field.capacity(), 6);
        let cells: Vec<_> = field.cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Cell::new(0, 0, 20));
        assert_eq!(cells[5], Cell::new(40, 20, 20));
    }
}
