use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};
use crate::geometry::Point;

/// Grid position encoded as `y * width + x`.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default, Debug)]
pub struct Cell(pub u32);

impl<T> Index<Cell> for Vec<T> {
    type Output = T;

    fn index(&self, index: Cell) -> &Self::Output {
        &self[index.0 as usize]
    }
}

impl<T> IndexMut<Cell> for Vec<T> {
    fn index_mut(&mut self, index: Cell) -> &mut Self::Output {
        &mut self[index.0 as usize]
    }
}

#[derive(Clone, Copy, Hash, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        // coordinates are decoded into i32 points
        if width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(Error::GridTooLarge { width, height });
        }
        match width.checked_mul(height) {
            Some(size) if size <= u32::MAX as usize => Ok(Grid { width, height }),
            _ => Err(Error::GridTooLarge { width, height }),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> usize {
        self.width * self.height
    }

    fn is_valid_cell(&self, cell: Cell) -> bool {
        (cell.0 as usize) < self.size()
    }

    pub fn cell_to_coords(&self, cell: Cell) -> Option<(usize, usize)> {
        if !self.is_valid_cell(cell) {
            return None;
        }
        let x = cell.0 as usize % self.width;
        let y = cell.0 as usize / self.width;
        Some((x, y))
    }

    pub fn coords_to_cell(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(Cell((y * self.width + x) as u32))
    }

    /// Decodes a cell without bounds checks, for the cost hot path.
    pub fn cell_to_point(&self, cell: Cell) -> Point {
        let width = self.width as u32;
        Point {
            x: (cell.0 % width) as i32,
            y: (cell.0 / width) as i32,
        }
    }

    pub fn point_to_cell(&self, point: &Point) -> Option<Cell> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        self.coords_to_cell(point.x as usize, point.y as usize)
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        (0..self.size() as u32).map(Cell)
    }
}
