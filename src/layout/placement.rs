use crate::error::{Error, Result};
use crate::geometry::Point;

use super::grid::{Cell, Grid};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// Slot `i` of the window takes the cell held by slot `i + 1`.
    Left,
    /// Slot `i` of the window takes the cell held by slot `i - 1`.
    Right,
}

impl Rotation {
    pub fn inverse(&self) -> Rotation {
        match self {
            Rotation::Left => Rotation::Right,
            Rotation::Right => Rotation::Left,
        }
    }
}

/// Permutation assigning a grid cell to every slot.
///
/// Slots `0..node_count` are the compact node indices, the remaining slots are
/// padding and mark the free cells of the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    grid: Grid,
    node_count: usize,
    cells: Vec<Cell>,
}

impl Placement {
    /// Places slot `i` on cell `i`.
    pub fn identity(grid: Grid, node_count: usize) -> Result<Self> {
        Self::check_capacity(grid, node_count)?;
        Ok(Placement {
            grid,
            node_count,
            cells: grid.cells().collect(),
        })
    }

    pub fn from_cells(grid: Grid, node_count: usize, cells: Vec<Cell>) -> Result<Self> {
        Self::check_capacity(grid, node_count)?;
        let placement = Placement {
            grid,
            node_count,
            cells,
        };
        if !placement.is_permutation() {
            return Err(Error::NotAPermutation {
                len: placement.cells.len(),
            });
        }
        Ok(placement)
    }

    fn check_capacity(grid: Grid, node_count: usize) -> Result<()> {
        if grid.size() < node_count {
            return Err(Error::GridTooSmall {
                width: grid.width(),
                height: grid.height(),
                nodes: node_count,
            });
        }
        Ok(())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn slot_count(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, slot: usize) -> Cell {
        self.cells[slot]
    }

    pub fn point(&self, slot: usize) -> Point {
        self.grid.cell_to_point(self.cells[slot])
    }

    pub fn is_padding(&self, slot: usize) -> bool {
        slot >= self.node_count
    }

    /// Cyclically shifts the cells of the window slots by one position.
    ///
    /// Window slots must be distinct. A left rotation followed by a right
    /// rotation over the same window restores the previous assignment.
    pub fn rotate(&mut self, window: &[usize], rotation: Rotation) {
        let Some((&first, rest)) = window.split_first() else {
            return;
        };
        if rest.is_empty() {
            return;
        }
        debug_assert!(window.iter().all(|&slot| slot < self.cells.len()));

        match rotation {
            Rotation::Left => {
                let head = self.cells[first];
                for pair in window.windows(2) {
                    self.cells[pair[0]] = self.cells[pair[1]];
                }
                self.cells[window[window.len() - 1]] = head;
            }
            Rotation::Right => {
                let tail = self.cells[window[window.len() - 1]];
                for pair in window.windows(2).rev() {
                    self.cells[pair[1]] = self.cells[pair[0]];
                }
                self.cells[first] = tail;
            }
        }
    }

    pub fn is_permutation(&self) -> bool {
        if self.cells.len() != self.grid.size() {
            return false;
        }
        let mut seen = vec![false; self.cells.len()];
        for &cell in &self.cells {
            let index = cell.0 as usize;
            if index >= seen.len() || seen[index] {
                return false;
            }
            seen[index] = true;
        }
        true
    }

    pub fn is_identity(&self) -> bool {
        self.cells.iter().enumerate().all(|(slot, cell)| cell.0 as usize == slot)
    }

    /// Inverse permutation: the slot occupying every cell.
    pub fn slots_by_cell(&self) -> Vec<usize> {
        let mut slots = vec![0; self.cells.len()];
        for (slot, &cell) in self.cells.iter().enumerate() {
            slots[cell] = slot;
        }
        slots
    }
}
