//! Board structure: nine cells in row-major order

use std::fmt;
use std::str::FromStr;

use super::{Cell, TOTAL_CELLS};
use crate::error::EngineError;

/// Game board
///
/// `Board` is `Copy`, so handing a snapshot to the engine never lets the
/// engine touch the caller's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; TOTAL_CELLS],
        }
    }

    /// Build a board from a slice of exactly nine cells.
    pub fn from_cells(cells: &[Cell]) -> Result<Self, EngineError> {
        let cells: [Cell; TOTAL_CELLS] = cells.try_into().map_err(|_| {
            EngineError::invalid_input(format!(
                "board needs {TOTAL_CELLS} cells, got {}",
                cells.len()
            ))
        })?;
        Ok(Self { cells })
    }

    #[inline]
    pub fn cells(&self) -> &[Cell; TOTAL_CELLS] {
        &self.cells
    }

    /// Get cell at index
    #[inline]
    pub fn get(&self, idx: usize) -> Cell {
        self.cells[idx]
    }

    /// Check if index is empty
    #[inline]
    pub fn is_empty(&self, idx: usize) -> bool {
        self.cells[idx].is_empty()
    }

    /// Overwrite a cell. Use `Cell::Empty` to clear it.
    #[inline]
    pub fn set(&mut self, idx: usize, cell: Cell) {
        self.cells[idx] = cell;
    }

    /// Place a mark on an empty cell, checking bounds and occupancy
    pub fn place(&mut self, idx: usize, mark: Cell) -> Result<(), EngineError> {
        if mark.is_empty() {
            return Err(EngineError::invalid_input("cannot place an empty mark"));
        }
        match self.cells.get(idx) {
            None => Err(EngineError::invalid_input(format!(
                "cell index {idx} out of range"
            ))),
            Some(cell) if !cell.is_empty() => Err(EngineError::invalid_input(format!(
                "cell {idx} is already taken by {cell}"
            ))),
            Some(_) => {
                self.cells[idx] = mark;
                Ok(())
            }
        }
    }

    /// Copy of this board with `mark` at `idx`
    #[inline]
    pub fn with(&self, idx: usize, mark: Cell) -> Self {
        let mut next = *self;
        next.cells[idx] = mark;
        next
    }

    /// Indices of empty cells in ascending order
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(idx, _)| idx)
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of marks on the board
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }
}

impl FromStr for Board {
    type Err = EngineError;

    /// Parse nine cell characters (`X`, `O`, `.`/`_`/`-`). Whitespace and `/`
    /// row separators are ignored, so `"XO./.X./..O"` is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .map(Cell::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cells(&cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(super::BOARD_SIZE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in chunk {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}
