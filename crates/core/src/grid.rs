//! Grid module - manages the 9x9 playfield
//!
//! Each cell is empty or filled with a block color. Uses a flat array for
//! cache locality and zero allocation. Coordinates are `(row, col)` with
//! row 0 at the top and col 0 at the left. Unlike falling-block games,
//! cleared lines empty in place; nothing shifts or falls.

use arrayvec::ArrayVec;

use block_blitz_types::{BlockColor, Cell, GRID_SIZE};

/// Total number of cells on the grid
const GRID_CELLS: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Row and column indices flagged full in a single resolution pass.
///
/// A cell at the intersection of a flagged row and flagged column is
/// cleared exactly once; `lines()` still counts both lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FullLines {
    pub rows: ArrayVec<u8, { GRID_SIZE as usize }>,
    pub cols: ArrayVec<u8, { GRID_SIZE as usize }>,
}

impl FullLines {
    /// Total number of flagged lines (rows plus columns).
    pub fn lines(&self) -> u8 {
        (self.rows.len() + self.cols.len()) as u8
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }
}

/// The playfield - 9x9 cells using flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * GRID_SIZE + col)
    cells: [Cell; GRID_CELLS],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_CELLS],
        }
    }

    /// Calculate flat index from (row, col) coordinates. Takes `i32` so
    /// callers can add offsets to extreme anchors without wrapping first.
    #[inline(always)]
    fn index(row: i32, col: i32) -> Option<usize> {
        if row < 0 || row >= GRID_SIZE as i32 || col < 0 || col >= GRID_SIZE as i32 {
            return None;
        }
        Some((row as usize) * (GRID_SIZE as usize) + (col as usize))
    }

    /// Side length of the square grid
    pub fn size(&self) -> u8 {
        GRID_SIZE
    }

    /// Get cell at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row as i32, col as i32).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row as i32, col as i32) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_empty_at(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_filled_at(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= GRID_SIZE as usize {
            return false;
        }
        let start = row * GRID_SIZE as usize;
        let end = start + GRID_SIZE as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Check if a column is completely filled
    pub fn is_col_full(&self, col: usize) -> bool {
        if col >= GRID_SIZE as usize {
            return false;
        }
        (0..GRID_SIZE as usize)
            .all(|row| self.cells[row * GRID_SIZE as usize + col].is_some())
    }

    /// Scan all rows and columns for full lines in a single pass over the
    /// current grid contents. Does not mutate.
    pub fn full_lines(&self) -> FullLines {
        let mut full = FullLines::default();
        for row in 0..GRID_SIZE {
            if self.is_row_full(row as usize) {
                full.rows.push(row);
            }
        }
        for col in 0..GRID_SIZE {
            if self.is_col_full(col as usize) {
                full.cols.push(col);
            }
        }
        full
    }

    /// Clear every cell in the flagged rows and columns. Intersections are
    /// cleared once; clearing an empty set is a no-op.
    pub fn clear_lines(&mut self, lines: &FullLines) {
        let size = GRID_SIZE as usize;
        for &row in &lines.rows {
            let start = row as usize * size;
            for cell in &mut self.cells[start..start + size] {
                *cell = None;
            }
        }
        for &col in &lines.cols {
            for row in 0..size {
                self.cells[row * size + col as usize] = None;
            }
        }
    }

    /// Stamp a block's occupied offsets onto the grid at the given anchor.
    /// Returns false (grid unchanged) if any target cell is out of bounds
    /// or already filled. Offset addition happens in `i32`, so anchors
    /// anywhere in the `i8` domain are safe.
    pub fn stamp(
        &mut self,
        offsets: &[(u8, u8)],
        anchor_row: i8,
        anchor_col: i8,
        color: BlockColor,
    ) -> bool {
        // First check every position, then write.
        for &(dr, dc) in offsets {
            match Self::index(anchor_row as i32 + dr as i32, anchor_col as i32 + dc as i32) {
                Some(idx) if self.cells[idx].is_none() => {}
                _ => return false,
            }
        }

        for &(dr, dc) in offsets {
            if let Some(idx) =
                Self::index(anchor_row as i32 + dr as i32, anchor_col as i32 + dc as i32)
            {
                self.cells[idx] = Some(color);
            }
        }

        true
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write the grid into a `u8` matrix (0 = empty, color index + 1 = filled)
    pub fn write_u8_grid(&self, out: &mut [[u8; GRID_SIZE as usize]; GRID_SIZE as usize]) {
        let size = GRID_SIZE as usize;
        for row in 0..size {
            for col in 0..size {
                out[row][col] = match self.cells[row * size + col] {
                    Some(color) => color.index() + 1,
                    None => 0,
                };
            }
        }
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Create from a 2D vector for testing (converts to flat array)
    #[cfg(test)]
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        assert_eq!(cells_2d.len(), GRID_SIZE as usize);
        assert!(cells_2d.iter().all(|row| row.len() == GRID_SIZE as usize));

        let mut flat = [None; GRID_CELLS];
        for (row, cells) in cells_2d.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                flat[row * GRID_SIZE as usize + col] = *cell;
            }
        }
        Self { cells: flat }
    }

    /// Convert to 2D vector for testing/display
    #[cfg(test)]
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        let size = GRID_SIZE as usize;
        (0..size)
            .map(|row| {
                let start = row * size;
                self.cells[start..start + size].to_vec()
            })
            .collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
