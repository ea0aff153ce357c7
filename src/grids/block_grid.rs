use crate::grids::{CellKind, Dimensions};

#[derive(Debug, Clone, PartialEq)]
pub struct BlockGrid {
    pub dims: Dimensions,

    pub cells: Vec<CellKind>,
}

impl BlockGrid {
    /// Creates a grid of solid wall.
    pub fn with_dims(rows: usize, columns: usize) -> Self {
        Self {
            cells: vec![CellKind::Wall; rows * columns],
            dims: Dimensions { rows, columns },
        }
    }

    #[inline]
    fn index_of(&self, row: usize, column: usize) -> usize {
        (self.dims.columns * row) + column
    }

    #[inline]
    pub fn get_cell(&self, row: usize, column: usize) -> CellKind {
        self.cells[self.index_of(row, column)]
    }

    #[inline]
    pub fn set_cell(&mut self, row: usize, column: usize, kind: CellKind) -> CellKind {
        let index = self.index_of(row, column);
        let prev_kind = self.cells[index];
        self.cells[index] = kind;

        prev_kind
    }

    /// Interior is everything strictly inside the permanent border.
    pub fn is_interior(&self, row: isize, column: isize) -> bool {
        row > 0
            && column > 0
            && row < self.dims.rows as isize - 1
            && column < self.dims.columns as isize - 1
    }

    /// Coordinates shifted by `offset` (a `Direction` step or double step),
    /// if they land inside the interior.
    pub fn interior_neighbor_of(
        &self,
        coords: (usize, usize),
        offset: (isize, isize),
    ) -> Option<(usize, usize)> {
        let n_row = coords.0 as isize + offset.0;
        let n_col = coords.1 as isize + offset.1;

        if self.is_interior(n_row, n_col) {
            Some((n_row as usize, n_col as usize))
        } else {
            None
        }
    }

    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&cell| cell == kind).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellKind]> {
        self.cells.chunks(self.dims.columns.max(1))
    }
}
