use crate::generators::Generator;
use crate::grids::block_grid::BlockGrid;
use crate::grids::{CellKind, Direction};
use log::debug;

/// Fills dead ends back in with wall, one full sweep per step.
///
/// A cell is a dead end when at least three of its four neighbors are wall.
/// Only neighbors inside the interior are counted, so the border never
/// contributes. Sweeps update the grid in place: a cell filled early in a
/// sweep already counts as wall for the cells after it.
pub struct DeadEndFiller<'a> {
    grid: &'a mut BlockGrid,
    passes: usize,
    passes_done: usize,
    filled: usize,
    settled: bool,
}

impl<'a> DeadEndFiller<'a> {
    pub fn new(grid: &'a mut BlockGrid, passes: usize) -> Self {
        Self {
            grid,
            passes,
            passes_done: 0,
            filled: 0,
            settled: false,
        }
    }

    /// Total cells turned into wall across all sweeps so far.
    pub fn filled(&self) -> usize {
        self.filled
    }

    fn wall_neighbors(&self, row: usize, column: usize) -> usize {
        Direction::ALL
            .iter()
            .filter_map(|&dir| self.grid.interior_neighbor_of((row, column), dir.step()))
            .filter(|&(n_row, n_col)| self.grid.get_cell(n_row, n_col) == CellKind::Wall)
            .count()
    }

    /// Runs one sweep over the interior and returns how many cells changed.
    pub fn sweep(&mut self) -> usize {
        let mut changed = 0;

        // start cell is not exempt
        for row in 1..self.grid.dims.rows.saturating_sub(1) {
            for column in 1..self.grid.dims.columns.saturating_sub(1) {
                if self.wall_neighbors(row, column) >= 3
                    && self.grid.set_cell(row, column, CellKind::Wall) != CellKind::Wall
                {
                    changed += 1;
                }
            }
        }

        changed
    }
}

impl Generator for DeadEndFiller<'_> {
    fn step_generation(&mut self) {
        if self.is_done() {
            return;
        }

        let changed = self.sweep();
        self.passes_done += 1;
        self.filled += changed;
        debug!(
            "dead end pass {}/{}: filled {} cells",
            self.passes_done, self.passes, changed
        );

        if changed == 0 && !self.settled {
            self.settled = true;
            debug!("no dead ends left after pass {}", self.passes_done);
        }
    }

    fn is_done(&self) -> bool {
        self.passes_done >= self.passes
    }
}

/// Runs exactly `passes` dead end sweeps over `grid`.
pub fn prune(grid: &mut BlockGrid, passes: usize) -> usize {
    let mut filler = DeadEndFiller::new(grid, passes);
    filler.generate_maze();
    filler.filled()
}
