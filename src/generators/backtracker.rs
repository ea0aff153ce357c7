// a cell that is still wall counts as unvisited, carved cells never go back to wall

use crate::generators::Generator;
use crate::grids::block_grid::BlockGrid;
use crate::grids::{CellKind, Direction};
use log::{debug, trace};
use rand::prelude::*;

/// One level of the depth-first walk: a cell plus the directions left to try.
struct Frame {
    position: (usize, usize),
    directions: [Direction; 4],
    next: usize,
}

impl Frame {
    fn new<R: Rng + ?Sized>(position: (usize, usize), rng: &mut R) -> Self {
        let mut directions = Direction::ALL;
        directions.shuffle(rng);
        Self {
            position,
            directions,
            next: 0,
        }
    }
}

pub struct Backtracker<'a, R: Rng> {
    grid: &'a mut BlockGrid,
    rng: &'a mut R,
    stack: Vec<Frame>,
    carved: usize,
}

impl<'a, R: Rng> Backtracker<'a, R> {
    /// The origin is expected to be marked already (usually as `Start`) and
    /// to sit strictly inside the border.
    pub fn new(grid: &'a mut BlockGrid, origin: (usize, usize), rng: &'a mut R) -> Self {
        let stack = vec![Frame::new(origin, &mut *rng)];
        Self {
            grid,
            rng,
            stack,
            carved: 0,
        }
    }

    /// Cells turned from wall into floor so far.
    pub fn carved(&self) -> usize {
        self.carved
    }
}

impl<R: Rng> Generator for Backtracker<'_, R> {
    /// Carves one passage out of the current cell, or backtracks one level
    /// if no direction is left.
    fn step_generation(&mut self) {
        let (position, next) = match self.stack.last_mut() {
            Some(frame) => {
                let mut next = None;
                while let Some(&dir) = frame.directions.get(frame.next) {
                    frame.next += 1;

                    let target = self
                        .grid
                        .interior_neighbor_of(frame.position, dir.double_step());
                    if let Some(target) = target {
                        if self.grid.get_cell(target.0, target.1) == CellKind::Wall {
                            next = Some(target);
                            break;
                        }
                    }
                }
                (frame.position, next)
            }
            None => return,
        };

        match next {
            Some(target) => {
                let between = ((position.0 + target.0) / 2, (position.1 + target.1) / 2);
                self.grid.set_cell(between.0, between.1, CellKind::Floor);
                self.grid.set_cell(target.0, target.1, CellKind::Floor);
                self.carved += 2;
                trace!("carved {:?} -> {:?}", position, target);

                let frame = Frame::new(target, &mut *self.rng);
                self.stack.push(frame);
            }
            None => {
                self.stack.pop();
                trace!("backtracked from {:?}", position);

                if self.stack.is_empty() {
                    debug!("carving finished, {} cells carved", self.carved);
                }
            }
        }
    }

    fn is_done(&self) -> bool {
        self.stack.is_empty()
    }
}

/// Carves a perfect maze into `grid` starting at `origin`.
pub fn carve<R: Rng>(grid: &mut BlockGrid, origin: (usize, usize), rng: &mut R) -> usize {
    let mut backtracker = Backtracker::new(grid, origin, rng);
    backtracker.generate_maze();
    backtracker.carved()
}
