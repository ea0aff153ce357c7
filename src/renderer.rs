use std::io::{self, Write};

use crate::grids::block_grid::BlockGrid;
use crate::grids::CellKind;

pub const WALL_GLYPH: char = '▒';
pub const FLOOR_GLYPH: char = ' ';
pub const START_GLYPH: char = '@';
pub const END_GLYPH: char = '*';

/// Glyph lookup keyed by cell kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub wall: char,
    pub floor: char,
    pub start: char,
    pub end: char,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            wall: WALL_GLYPH,
            floor: FLOOR_GLYPH,
            start: START_GLYPH,
            end: END_GLYPH,
        }
    }
}

impl Palette {
    pub fn glyph(&self, kind: CellKind) -> char {
        match kind {
            CellKind::Wall => self.wall,
            CellKind::Floor => self.floor,
            CellKind::Start => self.start,
            CellKind::End => self.end,
        }
    }
}

/// One line per row, one glyph per column.
pub fn render(grid: &BlockGrid, palette: &Palette) -> String {
    let mut out = String::with_capacity(grid.cells.len() * 3 + grid.dims.rows);
    for row in grid.rows() {
        out.extend(row.iter().map(|&kind| palette.glyph(kind)));
        out.push('\n');
    }

    out
}

pub fn write_grid<W: Write>(writer: &mut W, grid: &BlockGrid, palette: &Palette) -> io::Result<()> {
    writer.write_all(render(grid, palette).as_bytes())?;
    writer.flush()
}
