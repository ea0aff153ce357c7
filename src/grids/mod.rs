pub mod block_grid;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// unit step as (delta row, delta column)
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn double_step(self) -> (isize, isize) {
        let (d_row, d_col) = self.step();
        (d_row * 2, d_col * 2)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum CellKind {
    Wall,
    Floor,
    Start,
    // declared for the palette, nothing places it yet
    #[allow(dead_code)]
    End,
}
