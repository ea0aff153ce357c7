use anyhow::{ensure, Result};

use crate::renderer::Palette;

const DEFAULT_DIMS: (usize, usize) = (51, 101);
const DEFAULT_ORIGIN: (usize, usize) = (1, 1);
const DEFAULT_DEAD_END_PASSES: usize = 20;

pub const MIN_SIDE: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct MazeConfig {
    pub rows: usize,
    pub columns: usize,
    pub origin: (usize, usize),
    /// 0 leaves dead ends alone
    pub dead_end_passes: usize,
    /// fixed seed for reproducible output, entropy otherwise
    pub seed: Option<u64>,
    pub palette: Palette,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_DIMS.0,
            columns: DEFAULT_DIMS.1,
            origin: DEFAULT_ORIGIN,
            dead_end_passes: DEFAULT_DEAD_END_PASSES,
            seed: None,
            palette: Palette::default(),
        }
    }
}

#[cfg(test)]
impl MazeConfig {
    pub fn with_dims(mut self, rows: usize, columns: usize) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    pub fn with_origin(mut self, row: usize, column: usize) -> Self {
        self.origin = (row, column);
        self
    }

    pub fn with_dead_end_passes(mut self, passes: usize) -> Self {
        self.dead_end_passes = passes;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

impl MazeConfig {
    /// Checks the preconditions generation relies on.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.rows >= MIN_SIDE && self.columns >= MIN_SIDE,
            "maze must be at least {}x{}, got {}x{}",
            MIN_SIDE,
            MIN_SIDE,
            self.rows,
            self.columns
        );
        ensure!(
            self.rows % 2 == 1 && self.columns % 2 == 1,
            "maze dimensions must be odd, got {}x{}",
            self.rows,
            self.columns
        );

        let (row, column) = self.origin;
        ensure!(
            row >= 1 && column >= 1 && row <= self.rows - 2 && column <= self.columns - 2,
            "origin {:?} must lie inside the border of a {}x{} maze",
            self.origin,
            self.rows,
            self.columns
        );

        Ok(())
    }
}

#[cfg(test)]
mod test_config {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = MazeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.dead_end_passes, 20);
        assert_eq!(config.origin, (1, 1));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn rejects_tiny_grids() {
        let err = MazeConfig::default().with_dims(3, 9).validate().unwrap_err();
        assert!(err.to_string().contains("at least"));
    }

    #[test]
    fn rejects_even_dimensions() {
        assert!(MazeConfig::default().with_dims(10, 11).validate().is_err());
        assert!(MazeConfig::default().with_dims(11, 10).validate().is_err());
        assert!(MazeConfig::default().with_dims(11, 11).validate().is_ok());
    }

    #[test]
    fn rejects_origin_on_border() {
        let config = MazeConfig::default().with_dims(5, 5);

        assert!(config.clone().with_origin(0, 1).validate().is_err());
        assert!(config.clone().with_origin(1, 4).validate().is_err());
        assert!(config.clone().with_origin(3, 3).validate().is_ok());
    }

    #[test]
    fn builder_sets_fields() {
        let config = MazeConfig::default()
            .with_dead_end_passes(0)
            .with_seed(Some(99));

        assert_eq!(config.dead_end_passes, 0);
        assert_eq!(config.seed, Some(99));
    }
}
