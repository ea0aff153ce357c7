use std::io;

use anyhow::Result;
use log::info;
use rand::prelude::*;

mod config;

mod grids;

mod renderer;

mod generators;

use config::MazeConfig;
use generators::backtracker::carve;
use generators::dead_ends::prune;
use grids::block_grid::BlockGrid;
use grids::CellKind;

/// Builds a grid from `config`: all wall, origin marked, carved, then pruned.
fn generate(config: &MazeConfig) -> Result<BlockGrid> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => {
            info!("seeding generator with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut grid = BlockGrid::with_dims(config.rows, config.columns);
    let (row, column) = config.origin;
    grid.set_cell(row, column, CellKind::Start);

    info!(
        "carving {}x{} maze from {:?}",
        config.rows, config.columns, config.origin
    );
    let carved = carve(&mut grid, config.origin, &mut rng);
    info!("carved {} cells", carved);

    let filled = prune(&mut grid, config.dead_end_passes);
    info!(
        "filled {} dead end cells over {} passes, {} cells left open",
        filled,
        config.dead_end_passes,
        grid.cells.len() - grid.count(CellKind::Wall)
    );

    Ok(grid)
}

fn main() -> Result<()> {
    env_logger::init();

    let config = MazeConfig::default();
    let grid = generate(&config)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    renderer::write_grid(&mut handle, &grid, &config.palette)?;

    Ok(())
}
