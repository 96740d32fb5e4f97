use anyhow::Result;

use periodica::PeriodicTable;

use crate::cli::GridArgs;
use crate::display::print_grid;

pub fn run_grid(table: &PeriodicTable, _args: GridArgs) -> Result<()> {
    print_grid(table);
    Ok(())
}
