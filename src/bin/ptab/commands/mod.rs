mod grid;
mod info;
mod isotopes;
mod list;

use grid::run_grid;
use info::run_info;
use isotopes::run_isotopes;
use list::run_list;

use anyhow::{Context, Result};

use periodica::PeriodicTable;

use crate::cli::Command;
use crate::display::Context as DisplayContext;

pub fn dispatch(command: Command, ctx: DisplayContext) -> Result<()> {
    let table = PeriodicTable::load().context("Failed to load the element database")?;

    match command {
        Command::Info(args) => run_info(&table, args),
        Command::List(args) => run_list(&table, args, ctx),
        Command::Isotopes(args) => run_isotopes(&table, args),
        Command::Grid(args) => run_grid(&table, args),
    }
}
