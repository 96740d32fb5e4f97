use anyhow::{Context, Result};

use periodica::{PeriodicTable, Scale};

use crate::cli::InfoArgs;
use crate::display::print_element_card;

pub fn run_info(table: &PeriodicTable, args: InfoArgs) -> Result<()> {
    let element = table.get(&args.element)?;

    let selected: Vec<Scale> = match &args.scale {
        Some(name) => vec![name.parse::<Scale>()?],
        None => Scale::ALL.to_vec(),
    };

    let scales: Vec<(Scale, Option<f64>)> = selected
        .into_iter()
        .map(|scale| (scale, element.electronegativity(scale).ok()))
        .collect();

    let neighbors = table
        .neighbors(element.atomic_number)
        .with_context(|| format!("Failed to locate {} in the grid", element.symbol))?;

    print_element_card(table, element, &scales, &neighbors);
    Ok(())
}
