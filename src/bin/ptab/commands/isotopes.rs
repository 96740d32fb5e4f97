use anyhow::{bail, Result};

use periodica::PeriodicTable;

use crate::cli::IsotopesArgs;
use crate::display::print_isotope_table;

pub fn run_isotopes(table: &PeriodicTable, args: IsotopesArgs) -> Result<()> {
    let element = table.get(&args.element)?;

    if element.isotopes.is_empty() {
        bail!(
            "No isotope data is recorded for {} ({})",
            element.name,
            element.symbol
        );
    }

    if args.natural {
        let mut shown = element.clone();
        shown.isotopes.retain(|iso| iso.is_natural());
        if shown.isotopes.is_empty() {
            bail!(
                "{} has no naturally occurring isotopes",
                element.name
            );
        }
        print_isotope_table(&shown);
    } else {
        print_isotope_table(element);
    }

    Ok(())
}
