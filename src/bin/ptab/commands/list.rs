use std::cmp::Ordering;

use anyhow::Result;

use periodica::{Element, PeriodicTable, Property};

use crate::cli::{ListArgs, SortKey};
use crate::display::{print_element_list, Context as DisplayContext};

pub fn run_list(table: &PeriodicTable, args: ListArgs, ctx: DisplayContext) -> Result<()> {
    let filter = args.filter();
    let column = args.sort.column();

    let mut elements: Vec<&Element> = table.list(&filter).collect();
    if args.sort == SortKey::AtomicNumber {
        // the store already yields ascending Z
        if args.desc {
            elements.reverse();
        }
    } else {
        sort_by_property(&mut elements, column, args.desc);
    }

    print_element_list(&elements, column, ctx);
    Ok(())
}

/// Orders by the property value; elements with no recorded value sink to the
/// end regardless of direction. Atomic number breaks ties.
fn sort_by_property(elements: &mut [&Element], property: Property, descending: bool) {
    elements.sort_by(|a, b| {
        let va = a.property(property).ok();
        let vb = b.property(property).ok();
        let ordering = match (va, vb) {
            (Some(x), Some(y)) => {
                let cmp = x.total_cmp(&y);
                if descending { cmp.reverse() } else { cmp }
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        ordering.then(a.atomic_number.cmp(&b.atomic_number))
    });
}
