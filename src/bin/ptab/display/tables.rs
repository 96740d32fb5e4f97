use std::io::{self, Write};

use periodica::{Block, Element, Neighbors, PeriodicTable, Property, Scale};

use super::Context;
use crate::util::text::truncate;

const INDENT: &str = "   ";

const BOX_INNER_WIDTH: usize = 58;

/// Full property card for one element, written to stdout.
pub fn print_element_card(
    table: &PeriodicTable,
    element: &Element,
    scales: &[(Scale, Option<f64>)],
    neighbors: &Neighbors,
) {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let title = format!("{}  {}  {}", element.atomic_number, element.symbol, element.name);

    let mut rows: Vec<(String, String)> = vec![
        ("Period".to_string(), element.period.to_string()),
        (
            "Group".to_string(),
            element
                .group
                .map(|g| g.to_string())
                .unwrap_or_else(|| "—".to_string()),
        ),
        ("Block".to_string(), element.block.to_string()),
        ("Series".to_string(), element.series.to_string()),
        (
            "Configuration".to_string(),
            element.configuration.source().to_string(),
        ),
        (
            "Valence electrons".to_string(),
            element.valence_electrons().to_string(),
        ),
    ];

    for property in Property::ALL {
        if let Ok(value) = element.property(property) {
            let unit = property.unit();
            let formatted = if unit.is_empty() {
                format!("{value}")
            } else {
                format!("{value} {unit}")
            };
            rows.push((property.to_string(), formatted));
        }
    }

    for (scale, value) in scales {
        let label = format!("EN ({scale})");
        let rendered = match value {
            Some(v) => format!("{v:.3}"),
            None => "—".to_string(),
        };
        rows.push((label, rendered));
    }

    if !element.oxidation_states.is_empty() {
        let states: Vec<String> = element
            .oxidation_states
            .iter()
            .map(|s| format!("{s:+}"))
            .collect();
        rows.push(("Oxidation states".to_string(), states.join(", ")));
    }

    if !element.ionization_energies.is_empty() {
        let energies: Vec<String> = element
            .ionization_energies
            .iter()
            .take(3)
            .map(|e| format!("{e}"))
            .collect();
        rows.push(("Ionization (eV)".to_string(), energies.join(", ")));
    }

    rows.push(("Neighbors".to_string(), render_neighbors(table, neighbors)));

    if let Some(year) = element.discovery_year {
        rows.push(("Discovered".to_string(), year.to_string()));
    }
    if let Some(discoverer) = &element.discoverer {
        rows.push(("Discoverer".to_string(), discoverer.clone()));
    }

    print_kv_table(&mut out, &title, &rows);
}

fn render_neighbors(table: &PeriodicTable, neighbors: &Neighbors) -> String {
    let symbol = |z: Option<u8>| {
        z.and_then(|z| table.by_atomic_number(z))
            .map(|e| e.symbol.as_str())
            .unwrap_or("·")
            .to_string()
    };

    format!(
        "↑{} ↓{} ←{} →{}",
        symbol(neighbors.up),
        symbol(neighbors.down),
        symbol(neighbors.left),
        symbol(neighbors.right)
    )
}

/// Element listing with one property column, written to stdout. The count
/// footer is a decoration and is dropped in non-interactive runs.
pub fn print_element_list(elements: &[&Element], property: Property, ctx: Context) {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let z_w = 3usize;
    let sym_w = 6usize;
    let name_w = 14usize;
    let prop_header = if property.unit().is_empty() {
        property.to_string()
    } else {
        format!("{} ({})", property, property.unit())
    };
    let prop_w = prop_header.chars().count().max(12);

    let _ = writeln!(
        out,
        "{}┌{}┬{}┬{}┬{}┐",
        INDENT,
        "─".repeat(z_w + 2),
        "─".repeat(sym_w + 2),
        "─".repeat(name_w + 2),
        "─".repeat(prop_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:>z_w$} │ {:<sym_w$} │ {:<name_w$} │ {:>prop_w$} │",
        INDENT, "Z", "Symbol", "Name", prop_header
    );
    let _ = writeln!(
        out,
        "{}├{}┼{}┼{}┼{}┤",
        INDENT,
        "─".repeat(z_w + 2),
        "─".repeat(sym_w + 2),
        "─".repeat(name_w + 2),
        "─".repeat(prop_w + 2)
    );

    for element in elements {
        let value = element
            .property(property)
            .map(|v| format!("{v}"))
            .unwrap_or_else(|_| "—".to_string());
        let _ = writeln!(
            out,
            "{}│ {:>z_w$} │ {:<sym_w$} │ {:<name_w$} │ {:>prop_w$} │",
            INDENT,
            element.atomic_number,
            element.symbol,
            truncate(&element.name, name_w),
            value
        );
    }

    let _ = writeln!(
        out,
        "{}└{}┴{}┴{}┴{}┘",
        INDENT,
        "─".repeat(z_w + 2),
        "─".repeat(sym_w + 2),
        "─".repeat(name_w + 2),
        "─".repeat(prop_w + 2)
    );
    if ctx.interactive {
        let _ = writeln!(out, "{}{} element(s)", INDENT, elements.len());
    }
}

/// Isotope composition table with abundance bars, written to stdout.
pub fn print_isotope_table(element: &Element) {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let a_w = 5usize;
    let mass_w = 12usize;
    let life_w = 12usize;
    let bar_w = 20usize;
    let dist_w = bar_w + 8;

    let title = format!("Isotopes of {} ({})", element.name, element.symbol);
    let _ = writeln!(out, "{}┌─ {} ─┐", INDENT, title);
    let _ = writeln!(
        out,
        "{}┌{}┬{}┬{}┬{}┐",
        INDENT,
        "─".repeat(a_w + 2),
        "─".repeat(mass_w + 2),
        "─".repeat(dist_w + 2),
        "─".repeat(life_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:>a_w$} │ {:>mass_w$} │ {:<dist_w$} │ {:>life_w$} │",
        INDENT, "A", "Mass (u)", "Abundance", "Half-life (y)"
    );
    let _ = writeln!(
        out,
        "{}├{}┼{}┼{}┼{}┤",
        INDENT,
        "─".repeat(a_w + 2),
        "─".repeat(mass_w + 2),
        "─".repeat(dist_w + 2),
        "─".repeat(life_w + 2)
    );

    for isotope in &element.isotopes {
        let dist_cell = match isotope.abundance {
            Some(fraction) => {
                let pct = fraction * 100.0;
                format!("{}  {:>5.1}%", make_bar(pct, bar_w), pct)
            }
            None => "trace".to_string(),
        };
        let life = isotope
            .half_life_years
            .map(|y| format!("{y:.4e}"))
            .unwrap_or_else(|| "stable".to_string());
        let _ = writeln!(
            out,
            "{}│ {:>a_w$} │ {:>mass_w$.6} │ {:<dist_w$} │ {:>life_w$} │",
            INDENT, isotope.mass_number, isotope.mass, dist_cell, life
        );
    }

    let _ = writeln!(
        out,
        "{}└{}┴{}┴{}┴{}┘",
        INDENT,
        "─".repeat(a_w + 2),
        "─".repeat(mass_w + 2),
        "─".repeat(dist_w + 2),
        "─".repeat(life_w + 2)
    );
}

/// 18-column periodic grid with the f-block inset below, written to stdout.
pub fn print_grid(table: &PeriodicTable) {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let _ = write!(out, "{}    ", INDENT);
    for group in 1..=18u8 {
        let _ = write!(out, "{group:>4}");
    }
    let _ = writeln!(out);

    for period in 1..=7u8 {
        let _ = write!(out, "{}{period:>3} ", INDENT);
        for group in 1..=18u8 {
            match table.cell(period, group) {
                Some(z) => {
                    let symbol = table
                        .by_atomic_number(z)
                        .map(|e| e.symbol.as_str())
                        .unwrap_or("?");
                    let _ = write!(out, "{symbol:>4}");
                }
                None => {
                    let _ = write!(out, "    ");
                }
            }
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out);

    for period in [6u8, 7u8] {
        let row: Vec<&str> = table
            .iter()
            .filter(|e| e.block == Block::F && e.period == period)
            .map(|e| e.symbol.as_str())
            .collect();
        let _ = write!(out, "{}  f ", INDENT);
        let _ = write!(out, "{}", "    ".repeat(2));
        for symbol in row {
            let _ = write!(out, "{symbol:>4}");
        }
        let _ = writeln!(out);
    }
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(String, String)]) {
    let key_w = 18usize;
    let sep_overhead = 6;
    let val_w = BOX_INNER_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, BOX_INNER_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
            key_w = key_w,
            val_w = val_w
        );
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
}

fn make_bar(pct: f64, max_width: usize) -> String {
    let filled = ((pct / 100.0) * max_width as f64).round() as usize;
    let empty = max_width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}
