use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    let msg = err.to_string();
    for line in wrap(&msg, 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 59) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    if let Some(hints) = HintCollector::collect(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn new() -> Self {
        Self {
            hints: Vec::new(),
            has_typed_hints: false,
        }
    }

    fn collect(err: &Error) -> Option<Vec<String>> {
        let mut collector = Self::new();

        collector.collect_database_hints(err);

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        if collector.hints.is_empty() {
            None
        } else {
            Some(collector.hints)
        }
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn mark_typed(&mut self) {
        self.has_typed_hints = true;
    }

    fn collect_database_hints(&mut self, err: &Error) {
        use periodica::Error as DbError;

        let Some(db_err) = err.downcast_ref::<DbError>() else {
            return;
        };

        self.mark_typed();

        match db_err {
            DbError::NotFound { query } => {
                self.add(format!(
                    "No element has atomic number, symbol, or name '{}'",
                    query
                ));
                self.add("Symbols and names match case-insensitively (fe, Fe, iron)");
                self.add("Run `ptab list` to see every element");
            }

            DbError::MissingData { symbol, property } => {
                self.add(format!("{} has no recorded {}", symbol, property));
                self.add("Many quantities are unmeasured past fermium (Z > 100)");
                self.add("Stored values only; this tool does not extrapolate");
            }

            DbError::UnsupportedScale(scale) => {
                self.add(format!("'{}' is not a recognized scale", scale));
                self.add("Supported scales: pauling, allen, mulliken, allred-rochow");
            }

            DbError::Parse(_) => {
                self.add("The embedded element dataset failed to parse");
                self.add("This build is broken; reinstall the binary");
            }

            _ if db_err.is_integrity() => {
                self.add("The element dataset failed an integrity check");
                self.add("This build is broken; reinstall the binary");
            }

            _ => {}
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("not found") || msg.contains("no element") {
            self.add("Check the element identifier spelling");
            self.add("Run `ptab list` to see every element");
            return;
        }

        if msg.contains("scale") {
            self.add("Supported scales: pauling, allen, mulliken, allred-rochow");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    let mut text = String::new();

    text.push_str(&err.to_string());

    let mut source = err.source();
    while let Some(cause) = source {
        text.push('\n');
        text.push_str(&cause.to_string());
        source = cause.source();
    }

    text.to_lowercase()
}
