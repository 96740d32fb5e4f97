mod banner;
mod error;
mod tables;

pub use banner::{banner_for_help, print_banner};
pub use error::print_error;
pub use tables::{print_element_card, print_element_list, print_grid, print_isotope_table};

#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub interactive: bool,
}

impl Context {
    pub fn detect() -> Self {
        Self {
            interactive: crate::util::stderr_is_tty(),
        }
    }

    pub fn with_quiet(self, quiet: bool) -> Self {
        if quiet {
            Self { interactive: false }
        } else {
            self
        }
    }
}
