pub mod text;

use std::io::{self, IsTerminal};

pub fn stderr_is_tty() -> bool {
    io::stderr().is_terminal()
}
