//! Terminal output helpers
//!
//! Long `log` output goes through the minus pager when stdout is a terminal.
//! Colouring and paging are both switched off when stdout is redirected so
//! scripted callers see plain text.

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Setting this variable (to anything) disables the pager
pub const NO_PAGER_ENV: &str = "NO_PAGER";

/// Wrapper that implements `Write` for the minus pager
///
/// The minus pager doesn't implement `std::io::Write` directly, so this wrapper
/// adapts it to be a drop-in replacement for stdout in commands that produce
/// long output.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn stdout_is_terminal() -> bool {
    io::stdout().is_terminal()
}

pub fn should_page() -> bool {
    stdout_is_terminal() && std::env::var_os(NO_PAGER_ENV).is_none()
}

/// Disable ANSI colours unless stdout is an interactive terminal
pub fn configure_colors() {
    if !stdout_is_terminal() {
        colored::control::set_override(false);
    }
}
