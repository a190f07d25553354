//! Entering and leaving the full-screen terminal mode

use std::io::{self, Write};

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};

/// Enable raw mode and switch to the alternate screen. If the switch
/// fails, raw mode is turned back off before the error is returned.
pub fn enter<W: Write>(
    out: &mut W,
    enable_raw: impl FnOnce() -> io::Result<()>,
    disable_raw: impl FnOnce() -> io::Result<()>,
) -> io::Result<()> {
    enable_raw()?;
    if let Err(err) = execute!(out, EnterAlternateScreen) {
        let _ = disable_raw();
        return Err(err);
    }
    Ok(())
}

/// Undo [`enter`]. Both steps are attempted; the first error wins.
pub fn leave<W: Write>(out: &mut W, disable_raw: impl FnOnce() -> io::Result<()>) -> io::Result<()> {
    let raw = disable_raw();
    let screen = execute!(out, LeaveAlternateScreen);
    raw.and(screen)
}
