use std::os::fd::AsFd;

use log::warn;
use nix::sys::termios::{self, LocalFlags, SetArg, SpecialCharacterIndices, Termios};

use crate::error::{Error, Result};

/// Scoped acquisition of character ("cbreak") mode on a terminal.
///
/// On enter, line buffering and local echo are disabled so input can be
/// read one character at a time while ^C keeps working. The previous
/// attributes are restored when the guard is dropped, on all paths.
///
/// ```no_run
/// # fn main() -> rawkey_term::Result<()> {
/// let stdin = std::io::stdin();
/// let _mode = rawkey_term::CharMode::enter(&stdin)?;
/// // read input in a loop
/// # Ok(())
/// # }
/// ```
pub struct CharMode<Fd: AsFd> {
    fd: Fd,
    saved: Termios,
}

impl<Fd: AsFd> CharMode<Fd> {
    /// Switch the terminal behind `fd` into character mode.
    ///
    /// Fails with [`Error::NotATerminal`] when `fd` does not refer to a
    /// terminal.
    pub fn enter(fd: Fd) -> Result<Self> {
        let saved =
            termios::tcgetattr(fd.as_fd()).map_err(Error::from_termios)?;

        let mut attrs = saved.clone();
        attrs.local_flags &= !(LocalFlags::ICANON | LocalFlags::ECHO);
        attrs.control_chars[SpecialCharacterIndices::VMIN as usize] = 1;
        attrs.control_chars[SpecialCharacterIndices::VTIME as usize] = 0;

        termios::tcsetattr(fd.as_fd(), SetArg::TCSAFLUSH, &attrs)
            .map_err(Error::from_termios)?;

        Ok(Self { fd, saved })
    }
}

impl<Fd: AsFd> Drop for CharMode<Fd> {
    fn drop(&mut self) {
        let restore =
            termios::tcsetattr(self.fd.as_fd(), SetArg::TCSAFLUSH, &self.saved);

        if let Err(err) = restore {
            warn!("failed to restore terminal attributes: {err}");
        }
    }
}
