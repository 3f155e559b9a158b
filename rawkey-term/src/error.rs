use std::io;

use thiserror::Error;

/// Errors originating from the `rawkey-term` collaborators.
#[derive(Debug, Error)]
pub enum Error {
    #[error("fd is not a terminal")]
    NotATerminal,

    #[cfg(unix)]
    #[error("terminal attribute error: {0}")]
    Termios(nix::errno::Errno),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// Convenient result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(unix)]
impl Error {
    pub(crate) fn from_termios(errno: nix::errno::Errno) -> Self {
        match errno {
            nix::errno::Errno::ENOTTY => Error::NotATerminal,
            other => Error::Termios(other),
        }
    }
}
