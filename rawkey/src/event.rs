use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codes;

/// A parsed Control Sequence Introducer escape.
///
/// The decomposition follows ECMA-48: `CSI P ... P  I ... I  F`, where the
/// parameter bytes split into private markers (`:`, `<`, `=`, `>`, `?`)
/// and plain parameters (digits and `;`), the intermediates are in
/// 0x20-0x2F, and the final byte is in 0x40-0x7E. Parameters are carried
/// as the raw characters; splitting on `;` and numeric interpretation are
/// left to the consumer.
///
/// Two sequences compare equal iff all four fields are byte-equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControlSequence {
    pub private_markers: Vec<u8>,
    pub params: Vec<u8>,
    pub intermediates: Vec<u8>,
    pub final_byte: u8,
}

impl ControlSequence {
    #[must_use]
    pub fn new(
        private_markers: impl Into<Vec<u8>>,
        params: impl Into<Vec<u8>>,
        intermediates: impl Into<Vec<u8>>,
        final_byte: u8,
    ) -> Self {
        Self {
            private_markers: private_markers.into(),
            params: params.into(),
            intermediates: intermediates.into(),
            final_byte,
        }
    }

    /// A sequence that consists of the final byte alone, e.g. `CSI A`.
    #[must_use]
    pub fn bare(final_byte: u8) -> Self {
        Self::new(b"".as_slice(), b"".as_slice(), b"".as_slice(), final_byte)
    }

    /// A sequence with parameters only, e.g. `CSI 15 ~`.
    #[must_use]
    pub fn with_params(params: &[u8], final_byte: u8) -> Self {
        Self::new(b"".as_slice(), params, b"".as_slice(), final_byte)
    }

    /// Mnemonic from the xterm control-sequence vocabulary, when known.
    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        codes::csi_name(
            &self.private_markers,
            &self.intermediates,
            self.final_byte,
        )
    }
}

impl fmt::Display for ControlSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CSI {}{}{}{}",
            String::from_utf8_lossy(&self.private_markers),
            String::from_utf8_lossy(&self.params),
            String::from_utf8_lossy(&self.intermediates),
            self.final_byte as char,
        )?;

        match self.name() {
            Some(name) => write!(f, " ({name})"),
            None => Ok(()),
        }
    }
}

/// One decoded terminal input event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    /// A printable character outside of any control sequence. C0 controls
    /// that reach the ground state (`\r`, `\t`, ^C, ...) are delivered here
    /// as well; interpreting them is the consumer's business.
    Char(char),
    /// The printable following an `ESC N` single shift, drawn from G2.
    Ss2(char),
    /// The printable following an `ESC O` single shift, drawn from G3.
    Ss3(char),
    /// A parsed control sequence.
    Csi(ControlSequence),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_field_wise() {
        let a = ControlSequence::new(b"?".as_slice(), b"1".as_slice(), b"".as_slice(), b'J');
        let b = ControlSequence::new(b"?".as_slice(), b"1".as_slice(), b"".as_slice(), b'J');
        assert_eq!(a, b);

        let c = ControlSequence::with_params(b"1", b'J');
        assert_ne!(a, c);
    }

    #[test]
    fn named_sequences() {
        assert_eq!(ControlSequence::bare(b'A').name(), Some("CUU"));
        assert_eq!(
            ControlSequence::new(b"?".as_slice(), b"1".as_slice(), b"".as_slice(), b'J').name(),
            Some("DECSED"),
        );
        assert_eq!(ControlSequence::bare(b'~').name(), None);
    }

    #[test]
    fn display_renders_sequence_and_name() {
        let seq = ControlSequence::new(
            b"?".as_slice(),
            b"25".as_slice(),
            b"".as_slice(),
            b'l',
        );
        assert_eq!(seq.to_string(), "CSI ?25l (DECRST)");

        let unnamed = ControlSequence::with_params(b"5", b'~');
        assert_eq!(unnamed.to_string(), "CSI 5~");
    }
}
