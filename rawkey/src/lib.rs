//! Asynchronous decoder for raw terminal input.
//!
//! Feed the decoder a lazy stream of characters read from a terminal in
//! character ("cbreak") mode and it yields decoded [`InputEvent`]s:
//! printables, single-shift escorted printables and parsed control
//! sequences. A bare ESC is disambiguated from the prefix of a longer
//! sequence by a bounded wait; see [`Decoder`].

mod decoder;
mod event;
mod keys;

pub mod codes;

pub use decoder::{DEFAULT_ESCAPE_TIMEOUT, Decoder};
pub use event::{ControlSequence, InputEvent};
pub use keys::{Key, key_for};
pub use rawkey_vte as vte;
