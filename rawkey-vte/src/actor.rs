//! Callbacks invoked by the terminal input parser.
//!
//! The [`Parser`](crate::parser::Parser) walks through a decoded character
//! stream and translates it into input events. Those events are handed over
//! to an [`Actor`] implementation that is responsible for building key
//! events, echoing, logging, or whatever else the embedding application
//! needs. The trait methods mirror the action set defined by the DEC ANSI
//! escape sequence state machine and xterm conventions.

/// Consumer-facing interface for input events emitted by the parser.
///
/// The emitting callbacks (`print`, `single_shift2`, `single_shift3` and
/// `csi_dispatch`) are required. The remaining methods are acknowledgements
/// and DCS/OSC collection points that produce no event today; they default to
/// no-ops so that a future consumer can capture control strings without any
/// change to the state machine.
///
/// ## Terminology
///
/// An intermediate is a character in the range 0x20-0x2F that occurs before
/// the final character in an escape sequence. `ignored_excess_intermediates`
/// is set when there were more than two of them; no standard defines any
/// sequence with more than two, and intermediates after the second are
/// discarded.
///
/// Private markers are the characters `:`, `<`, `=`, `>` and `?` appearing
/// immediately after a CSI introducer. Parameters are transported as the raw
/// characters (digits and `;`); numeric interpretation is left to the caller.
pub trait Actor {
    /// Emits a single printable Unicode code point.
    ///
    /// This includes C0 controls that are not claimed by the anywhere table:
    /// the stream carries keyboard input, so control characters are data.
    fn print(&mut self, c: char);

    /// Emits the printable that follows an `ESC N` single-shift prefix.
    fn single_shift2(&mut self, c: char);

    /// Emits the printable that follows an `ESC O` single-shift prefix.
    fn single_shift3(&mut self, c: char);

    /// Dispatches a completed Control Sequence Introducer (CSI) escape.
    fn csi_dispatch(
        &mut self,
        private_markers: &[u8],
        params: &[u8],
        intermediates: &[u8],
        ignored_excess_intermediates: bool,
        byte: u8,
    );

    /// Acknowledges a C0/C1 control function claimed by the anywhere table
    /// or swallowed inside a control sequence (e.g. `CAN`, `SUB`, C1
    /// controls). Produces no event.
    fn execute(&mut self, _byte: u8) {}

    /// Dispatches a standard escape sequence other than the single shifts,
    /// which the parser resolves itself.
    fn esc_dispatch(&mut self, _intermediates: &[u8], _byte: u8) {}

    /// Signals the start of a Device Control String (DCS).
    fn hook(&mut self) {}

    /// Passes one payload byte of the current device control string.
    fn put(&mut self, _byte: u8) {}

    /// Marks the end of the current device control string.
    fn unhook(&mut self) {}

    /// Signals the start of an Operating System Command (OSC).
    fn osc_start(&mut self) {}

    /// Passes one payload character of the current operating system command.
    fn osc_put(&mut self, _c: char) {}

    /// Marks the end of the current operating system command.
    fn osc_end(&mut self) {}
}
