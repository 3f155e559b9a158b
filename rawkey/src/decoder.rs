use std::time::Duration;

use futures_util::{Stream, StreamExt};
use log::debug;
use rawkey_vte::{Actor, Parser};
use tokio::time;

use crate::event::{ControlSequence, InputEvent};

/// How long a bare ESC may sit in the escape state before it is resolved
/// as a standalone Escape key press.
pub const DEFAULT_ESCAPE_TIMEOUT: Duration = Duration::from_secs(1);

const ESC: char = '\x1b';

/// Captures the single event a character may produce while it runs
/// through the state machine.
#[derive(Default)]
struct EventSlot {
    event: Option<InputEvent>,
}

impl Actor for EventSlot {
    fn print(&mut self, c: char) {
        self.event = Some(InputEvent::Char(c));
    }

    fn single_shift2(&mut self, c: char) {
        self.event = Some(InputEvent::Ss2(c));
    }

    fn single_shift3(&mut self, c: char) {
        self.event = Some(InputEvent::Ss3(c));
    }

    fn csi_dispatch(
        &mut self,
        private_markers: &[u8],
        params: &[u8],
        intermediates: &[u8],
        ignored_excess_intermediates: bool,
        byte: u8,
    ) {
        if ignored_excess_intermediates {
            debug!(
                "[excess intermediates] dropped before final byte {:?}",
                byte as char
            );
        }

        self.event = Some(InputEvent::Csi(ControlSequence::new(
            private_markers,
            params,
            intermediates,
            byte,
        )));
    }
}

/// Asynchronous decode loop over an upstream character stream.
///
/// Pulls characters from `chars`, drives them through the DEC ANSI state
/// machine and surfaces decoded [`InputEvent`]s. The only suspension point
/// is the pull on the upstream stream; everything else runs synchronously
/// between suspensions. Events come out strictly in input order, except
/// that a bare Escape is emitted before the character that finalized it as
/// a standalone key.
///
/// While the machine sits on a bare ESC, the pull is raced against the
/// escape timeout: if no character arrives in time the ESC is resolved as
/// a standalone Escape key. Abandoning a pull consumes nothing from the
/// stream, so the race loses no input and the decoder stays cancel-safe.
pub struct Decoder<S> {
    chars: S,
    parser: Parser,
    escape_timeout: Duration,
    exhausted: bool,
}

impl<S> Decoder<S>
where
    S: Stream<Item = char> + Unpin,
{
    #[must_use]
    pub fn new(chars: S) -> Self {
        Self {
            chars,
            parser: Parser::new(),
            escape_timeout: DEFAULT_ESCAPE_TIMEOUT,
            exhausted: false,
        }
    }

    /// Replace the default 1 s escape timeout.
    ///
    /// A zero duration resolves a bare ESC as soon as no further character
    /// is already available.
    #[must_use]
    pub fn with_escape_timeout(mut self, escape_timeout: Duration) -> Self {
        self.escape_timeout = escape_timeout;
        self
    }

    /// Decode the next input event.
    ///
    /// Returns `None` once the upstream stream ends; a trailing bare ESC is
    /// emitted as an Escape key before the end is reported.
    pub async fn next_event(&mut self) -> Option<InputEvent> {
        let mut slot = EventSlot::default();

        loop {
            if self.exhausted {
                return None;
            }

            let c = if self.parser.pending_escape() {
                match time::timeout(self.escape_timeout, self.chars.next()).await {
                    Ok(Some(c)) => c,
                    Ok(None) => {
                        // The ESC was the last character of the stream.
                        self.exhausted = true;
                        self.parser.abort_escape(&mut slot);
                        return Some(InputEvent::Char(ESC));
                    },
                    Err(_elapsed) => {
                        self.parser.abort_escape(&mut slot);
                        return Some(InputEvent::Char(ESC));
                    },
                }
            } else {
                match self.chars.next().await {
                    Some(c) => c,
                    None => {
                        self.exhausted = true;
                        return None;
                    },
                }
            };

            self.parser.advance(c, &mut slot);

            if let Some(event) = slot.event.take() {
                return Some(event);
            }
        }
    }

    /// Adapt the decoder into a stream of input events.
    pub fn into_stream(self) -> impl Stream<Item = InputEvent> {
        async_stream::stream! {
            let mut decoder = self;
            while let Some(event) = decoder.next_event().await {
                yield event;
            }
        }
    }
}
