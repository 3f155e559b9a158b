use std::io::{self, Read};
use std::pin::Pin;
use std::task::{Context, Poll};
use std::thread;

use futures_core::Stream;
use log::debug;
use utf8parse::Receiver;

use crate::error::Result;

/// Lazy stream of characters fed by a background reader thread.
///
/// The stream ends when the underlying byte source reaches end of file or
/// fails; dropping the stream lets the reader thread exit after its next
/// completed read.
pub struct CharStream {
    rx: flume::r#async::RecvStream<'static, char>,
}

impl Stream for CharStream {
    type Item = char;

    fn poll_next(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<char>> {
        Pin::new(&mut self.rx).poll_next(cx)
    }
}

/// Forwards completed code points from the UTF-8 decoder into the channel.
struct CharSink<'a> {
    tx: &'a flume::Sender<char>,
    closed: bool,
}

impl Receiver for CharSink<'_> {
    fn codepoint(&mut self, c: char) {
        if self.tx.send(c).is_err() {
            self.closed = true;
        }
    }

    fn invalid_sequence(&mut self) {
        self.codepoint(char::REPLACEMENT_CHARACTER);
    }
}

/// Decode characters from a blocking byte source on a dedicated thread.
///
/// Bytes are decoded incrementally, so multi-byte scalars split across
/// reads come out whole; invalid sequences become U+FFFD.
pub fn chars_from_reader<R>(mut reader: R) -> Result<CharStream>
where
    R: Read + Send + 'static,
{
    let (tx, rx) = flume::unbounded();

    thread::Builder::new()
        .name("rawkey-term-reader".into())
        .spawn(move || {
            let mut parser = utf8parse::Parser::new();
            let mut buf = [0u8; 1024];

            loop {
                match reader.read(&mut buf) {
                    Ok(0) => break,
                    Ok(n) => {
                        let mut sink = CharSink { tx: &tx, closed: false };
                        for &byte in &buf[..n] {
                            parser.advance(&mut sink, byte);
                        }
                        if sink.closed {
                            break;
                        }
                    },
                    Err(err) if err.kind() == io::ErrorKind::Interrupted => {
                        continue;
                    },
                    Err(err) => {
                        debug!("reader thread stopping: {err}");
                        break;
                    },
                }
            }
        })?;

    Ok(CharStream {
        rx: rx.into_stream(),
    })
}

/// Turn a terminal file descriptor into a lazy stream of characters.
///
/// The descriptor is duplicated so the reader thread owns its own handle;
/// closing the original remains the caller's responsibility.
///
/// Fails with [`Error::NotATerminal`](crate::Error::NotATerminal) when
/// `fd` does not refer to a terminal.
#[cfg(unix)]
pub fn read_chars<Fd: std::os::fd::AsFd>(fd: &Fd) -> Result<CharStream> {
    use crate::error::Error;

    nix::sys::termios::tcgetattr(fd.as_fd()).map_err(Error::from_termios)?;

    let owned = fd.as_fd().try_clone_to_owned()?;
    chars_from_reader(std::fs::File::from(owned))
}

#[cfg(test)]
mod tests {
    use futures_util::StreamExt;

    use super::*;

    /// Byte source that returns a single byte per read call.
    struct OneByteAtATime(io::Cursor<Vec<u8>>);

    impl Read for OneByteAtATime {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.0.read(&mut buf[..1])
        }
    }

    #[tokio::test]
    async fn decodes_bytes_into_chars() {
        let source = io::Cursor::new("hi\u{1F923}".as_bytes().to_vec());
        let chars: Vec<char> =
            chars_from_reader(source).unwrap().collect().await;

        assert_eq!(chars, vec!['h', 'i', '\u{1F923}']);
    }

    #[tokio::test]
    async fn reassembles_scalars_split_across_reads() {
        let source =
            OneByteAtATime(io::Cursor::new("\u{1F923}".as_bytes().to_vec()));
        let chars: Vec<char> =
            chars_from_reader(source).unwrap().collect().await;

        assert_eq!(chars, vec!['\u{1F923}']);
    }

    #[tokio::test]
    async fn replaces_invalid_sequences() {
        let source = io::Cursor::new(vec![b'f', 0xFF, b'g']);
        let chars: Vec<char> =
            chars_from_reader(source).unwrap().collect().await;

        assert_eq!(chars, vec!['f', char::REPLACEMENT_CHARACTER, 'g']);
    }

    #[cfg(unix)]
    #[test]
    fn read_chars_rejects_non_terminal_fd() {
        use crate::error::Error;

        let file = std::fs::File::open("/dev/null").unwrap();

        match read_chars(&file) {
            Err(Error::NotATerminal) => {},
            Err(other) => panic!("expected NotATerminal, got {other:?}"),
            Ok(_) => panic!("char stream acquired on /dev/null"),
        }
    }
}
