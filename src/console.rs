//! `fmt::Write` over an `io::Write` sink, standard output by default.

use core::fmt;
use std::io;

/// Writes straight through to `W`. Call [`Console::flush`] before exiting;
/// dropping the console does not report buffered write failures.
pub struct Console<W> {
    inner: W,
}

/// The process's locked standard output.
pub type Stdout = Console<io::StdoutLock<'static>>;

impl Console<io::StdoutLock<'static>> {
    pub fn stdout() -> Self {
        Console::new(io::stdout().lock())
    }
}

impl<W: io::Write> Console<W> {
    pub fn new(inner: W) -> Self {
        Console { inner }
    }

    pub fn flush(&mut self) -> fmt::Result {
        self.inner.flush().map_err(|_| fmt::Error)
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> fmt::Write for Console<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|_| fmt::Error)
    }
}
