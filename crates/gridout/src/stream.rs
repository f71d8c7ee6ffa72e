//! Output destinations for rendered tables.

use std::fmt;
use std::io::{self, Write};

/// The destination a writer renders into.
///
/// The writer holds at most one of these at a time and is its sole
/// mutator. Closing a sink drops it, so further writes fail with a
/// null-stream error instead of silently going nowhere; the standard
/// streams are never closed.
pub enum Output {
    /// Process standard output (the default destination).
    Stdout,
    /// Process standard error.
    Stderr,
    /// In-memory buffer, used by `dumps`.
    Buffer(Vec<u8>),
    /// Any other sink, such as a file.
    Sink(Box<dyn Write>),
}

impl Output {
    /// Wrap an arbitrary writer as a sink.
    pub fn sink<W: Write + 'static>(writer: W) -> Self {
        Output::Sink(Box::new(writer))
    }

    /// Whether this is one of the process standard streams.
    pub fn is_std(&self) -> bool {
        matches!(self, Output::Stdout | Output::Stderr)
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Stdout => f.write_str("Output::Stdout"),
            Output::Stderr => f.write_str("Output::Stderr"),
            Output::Buffer(buf) => write!(f, "Output::Buffer({} bytes)", buf.len()),
            Output::Sink(_) => f.write_str("Output::Sink(..)"),
        }
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout => io::stdout().write(buf),
            Output::Stderr => io::stderr().write(buf),
            Output::Buffer(inner) => inner.write(buf),
            Output::Sink(inner) => inner.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout => io::stdout().flush(),
            Output::Stderr => io::stderr().flush(),
            Output::Buffer(_) => Ok(()),
            Output::Sink(inner) => inner.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_collects_writes() {
        let mut out = Output::Buffer(Vec::new());
        out.write_all(b"abc").unwrap();
        match out {
            Output::Buffer(buf) => assert_eq!(buf, b"abc"),
            _ => panic!("expected buffer"),
        }
    }

    #[test]
    fn test_is_std() {
        assert!(Output::Stdout.is_std());
        assert!(Output::Stderr.is_std());
        assert!(!Output::Buffer(Vec::new()).is_std());
    }
}
