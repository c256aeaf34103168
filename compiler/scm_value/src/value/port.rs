//! Input and output ports.
//!
//! A port holds a caller-supplied byte stream for a later I/O collaborator.
//! The value model assigns no stream semantics: it only keeps the handle
//! and lends it out. Ports compare by identity.

use parking_lot::Mutex;
use std::fmt;
use std::io::{Read, Write};

pub struct InputPort {
    reader: Mutex<Box<dyn Read + Send>>,
}

impl InputPort {
    pub fn new(reader: impl Read + Send + 'static) -> Self {
        InputPort {
            reader: Mutex::new(Box::new(reader)),
        }
    }

    /// Lend the underlying stream to `f`.
    ///
    /// Other users of the port block until `f` returns.
    pub fn with_reader<R>(&self, f: impl FnOnce(&mut dyn Read) -> R) -> R {
        let mut reader = self.reader.lock();
        f(&mut **reader)
    }
}

pub struct OutputPort {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl OutputPort {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        OutputPort {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Lend the underlying stream to `f`.
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut dyn Write) -> R) -> R {
        let mut writer = self.writer.lock();
        f(&mut **writer)
    }
}

impl fmt::Debug for InputPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("InputPort")
    }
}

impl fmt::Debug for OutputPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OutputPort")
    }
}

#[cfg(test)]
mod tests;
