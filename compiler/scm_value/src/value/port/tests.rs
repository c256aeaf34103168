#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use std::io::{Cursor, Write};
use std::sync::Arc;

/// Writer that appends into a buffer the test can inspect afterwards.
#[derive(Clone, Default)]
struct SharedBuf(Arc<parking_lot::Mutex<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_input_port_lends_reader() {
    let port = InputPort::new(Cursor::new(b"(car x)".to_vec()));
    let mut text = String::new();
    port.with_reader(|r| r.read_to_string(&mut text)).unwrap();
    assert_eq!(text, "(car x)");
}

#[test]
fn test_input_port_resumes_where_last_reader_stopped() {
    let port = InputPort::new(Cursor::new(b"abcdef".to_vec()));
    let mut first = [0u8; 3];
    port.with_reader(|r| r.read_exact(&mut first)).unwrap();
    let mut rest = String::new();
    port.with_reader(|r| r.read_to_string(&mut rest)).unwrap();
    assert_eq!(&first, b"abc");
    assert_eq!(rest, "def");
}

#[test]
fn test_output_port_lends_writer() {
    let buf = SharedBuf::default();
    let port = OutputPort::new(buf.clone());
    port.with_writer(|w| w.write_all(b"hello")).unwrap();
    assert_eq!(&*buf.0.lock(), b"hello");
}
