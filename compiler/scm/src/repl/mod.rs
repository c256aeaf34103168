//! The read/eval/print loop.
//!
//! Each turn writes the prompt, reads one line from the input port, turns
//! it into a string object, and writes that object's text back to the
//! output port. End of input ends the session with the footer.

use std::io;

use scm_value::{InputPort, Object, OutputPort};

use crate::config::ReplConfig;

/// I/O failure while running the loop.
#[derive(Debug, thiserror::Error)]
pub enum ReplError {
    #[error("encountered error while reading: {0}")]
    Read(#[source] io::Error),
    #[error("encountered error while printing: {0}")]
    Print(#[source] io::Error),
}

/// Run a session until the input port is exhausted.
pub fn run(config: &ReplConfig, input: &InputPort, output: &OutputPort) -> Result<(), ReplError> {
    if !config.quiet {
        write_line(output, &config.header)?;
    }

    let mut turns = 0usize;
    loop {
        if !config.quiet {
            write_text(output, &config.prompt)?;
        }

        let Some(line) = read(input)? else {
            break;
        };
        turns += 1;
        tracing::debug!(turn = turns, bytes = line.len(), "read datum text");

        let value = eval(&line);
        print(&value, output)?;
        write_line(output, "")?;
    }

    tracing::debug!(turns, "session finished");
    farewell(config, output)
}

/// Close the session: a blank line, then the footer. Quiet sessions print
/// nothing.
///
/// Runs at end of input, and from the binary's interrupt handler.
pub fn farewell(config: &ReplConfig, output: &OutputPort) -> Result<(), ReplError> {
    if !config.quiet {
        write_line(output, "")?;
        write_line(output, &config.footer)?;
    }
    Ok(())
}

/// Read one line, without its terminator. `None` at end of input.
///
/// Bytes are pulled one at a time so nothing past the newline is consumed;
/// callers wanting throughput should hand the port a buffered reader.
fn read(input: &InputPort) -> Result<Option<String>, ReplError> {
    input
        .with_reader(|reader| {
            let mut bytes = Vec::new();
            let mut byte = [0u8; 1];
            loop {
                match reader.read(&mut byte) {
                    Ok(0) if bytes.is_empty() => return Ok(None),
                    Ok(0) => break,
                    Ok(_) if byte[0] == b'\n' => break,
                    Ok(_) => bytes.push(byte[0]),
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                    Err(e) => return Err(e),
                }
            }
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
        })
        .map_err(ReplError::Read)
}

fn eval(text: &str) -> Object {
    Object::string_from(text)
}

/// Strings print as their raw text; everything else in written form.
fn print(value: &Object, output: &OutputPort) -> Result<(), ReplError> {
    match value.as_string() {
        Some(s) => write_text(output, &s.text()),
        None => write_text(output, &value.to_string()),
    }
}

fn write_text(output: &OutputPort, text: &str) -> Result<(), ReplError> {
    output
        .with_writer(|w| {
            w.write_all(text.as_bytes())?;
            w.flush()
        })
        .map_err(ReplError::Print)
}

fn write_line(output: &OutputPort, text: &str) -> Result<(), ReplError> {
    output
        .with_writer(|w| {
            w.write_all(text.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()
        })
        .map_err(ReplError::Print)
}
