//! Input/output
//!
//! JSON encoding of the dataset and an output trait so the binary can write
//! to stdout while tests capture what was written.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::models::errors::GenResult;
use crate::models::galaxy::Galaxy;

const INDENT: &[u8] = b"    ";

fn to_pretty<T: Serialize + ?Sized>(value: &T) -> GenResult<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Serialize the dataset as indented JSON, keys in field order.
pub fn to_json(galaxies: &[Galaxy]) -> GenResult<String> {
    to_pretty(galaxies)
}

pub fn galaxy_to_json(galaxy: &Galaxy) -> GenResult<String> {
    to_pretty(galaxy)
}

/// Parse a dataset previously written by [`to_json`].
pub fn from_json(text: &str) -> GenResult<Vec<Galaxy>> {
    Ok(serde_json::from_str(text)?)
}

pub fn galaxy_from_json(text: &str) -> GenResult<Galaxy> {
    Ok(serde_json::from_str(text)?)
}

/// Trait for writing output
pub trait OutputWriter {
    /// Write a message without a newline
    fn write(&mut self, message: &str) -> io::Result<()>;
    /// Write a message with a newline
    fn writeln(&mut self, message: &str) -> io::Result<()>;
}

/// Writes to stdout
pub struct TerminalIO;

impl OutputWriter for TerminalIO {
    fn write(&mut self, message: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(message.as_bytes())?;
        out.flush()
    }

    fn writeln(&mut self, message: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(message.as_bytes())?;
        out.write_all(b"\n")?;
        out.flush()
    }
}

/// Serialize the dataset and write it as one document.
pub fn emit(galaxies: &[Galaxy], output: &mut dyn OutputWriter) -> GenResult<()> {
    let text = to_json(galaxies)?;
    output.write(&text)?;
    output.write("\n")?;
    Ok(())
}
