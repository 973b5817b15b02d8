//! Per-file content capture into the staging sink
//!
//! Every visited file produces exactly one block:
//!
//! ```text
//! <name> [
//! <up to MAX_LINES chunks of raw content, then "...\n" if truncated>
//! ] (DETECTED ERROR COUNT: 0)
//! ```
//!
//! Binary files get an empty body and are never opened. Files that cannot be
//! opened get a single `<name> [CANNOT OPEN FILE]` line.

use std::borrow::Cow;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::classify::is_binary_by_extension;

/// Number of chunks kept per file before the truncation marker
pub const MAX_LINES: usize = 1700;

/// Longest chunk read at once; longer physical lines are split
pub const READ_CHUNK_LIMIT: usize = 2047;

pub const TRUNCATION_MARKER: &[u8] = b"...\n";

/// Error count written after every captured block
pub const DETECTED_ERROR_COUNT: usize = 0;

/// What happened to a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// Skipped by extension, placeholder written
    Binary,
    /// Could not be opened, placeholder written
    Unreadable,
    /// Content copied
    Captured { lines: usize, truncated: bool },
}

/// Append the block for `path` (displayed as `name`) to `sink`
///
/// Only write failures on `sink` are returned; problems with the source file
/// are recorded in the block itself. The name is written as raw bytes where
/// the platform allows it.
pub fn capture<W: Write>(
    path: &Path,
    name: impl AsRef<OsStr>,
    sink: &mut W,
) -> io::Result<CaptureOutcome> {
    let name = name.as_ref();
    if is_binary_by_extension(&name.to_string_lossy()) {
        write_opening(sink, name, b" [\n")?;
        write_closing(sink)?;
        return Ok(CaptureOutcome::Binary);
    }

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot open file");
            write_opening(sink, name, b" [CANNOT OPEN FILE]\n")?;
            return Ok(CaptureOutcome::Unreadable);
        }
    };

    write_opening(sink, name, b" [\n")?;
    let mut reader = BufReader::new(file);
    let (lines, truncated) = copy_lines(&mut reader, sink, path)?;
    write_closing(sink)?;

    if truncated {
        debug!(path = %path.display(), "truncated after {MAX_LINES} lines");
    }

    Ok(CaptureOutcome::Captured { lines, truncated })
}

fn write_opening<W: Write>(sink: &mut W, name: &OsStr, suffix: &[u8]) -> io::Result<()> {
    sink.write_all(&name_bytes(name))?;
    sink.write_all(suffix)
}

#[cfg(unix)]
fn name_bytes(name: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(name.as_bytes())
}

#[cfg(not(unix))]
fn name_bytes(name: &OsStr) -> Cow<'_, [u8]> {
    match name.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}

fn write_closing<W: Write>(sink: &mut W) -> io::Result<()> {
    writeln!(sink, "] (DETECTED ERROR COUNT: {DETECTED_ERROR_COUNT})")
}

/// Copy up to [`MAX_LINES`] chunks from `reader` into `sink`
///
/// A read error ends the body early, the same as end of file.
fn copy_lines<R: BufRead, W: Write>(
    reader: &mut R,
    sink: &mut W,
    path: &Path,
) -> io::Result<(usize, bool)> {
    let mut chunk = Vec::with_capacity(READ_CHUNK_LIMIT);
    let mut lines = 0;

    loop {
        match read_chunk(reader, &mut chunk, READ_CHUNK_LIMIT) {
            Ok(0) => return Ok((lines, false)),
            Ok(_) => {}
            Err(e) => {
                warn!(path = %path.display(), error = %e, "read failed, content cut short");
                return Ok((lines, false));
            }
        }

        if lines == MAX_LINES {
            sink.write_all(TRUNCATION_MARKER)?;
            return Ok((lines, true));
        }

        sink.write_all(&chunk)?;
        lines += 1;
    }
}

/// Read one chunk: bytes up to and including `\n`, or at most `limit` bytes
fn read_chunk<R: BufRead>(reader: &mut R, chunk: &mut Vec<u8>, limit: usize) -> io::Result<usize> {
    chunk.clear();

    while chunk.len() < limit {
        let available = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            break;
        }

        let room = limit - chunk.len();
        let window = &available[..available.len().min(room)];
        let (used, newline) = match window.iter().position(|&b| b == b'\n') {
            Some(idx) => (idx + 1, true),
            None => (window.len(), false),
        };

        chunk.extend_from_slice(&window[..used]);
        reader.consume(used);

        if newline {
            break;
        }
    }

    Ok(chunk.len())
}
