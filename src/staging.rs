//! Staged file contents
//!
//! Blocks are appended to an anonymous temporary file while the tree is
//! walked and replayed once, in full, when the artifact is assembled. The
//! file lives under the system temp directory and is removed by the OS as
//! soon as it is dropped, so it never shows up inside the walked tree.

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Seek, SeekFrom, Write};
use std::path::PathBuf;

use crate::error::{Result, staging_failed};

/// Returns a directory path suitable for staging files.
/// Never returns a relative path, so staging files are never created under the
/// directory being bundled (e.g. when TMPDIR=tmp and cwd is the project).
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        #[cfg(windows)]
        {
            env::var("TEMP")
                .or_else(|_| env::var("TMP"))
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
        }
        #[cfg(not(windows))]
        {
            PathBuf::from("/tmp")
        }
    }
}

/// Append-only staging buffer backed by a temporary file
pub struct StagingArea {
    writer: BufWriter<File>,
    written: u64,
}

impl StagingArea {
    /// Create an empty staging area in [`temp_dir_base`]
    pub fn new() -> Result<Self> {
        let file = tempfile::tempfile_in(temp_dir_base())
            .map_err(|e| staging_failed(format!("cannot create staging file: {e}")))?;
        Ok(Self {
            writer: BufWriter::new(file),
            written: 0,
        })
    }

    /// Number of bytes staged so far
    pub fn bytes_staged(&self) -> u64 {
        self.written
    }

    /// Copy everything staged into `out`, consuming the staging area
    pub fn replay_into<W: Write>(self, out: &mut W) -> Result<u64> {
        let mut file = self
            .writer
            .into_inner()
            .map_err(|e| staging_failed(format!("cannot flush staging file: {}", e.error())))?;
        file.seek(SeekFrom::Start(0))
            .map_err(|e| staging_failed(format!("cannot rewind staging file: {e}")))?;
        let copied = io::copy(&mut file, out)?;
        Ok(copied)
    }
}

impl Write for StagingArea {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.writer.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
