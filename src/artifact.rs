//! Output artifact creation
//!
//! The bundle is written into a temporary file next to the target and moved
//! over it only once everything has been written. A failed run leaves any
//! previous artifact untouched and no partial file behind.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{BundleError, Result, artifact_create_failed};

/// Default artifact file name, created in the current directory
pub const DEFAULT_ARTIFACT: &str = ".bundler";

/// Create `target` from whatever `write` produces
pub fn write_atomically<F>(target: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<&File>) -> Result<()>,
{
    let dir = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let display = target.display().to_string();

    let tmp = NamedTempFile::new_in(dir)
        .map_err(|e| artifact_create_failed(display.clone(), e.to_string()))?;

    {
        let mut writer = BufWriter::new(tmp.as_file());
        write(&mut writer).map_err(|e| match e {
            BundleError::IoError { message } => artifact_create_failed(display.clone(), message),
            other => other,
        })?;
        writer
            .flush()
            .map_err(|e| artifact_create_failed(display.clone(), e.to_string()))?;
    }

    tmp.persist(target)
        .map_err(|e| artifact_create_failed(display, e.error.to_string()))?;
    Ok(())
}
