//! Final bundle assembly
//!
//! Sections are always written in this order:
//! START, STAT, NAMES, DIR-NAME, BUNDLE-ID, PROJECT-TYPE, BUNDLE-NAME,
//! BUNDLE-DESCRIPTION, END, the license/author trailer, and FILE-CONTENTS
//! followed by the staged blocks byte for byte.

use std::io::Write;

use crate::error::Result;
use crate::metadata::BundleMetadata;
use crate::staging::StagingArea;
use crate::stats::{TypeStats, percentage};

/// Write everything up to and including the FILE-CONTENTS marker line
pub fn write_header<W: Write>(
    out: &mut W,
    stats: &TypeStats,
    total_files: usize,
    metadata: &BundleMetadata,
) -> std::io::Result<()> {
    out.write_all(b"<! START !>\n\n")?;

    out.write_all(b"<! STAT !>\n")?;
    let stat_line = stats
        .entries()
        .iter()
        .map(|s| format!("%{:.1} {}", percentage(s.count, total_files), s.label))
        .collect::<Vec<_>>()
        .join(" | ");
    writeln!(out, "{stat_line}\n")?;

    out.write_all(b"<! NAMES !>\n")?;
    for stat in stats.entries() {
        writeln!(out, "{} | file", stat.label)?;
    }
    out.write_all(b"\n")?;

    writeln!(out, "<! DIR-NAME !>\n\"{}\"\n", metadata.root_path)?;
    writeln!(out, "<! BUNDLE-ID !>\n\"{}\"\n", metadata.bundle_id)?;

    out.write_all(b"<! PROJECT-TYPE !>\n")?;
    let project_types = stats
        .entries()
        .iter()
        .map(|s| format!("[{}]", s.label))
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "{project_types}\n")?;

    writeln!(out, "<! BUNDLE-NAME !>\n\"{}\"\n", metadata.package_name)?;
    writeln!(
        out,
        "<! BUNDLE-DESCRIPTION !>\n\"{}\"\n",
        metadata.description
    )?;
    out.write_all(b"<! END !>\n\n")?;

    writeln!(
        out,
        "VIEW LICENSE IN <{}>, CANNOT BE COPIED.",
        metadata.license_ref
    )?;
    writeln!(out, "THIS PROJECT IS MADE BY AUTHOR [{}].\n", metadata.author)?;
    out.write_all(b"PROJECT SUPPORTED BY BUNDLEME\n")?;
    out.write_all(b"PROJECT USES BUNDLEME FOR BUNDLING PROCESS\n\n")?;

    out.write_all(b"<! FILE-CONTENTS !>\n")
}

/// Write the complete bundle to `out`, replaying `staged` after the header
pub fn assemble<W: Write>(
    out: &mut W,
    stats: &TypeStats,
    total_files: usize,
    staged: StagingArea,
    metadata: &BundleMetadata,
) -> Result<()> {
    write_header(out, stats, total_files, metadata)?;
    staged.replay_into(out)?;
    out.flush()?;
    Ok(())
}
