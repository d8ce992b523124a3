//! Bounded file access for SPLICE pattern data.
//!
//! This module owns everything between the filesystem and the decoder: the
//! memory-mapped read of a pattern file, the hard 1024-byte decode window,
//! and the low-level parsing primitives built on top of the loaded bytes.
//!
//! # Key Components
//!
//! - [`crate::file::parser::Parser`] - cursor-based reader over the decode window
//! - [`crate::file::io`] - endian-aware primitive reads used by the parser
//! - `read_window` - maps a file and copies out at most [`DECODE_WINDOW`] bytes
//!
//! The window is a fixed constant of the decoder, not a configuration knob:
//! bytes past it never influence a decode, no matter how large the file is.

pub mod io;
pub mod parser;

use std::{fs, path::Path};

use memmap2::Mmap;

use crate::{Error, Result};

/// Maximum number of bytes of a pattern file the decoder ever sees.
///
/// Larger files are silently truncated to this length before decoding.
pub const DECODE_WINDOW: usize = 1024;

/// Read at most [`DECODE_WINDOW`] bytes from the file at `path`.
///
/// The file is memory-mapped and the window copied into an owned buffer, so
/// the decode never aliases the mapping.
///
/// # Errors
/// Returns [`Error::FileError`] if the file cannot be opened or inspected,
/// [`Error::Empty`] for zero-length files, and [`Error::Error`] if memory
/// mapping fails.
pub(crate) fn read_window(path: &Path) -> Result<Vec<u8>> {
    let file = fs::File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Err(Error::Empty);
    }

    let mmap = match unsafe { Mmap::map(&file) } {
        Ok(mmap) => mmap,
        Err(error) => return Err(Error::Error(error.to_string())),
    };

    let window = mmap.len().min(DECODE_WINDOW);
    Ok(mmap[..window].to_vec())
}
