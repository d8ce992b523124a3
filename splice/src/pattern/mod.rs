//! The decoded SPLICE data model.
//!
//! This module defines the two entities a pattern file decodes into:
//! [`Pattern`] (the whole file) and [`Track`] (one instrument lane). Both are
//! produced once by a decode call and read-only afterwards; nothing in the
//! library mutates a pattern after the decode that built it returns.
//!
//! # Example
//!
//! ```rust,no_run
//! use splice::Pattern;
//! use std::path::Path;
//!
//! let pattern = Pattern::from_file(Path::new("pattern_1.splice"))?;
//! println!("Tempo: {} bpm", pattern.tempo);
//! for track in &pattern.tracks {
//!     println!("({}) {}", track.id, track.name);
//! }
//! # Ok::<(), splice::Error>(())
//! ```

pub mod decoder;

mod report;

use std::path::Path;

use crate::{
    file::{read_window, DECODE_WINDOW},
    Error, Result,
};

/// Number of step cells in every track, regardless of how many bytes the file
/// actually provided for them.
pub const STEP_COUNT: usize = 16;

/// The high level representation of the drum pattern contained in a `.splice`
/// file.
///
/// A pattern holds the hardware version string, the tempo in beats per
/// minute, and the tracks in file order. Duplicate track ids are permitted;
/// no uniqueness is enforced anywhere in the format.
///
/// Rendering via [`std::fmt::Display`] produces the canonical multi-line text
/// report, byte-exact including the tab separator and trailing newline.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    /// Hardware version string stored in the file, e.g. `"0.808-alpha"`.
    pub version: String,
    /// Tempo in beats per minute; `0.0` if the tempo field could not be read.
    pub tempo: f32,
    /// Instrument tracks in file order.
    pub tracks: Vec<Track>,
}

/// One instrument lane of a pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// Track id. The format accepts 0–255; larger values act as the
    /// end-of-tracks sentinel and are never stored.
    pub id: u8,
    /// Instrument label, length-prefixed in the file.
    pub name: String,
    /// The 16 step cells: `0` is silent, any non-zero value is a hit. Short
    /// reads at end-of-input leave trailing cells at `0`.
    pub steps: [u8; STEP_COUNT],
}

impl Pattern {
    /// Decode the drum pattern file found at the provided path.
    ///
    /// At most the first [`DECODE_WINDOW`](crate::DECODE_WINDOW) bytes of the
    /// file are read; anything beyond has no effect on the result.
    ///
    /// # Errors
    /// Returns [`Error::HeaderMismatch`] naming `path` if the file does not
    /// begin with the `SPLICE` magic text, [`Error::Empty`] for zero-length
    /// files, and [`Error::FileError`] / [`Error::Error`] for I/O and mapping
    /// failures. Truncated or otherwise short content is not an error; it
    /// decodes into a partial pattern.
    pub fn from_file(path: &Path) -> Result<Pattern> {
        let data = read_window(path)?;
        decoder::decode(&data, &path.display().to_string())
    }

    /// Decode a drum pattern from an in-memory buffer.
    ///
    /// The buffer is truncated to [`DECODE_WINDOW`](crate::DECODE_WINDOW)
    /// bytes first, so a buffer and the file it was read from always decode
    /// identically.
    ///
    /// # Errors
    /// Returns [`Error::HeaderMismatch`] (naming the source as `<memory>`)
    /// if the buffer does not begin with the `SPLICE` magic text, and
    /// [`Error::Empty`] for an empty buffer.
    pub fn from_mem(data: &[u8]) -> Result<Pattern> {
        if data.is_empty() {
            return Err(Error::Empty);
        }

        let window = data.len().min(DECODE_WINDOW);
        decoder::decode(&data[..window], "<memory>")
    }
}
