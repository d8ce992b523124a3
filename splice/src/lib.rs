#![deny(missing_docs)]
//#![deny(unsafe_code)]
// - 'file/mod.rs' uses mmap to map a file into memory

//! # splice
//!
//! A decoder for the SPLICE binary drum machine pattern format.
//!
//! SPLICE files store one drum pattern: a hardware version string, a tempo in
//! beats per minute, and a sequence of instrument tracks with sixteen step
//! cells each. The file begins with the magic text `"SPLICE"`, carries the
//! tempo as a little-endian `f32` at the fixed absolute offset 46, and ends
//! with a self-terminating run of track records whose count is not stored in
//! the file. Only the first 1024 bytes of a file are ever decoded.
//!
//! ## Features
//!
//! - **Permissive decoding** - truncated or short inputs degrade into partial
//!   patterns instead of hard failures, matching the hardware's own tooling
//! - **Bounds-checked parsing** - a cursor-based [`Parser`] validates every
//!   read against the decode window
//! - **Canonical reports** - [`Pattern`] renders the fixed multi-line text
//!   report via [`std::fmt::Display`], byte-exact for output diffing
//! - **Memory safe** - built in Rust with explicit error handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use splice::Pattern;
//! use std::path::Path;
//!
//! let pattern = Pattern::from_file(Path::new("pattern_1.splice"))?;
//! println!("Saved with version {}", pattern.version);
//! print!("{pattern}");
//! # Ok::<(), splice::Error>(())
//! ```
//!
//! Buffers that are already in memory decode through [`Pattern::from_mem`]:
//!
//! ```rust,no_run
//! use splice::Pattern;
//!
//! let data = std::fs::read("pattern_1.splice")?;
//! let pattern = Pattern::from_mem(&data)?;
//! assert_eq!(pattern.tracks.len(), 6);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error Handling
//!
//! The only hard decode error is a missing `"SPLICE"` header, surfaced as
//! [`Error::HeaderMismatch`] naming the offending input. Every other anomaly
//! (truncated fields, an oversized track id, a failed tempo read) ends the
//! affected read step and leaves the field at its default value:
//!
//! ```rust,no_run
//! use splice::{Error, Pattern};
//! use std::path::Path;
//!
//! match Pattern::from_file(Path::new("mystery.bin")) {
//!     Ok(pattern) => println!("{} tracks", pattern.tracks.len()),
//!     Err(Error::HeaderMismatch { path }) => eprintln!("{path} is not a SPLICE file"),
//!     Err(e) => eprintln!("error: {e}"),
//! }
//! ```

pub(crate) mod error;
pub(crate) mod file;

/// Convenient re-exports of the most commonly used types.
pub mod prelude;

/// The SPLICE data model, decoder and text report formatter.
pub mod pattern;

/// `splice` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is
/// always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

pub use error::Error;

pub use file::{io::SpliceIO, parser::Parser, DECODE_WINDOW};

pub use pattern::{Pattern, Track, STEP_COUNT};
