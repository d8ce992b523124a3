//! Convenient re-exports of the most commonly used types.
//!
//! ```rust,no_run
//! use splice::prelude::*;
//!
//! let pattern = Pattern::from_file("pattern_1.splice".as_ref())?;
//! print!("{pattern}");
//! # Ok::<(), splice::Error>(())
//! ```

pub use crate::{Error, Parser, Pattern, Result, Track, STEP_COUNT};
