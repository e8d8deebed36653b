//! # dur
//!
//! This library converts between elapsed time and fixed human-readable stamp
//! notations: bare hours/minutes/seconds, `MM:SS`, `HH:MM:SS`, and
//! `HH:MM:SS.mmm`, plus the domain aliases [Stamp::Cuestamp],
//! [Stamp::Timestamp], and [Stamp::FullStamp].
//!
//! Each notation is a [Stamp] variant backed by a single [Layout] record: the
//! ordered subset of fields it carries and the patterns used to scan and
//! print them. Parsing validates shape only, so an oversized field folds into
//! the total (`"125"` as bare seconds is 2m05s). Rendering is the asymmetric
//! counterpart: a notation only prints the fields it declares, the leading
//! field absorbing everything above it.
//!
//! ```rust
//! use dur::{Elapsed, Stamp};
//!
//! let elapsed = Stamp::FullStamp.parse("01:02:03.250")?;
//! assert_eq!(elapsed, Elapsed::from_millis(3_723_250));
//!
//! let out = Stamp::Cuestamp.render(elapsed)?;
//! assert_eq!(out, "62:03");
//! # Ok::<(), dur::Error>(())
//! ```
//!
//! Notations without a milliseconds field round to the nearest whole second,
//! carrying upward (59.6s is `"01:00"` under [Stamp::MMSS]). Notations with
//! milliseconds truncate below the millisecond instead.
mod elapsed;
mod error;
mod parse;
mod render;
mod stamp;

pub use elapsed::*;
pub use error::*;
pub use parse::*;
pub use render::*;
pub use stamp::*;
