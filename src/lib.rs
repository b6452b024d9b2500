//! # gmdata
//!
//! Rust implementation of the animation curve resource of the GameMaker
//! Studio data file format (`data.win` and siblings).
//!
//! The resource evolved across two on-disk layouts: a fixed 12-byte sample
//! point record, and a 24-byte record with Bezier control handles that
//! appeared in runtime 2.3.1. No version field is stored alongside the
//! record; when the file version is not yet known, it is inferred from the
//! byte shape of the first point during the count-only scan. See
//! [`model::animation_curve`] for the details.
//!
//! ## Modules
//!
//! - [`util`] - Errors and the crate-wide result alias
//! - [`io`] - Byte sources, cursor reader/writer, string refs, lists
//! - [`core`] - Version state and the record protocol
//! - [`model`] - The resource structs and codecs
//!
//! ## Example
//!
//! ```ignore
//! use gmdata::core::{GmRecord, GmVersion};
//! use gmdata::io::{Reader, Source};
//! use gmdata::model::AnimationCurve;
//!
//! let source = Source::open("curve.bin")?;
//! let mut reader = Reader::new(&source, GmVersion::new(2, 3, 0));
//!
//! // Pre-size the object table, detecting the point layout on the way.
//! let total = AnimationCurve::scan(&mut reader)?;
//!
//! reader.set_abs_position(0)?;
//! let curve = AnimationCurve::read(&mut reader)?;
//! ```

pub mod core;
pub mod io;
pub mod model;
pub mod util;

// Re-export commonly used types
pub use crate::core::{GmRecord, GmVersion};
pub use util::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{GmRecord, GmVersion};
    pub use crate::io::{Reader, Source, StringRef, StringTable, Writer};
    pub use crate::model::{AnimationCurve, Channel, ChannelFunction, GraphType, Point};
    pub use crate::util::{Error, Result};
}
