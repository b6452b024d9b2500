//! Utility types for the library.
//!
//! - [`Error`] / [`Result`] - Error handling

mod error;

pub use error::*;
