//! The record serialization protocol.
//!
//! Every resource nested in a data file implements [`GmRecord`]. The
//! `scan` operation is the count-only counterpart of `read`: it advances
//! the cursor over exactly the bytes `read` would consume without
//! materializing the value, and reports how many records it covered. The
//! container layer uses the totals to pre-size its object table before the
//! real parse.

use crate::io::{Reader, Writer};
use crate::util::Result;

/// A record that can be serialized into a data file.
pub trait GmRecord: Sized {
    /// Serialize this record.
    fn write(&self, w: &mut Writer) -> Result<()>;

    /// Deserialize one record.
    fn read(r: &mut Reader<'_>) -> Result<Self>;

    /// Skip one record, returning `1 +` the number of nested child records.
    fn scan(r: &mut Reader<'_>) -> Result<u32>;
}
