//! Count-prefixed ordered lists.
//!
//! Resources store child collections as a little-endian u32 count followed
//! by each element in order. The count-only variant advances the cursor
//! exactly as a full read would and sums the per-element record totals.

use crate::core::GmRecord;
use crate::io::{Reader, Writer};
use crate::util::Result;

/// Write `items` as a count-prefixed list.
pub fn write_list<T: GmRecord>(w: &mut Writer, items: &[T]) -> Result<()> {
    w.write_u32(items.len() as u32)?;
    for item in items {
        item.write(w)?;
    }
    Ok(())
}

/// Read a count-prefixed list.
pub fn read_list<T: GmRecord>(r: &mut Reader<'_>) -> Result<Vec<T>> {
    let count = r.read_u32()? as usize;
    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        items.push(T::read(r)?);
    }
    Ok(items)
}

/// Count-only pass over a list: skip every element, returning the summed
/// per-element totals.
pub fn scan_list<T: GmRecord>(r: &mut Reader<'_>) -> Result<u32> {
    let count = r.read_u32()?;
    let mut total = 0u32;
    for _ in 0..count {
        total += T::scan(r)?;
    }
    Ok(total)
}
