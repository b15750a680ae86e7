//! Coordinate-tuple decoding shared by every leaf of the variant tree.

use crate::cursor::{Cursor, Endianness};
use crate::datatypes::{Dimensions, Ordinate};
use crate::error::{GpkgError, GpkgResult};

/// Read the requested ordinate of one coordinate tuple, leaving the cursor
/// at the end of the tuple. The whole tuple is bounds-checked as one block
/// before anything is decoded.
pub(super) fn read_ordinate(
    cursor: &mut Cursor<'_>,
    byte_order: Endianness,
    dims: Dimensions,
    ordinate: Ordinate,
) -> GpkgResult<f64> {
    let size = dims.size();
    cursor.ensure(size as u64 * 8)?;
    let slot = ordinate.slot();
    if slot >= size {
        return Err(GpkgError::OrdinateNotApplicable {
            ordinate,
            dimensions: size,
        });
    }
    cursor.skip(slot as u64 * 8)?;
    let value = cursor.read_f64(byte_order)?;
    cursor.skip((size - slot - 1) as u64 * 8)?;
    Ok(value)
}

/// A point is empty iff every one of its ordinates is NaN.
///
/// WKB has no empty point encoding, so producers write all-NaN tuples. The
/// first non-NaN ordinate settles the answer; the remaining ordinates are
/// skipped by count, not inspected.
pub(super) fn is_empty(
    cursor: &mut Cursor<'_>,
    byte_order: Endianness,
    dims: Dimensions,
) -> GpkgResult<bool> {
    let size = dims.size();
    cursor.ensure(size as u64 * 8)?;
    for slot in 0..size {
        if !cursor.read_f64(byte_order)?.is_nan() {
            cursor.skip((size - slot - 1) as u64 * 8)?;
            return Ok(false);
        }
    }
    Ok(true)
}
