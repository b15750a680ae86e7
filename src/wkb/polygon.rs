//! Polygon bodies: a ring count followed by that many LineString-shaped
//! rings, the first being the exterior.

use super::{fold, linestring};
use crate::cursor::{Cursor, Endianness};
use crate::datatypes::{Dimensions, Extremum, Ordinate};
use crate::error::{GpkgError, GpkgResult};

/// Fold a polygon's rings.
///
/// For X and Y only the exterior ring is decoded: a well-formed polygon's
/// interior rings lie within the exterior's planar extent, so their bytes
/// are skipped (but still consumed, for the sake of any enclosing
/// aggregate). That containment is a trust assumption on the producer, not
/// something this decoder verifies. Z and M are not bounded by the exterior
/// ring's planar extent, so every interior ring is folded for them.
pub(super) fn fold_extreme(
    cursor: &mut Cursor<'_>,
    byte_order: Endianness,
    dims: Dimensions,
    ordinate: Ordinate,
    extremum: Extremum,
) -> GpkgResult<f64> {
    let num_rings = cursor.read_u32(byte_order)?;
    if num_rings == 0 {
        return Err(GpkgError::EmptyGeometry);
    }
    let mut acc = linestring::fold_extreme(cursor, byte_order, dims, ordinate, extremum)?;
    if matches!(ordinate, Ordinate::X | Ordinate::Y) {
        for _ in 1..num_rings {
            linestring::skip(cursor, byte_order, dims)?;
        }
    } else {
        for _ in 1..num_rings {
            let value = linestring::fold_extreme(cursor, byte_order, dims, ordinate, extremum)?;
            acc = fold(acc, value, extremum);
        }
    }
    Ok(acc)
}

/// A polygon is empty iff its sole ring is an empty LineString. With two or
/// more rings it is never empty, whatever the rings contain; their bytes are
/// still consumed to keep the cursor correct.
pub(super) fn is_empty(
    cursor: &mut Cursor<'_>,
    byte_order: Endianness,
    dims: Dimensions,
) -> GpkgResult<bool> {
    let num_rings = cursor.read_u32(byte_order)?;
    if num_rings == 0 {
        return Err(GpkgError::EmptyGeometry);
    }
    if num_rings == 1 {
        return linestring::is_empty(cursor, byte_order, dims);
    }
    for _ in 0..num_rings {
        linestring::skip(cursor, byte_order, dims)?;
    }
    Ok(false)
}
