//! Member folding shared by MultiPoint, MultiLineString, MultiPolygon and
//! GeometryCollection bodies: a member count followed by that many complete
//! geometry bodies. The three Multi* aggregates constrain their members to
//! one kind; a GeometryCollection does not.

use super::GeometryKind;
use crate::cursor::{Cursor, Endianness};
use crate::datatypes::{Extremum, Ordinate};
use crate::error::{GpkgError, GpkgResult};

/// Fold the requested extreme across every member. Members inherit this
/// node's byte order and the (possibly re-targeted) ordinate, and re-derive
/// their own dimensionality from their own type words.
pub(super) fn fold_extreme(
    cursor: &mut Cursor<'_>,
    byte_order: Endianness,
    ordinate: Ordinate,
    extremum: Extremum,
    member_kind: Option<GeometryKind>,
) -> GpkgResult<f64> {
    let num_members = cursor.read_u32(byte_order)?;
    if num_members == 0 {
        return Err(GpkgError::EmptyGeometry);
    }
    let mut acc = super::read_extreme(cursor, byte_order, ordinate, extremum, member_kind)?;
    for _ in 1..num_members {
        let value = super::read_extreme(cursor, byte_order, ordinate, extremum, member_kind)?;
        acc = super::fold(acc, value, extremum);
    }
    Ok(acc)
}

/// An aggregate is empty iff it has no members or every member is empty.
///
/// A non-empty member does not stop the walk: every member body must be
/// consumed so an enclosing aggregate can resume at the right offset. Only
/// an error aborts immediately.
pub(super) fn is_empty(
    cursor: &mut Cursor<'_>,
    byte_order: Endianness,
    member_kind: Option<GeometryKind>,
) -> GpkgResult<bool> {
    let num_members = cursor.read_u32(byte_order)?;
    let mut empty = true;
    for _ in 0..num_members {
        if !super::read_emptiness(cursor, byte_order, member_kind)? {
            empty = false;
        }
    }
    Ok(empty)
}
