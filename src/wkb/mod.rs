//! Recursive decoding of well-known-binary geometry bodies.
//!
//! Two engines walk the same variant tree: an envelope engine folding one
//! ordinate's minimum or maximum across every coordinate, and an emptiness
//! engine classifying the tree bottom-up. Both thread a single [`Cursor`]
//! through every recursive step so an enclosing aggregate can resume exactly
//! where a member body ended.

mod collection;
mod linestring;
mod point;
mod polygon;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::cursor::{Cursor, Endianness};
use crate::datatypes::{Dimensions, Extremum, Ordinate};
use crate::error::{GpkgError, GpkgResult};

const HAS_Z_BIT: u32 = 0x8000_0000;
const HAS_M_BIT: u32 = 0x4000_0000;
const HAS_SRID_BIT: u32 = 0x2000_0000;

/// The seven concrete WKB geometry kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum GeometryKind {
    Point = 1,
    LineString = 2,
    Polygon = 3,
    MultiPoint = 4,
    MultiLineString = 5,
    MultiPolygon = 6,
    GeometryCollection = 7,
}

struct NodeHeader {
    kind: GeometryKind,
    dims: Dimensions,
    byte_order: Endianness,
}

/// Decode one node's byte-order marker and type word.
///
/// Z and M presence are encoded redundantly: as the EWKB-style high bits and
/// as the ISO code ranges (type + 1000/2000/3000); either encoding switches
/// the flag on. The byte-order marker overrides `inherited` for this node
/// and its descendants only when it is an explicit 0 or 1.
fn read_node_header(
    cursor: &mut Cursor<'_>,
    inherited: Endianness,
    expected: Option<GeometryKind>,
) -> GpkgResult<NodeHeader> {
    let byte_order = Endianness::from_marker(cursor.read_u8()?).unwrap_or(inherited);
    let type_word = cursor.read_u32(byte_order)?;

    let low = type_word & 0xffff;
    let has_z = type_word & HAS_Z_BIT != 0 || low / 1000 == 1 || low / 1000 == 3;
    let has_m = type_word & HAS_M_BIT != 0 || low / 1000 == 2 || low / 1000 == 3;

    if type_word & HAS_SRID_BIT != 0 {
        cursor.skip(4)?;
    }

    let code = low % 1000;
    let kind =
        GeometryKind::try_from(code).map_err(|_| GpkgError::UnsupportedGeometryType(code))?;
    if let Some(expected) = expected {
        if kind != expected {
            return Err(GpkgError::GeometryTypeMismatch {
                expected,
                found: kind,
            });
        }
    }

    Ok(NodeHeader {
        kind,
        dims: Dimensions { has_z, has_m },
        byte_order,
    })
}

/// Keep the stricter of `acc` and `value`. NaN never displaces a running
/// value; a NaN first element therefore sticks, as the strict comparisons
/// below are false for it on both sides.
fn fold(acc: f64, value: f64, extremum: Extremum) -> f64 {
    match extremum {
        Extremum::Min => {
            if value < acc {
                value
            } else {
                acc
            }
        }
        Extremum::Max => {
            if value > acc {
                value
            } else {
                acc
            }
        }
    }
}

/// Compute one extreme of one geometry node, recursing into aggregates.
///
/// The ordinate is re-targeted against this node's dimensionality before
/// dispatch, and the re-targeted ordinate is what aggregate members inherit.
pub(crate) fn read_extreme(
    cursor: &mut Cursor<'_>,
    inherited: Endianness,
    ordinate: Ordinate,
    extremum: Extremum,
    expected: Option<GeometryKind>,
) -> GpkgResult<f64> {
    let node = read_node_header(cursor, inherited, expected)?;
    let ordinate = ordinate.retarget(node.dims)?;
    match node.kind {
        GeometryKind::Point => point::read_ordinate(cursor, node.byte_order, node.dims, ordinate),
        GeometryKind::LineString => {
            linestring::fold_extreme(cursor, node.byte_order, node.dims, ordinate, extremum)
        }
        GeometryKind::Polygon => {
            polygon::fold_extreme(cursor, node.byte_order, node.dims, ordinate, extremum)
        }
        GeometryKind::MultiPoint => collection::fold_extreme(
            cursor,
            node.byte_order,
            ordinate,
            extremum,
            Some(GeometryKind::Point),
        ),
        GeometryKind::MultiLineString => collection::fold_extreme(
            cursor,
            node.byte_order,
            ordinate,
            extremum,
            Some(GeometryKind::LineString),
        ),
        GeometryKind::MultiPolygon => collection::fold_extreme(
            cursor,
            node.byte_order,
            ordinate,
            extremum,
            Some(GeometryKind::Polygon),
        ),
        GeometryKind::GeometryCollection => {
            collection::fold_extreme(cursor, node.byte_order, ordinate, extremum, None)
        }
    }
}

/// Classify one geometry node as empty or not, recursing into aggregates.
pub(crate) fn read_emptiness(
    cursor: &mut Cursor<'_>,
    inherited: Endianness,
    expected: Option<GeometryKind>,
) -> GpkgResult<bool> {
    let node = read_node_header(cursor, inherited, expected)?;
    match node.kind {
        GeometryKind::Point => point::is_empty(cursor, node.byte_order, node.dims),
        GeometryKind::LineString => linestring::is_empty(cursor, node.byte_order, node.dims),
        GeometryKind::Polygon => polygon::is_empty(cursor, node.byte_order, node.dims),
        GeometryKind::MultiPoint => {
            collection::is_empty(cursor, node.byte_order, Some(GeometryKind::Point))
        }
        GeometryKind::MultiLineString => {
            collection::is_empty(cursor, node.byte_order, Some(GeometryKind::LineString))
        }
        GeometryKind::MultiPolygon => {
            collection::is_empty(cursor, node.byte_order, Some(GeometryKind::Polygon))
        }
        GeometryKind::GeometryCollection => collection::is_empty(cursor, node.byte_order, None),
    }
}
