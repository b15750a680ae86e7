//! LineString bodies: a point count followed by that many coordinate tuples.
//!
//! Polygon rings reuse this layout, so the skip routine here is what keeps
//! the cursor correct when a ring's coordinates are not worth decoding.

use super::{fold, point};
use crate::cursor::{Cursor, Endianness};
use crate::datatypes::{Dimensions, Extremum, Ordinate};
use crate::error::{GpkgError, GpkgResult};

fn coordinate_bytes(num_points: u32, dims: Dimensions) -> u64 {
    num_points as u64 * dims.size() as u64 * 8
}

/// Fold the requested ordinate across every point with a strict comparison.
/// The count and the total coordinate size are validated before the first
/// tuple is decoded.
pub(super) fn fold_extreme(
    cursor: &mut Cursor<'_>,
    byte_order: Endianness,
    dims: Dimensions,
    ordinate: Ordinate,
    extremum: Extremum,
) -> GpkgResult<f64> {
    let num_points = cursor.read_u32(byte_order)?;
    if num_points == 0 {
        return Err(GpkgError::EmptyGeometry);
    }
    cursor.ensure(coordinate_bytes(num_points, dims))?;
    let mut acc = point::read_ordinate(cursor, byte_order, dims, ordinate)?;
    for _ in 1..num_points {
        let value = point::read_ordinate(cursor, byte_order, dims, ordinate)?;
        acc = fold(acc, value, extremum);
    }
    Ok(acc)
}

/// A LineString is empty iff its point count is zero. Emptiness here is
/// structural, unlike the NaN rule for points; the coordinates of a
/// non-empty LineString are skipped, not inspected.
pub(super) fn is_empty(
    cursor: &mut Cursor<'_>,
    byte_order: Endianness,
    dims: Dimensions,
) -> GpkgResult<bool> {
    let num_points = cursor.read_u32(byte_order)?;
    if num_points == 0 {
        return Ok(true);
    }
    cursor.skip(coordinate_bytes(num_points, dims))?;
    Ok(false)
}

/// Advance past a LineString body without decoding coordinates. A zero
/// point count is a failure here: skipping is only used where a ring with
/// content is required.
pub(super) fn skip(
    cursor: &mut Cursor<'_>,
    byte_order: Endianness,
    dims: Dimensions,
) -> GpkgResult<()> {
    let num_points = cursor.read_u32(byte_order)?;
    if num_points == 0 {
        return Err(GpkgError::EmptyGeometry);
    }
    cursor.skip(coordinate_bytes(num_points, dims))
}

#[cfg(test)]
mod test {
    use crate::cursor::{Cursor, Endianness};
    use crate::datatypes::{Extremum, Ordinate};
    use crate::error::GpkgError;
    use crate::test::blob;
    use crate::wkb::read_extreme;

    const POINTS: [[f64; 2]; 4] = [[3.0, -1.0], [0.5, 7.0], [-2.0, 2.0], [4.0, 4.0]];

    fn body(order: Endianness) -> Vec<u8> {
        let points: Vec<&[f64]> = POINTS.iter().map(|p| p.as_slice()).collect();
        blob::linestring_body(order, 2, &points)
    }

    fn extreme(body: &[u8], ordinate: Ordinate, extremum: Extremum) -> Result<f64, GpkgError> {
        read_extreme(
            &mut Cursor::new(body),
            Endianness::NATIVE,
            ordinate,
            extremum,
            None,
        )
    }

    #[test]
    fn extremes_match_the_flattened_coordinates() {
        for order in [Endianness::LittleEndian, Endianness::BigEndian] {
            let body = body(order);
            assert_eq!(extreme(&body, Ordinate::X, Extremum::Min).unwrap(), -2.0);
            assert_eq!(extreme(&body, Ordinate::X, Extremum::Max).unwrap(), 4.0);
            assert_eq!(extreme(&body, Ordinate::Y, Extremum::Min).unwrap(), -1.0);
            assert_eq!(extreme(&body, Ordinate::Y, Extremum::Max).unwrap(), 7.0);
        }
    }

    #[test]
    fn zero_points_has_no_extremes() {
        let body = blob::linestring_body(Endianness::LittleEndian, 2, &[]);
        assert!(matches!(
            extreme(&body, Ordinate::X, Extremum::Min),
            Err(GpkgError::EmptyGeometry)
        ));
    }

    #[test]
    fn emptiness_is_structural() {
        let empty = blob::linestring_body(Endianness::LittleEndian, 2, &[]);
        let mut cursor = Cursor::new(&empty);
        assert!(crate::wkb::read_emptiness(&mut cursor, Endianness::NATIVE, None).unwrap());

        // A single all-NaN point still makes the LineString non-empty.
        let nan_point: &[f64] = &[f64::NAN, f64::NAN];
        let body = blob::linestring_body(Endianness::LittleEndian, 2, &[nan_point]);
        let mut cursor = Cursor::new(&body);
        assert!(!crate::wkb::read_emptiness(&mut cursor, Endianness::NATIVE, None).unwrap());
    }

    #[test]
    fn undersized_coordinate_block_is_caught_up_front() {
        let mut body = body(Endianness::LittleEndian);
        body.truncate(body.len() - 1);
        assert!(matches!(
            extreme(&body, Ordinate::X, Extremum::Min),
            Err(GpkgError::Truncated { .. })
        ));
    }
}
