//! Envelope and emptiness queries over GeoPackage binary geometry blobs.
//!
//! A GeoPackage geometry value is a small container header (magic bytes,
//! flags, a spatial-reference id, an optional precomputed envelope) wrapped
//! around a well-known-binary geometry body. This crate decodes those blobs
//! just far enough to answer two questions without materializing the
//! geometry: the minimum or maximum of one coordinate axis, and whether the
//! geometry is logically empty.
//!
//! ```
//! use gpkg_envelope::{max_y, min_x};
//!
//! // "GP", version 0, little-endian flags, no envelope; SRID; XY point.
//! let mut blob = vec![0x47, 0x50, 0x00, 0x01];
//! blob.extend_from_slice(&4326_u32.to_le_bytes());
//! blob.push(1);
//! blob.extend_from_slice(&1_u32.to_le_bytes());
//! blob.extend_from_slice(&1.0_f64.to_le_bytes());
//! blob.extend_from_slice(&2.0_f64.to_le_bytes());
//!
//! assert_eq!(min_x(&blob), Some(1.0));
//! assert_eq!(max_y(&blob), Some(2.0));
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub mod cursor;
pub mod datatypes;
pub mod error;
pub mod header;
pub mod query;
pub mod wkb;

pub use cursor::Endianness;
pub use datatypes::{Dimensions, Extremum, Ordinate};
pub use error::{GpkgError, GpkgResult};
pub use header::EnvelopeType;
pub use query::{
    geometry_extreme, geometry_is_empty, is_empty, max_m, max_x, max_y, max_z, min_m, min_x,
    min_y, min_z, QueryOptions, MIN_EMPTINESS_BLOB_LEN, MIN_EXTREME_BLOB_LEN,
};
pub use wkb::GeometryKind;
