//! Various unsorted geometric utilities.

pub use self::isometry_ops::IsometryOps;

mod isometry_ops;
