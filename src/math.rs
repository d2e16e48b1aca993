//! Aliases for mathematical types.

pub use na::{Isometry3, Matrix3, Point3, UnitQuaternion, UnitVector3, Vector3};

/// The scalar type used throughout this crate.
pub type Real = f32;

/// The default tolerance used for geometric operations.
pub const DEFAULT_EPSILON: Real = Real::EPSILON;

/// The dimension of the space.
pub const DIM: usize = 3;

/// The point type.
pub use Point3 as Point;

/// The vector type.
pub use Vector3 as Vector;

/// The unit vector type.
pub use UnitVector3 as UnitVector;

/// The matrix type.
pub use Matrix3 as Matrix;

/// The transformation matrix type.
pub use Isometry3 as Isometry;

/// The rotation type.
pub type Rotation<N> = UnitQuaternion<N>;
