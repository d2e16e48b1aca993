//! Shapes and shape capabilities used by the narrow phase.

pub use self::ball::Ball;
pub use self::convex::ConvexShape;
pub use self::cuboid::Cuboid;
pub use self::mesh::{MeshFlags, MeshShape, MeshSolidity};
pub use self::triangle::{ConfiguredTriangle, Triangle, TriangleIndices, TriangleSidedness};

mod ball;
mod convex;
mod cuboid;
mod mesh;
mod triangle;
