//! Capabilities a mesh collidable's shape must expose to the narrow phase.

use crate::bounding_volume::Aabb;
use crate::query::{Ray, RayHit};
use crate::shape::{Triangle, TriangleIndices, TriangleSidedness};

#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
/// Flags affecting the narrow phase's treatment of a mesh.
pub struct MeshFlags(u8);

bitflags::bitflags! {
    impl MeshFlags: u8 {
        /// If set, contact generation takes adjacent-triangle information
        /// into account to suppress the spurious bumps a convex body can
        /// experience when sliding across triangle boundaries.
        const IMPROVE_BOUNDARY_BEHAVIOR = 1;
    }
}

/// How a mesh's triangles are interpreted by collision detection.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MeshSolidity {
    /// Triangles are one-sided, colliding with their clockwise face.
    Clockwise,
    /// Triangles are one-sided, colliding with their counterclockwise face.
    Counterclockwise,
    /// Triangles collide on both faces.
    DoubleSided,
    /// The mesh is the closed boundary of a solid volume. A convex body that
    /// sinks below the shell keeps colliding even when no triangle touches
    /// it.
    Solid,
}

/// The capabilities a mesh collidable's shape must expose to the narrow
/// phase.
///
/// The triangle store, the spatial index and the inside/outside predicate
/// are supplied by the mesh implementation and assumed correct. All methods
/// take `&self`: during a step, many manifolds may read the same mesh
/// concurrently from different worker threads.
pub trait MeshShape {
    /// The local-space vertices of the triangle `id`.
    fn triangle(&self, id: u32) -> Triangle;

    /// The mesh vertex indices of the triangle `id`.
    fn triangle_indices(&self, id: u32) -> TriangleIndices;

    /// Appends to `out` the ids of all triangles whose bounds intersect
    /// `aabb`, expressed in the mesh's local space.
    fn intersect_local_aabb(&self, aabb: &Aabb, out: &mut Vec<u32>);

    /// How this mesh's triangles are interpreted.
    fn solidity(&self) -> MeshSolidity;

    /// The sidedness applied to triangles when the mesh is
    /// [`MeshSolidity::Solid`].
    fn solid_sidedness(&self) -> TriangleSidedness;

    /// Flags affecting contact generation against this mesh.
    fn flags(&self) -> MeshFlags;

    /// Tests whether `ray.origin` lies inside this mesh's closed shell.
    ///
    /// The ray is expressed in the mesh's local space. Returns the shell
    /// intersection along `ray.dir` if the origin is inside, `None`
    /// otherwise.
    fn ray_origin_inside(&self, ray: &Ray) -> Option<RayHit>;
}
