use std::f32::consts::FRAC_PI_2;

use manifold3d::bounding_volume::Aabb;
use manifold3d::math::{Isometry, Point, Vector};
use manifold3d::na::{Translation3, UnitQuaternion};
use manifold3d::query::{
    CollidablePair, ConvexCollidable, MeshCollidable, MeshConvexContactManifold, Ray, RayHit,
};
use manifold3d::shape::{
    Ball, MeshFlags, MeshShape, MeshSolidity, Triangle, TriangleIndices, TriangleSidedness,
};

/// A mesh double whose "spatial index" is a linear scan over triangle
/// bounds.
struct LinearMesh {
    triangles: Vec<Triangle>,
}

impl MeshShape for LinearMesh {
    fn triangle(&self, id: u32) -> Triangle {
        self.triangles[id as usize]
    }

    fn triangle_indices(&self, id: u32) -> TriangleIndices {
        TriangleIndices {
            a: id * 3,
            b: id * 3 + 1,
            c: id * 3 + 2,
        }
    }

    fn intersect_local_aabb(&self, aabb: &Aabb, out: &mut Vec<u32>) {
        for (i, triangle) in self.triangles.iter().enumerate() {
            let bounds = Aabb::from_points([&triangle.a, &triangle.b, &triangle.c]);
            if bounds.intersects(aabb) {
                out.push(i as u32);
            }
        }
    }

    fn solidity(&self) -> MeshSolidity {
        MeshSolidity::DoubleSided
    }

    fn solid_sidedness(&self) -> TriangleSidedness {
        TriangleSidedness::DoubleSided
    }

    fn flags(&self) -> MeshFlags {
        MeshFlags::empty()
    }

    fn ray_origin_inside(&self, _: &Ray) -> Option<RayHit> {
        None
    }
}

fn wall_mesh() -> LinearMesh {
    // One triangle in the x = 2 plane.
    LinearMesh {
        triangles: vec![Triangle::new(
            Point::new(2.0, -1.0, -1.0),
            Point::new(2.0, 1.0, -1.0),
            Point::new(2.0, 0.0, 1.0),
        )],
    }
}

fn pair<'a>(
    ball: &'a Ball,
    mesh: &'a LinearMesh,
    mesh_pose: Isometry<f32>,
    convex_vel: Vector<f32>,
    mesh_vel: Vector<f32>,
) -> CollidablePair<'a> {
    CollidablePair {
        convex: ConvexCollidable {
            shape: ball,
            pose: Isometry::identity(),
            linvel: convex_vel,
        },
        mesh: MeshCollidable {
            shape: mesh,
            pose: mesh_pose,
            linvel: mesh_vel,
        },
    }
}

#[test]
fn swept_query_grows_towards_the_motion_only() {
    let ball = Ball::new(0.5);
    let mesh = wall_mesh();
    let mut manifold = MeshConvexContactManifold::new();

    // Moving towards the wall reaches it within one second.
    let approaching = pair(
        &ball,
        &mesh,
        Isometry::identity(),
        Vector::new(2.0, 0.0, 0.0),
        Vector::zeros(),
    );
    assert_eq!(manifold.find_overlapping_triangles(1.0, &approaching), 1);

    // Moving away does not, even though the speed is the same.
    let receding = pair(
        &ball,
        &mesh,
        Isometry::identity(),
        Vector::new(-2.0, 0.0, 0.0),
        Vector::zeros(),
    );
    assert_eq!(manifold.find_overlapping_triangles(1.0, &receding), 0);

    // Standing still does not either.
    let still = pair(
        &ball,
        &mesh,
        Isometry::identity(),
        Vector::zeros(),
        Vector::zeros(),
    );
    assert_eq!(manifold.find_overlapping_triangles(1.0, &still), 0);
}

#[test]
fn relative_velocity_is_expressed_in_mesh_space() {
    let ball = Ball::new(0.5);
    let mesh = wall_mesh();
    let mut manifold = MeshConvexContactManifold::new();

    // Rotate the mesh 90 degrees about Y: its local +X axis now points
    // along world -Z, so only motion along world -Z approaches the wall.
    let mesh_pose = Isometry::from_parts(
        Translation3::identity(),
        UnitQuaternion::from_axis_angle(&Vector::y_axis(), FRAC_PI_2),
    );

    let approaching = pair(
        &ball,
        &mesh,
        mesh_pose,
        Vector::new(0.0, 0.0, -2.0),
        Vector::zeros(),
    );
    assert_eq!(manifold.find_overlapping_triangles(1.0, &approaching), 1);

    let receding = pair(
        &ball,
        &mesh,
        mesh_pose,
        Vector::new(0.0, 0.0, 2.0),
        Vector::zeros(),
    );
    assert_eq!(manifold.find_overlapping_triangles(1.0, &receding), 0);
}

#[test]
fn mesh_velocity_cancels_shared_motion() {
    let ball = Ball::new(0.5);
    let mesh = wall_mesh();
    let mut manifold = MeshConvexContactManifold::new();

    // Both bodies move together: no relative motion, no overlap.
    let common = Vector::new(2.0, 0.0, 0.0);
    let drifting = pair(&ball, &mesh, Isometry::identity(), common, common);
    assert_eq!(manifold.find_overlapping_triangles(1.0, &drifting), 0);
}
