use crate::math::Real;
use crate::query::contact_manifolds::{
    Contact, ContactCandidates, ContactOrigin, ContactStore, ContactSupplement, ContainmentState,
    ContainmentTracker, TrackedContact,
};
use crate::query::pair::CollidablePair;
use crate::shape::{ConfiguredTriangle, MeshSolidity, Triangle, TriangleSidedness};

/// Produces the raw contact candidates for one configured triangle.
///
/// This is the seam towards the generic triangle-vs-convex contact
/// algorithm, which is supplied by the surrounding pipeline. For each
/// triangle that survived culling, the generator receives the configured
/// triangle, the pair, and a read-only view of the persistent store, and
/// appends zero or more surface candidates for this step. Candidate ids
/// must be derived from the triangle's vertex indices so matching
/// candidates keep their id across frames.
pub trait TriangleContactGenerator {
    /// Appends this step's candidates for `triangle` to `candidates`.
    fn generate_contacts(
        &mut self,
        pair: &CollidablePair<'_>,
        triangle: &ConfiguredTriangle,
        store: &ContactStore,
        candidates: &mut ContactCandidates,
    );
}

/// A persistent contact manifold between one convex body and one
/// triangle-mesh body.
///
/// The manifold owns only per-pair state: the reusable triangle-overlap
/// buffer, the per-step candidate buffer, the persistent contact store and
/// the containment tracker. Body data is borrowed per call, so instances
/// can be pooled; call [`MeshConvexContactManifold::clear`] before
/// rebinding one to a different pair.
#[derive(Default)]
pub struct MeshConvexContactManifold {
    overlaps: Vec<u32>,
    candidates: ContactCandidates,
    store: ContactStore,
    containment: ContainmentTracker,
}

impl MeshConvexContactManifold {
    /// Creates an empty manifold.
    pub fn new() -> Self {
        Self::default()
    }

    /// The persistent contact store of this manifold.
    #[inline]
    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    /// The persistent contact store of this manifold, mutably.
    ///
    /// The external solver writes its per-contact state back through this
    /// after reading the step's contacts.
    #[inline]
    pub fn store_mut(&mut self) -> &mut ContactStore {
        &mut self.store
    }

    /// All tracked contacts of this manifold.
    #[inline]
    pub fn contacts(&self) -> &[TrackedContact] {
        self.store.contacts()
    }

    /// The current containment state of the pair.
    #[inline]
    pub fn containment_state(&self) -> ContainmentState {
        self.containment.state()
    }

    /// Runs one narrow-phase step for this pair.
    ///
    /// Culls the mesh triangles reachable within `dt`, configures each
    /// survivor, lets `generator` produce raw candidates, resolves solid
    /// containment, and folds the candidates into the persistent store.
    pub fn update(
        &mut self,
        dt: Real,
        pair: &CollidablePair<'_>,
        generator: &mut dyn TriangleContactGenerator,
    ) {
        let count = self.find_overlapping_triangles(dt, pair);

        self.candidates.clear();
        for i in 0..count {
            let triangle = self.configure_triangle(i, pair);
            generator.generate_contacts(pair, &triangle, &self.store, &mut self.candidates);
        }

        self.containment
            .process(pair, &self.candidates, &mut self.store);
        Self::merge_candidates(&mut self.store, &self.candidates, pair);
    }

    /// Computes the set of mesh triangles the convex body could reach
    /// during this step and stores their ids in the reusable overlap
    /// buffer.
    ///
    /// Returns the overlap count. Zero is meaningful: for a solid mesh it
    /// routes the step to containment resolution.
    pub fn find_overlapping_triangles(&mut self, dt: Real, pair: &CollidablePair<'_>) -> usize {
        let pos12 = pair.mesh.pose.inv_mul(&pair.convex.pose);
        let local_aabb = pair.convex.shape.compute_aabb(&pos12);

        // The mesh's spatial index is not expanded with velocity, so the
        // relative motion of the pair must be folded into the convex
        // body's query box.
        let rel_vel = pair.convex.linvel - pair.mesh.linvel;
        let local_displacement = pair.mesh.pose.rotation.inverse_transform_vector(&rel_vel) * dt;

        self.overlaps.clear();
        pair.mesh
            .shape
            .intersect_local_aabb(&local_aabb.swept(&local_displacement), &mut self.overlaps);
        self.overlaps.len()
    }

    /// Configures the triangle stored in overlap-buffer slot `i`: vertices
    /// transformed to world space, sidedness resolved from the mesh's
    /// solidity, margin fixed at zero.
    pub fn configure_triangle(&self, i: usize, pair: &CollidablePair<'_>) -> ConfiguredTriangle {
        let id = self.overlaps[i];
        let local = pair.mesh.shape.triangle(id);
        let triangle = Triangle::new(
            pair.mesh.pose * local.a,
            pair.mesh.pose * local.b,
            pair.mesh.pose * local.c,
        );

        let sidedness = match pair.mesh.shape.solidity() {
            MeshSolidity::Clockwise => TriangleSidedness::Clockwise,
            MeshSolidity::Counterclockwise => TriangleSidedness::Counterclockwise,
            MeshSolidity::DoubleSided => TriangleSidedness::DoubleSided,
            MeshSolidity::Solid => pair.mesh.shape.solid_sidedness(),
        };

        ConfiguredTriangle {
            triangle,
            sidedness,
            margin: 0.0,
            indices: pair.mesh.shape.triangle_indices(id),
        }
    }

    /// Makes this manifold safe to return to a pool and rebind to an
    /// unrelated pair: scratch buffers, the contact store and the
    /// containment tracker are fully reset. Buffer capacity is kept.
    pub fn clear(&mut self) {
        self.overlaps.clear();
        self.candidates.clear();
        self.store.clear();
        self.containment.reset();
    }

    /// Folds this step's candidates into the persistent store.
    ///
    /// A candidate matching a live surface contact refreshes that record in
    /// place, keeping the record alive for the solver; unmatched candidates
    /// are appended with a fresh supplement; surface contacts that matched
    /// no candidate are dropped. Interior contacts belong to the
    /// containment resolver and are left alone here.
    fn merge_candidates(
        store: &mut ContactStore,
        candidates: &ContactCandidates,
        pair: &CollidablePair<'_>,
    ) {
        store.retain(|record| {
            record.contact.origin == ContactOrigin::Interior
                || candidates
                    .iter()
                    .any(|candidate| candidate.id == record.contact.id)
        });

        for candidate in candidates {
            match store.find_surface(candidate.id) {
                Some(index) => {
                    let record = &mut store.contacts_mut()[index];
                    record.contact = *candidate;
                    record.supplement = Self::fresh_supplement(candidate, pair);
                }
                None => store.push(TrackedContact {
                    contact: *candidate,
                    supplement: Self::fresh_supplement(candidate, pair),
                }),
            }
        }
    }

    fn fresh_supplement(contact: &Contact, pair: &CollidablePair<'_>) -> ContactSupplement {
        ContactSupplement {
            base_depth: contact.depth,
            local_offset_a: pair
                .convex
                .pose
                .inverse_transform_point(&contact.position)
                .coords,
            local_offset_b: pair
                .mesh
                .pose
                .inverse_transform_point(&contact.position)
                .coords,
        }
    }
}
