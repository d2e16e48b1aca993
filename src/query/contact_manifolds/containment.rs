use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::contact_manifolds::{
    Contact, ContactId, ContactOrigin, ContactStore, ContactSupplement, TrackedContact,
};
use crate::query::pair::CollidablePair;
use crate::query::Ray;
use crate::shape::MeshSolidity;

/// Whether the convex body is outside, touching, or fully enclosed by a
/// solid mesh's shell.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ContainmentState {
    /// The convex body neither touches the shell nor sits inside it.
    #[default]
    Outside,
    /// At least one genuine triangle-surface contact existed this step.
    Shell,
    /// The convex body is fully enclosed: below the shell, touching no
    /// triangle.
    Inside,
}

/// Cross-frame containment tracking for one convex/solid-mesh pairing.
///
/// Re-solving shell containment from scratch every step would require an
/// exhaustive point-in-solid test. Instead, a single probe direction is
/// cached and reused across steps, exploiting the frame-to-frame coherence
/// of slowly moving bodies. The cached direction is a heuristic: it may go
/// stale under fast rotation, at the cost of one mis-classified step.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug)]
pub struct ContainmentTracker {
    state: ContainmentState,
    /// The cached probe direction. World space right after a Shell step,
    /// mesh-local space from the first empty-candidate step onwards.
    penetration_axis: Vector<Real>,
    /// The last probe origin known not to be inside the shell, mesh-local.
    last_valid_local_position: Point<Real>,
}

impl Default for ContainmentTracker {
    fn default() -> Self {
        ContainmentTracker {
            state: ContainmentState::Outside,
            penetration_axis: Vector::y(),
            last_valid_local_position: Point::origin(),
        }
    }
}

impl ContainmentTracker {
    /// Creates a tracker in the [`ContainmentState::Outside`] state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current containment state.
    #[inline]
    pub fn state(&self) -> ContainmentState {
        self.state
    }

    /// Restores the tracker to its initial state.
    ///
    /// Must be called whenever the owning manifold is rebound to a different
    /// pair; the cached axis and position are meaningless for any other
    /// pairing.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Post-processes this step's raw candidate contacts for a solid mesh.
    ///
    /// Does nothing unless the mesh's solidity is [`MeshSolidity::Solid`].
    /// With surface candidates present, retires any interior contact and
    /// caches the deepest candidate's normal as the next probe axis (the
    /// scan keeps the first candidate on equal depths, so the winner is
    /// deterministic whenever the generator's emission order is). With no
    /// candidates, probes the shell to decide between full enclosure and
    /// separation, synthesizing or updating the single interior contact on
    /// enclosure.
    pub fn process(
        &mut self,
        pair: &CollidablePair<'_>,
        candidates: &[Contact],
        store: &mut ContactStore,
    ) {
        if pair.mesh.shape.solidity() != MeshSolidity::Solid {
            return;
        }

        if let Some(deepest) = Self::deepest_candidate(candidates) {
            // Genuine surface contacts supersede the interior contact.
            if let Some(interior) = store.find_interior() {
                let _ = store.remove(interior);
            }

            // The deepest contact normal is a good estimate of the minimum
            // separating axis. It stays in world space here; the transition
            // to an empty-candidate step localizes it.
            self.penetration_axis = deepest.normal;
            self.state = ContainmentState::Shell;
            return;
        }

        // No candidate touches the mesh although it is supposed to be
        // solid, so the convex body is either far enough outside the shell
        // that there is no contact, or far enough below it that the
        // triangles cannot see it. Probe the shell to find out which.
        let ray = self.containment_probe(pair);

        match pair.mesh.shape.ray_origin_inside(&ray) {
            Some(hit) => {
                Self::upsert_interior_contact(pair, &ray, hit.toi, &hit.normal, store);
                self.state = ContainmentState::Inside;
            }
            None => {
                // Not touching the mesh anymore; retire the interior
                // contact and remember where "outside" was.
                if let Some(interior) = store.find_interior() {
                    let _ = store.remove(interior);
                }
                self.last_valid_local_position = ray.origin;
                self.state = ContainmentState::Outside;
            }
        }
    }

    /// The deepest candidate; the first encountered wins on exact ties.
    fn deepest_candidate(candidates: &[Contact]) -> Option<&Contact> {
        let mut deepest = candidates.first()?;

        for candidate in candidates {
            if candidate.depth > deepest.depth {
                deepest = candidate;
            }
        }

        Some(deepest)
    }

    /// Builds the mesh-local probe ray for this step.
    fn containment_probe(&mut self, pair: &CollidablePair<'_>) -> Ray {
        let convex_position = Point::from(pair.convex.pose.translation.vector);
        let origin = pair.mesh.pose.inverse_transform_point(&convex_position);

        let dir = match self.state {
            ContainmentState::Shell => {
                // The axis was recorded in world space by the shell step;
                // localize it now. Derived from a contact normal, it points
                // away from the mesh interior, so the probe reverses it.
                let local_axis = pair
                    .mesh
                    .pose
                    .rotation
                    .inverse_transform_vector(&self.penetration_axis);
                self.penetration_axis = local_axis;
                -local_axis
            }
            ContainmentState::Outside => {
                // Point from the current position back towards the last
                // position known to be outside the shell.
                match (self.last_valid_local_position - origin).try_normalize(DEFAULT_EPSILON) {
                    Some(dir) => {
                        self.penetration_axis = dir;
                        dir
                    }
                    None => {
                        // The convex body has not moved since the last
                        // recorded outside position; keep the cached axis.
                        log::debug!("degenerate containment probe direction, reusing cached axis");
                        self.penetration_axis
                    }
                }
            }
            ContainmentState::Inside => self.penetration_axis,
        };

        Ray::new(origin, dir)
    }

    /// Synthesizes or refreshes the single interior contact after the probe
    /// confirmed full enclosure.
    fn upsert_interior_contact(
        pair: &CollidablePair<'_>,
        ray: &Ray,
        toi: Real,
        hit_normal: &Vector<Real>,
        store: &mut ContactStore,
    ) {
        let position = pair.mesh.pose * ray.origin;
        let local_normal = hit_normal.normalize();
        // The probe starts at the convex body's center, so the measured
        // distance underestimates the true penetration by the body's
        // extent; the minimum bounding radius compensates.
        let depth =
            ray.dir.dot(&local_normal).abs() * toi + pair.convex.shape.min_bounding_radius();
        let normal = pair.mesh.pose.rotation * local_normal;

        if let Some(index) = store.find_interior() {
            let record = &mut store.contacts_mut()[index];
            record.contact.position = position;
            record.contact.normal = normal;
            record.contact.depth = depth;
            record.supplement.base_depth = depth;
            record.supplement.local_offset_a = Vector::zeros();
            record.supplement.local_offset_b = ray.origin.coords;
        } else {
            store.push(TrackedContact {
                contact: Contact {
                    position,
                    normal,
                    depth,
                    id: ContactId::UNKNOWN,
                    origin: ContactOrigin::Interior,
                },
                supplement: ContactSupplement {
                    base_depth: depth,
                    local_offset_a: pair.convex.pose.inverse_transform_point(&position).coords,
                    local_offset_b: ray.origin.coords,
                },
            });
        }
    }
}
