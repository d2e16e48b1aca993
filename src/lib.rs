/*!
manifold3d
==========

**manifold3d** maintains persistent contact manifolds between a convex rigid
body and a triangulated, possibly solid, mesh body. It performs the
narrow-phase bookkeeping a physics pipeline needs each step: swept
triangle-overlap culling, per-triangle sidedness configuration, containment
resolution for solid meshes, and a contact store that preserves contact
identity across frames so an impulse solver can warm-start.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod math;
pub mod query;
pub mod shape;
pub mod utils;
