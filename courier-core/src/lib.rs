//! Core domain types for the courier route planner.
//!
//! A manifest of point-to-point deliveries is turned into a
//! [`StructuredManifest`]: deliveries ordered by their distance from the hub,
//! each carrying a ranking of every delivery by how close its pickup lies to
//! the current dropoff. [`RoutePlanner`] implementations drain a
//! [`DeliveryPool`] built over that structure into [`Route`]s.
//!
//! Every route starts and ends at [`HUB_ORIGIN`] and must fit within
//! [`SHIFT_BUDGET`]. Distances double as elapsed minutes; there is no speed
//! conversion.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use geo::Coord;

mod delivery;
mod distance;
mod manifest;
mod planner;
mod pool;
mod route;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use delivery::{Delivery, DeliveryId};
pub use distance::euclidean_distance;
pub use manifest::{Followup, StructureError, StructuredManifest};
pub use planner::{Diagnostics, RoutePlan, RoutePlanner};
pub use pool::DeliveryPool;
pub use route::Route;

/// Location every route departs from and returns to.
pub const HUB_ORIGIN: Coord<f64> = Coord { x: 0.0, y: 0.0 };

/// Exclusive upper bound on a route's total distance: a 12 hour shift in
/// minutes.
pub const SHIFT_BUDGET: f64 = 720.0;
