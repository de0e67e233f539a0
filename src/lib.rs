//! Facade crate for the courier route planner.
//!
//! This crate re-exports the core domain types and exposes the manifest
//! reader and the greedy planner behind feature flags.
//!
//! # Examples
//! ```
//! # #[cfg(all(feature = "manifest", feature = "solver-greedy"))]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use courier_engine::{GreedyPlanner, RoutePlanner, StructuredManifest, parse_manifest};
//!
//! let deliveries = parse_manifest("loadNumber pickup dropoff\n1 (0.0,0.0) (1.0,1.0)\n")?;
//! let plan = GreedyPlanner::new().plan(&StructuredManifest::new(deliveries)?);
//! assert_eq!(plan.routes.len(), 1);
//! assert_eq!(plan.routes[0].deliveries(), &[1]);
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "manifest", feature = "solver-greedy")))]
//! # fn main() {}
//! ```

#![forbid(unsafe_code)]

pub use courier_core::{
    Delivery, DeliveryId, DeliveryPool, Diagnostics, Followup, HUB_ORIGIN, Route, RoutePlan,
    RoutePlanner, SHIFT_BUDGET, StructureError, StructuredManifest, euclidean_distance,
};

#[cfg(feature = "manifest")]
pub use courier_manifest::{ManifestError, parse_manifest, read_manifest};

#[cfg(feature = "solver-greedy")]
pub use courier_solver_greedy::GreedyPlanner;
