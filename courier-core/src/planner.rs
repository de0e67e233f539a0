//! The route planning boundary.

use std::time::Duration;

use crate::{DeliveryId, Route, StructuredManifest};

/// Information about how a plan was produced.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostics {
    /// Wall-clock time spent planning.
    pub plan_time: Duration,
    /// Deliveries assigned to a route.
    pub deliveries_routed: usize,
    /// Routes produced.
    pub route_count: usize,
}

/// Routes covering a manifest, in construction order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RoutePlan {
    /// The routes, each anchored by the earliest unassigned delivery in
    /// structured order at the time it was started.
    pub routes: Vec<Route>,
    /// Planning statistics.
    pub diagnostics: Diagnostics,
}

impl RoutePlan {
    /// Iterate over each route's delivery ids.
    pub fn delivery_sequences(&self) -> impl Iterator<Item = &[DeliveryId]> + '_ {
        self.routes.iter().map(Route::deliveries)
    }
}

/// Partition a structured manifest into routes.
///
/// Implementations must assign every delivery to exactly one route and must
/// be deterministic: the same manifest always yields the same plan, except
/// for [`Diagnostics::plan_time`].
/// Planners must be `Send + Sync` so they can be shared across threads.
pub trait RoutePlanner: Send + Sync {
    /// Build routes covering every delivery in `manifest`.
    fn plan(&self, manifest: &StructuredManifest) -> RoutePlan;
}
