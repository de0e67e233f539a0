//! `GreedyPlanner` implementation of [`RoutePlanner`].

use std::time::Instant;

use courier_core::{Diagnostics, DeliveryPool, Route, RoutePlan, RoutePlanner, StructuredManifest};

use crate::chain::drain_pool;

/// Planner that grows each route with the nearest feasible followup.
///
/// Routes are anchored in structured order, so the first route always starts
/// with the delivery whose pickup is closest to the hub. A followup is
/// feasible while it is unassigned and the route, closed back to the hub
/// after it, stays strictly below the shift budget.
///
/// # Examples
/// ```
/// use courier_core::{Delivery, RoutePlanner, StructuredManifest};
/// use courier_solver_greedy::GreedyPlanner;
/// use geo::Coord;
///
/// let manifest = StructuredManifest::new(vec![
///     Delivery::new(1, Coord { x: 1.0, y: 0.0 }, Coord { x: 2.0, y: 0.0 }),
///     Delivery::new(2, Coord { x: 3.0, y: 0.0 }, Coord { x: 4.0, y: 0.0 }),
/// ])?;
/// let plan = GreedyPlanner::new().plan(&manifest);
/// assert_eq!(plan.routes.len(), 1);
/// assert_eq!(plan.routes[0].deliveries(), &[1, 2]);
/// # Ok::<(), courier_core::StructureError>(())
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct GreedyPlanner;

impl GreedyPlanner {
    /// Construct a planner.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Route every delivery still available in `pool`, leaving it empty.
    ///
    /// Deliveries already taken from the pool are treated as assigned and are
    /// neither anchored nor chained.
    #[must_use]
    pub fn drain(&self, pool: &mut DeliveryPool<'_>) -> Vec<Route> {
        drain_pool(pool)
    }
}

impl RoutePlanner for GreedyPlanner {
    fn plan(&self, manifest: &StructuredManifest) -> RoutePlan {
        let started_at = Instant::now();
        let mut pool = DeliveryPool::new(manifest);
        let routes = self.drain(&mut pool);
        debug_assert!(pool.is_empty(), "every delivery is routed");

        let diagnostics = Diagnostics {
            plan_time: started_at.elapsed(),
            deliveries_routed: routes.iter().map(Route::len).sum(),
            route_count: routes.len(),
        };
        log::info!(
            "planned {} routes for {} deliveries in {:?}",
            diagnostics.route_count,
            diagnostics.deliveries_routed,
            diagnostics.plan_time
        );
        RoutePlan {
            routes,
            diagnostics,
        }
    }
}
