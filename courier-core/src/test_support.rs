//! Test-only helpers for building deliveries, manifests and reference plans.

use std::time::Instant;

use geo::Coord;

use crate::{
    Delivery, DeliveryId, Diagnostics, Route, RoutePlan, RoutePlanner, StructuredManifest,
};

/// Build a delivery from `(x, y)` tuples.
#[must_use]
pub fn delivery(id: DeliveryId, pickup: (f64, f64), dropoff: (f64, f64)) -> Delivery {
    Delivery::new(
        id,
        Coord {
            x: pickup.0,
            y: pickup.1,
        },
        Coord {
            x: dropoff.0,
            y: dropoff.1,
        },
    )
}

/// Replay `route` against `manifest`, returning the hub-to-hub total after
/// each stop.
///
/// Totals accumulate in the same order a greedy builder uses, so they can be
/// compared with the shift budget exactly. Returns `None` for an empty route
/// or an id missing from `manifest`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "replaying a route sums floating-point legs"
)]
pub fn prefix_totals(manifest: &StructuredManifest, route: &[DeliveryId]) -> Option<Vec<f64>> {
    let (&first_id, rest) = route.split_first()?;
    let first = manifest.get(first_id)?;
    let mut base = first.start_distance() + first.distance();
    let mut totals = vec![base + first.end_distance()];
    let mut tail = first_id;
    for &next_id in rest {
        let next = manifest.get(next_id)?;
        let leg = manifest.followup_distance(tail, next_id)? + next.distance();
        totals.push(base + leg + next.end_distance());
        base += leg;
        tail = next_id;
    }
    Some(totals)
}

/// `RoutePlanner` that gives every delivery its own route.
#[derive(Debug, Default, Copy, Clone)]
pub struct SingleStopPlanner;

impl RoutePlanner for SingleStopPlanner {
    fn plan(&self, manifest: &StructuredManifest) -> RoutePlan {
        let started_at = Instant::now();
        let routes: Vec<Route> = manifest
            .deliveries()
            .iter()
            .map(|delivery| Route::new(vec![delivery.id()], delivery.round_trip_distance()))
            .collect();
        RoutePlan {
            diagnostics: Diagnostics {
                plan_time: started_at.elapsed(),
                deliveries_routed: routes.len(),
                route_count: routes.len(),
            },
            routes,
        }
    }
}
