//! Chaining deliveries drawn from a pool into routes.

use courier_core::{Delivery, DeliveryPool, Route, SHIFT_BUDGET};

/// Candidate chosen to extend the current route.
struct NextStop {
    position: usize,
    leg: f64,
}

/// Drain `pool` into routes, anchoring each at the earliest unassigned
/// delivery in structured order.
pub(crate) fn drain_pool(pool: &mut DeliveryPool<'_>) -> Vec<Route> {
    let mut routes = Vec::new();
    for anchor_position in 0..pool.manifest().len() {
        let Some(anchor) = pool.take(anchor_position) else {
            continue;
        };
        routes.push(chain_from(pool, anchor_position, anchor));
    }
    routes
}

#[expect(
    clippy::float_arithmetic,
    reason = "route length accumulates floating-point distances"
)]
fn chain_from(pool: &mut DeliveryPool<'_>, anchor_position: usize, anchor: &Delivery) -> Route {
    if anchor.round_trip_distance() >= SHIFT_BUDGET {
        log::warn!(
            "delivery {} needs {} on its own, beyond the shift budget of {SHIFT_BUDGET}; routing it alone",
            anchor.id(),
            anchor.round_trip_distance()
        );
    }

    let mut stops = vec![anchor.id()];
    let mut base = anchor.start_distance() + anchor.distance();
    let mut tail_position = anchor_position;
    let mut tail = anchor;
    while let Some(next) = next_stop(pool, tail_position, base) {
        let Some(delivery) = pool.take(next.position) else {
            break;
        };
        stops.push(delivery.id());
        base += next.leg;
        tail_position = next.position;
        tail = delivery;
    }
    Route::new(stops, base + tail.end_distance())
}

/// First followup of the tail, in ranking order, that is unassigned and keeps
/// the route strictly inside the budget.
#[expect(
    clippy::float_arithmetic,
    reason = "feasibility compares floating-point route lengths"
)]
fn next_stop(pool: &DeliveryPool<'_>, tail_position: usize, base: f64) -> Option<NextStop> {
    pool.manifest()
        .nearest_followups(tail_position)
        .filter(|followup| pool.contains(followup.position))
        .find_map(|followup| {
            let leg = followup.distance + followup.delivery.distance();
            (base + leg + followup.delivery.end_distance() < SHIFT_BUDGET).then_some(NextStop {
                position: followup.position,
                leg,
            })
        })
}
