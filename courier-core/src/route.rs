//! Routes through deliveries.
//!
//! A route is an ordered list of delivery ids with its total distance. The hub
//! is implied before the first stop and after the last.

use crate::DeliveryId;

/// An ordered run of deliveries starting and ending at the hub.
///
/// # Examples
/// ```
/// use courier_core::Route;
///
/// let route = Route::new(vec![4, 2], 96.5);
/// assert_eq!(route.deliveries(), &[4, 2]);
/// assert_eq!(route.total_distance(), 96.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Route {
    deliveries: Vec<DeliveryId>,
    total_distance: f64,
}

impl Route {
    /// Construct a route from its stops and hub-to-hub distance.
    #[must_use]
    pub const fn new(deliveries: Vec<DeliveryId>, total_distance: f64) -> Self {
        Self {
            deliveries,
            total_distance,
        }
    }

    /// Delivery ids in visiting order.
    #[must_use]
    pub fn deliveries(&self) -> &[DeliveryId] {
        &self.deliveries
    }

    /// Distance from leaving the hub to returning to it.
    #[must_use]
    pub const fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Number of stops.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.deliveries.len()
    }

    /// Whether the route has no stops.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.deliveries.is_empty()
    }

    /// Consume the route, keeping only its stops.
    #[must_use]
    pub fn into_deliveries(self) -> Vec<DeliveryId> {
        self.deliveries
    }
}
