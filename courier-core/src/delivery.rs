//! Delivery jobs and their hub-relative distances.

use geo::Coord;

use crate::{HUB_ORIGIN, euclidean_distance};

/// Identifier of a delivery within a manifest.
pub type DeliveryId = u64;

/// A single pickup-and-dropoff job.
///
/// The three derived distances are computed once in [`Delivery::new`] and
/// never change afterwards.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use courier_core::Delivery;
///
/// let delivery = Delivery::new(7, Coord { x: 3.0, y: 4.0 }, Coord { x: 3.0, y: 0.0 });
/// assert_eq!(delivery.id(), 7);
/// assert_eq!(delivery.start_distance(), 5.0);
/// assert_eq!(delivery.distance(), 4.0);
/// assert_eq!(delivery.end_distance(), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Delivery {
    id: DeliveryId,
    pickup: Coord<f64>,
    dropoff: Coord<f64>,
    distance: f64,
    start_distance: f64,
    end_distance: f64,
}

impl Delivery {
    /// Construct a delivery and derive its distances.
    ///
    /// Uniqueness of `id` is the caller's concern.
    #[must_use]
    pub fn new(id: DeliveryId, pickup: Coord<f64>, dropoff: Coord<f64>) -> Self {
        Self {
            id,
            pickup,
            dropoff,
            distance: euclidean_distance(pickup, dropoff),
            start_distance: euclidean_distance(HUB_ORIGIN, pickup),
            end_distance: euclidean_distance(dropoff, HUB_ORIGIN),
        }
    }

    /// Manifest identifier.
    #[must_use]
    pub const fn id(&self) -> DeliveryId {
        self.id
    }

    /// Where the load is collected.
    #[must_use]
    pub const fn pickup(&self) -> Coord<f64> {
        self.pickup
    }

    /// Where the load is delivered.
    #[must_use]
    pub const fn dropoff(&self) -> Coord<f64> {
        self.dropoff
    }

    /// Pickup to dropoff.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Hub to pickup.
    #[must_use]
    pub const fn start_distance(&self) -> f64 {
        self.start_distance
    }

    /// Dropoff back to the hub.
    #[must_use]
    pub const fn end_distance(&self) -> f64 {
        self.end_distance
    }

    /// Length of a route serving only this delivery.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "route lengths are sums of floating-point distances"
    )]
    pub fn round_trip_distance(&self) -> f64 {
        self.start_distance + self.distance + self.end_distance
    }
}
