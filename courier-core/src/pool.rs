//! Availability tracking for route construction.

use bit_set::BitSet;

use crate::{Delivery, DeliveryId, StructuredManifest};

/// Deliveries of a [`StructuredManifest`] not yet assigned to a route.
///
/// The pool starts full and only ever shrinks: a delivery taken by one route
/// can never be offered to another. Removal and membership checks are O(1).
///
/// # Examples
/// ```
/// use geo::Coord;
/// use courier_core::{Delivery, DeliveryPool, StructuredManifest};
///
/// # fn main() -> Result<(), courier_core::StructureError> {
/// let manifest = StructuredManifest::new(vec![
///     Delivery::new(1, Coord { x: 1.0, y: 0.0 }, Coord { x: 2.0, y: 0.0 }),
/// ])?;
/// let mut pool = DeliveryPool::new(&manifest);
/// assert_eq!(pool.take(0).map(Delivery::id), Some(1));
/// assert!(pool.take(0).is_none());
/// assert!(pool.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DeliveryPool<'a> {
    manifest: &'a StructuredManifest,
    available: BitSet,
}

impl<'a> DeliveryPool<'a> {
    /// A pool holding every delivery of `manifest`.
    #[must_use]
    pub fn new(manifest: &'a StructuredManifest) -> Self {
        let mut available = BitSet::with_capacity(manifest.len());
        available.extend(0..manifest.len());
        Self {
            manifest,
            available,
        }
    }

    /// The manifest this pool draws from.
    #[must_use]
    pub const fn manifest(&self) -> &'a StructuredManifest {
        self.manifest
    }

    /// Whether the delivery at `position` is still unassigned.
    #[must_use]
    pub fn contains(&self, position: usize) -> bool {
        self.available.contains(position)
    }

    /// Whether the delivery with `id` is still unassigned.
    #[must_use]
    pub fn contains_id(&self, id: DeliveryId) -> bool {
        self.manifest
            .position(id)
            .is_some_and(|position| self.contains(position))
    }

    /// Remove the delivery at `position`, returning it if it was available.
    pub fn take(&mut self, position: usize) -> Option<&'a Delivery> {
        if self.available.remove(position) {
            self.manifest.delivery_at(position)
        } else {
            None
        }
    }

    /// Number of unassigned deliveries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.available.len()
    }

    /// Whether every delivery has been assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }

    /// Unassigned deliveries in structured order.
    pub fn remaining(&self) -> impl Iterator<Item = &'a Delivery> + '_ {
        self.available
            .iter()
            .filter_map(|position| self.manifest.delivery_at(position))
    }
}
