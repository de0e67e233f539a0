//! Pre-ranked delivery manifests.
//!
//! [`StructuredManifest`] orders deliveries by their distance from the hub and
//! precomputes, for every delivery, the distance from its dropoff to every
//! pickup (its own included) along with a ranking of all deliveries by that
//! distance. Route builders only read this structure.
//!
//! Both sorts are stable, so ties keep the order they had on input. With the
//! `parallel` feature the per-delivery rows are computed on the rayon pool and
//! collected in row order; the result is identical to the sequential build.

use std::collections::HashMap;

use thiserror::Error;

use crate::{Delivery, DeliveryId, euclidean_distance};

/// Errors returned by [`StructuredManifest::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    /// Two deliveries share an identifier.
    #[error("delivery id {id} appears more than once")]
    DuplicateId {
        /// The repeated identifier.
        id: DeliveryId,
    },
}

/// A candidate next stop, ranked from some delivery's dropoff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Followup<'a> {
    /// Position of the candidate in structured order.
    pub position: usize,
    /// The candidate delivery.
    pub delivery: &'a Delivery,
    /// Distance from the ranking delivery's dropoff to the candidate's pickup.
    pub distance: f64,
}

/// One row of the followup matrix.
#[derive(Debug, Clone, PartialEq)]
struct FollowupRow {
    /// Dropoff-to-pickup distance, indexed by structured position.
    distances: Vec<f64>,
    /// `(position, distance)` pairs in ascending distance.
    ranking: Vec<(usize, f64)>,
}

impl FollowupRow {
    fn rank(origin: &Delivery, deliveries: &[Delivery]) -> Self {
        let distances: Vec<f64> = deliveries
            .iter()
            .map(|candidate| euclidean_distance(origin.dropoff(), candidate.pickup()))
            .collect();
        let mut ranking: Vec<(usize, f64)> = distances.iter().copied().enumerate().collect();
        ranking.sort_by(|(_, lhs), (_, rhs)| lhs.total_cmp(rhs));
        Self { distances, ranking }
    }
}

/// Deliveries indexed by id, in hub-distance order, with followup rankings.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use courier_core::{Delivery, StructuredManifest};
///
/// # fn main() -> Result<(), courier_core::StructureError> {
/// let manifest = StructuredManifest::new(vec![
///     Delivery::new(1, Coord { x: 10.0, y: 0.0 }, Coord { x: 20.0, y: 0.0 }),
///     Delivery::new(2, Coord { x: 1.0, y: 0.0 }, Coord { x: 9.0, y: 0.0 }),
/// ])?;
/// let order: Vec<u64> = manifest.deliveries().iter().map(|d| d.id()).collect();
/// assert_eq!(order, vec![2, 1]);
/// assert_eq!(manifest.followup_distance(2, 1), Some(1.0));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredManifest {
    deliveries: Vec<Delivery>,
    positions: HashMap<DeliveryId, usize>,
    rows: Vec<FollowupRow>,
}

impl StructuredManifest {
    /// Order, index and rank `deliveries`.
    ///
    /// This is the expensive step: time and memory are quadratic in the
    /// number of deliveries.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::DuplicateId`] when two deliveries share an
    /// id.
    pub fn new(mut deliveries: Vec<Delivery>) -> Result<Self, StructureError> {
        deliveries.sort_by(|lhs, rhs| lhs.start_distance().total_cmp(&rhs.start_distance()));

        let mut positions = HashMap::with_capacity(deliveries.len());
        for (position, delivery) in deliveries.iter().enumerate() {
            if positions.insert(delivery.id(), position).is_some() {
                return Err(StructureError::DuplicateId { id: delivery.id() });
            }
        }

        let rows = rank_rows(&deliveries);
        log::debug!(
            "structured {} deliveries into {} followup distances",
            deliveries.len(),
            deliveries.len().saturating_mul(deliveries.len())
        );
        Ok(Self {
            deliveries,
            positions,
            rows,
        })
    }

    /// Number of deliveries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.deliveries.len()
    }

    /// Whether the manifest holds no deliveries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.deliveries.is_empty()
    }

    /// Deliveries in structured (hub-distance) order.
    #[must_use]
    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    /// Delivery at `position` in structured order.
    #[must_use]
    pub fn delivery_at(&self, position: usize) -> Option<&Delivery> {
        self.deliveries.get(position)
    }

    /// Structured position of the delivery with `id`.
    #[must_use]
    pub fn position(&self, id: DeliveryId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// Delivery with `id`.
    #[must_use]
    pub fn get(&self, id: DeliveryId) -> Option<&Delivery> {
        self.position(id).and_then(|position| self.delivery_at(position))
    }

    /// Distance from the dropoff of `from` to the pickup of `to`.
    #[must_use]
    pub fn followup_distance(&self, from: DeliveryId, to: DeliveryId) -> Option<f64> {
        let row = self.rows.get(self.position(from)?)?;
        row.distances.get(self.position(to)?).copied()
    }

    /// Every delivery ranked by proximity to the dropoff at `position`.
    ///
    /// The delivery itself is part of its own ranking. An out-of-range
    /// position yields nothing.
    pub fn nearest_followups(&self, position: usize) -> impl Iterator<Item = Followup<'_>> + '_ {
        self.rows
            .get(position)
            .into_iter()
            .flat_map(|row| row.ranking.iter())
            .filter_map(move |&(candidate, distance)| {
                self.delivery_at(candidate).map(|delivery| Followup {
                    position: candidate,
                    delivery,
                    distance,
                })
            })
    }
}

#[cfg(feature = "parallel")]
fn rank_rows(deliveries: &[Delivery]) -> Vec<FollowupRow> {
    use rayon::prelude::*;

    deliveries
        .par_iter()
        .map(|origin| FollowupRow::rank(origin, deliveries))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn rank_rows(deliveries: &[Delivery]) -> Vec<FollowupRow> {
    deliveries
        .iter()
        .map(|origin| FollowupRow::rank(origin, deliveries))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::delivery;
    use rstest::{fixture, rstest};

    #[fixture]
    fn line() -> StructuredManifest {
        StructuredManifest::new(vec![
            delivery(3, (30.0, 0.0), (31.0, 0.0)),
            delivery(1, (10.0, 0.0), (11.0, 0.0)),
            delivery(2, (20.0, 0.0), (21.0, 0.0)),
        ])
        .expect("unique ids")
    }

    fn ids(manifest: &StructuredManifest) -> Vec<DeliveryId> {
        manifest.deliveries().iter().map(Delivery::id).collect()
    }

    fn ranked_ids(manifest: &StructuredManifest, id: DeliveryId) -> Vec<DeliveryId> {
        let position = manifest.position(id).expect("known id");
        manifest
            .nearest_followups(position)
            .map(|followup| followup.delivery.id())
            .collect()
    }

    #[rstest]
    fn orders_by_hub_distance(line: StructuredManifest) {
        assert_eq!(ids(&line), vec![1, 2, 3]);
        assert_eq!(line.position(3), Some(2));
    }

    #[rstest]
    fn equal_hub_distances_keep_input_order() {
        let manifest = StructuredManifest::new(vec![
            delivery(9, (0.0, 5.0), (1.0, 1.0)),
            delivery(4, (5.0, 0.0), (1.0, 1.0)),
            delivery(6, (-5.0, 0.0), (1.0, 1.0)),
        ])
        .expect("unique ids");
        assert_eq!(ids(&manifest), vec![9, 4, 6]);
    }

    #[rstest]
    fn ranks_followups_including_self(line: StructuredManifest) {
        assert_eq!(ranked_ids(&line, 1), vec![1, 2, 3]);
        assert_eq!(ranked_ids(&line, 2), vec![2, 3, 1]);
        assert_eq!(ranked_ids(&line, 3), vec![3, 2, 1]);
    }

    #[rstest]
    fn ranking_ties_follow_structured_order() {
        // Both pickups sit 5 units from the dropoff of delivery 1.
        let manifest = StructuredManifest::new(vec![
            delivery(1, (1.0, 0.0), (10.0, 0.0)),
            delivery(3, (10.0, 5.0), (10.0, 6.0)),
            delivery(2, (10.0, -5.0), (10.0, -6.0)),
        ])
        .expect("unique ids");
        assert_eq!(ids(&manifest), vec![1, 3, 2]);
        assert_eq!(ranked_ids(&manifest, 1), vec![3, 2, 1]);
    }

    #[rstest]
    fn followup_distance_runs_from_dropoff_to_pickup(line: StructuredManifest) {
        assert_eq!(line.followup_distance(1, 2), Some(9.0));
        assert_eq!(line.followup_distance(2, 1), Some(11.0));
        assert_eq!(line.followup_distance(1, 1), Some(1.0));
        assert_eq!(line.followup_distance(1, 99), None);
    }

    #[rstest]
    fn ranking_carries_distances(line: StructuredManifest) {
        let distances: Vec<f64> = line
            .nearest_followups(0)
            .map(|followup| followup.distance)
            .collect();
        assert_eq!(distances, vec![1.0, 9.0, 19.0]);
    }

    #[rstest]
    fn rejects_duplicate_ids() {
        let err = StructuredManifest::new(vec![
            delivery(1, (1.0, 0.0), (2.0, 0.0)),
            delivery(1, (3.0, 0.0), (4.0, 0.0)),
        ])
        .expect_err("duplicate ids should be rejected");
        assert_eq!(err, StructureError::DuplicateId { id: 1 });
    }

    #[rstest]
    fn empty_input_yields_empty_manifest() {
        let manifest = StructuredManifest::new(Vec::new()).expect("empty manifest");
        assert!(manifest.is_empty());
        assert_eq!(manifest.nearest_followups(0).count(), 0);
    }

    #[rstest]
    fn lookups_by_id(line: StructuredManifest) {
        let found = line.get(2).expect("delivery 2");
        assert_eq!(found.pickup(), geo::Coord { x: 20.0, y: 0.0 });
        assert!(line.get(7).is_none());
    }
}
