//! Keyed point locations.
//!
//! A [`PointSet`] maps stable identifiers (well ids) to coordinates. It keeps
//! insertion order so that tie-breaking in the ordering algorithms is
//! reproducible; no other meaning is attached to that order.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::core::{compute_centroid, Coordinate};
use crate::error::{Result, SectionError};

/// Identifier bound used throughout the crate.
pub trait PointId: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> PointId for T {}

/// Unique identifiers mapped to coordinates, in insertion order.
#[derive(Clone, Debug)]
pub struct PointSet<K: PointId> {
    ids: Vec<K>,
    coords: Vec<Coordinate>,
    index: HashMap<K, usize>,
}

impl<K: PointId> PointSet<K> {
    /// Create an empty point set.
    pub fn new() -> Self {
        Self {
            ids: Vec::new(),
            coords: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build from `(id, coordinate)` pairs. Duplicate ids are rejected.
    pub fn from_entries<I, C>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, C)>,
        C: Into<Coordinate>,
    {
        let mut set = Self::new();
        for (id, c) in entries {
            set.insert(id, c.into())?;
        }
        Ok(set)
    }

    /// Add an entry.
    pub fn insert(&mut self, id: K, coord: Coordinate) -> Result<()> {
        if self.index.contains_key(&id) {
            return Err(SectionError::DuplicateId {
                id: format!("{:?}", id),
            });
        }
        self.index.insert(id.clone(), self.ids.len());
        self.ids.push(id);
        self.coords.push(coord);
        Ok(())
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when there are no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Coordinate for an id.
    #[inline]
    pub fn get(&self, id: &K) -> Option<Coordinate> {
        self.index.get(id).map(|&i| self.coords[i])
    }

    /// True if the id is present.
    #[inline]
    pub fn contains(&self, id: &K) -> bool {
        self.index.contains_key(id)
    }

    /// Identifiers in insertion order.
    #[inline]
    pub fn ids(&self) -> &[K] {
        &self.ids
    }

    /// Coordinates in insertion order.
    #[inline]
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coords
    }

    /// `(id, coordinate)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, Coordinate)> + '_ {
        self.ids.iter().zip(self.coords.iter().copied())
    }

    /// Mean of all coordinates.
    #[inline]
    pub fn centroid(&self) -> Coordinate {
        compute_centroid(&self.coords)
    }

    /// Look up coordinates for an ordering. Unknown ids are an error.
    pub fn coordinates_of(&self, order: &[K]) -> Result<Vec<Coordinate>> {
        order
            .iter()
            .map(|id| {
                self.get(id).ok_or_else(|| SectionError::UnknownId {
                    id: format!("{:?}", id),
                })
            })
            .collect()
    }

    /// True when there are at least two entries and all share one coordinate.
    pub fn is_coincident(&self) -> bool {
        self.coords.len() > 1 && self.coords.iter().all(|c| *c == self.coords[0])
    }

    /// Check that `order` is a permutation of this set's ids.
    pub fn check_permutation(&self, order: &[K]) -> Result<()> {
        if order.len() != self.len() {
            return Err(SectionError::OrderMismatch {
                expected: self.len(),
                found: order.len(),
            });
        }
        let mut seen = vec![false; self.len()];
        for id in order {
            let i = *self.index.get(id).ok_or_else(|| SectionError::UnknownId {
                id: format!("{:?}", id),
            })?;
            if std::mem::replace(&mut seen[i], true) {
                return Err(SectionError::DuplicateId {
                    id: format!("{:?}", id),
                });
            }
        }
        Ok(())
    }
}

impl<K: PointId + Ord> PointSet<K> {
    /// Lay fully coincident points out along a short east-west line, ids
    /// sorted ascending.
    ///
    /// If the set has two or more entries and every coordinate is identical,
    /// returns a new set where ids are placed `spacing` apart, starting at
    /// `x - (N + 1) * spacing / 2`, at the shared `y`. Any other set is
    /// returned unchanged.
    pub fn with_spread(&self, spacing: f64) -> Self {
        let mut sorted = self.ids.clone();
        sorted.sort();
        self.spread_as(sorted, spacing)
    }
}

impl<K: PointId> PointSet<K> {
    /// Same as [`PointSet::with_spread`], laying ids out in insertion order.
    /// Works for keys with no ordering.
    pub fn with_spread_in_order(&self, spacing: f64) -> Self {
        self.spread_as(self.ids.clone(), spacing)
    }

    fn spread_as(&self, ids: Vec<K>, spacing: f64) -> Self {
        if !self.is_coincident() {
            return self.clone();
        }

        let n = self.len() as f64;
        let shared = self.coords[0];

        log::debug!(
            "Spreading {} coincident points at {} with spacing {}",
            self.len(),
            shared,
            spacing
        );

        let mut x = shared.x - (n + 1.0) * spacing / 2.0;
        let mut spread = Self::new();
        for id in ids {
            spread.index.insert(id.clone(), spread.ids.len());
            spread.ids.push(id);
            spread.coords.push(Coordinate::new(x, shared.y));
            x += spacing;
        }
        spread
    }
}

impl<K: PointId> Default for PointSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_insert_and_get() {
        let mut set = PointSet::new();
        set.insert("w1", Coordinate::new(1.0, 2.0)).unwrap();
        set.insert("w2", Coordinate::new(3.0, 4.0)).unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.get(&"w2"), Some(Coordinate::new(3.0, 4.0)));
        assert_eq!(set.get(&"w3"), None);
        assert_eq!(set.ids(), &["w1", "w2"]);
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = PointSet::from_entries([(7, (0.0, 0.0)), (7, (1.0, 1.0))]).unwrap_err();
        assert!(matches!(err, SectionError::DuplicateId { ref id } if id == "7"));
    }

    #[test]
    fn test_centroid() {
        let set = PointSet::from_entries([(1, (0.0, 0.0)), (2, (4.0, 0.0)), (3, (2.0, 6.0))])
            .unwrap();
        let c = set.centroid();
        assert_relative_eq!(c.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(c.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_coordinates_of_unknown_id() {
        let set = PointSet::from_entries([(1, (0.0, 0.0))]).unwrap();
        assert!(matches!(
            set.coordinates_of(&[1, 2]),
            Err(SectionError::UnknownId { .. })
        ));
    }

    #[test]
    fn test_check_permutation() {
        let set = PointSet::from_entries([(1, (0.0, 0.0)), (2, (1.0, 0.0))]).unwrap();
        assert!(set.check_permutation(&[2, 1]).is_ok());
        assert!(matches!(
            set.check_permutation(&[1]),
            Err(SectionError::OrderMismatch { expected: 2, found: 1 })
        ));
        assert!(matches!(
            set.check_permutation(&[1, 1]),
            Err(SectionError::DuplicateId { .. })
        ));
    }

    #[test]
    fn test_spread_coincident_points() {
        let set = PointSet::from_entries([
            (3, (225.0, 300.0)),
            (1, (225.0, 300.0)),
            (2, (225.0, 300.0)),
        ])
        .unwrap();
        assert!(set.is_coincident());

        let spread = set.with_spread(5.0);
        assert_eq!(spread.ids(), &[1, 2, 3]);
        let a = spread.get(&1).unwrap();
        let b = spread.get(&2).unwrap();
        let c = spread.get(&3).unwrap();
        assert_relative_eq!(a.x + 5.0, b.x, epsilon = 1e-9);
        assert_relative_eq!(b.x + 5.0, c.x, epsilon = 1e-9);
        assert_relative_eq!(a.x, 225.0 - 10.0, epsilon = 1e-9);
        assert_eq!(a.y, 300.0);
        assert_eq!(c.y, 300.0);
        // Original is untouched
        assert_eq!(set.get(&1), Some(Coordinate::new(225.0, 300.0)));
    }

    #[test]
    fn test_spread_in_insertion_order() {
        let set = PointSet::from_entries([
            ("north", (40.0, 8.0)),
            ("south", (40.0, 8.0)),
            ("east", (40.0, 8.0)),
        ])
        .unwrap();
        let spread = set.with_spread_in_order(2.0);
        assert_eq!(spread.ids(), &["north", "south", "east"]);
        assert_relative_eq!(spread.get(&"north").unwrap().x, 36.0, epsilon = 1e-9);
        assert_relative_eq!(spread.get(&"east").unwrap().x, 40.0, epsilon = 1e-9);
    }

    #[test]
    fn test_spread_leaves_distinct_points() {
        let set = PointSet::from_entries([(1, (0.0, 0.0)), (2, (0.0, 0.0)), (3, (1.0, 0.0))])
            .unwrap();
        let spread = set.with_spread(10.0);
        assert_eq!(spread.coordinates(), set.coordinates());
    }

    #[test]
    fn test_spread_singleton_unchanged() {
        let set = PointSet::from_entries([("only", (5.0, 5.0))]).unwrap();
        assert!(!set.is_coincident());
        assert_eq!(set.with_spread(10.0).coordinates(), set.coordinates());
    }
}
