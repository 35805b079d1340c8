//! Sequential run-length clustering of line features.
//!
//! Walks an ordered feature stream exactly once, accumulating a running
//! group and closing it when either the cumulative length reaches the
//! threshold or the anchor-to-anchor distance jumps past the gap limit.
//!
//! The feature that fires a trigger is excluded from the group it closes
//! and reseeds the next group on its own. After a trigger the running
//! total restarts at zero; the seed's own length is not carried into the
//! new group's total.

use crate::error::{BoundaryError, Result};
use crate::{FeatureGroup, LineFeature, PartitionConfig, PlanePoint};

/// Lazy producer of feature groups.
///
/// Implements [`Iterator`], yielding one [`FeatureGroup`] per closed group
/// in stream order. Construction validates the configuration and rejects
/// empty streams, so iteration itself cannot fail.
///
/// The traversal may be abandoned between groups with no invariant
/// violated; a partially accumulated group is simply dropped.
#[derive(Debug)]
pub struct Partitioner<'a> {
    features: &'a [LineFeature],
    length_threshold: f64,
    gap_units: f64,
    cursor: usize,
    running_length: f64,
    previous_anchor: Option<PlanePoint>,
    current: Vec<&'a LineFeature>,
    emitted: usize,
    done: bool,
}

impl<'a> Partitioner<'a> {
    /// Create a partitioner over an ordered feature slice.
    ///
    /// The caller supplies features already sorted by its geometric sort
    /// key; correctness of the grouping depends on that order being
    /// stable.
    pub fn new(features: &'a [LineFeature], config: &PartitionConfig) -> Result<Self> {
        config.validate()?;
        if features.is_empty() {
            return Err(BoundaryError::EmptyStream);
        }
        Ok(Self {
            features,
            length_threshold: config.length_threshold,
            gap_units: config.gap_in_units(),
            cursor: 0,
            running_length: 0.0,
            previous_anchor: None,
            current: Vec::new(),
            emitted: 0,
            done: false,
        })
    }

    fn close_current(&mut self) -> FeatureGroup<'a> {
        let features = std::mem::take(&mut self.current);
        let group = FeatureGroup {
            features,
            index: self.emitted,
        };
        self.emitted += 1;
        group
    }
}

impl<'a> Iterator for Partitioner<'a> {
    type Item = FeatureGroup<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        while self.cursor < self.features.len() {
            let feature = &self.features[self.cursor];
            let is_last = self.cursor + 1 == self.features.len();
            self.cursor += 1;

            self.running_length += feature.length_miles;

            // The first feature has no predecessor, so the gap check can
            // never fire for it.
            let distance = match (self.previous_anchor, feature.anchor()) {
                (Some(previous), Some(anchor)) => previous.distance_to(&anchor),
                _ => 0.0,
            };
            if let Some(anchor) = feature.anchor() {
                self.previous_anchor = Some(anchor);
            }

            if self.running_length >= self.length_threshold || distance > self.gap_units {
                // Close the group accumulated before this feature and
                // reseed with the trigger feature alone. A trigger on the
                // very first feature closes an empty group; there is no
                // hull to emit from zero lines, so nothing is yielded.
                let closed = if self.current.is_empty() {
                    None
                } else {
                    Some(self.close_current())
                };
                self.running_length = 0.0;
                self.current.push(feature);
                if let Some(group) = closed {
                    return Some(group);
                }
            } else if is_last {
                // Stream exhausted: forced flush.
                self.current.push(feature);
                self.done = true;
                return Some(self.close_current());
            } else {
                self.current.push(feature);
            }
        }

        // A trigger on the final feature leaves its reseeded group open;
        // flush it as a trailing singleton.
        self.done = true;
        if self.current.is_empty() {
            None
        } else {
            Some(self.close_current())
        }
    }
}

/// Partition an ordered feature slice into groups, eagerly.
///
/// Equivalent to collecting a [`Partitioner`]; provided for callers that
/// do not need lazy consumption.
pub fn partition_features<'a>(
    features: &'a [LineFeature],
    config: &PartitionConfig,
) -> Result<Vec<FeatureGroup<'a>>> {
    Ok(Partitioner::new(features, config)?.collect())
}
