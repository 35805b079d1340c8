//! # Pseudobound
//!
//! Pseudo-boundary polygon generation for linear geographic feature networks.
//!
//! Given an ordered stream of line features (road or pipeline segments with
//! precomputed lengths), this library:
//! - partitions the stream into spatially compact groups using run-length
//!   clustering with a spatial discontinuity trigger
//! - encloses each group in a convex hull polygon
//! - resolves hull overlaps into a planar partition (no two output polygons
//!   share interior area)
//! - stamps synthetic identifiers on the final polygons
//!
//! ## Features
//!
//! - **`parallel`** - Build per-group hulls in parallel with rayon
//!
//! ## Quick Start
//!
//! ```rust
//! use pseudobound::{LineFeature, PartitionConfig, PlanePoint, generate_boundaries};
//!
//! let features = vec![
//!     LineFeature::new(
//!         "seg-1",
//!         vec![PlanePoint::new(0.0, 0.0), PlanePoint::new(100.0, 0.0)],
//!         0.4,
//!     ),
//!     LineFeature::new(
//!         "seg-2",
//!         vec![PlanePoint::new(100.0, 0.0), PlanePoint::new(200.0, 80.0)],
//!         0.4,
//!     ),
//! ];
//!
//! let config = PartitionConfig::default();
//! let boundaries = generate_boundaries(&features, &config, "PB", "distribution-district")
//!     .expect("valid input");
//!
//! assert_eq!(boundaries.len(), 1);
//! assert_eq!(boundaries[0].external_id, "PB-1");
//! assert_eq!(boundaries[0].description, "PB-1");
//! ```

use geo::{MultiPolygon, Polygon};
use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{BoundaryError, Result};

// Sequential run-length clustering
pub mod partition;
pub use partition::{partition_features, Partitioner};

// Convex hull aggregation per group
pub mod hull;
pub use hull::build_hull;

// Overlap resolution into a planar partition
pub mod overlap;
pub use overlap::resolve_overlaps;

// Identifier stamping for output polygons
pub mod stamp;
pub use stamp::stamp_boundaries;

// End-to-end orchestration
pub mod pipeline;
pub use pipeline::generate_boundaries;

// ============================================================================
// Core Types
// ============================================================================

/// A 2D coordinate in the projected plane of the input data.
///
/// All distances in this library are plain Euclidean distances in the
/// coordinate units of the source projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanePoint {
    pub x: f64,
    pub y: f64,
}

impl PlanePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Check that both coordinates are finite.
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another point, in coordinate units.
    pub fn distance_to(&self, other: &PlanePoint) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<PlanePoint> for geo::Coord<f64> {
    fn from(point: PlanePoint) -> Self {
        geo::Coord {
            x: point.x,
            y: point.y,
        }
    }
}

/// An ordered line geometry with a precomputed length attribute.
///
/// Features are owned by the caller and referenced, never copied, during
/// partitioning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineFeature {
    /// Caller-supplied identifier for the feature.
    pub feature_id: String,
    /// Vertices of the polyline, in order.
    pub points: Vec<PlanePoint>,
    /// Length of the feature in miles, precomputed by the caller.
    pub length_miles: f64,
}

impl LineFeature {
    pub fn new(feature_id: impl Into<String>, points: Vec<PlanePoint>, length_miles: f64) -> Self {
        Self {
            feature_id: feature_id.into(),
            points,
            length_miles,
        }
    }

    /// First vertex of the geometry, used as a coarse position proxy when
    /// measuring the jump between consecutive features.
    pub fn anchor(&self) -> Option<PlanePoint> {
        self.points.first().copied()
    }
}

/// Configuration for the cluster partitioner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartitionConfig {
    /// Maximum cumulative feature length (in miles) a group may reach
    /// before it is closed.
    /// Default: 10.0
    pub length_threshold: f64,

    /// Maximum distance (in miles) between consecutive features' anchor
    /// points before a new group is forced.
    /// Default: 1.0
    pub gap_distance: f64,

    /// Linear scale factor converting `gap_distance` from miles into the
    /// coordinate units of the input geometry.
    /// Default: 5820.0
    pub units_per_mile: f64,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            length_threshold: 10.0,
            gap_distance: 1.0,
            units_per_mile: 5820.0,
        }
    }
}

impl PartitionConfig {
    /// Validate the tuning parameters.
    ///
    /// Returns [`BoundaryError::InvalidInput`] for non-positive or
    /// non-finite values; validation failures are never retried.
    pub fn validate(&self) -> Result<()> {
        if !self.length_threshold.is_finite() || self.length_threshold <= 0.0 {
            return Err(BoundaryError::InvalidInput {
                parameter: "length_threshold",
                value: self.length_threshold,
            });
        }
        if !self.gap_distance.is_finite() || self.gap_distance <= 0.0 {
            return Err(BoundaryError::InvalidInput {
                parameter: "gap_distance",
                value: self.gap_distance,
            });
        }
        if !self.units_per_mile.is_finite() || self.units_per_mile <= 0.0 {
            return Err(BoundaryError::InvalidInput {
                parameter: "units_per_mile",
                value: self.units_per_mile,
            });
        }
        Ok(())
    }

    /// The gap threshold expressed in coordinate units.
    pub fn gap_in_units(&self) -> f64 {
        self.gap_distance * self.units_per_mile
    }
}

/// A contiguous run of input features destined to share one enclosing
/// polygon.
///
/// Groups are transient: created when the partitioner opens a new run and
/// consumed when the run is closed and hulled.
#[derive(Debug, Clone)]
pub struct FeatureGroup<'a> {
    /// Member features, in stream order.
    pub features: Vec<&'a LineFeature>,
    /// 0-based emission ordinal of this group.
    pub index: usize,
}

impl FeatureGroup<'_> {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Sum of member feature lengths in miles.
    pub fn total_length_miles(&self) -> f64 {
        self.features.iter().map(|f| f.length_miles).sum()
    }

    /// Identifiers of the member features, in stream order.
    pub fn feature_ids(&self) -> Vec<&str> {
        self.features
            .iter()
            .map(|f| f.feature_id.as_str())
            .collect()
    }

    /// All vertices across all member polylines.
    pub fn vertices(&self) -> impl Iterator<Item = PlanePoint> + '_ {
        self.features.iter().flat_map(|f| f.points.iter().copied())
    }
}

/// The convex polygon enclosing all geometry of one closed group.
#[derive(Debug, Clone)]
pub struct BoundaryHull {
    /// Emission ordinal of the group this hull was built from.
    pub group_index: usize,
    /// Number of features the group contained.
    pub feature_count: usize,
    /// The enclosing convex polygon.
    pub polygon: Polygon<f64>,
}

/// One boundary geometry after overlap resolution.
///
/// Clipping can split a hull into parts, so the geometry is a
/// multi-polygon. Still traceable to the hull it came from.
#[derive(Debug, Clone)]
pub struct ResolvedBoundary {
    /// Emission ordinal of the source group.
    pub source_group: usize,
    pub geometry: MultiPolygon<f64>,
}

/// A final output polygon with its synthetic attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PseudoBoundary {
    pub geometry: MultiPolygon<f64>,
    /// Freshly generated unique identifier, brace-wrapped.
    pub id: String,
    /// Sequence-scoped identifier, `<prefix>-<ordinal>` with ordinal
    /// starting at 1.
    pub external_id: String,
    /// Constant boundary-type tag supplied by the caller.
    pub boundary_type: String,
    /// Duplicate of `external_id`.
    pub description: String,
}
