//! Overlap resolution: turning a set of convex hulls into a planar
//! partition.
//!
//! Candidate pairs come from an R-tree over hull bounding boxes. Each
//! overlapping pair gives up its contested area along the perpendicular
//! bisector of the two centroids, so neither side wins by insertion
//! order. Differences only ever remove area, so once a pair is disjoint
//! it stays disjoint and the total covered extent is preserved.

use geo::{
    Area, BooleanOps, BoundingRect, Centroid, Coord, LineString, MultiPolygon, Point, Polygon,
};
use log::warn;
use rstar::{AABB, RTree, RTreeObject};

use crate::error::{BoundaryError, Result};
use crate::{BoundaryHull, ResolvedBoundary};

/// Interior overlaps smaller than this are treated as shared-edge noise.
const OVERLAP_AREA_EPSILON: f64 = 1e-9;

/// Centroid separations below this leave the bisector undefined.
const CENTROID_EPSILON: f64 = 1e-9;

struct HullEnvelope {
    index: usize,
    envelope: AABB<[f64; 2]>,
}

impl RTreeObject for HullEnvelope {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

/// Resolve hull overlaps into a disjoint boundary set.
///
/// Guarantees on success:
/// - no two output geometries share interior area
/// - the union of output geometries equals the union of the input hulls
/// - output order follows input order; a hull consumed entirely by its
///   neighbors is dropped with a warning
///
/// A single input hull is returned unchanged. Zero-area hulls cannot
/// participate and are rejected with [`BoundaryError::DegenerateGeometry`];
/// callers are expected to filter those out beforehand.
pub fn resolve_overlaps(hulls: &[BoundaryHull]) -> Result<Vec<ResolvedBoundary>> {
    for hull in hulls {
        if hull.polygon.unsigned_area() <= OVERLAP_AREA_EPSILON {
            return Err(BoundaryError::DegenerateGeometry {
                group_index: hull.group_index,
                reason: "zero-area hull cannot participate in overlap resolution".to_string(),
            });
        }
    }

    if hulls.len() <= 1 {
        return Ok(hulls
            .iter()
            .map(|hull| ResolvedBoundary {
                source_group: hull.group_index,
                geometry: MultiPolygon::new(vec![hull.polygon.clone()]),
            })
            .collect());
    }

    let mut geometries: Vec<MultiPolygon<f64>> = hulls
        .iter()
        .map(|hull| MultiPolygon::new(vec![hull.polygon.clone()]))
        .collect();

    let extent = world_extent(hulls);

    for (i, j) in candidate_pairs(hulls) {
        let contested = geometries[i].intersection(&geometries[j]);
        if contested.unsigned_area() <= OVERLAP_AREA_EPSILON {
            continue;
        }

        let (ci, cj) = match (geometries[i].centroid(), geometries[j].centroid()) {
            (Some(a), Some(b)) => (a, b),
            _ => continue,
        };

        let centroid_gap = ((cj.x() - ci.x()).powi(2) + (cj.y() - ci.y()).powi(2)).sqrt();
        if centroid_gap < CENTROID_EPSILON {
            // Coincident centroids leave the bisector undefined; the
            // earlier hull keeps the whole contested area.
            let trimmed = geometries[j].difference(&contested);
            geometries[j] = trimmed;
            continue;
        }

        // Each side keeps the half of the contested area nearer its own
        // centroid.
        let toward_j = half_plane(ci, cj, extent);
        let toward_i = half_plane(cj, ci, extent);

        let ceded_by_i = contested.intersection(&toward_j);
        let ceded_by_j = contested.intersection(&toward_i);

        let trimmed_i = geometries[i].difference(&ceded_by_i);
        geometries[i] = trimmed_i;
        let trimmed_j = geometries[j].difference(&ceded_by_j);
        geometries[j] = trimmed_j;
    }

    let mut resolved = Vec::with_capacity(hulls.len());
    for (hull, geometry) in hulls.iter().zip(geometries) {
        if geometry.unsigned_area() <= OVERLAP_AREA_EPSILON {
            warn!(
                "group {} ({} features) was absorbed entirely by neighboring boundaries, dropping it",
                hull.group_index, hull.feature_count
            );
            continue;
        }
        resolved.push(ResolvedBoundary {
            source_group: hull.group_index,
            geometry,
        });
    }
    Ok(resolved)
}

/// Index pairs whose bounding boxes intersect, in ascending `(i, j)`
/// order so the pass is deterministic.
fn candidate_pairs(hulls: &[BoundaryHull]) -> Vec<(usize, usize)> {
    let envelopes: Vec<HullEnvelope> = hulls
        .iter()
        .enumerate()
        .filter_map(|(index, hull)| {
            hull.polygon.bounding_rect().map(|rect| HullEnvelope {
                index,
                envelope: AABB::from_corners(
                    [rect.min().x, rect.min().y],
                    [rect.max().x, rect.max().y],
                ),
            })
        })
        .collect();

    let rtree = RTree::bulk_load(envelopes);

    let mut pairs: Vec<(usize, usize)> = Vec::new();
    for object in rtree.iter() {
        for other in rtree.locate_in_envelope_intersecting(&object.envelope()) {
            if object.index < other.index {
                pairs.push((object.index, other.index));
            }
        }
    }
    pairs.sort_unstable();
    pairs.dedup();
    pairs
}

/// Half-plane of points nearer `to` than `from`, materialized as a quad
/// large enough to cover every hull, bounded by the perpendicular
/// bisector of the two points.
fn half_plane(from: Point<f64>, to: Point<f64>, extent: f64) -> MultiPolygon<f64> {
    let mx = (from.x() + to.x()) / 2.0;
    let my = (from.y() + to.y()) / 2.0;

    let dx = to.x() - from.x();
    let dy = to.y() - from.y();
    let length = (dx * dx + dy * dy).sqrt();
    let ux = dx / length;
    let uy = dy / length;
    let vx = -uy;
    let vy = ux;

    let quad = Polygon::new(
        LineString::from(vec![
            Coord {
                x: mx - vx * extent,
                y: my - vy * extent,
            },
            Coord {
                x: mx + vx * extent,
                y: my + vy * extent,
            },
            Coord {
                x: mx + (vx + ux) * extent,
                y: my + (vy + uy) * extent,
            },
            Coord {
                x: mx + (ux - vx) * extent,
                y: my + (uy - vy) * extent,
            },
        ]),
        vec![],
    );
    MultiPolygon::new(vec![quad])
}

/// A length guaranteed to dwarf the combined extent of all hulls.
fn world_extent(hulls: &[BoundaryHull]) -> f64 {
    let mut min_x = f64::MAX;
    let mut min_y = f64::MAX;
    let mut max_x = f64::MIN;
    let mut max_y = f64::MIN;

    for hull in hulls {
        if let Some(rect) = hull.polygon.bounding_rect() {
            min_x = min_x.min(rect.min().x);
            min_y = min_y.min(rect.min().y);
            max_x = max_x.max(rect.max().x);
            max_y = max_y.max(rect.max().y);
        }
    }

    ((max_x - min_x) + (max_y - min_y)) * 2.0 + 1.0
}
