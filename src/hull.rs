//! Convex hull aggregation for closed feature groups.
//!
//! Each closed group becomes exactly one enclosing convex polygon built
//! from the union of all vertices across the group's member polylines.

use geo::{Area, ConvexHull, Coord, LineString, MultiPoint, Point, Polygon};

use crate::error::{BoundaryError, Result};
use crate::{BoundaryHull, FeatureGroup};

/// Hull area below which the input is treated as collapsed (all vertices
/// collinear or coincident).
const DEGENERATE_AREA: f64 = 1e-9;

/// Half-width, in coordinate units, of the sliver rectangle substituted
/// for collapsed hulls.
const SLIVER_HALF_WIDTH: f64 = 1e-3;

/// Compute the convex hull enclosing all geometry in a group.
///
/// Degenerate groups still produce a valid polygon: collinear vertex sets
/// are widened into a minimal-area sliver rectangle, a single distinct
/// vertex into a tiny square. A group contributing no vertices at all is
/// an error; the caller decides whether that is fatal.
pub fn build_hull(group: &FeatureGroup) -> Result<BoundaryHull> {
    let coords: Vec<Coord<f64>> = group.vertices().map(Coord::from).collect();
    if coords.is_empty() {
        return Err(BoundaryError::DegenerateGeometry {
            group_index: group.index,
            reason: "group contributes no vertices".to_string(),
        });
    }

    let points: MultiPoint<f64> = coords.iter().copied().map(Point::from).collect();
    let hull = points.convex_hull();

    let polygon = if hull.unsigned_area() < DEGENERATE_AREA {
        sliver_rectangle(&coords)
    } else {
        hull
    };

    Ok(BoundaryHull {
        group_index: group.index,
        feature_count: group.len(),
        polygon,
    })
}

/// Minimal-area rectangle standing in for a collapsed hull.
///
/// For collinear input the lexicographic extremes are the segment
/// endpoints; the rectangle spans them with a hair of width. A single
/// distinct point yields a tiny axis-aligned square.
fn sliver_rectangle(coords: &[Coord<f64>]) -> Polygon<f64> {
    let mut lo = coords[0];
    let mut hi = coords[0];
    for c in coords {
        if (c.x, c.y) < (lo.x, lo.y) {
            lo = *c;
        }
        if (c.x, c.y) > (hi.x, hi.y) {
            hi = *c;
        }
    }

    let dx = hi.x - lo.x;
    let dy = hi.y - lo.y;
    let span = (dx * dx + dy * dy).sqrt();

    if span < f64::EPSILON {
        let h = SLIVER_HALF_WIDTH;
        return Polygon::new(
            LineString::from(vec![
                (lo.x - h, lo.y - h),
                (lo.x + h, lo.y - h),
                (lo.x + h, lo.y + h),
                (lo.x - h, lo.y + h),
            ]),
            vec![],
        );
    }

    // Unit vector along the segment and its perpendicular.
    let ux = dx / span;
    let uy = dy / span;
    let vx = -uy * SLIVER_HALF_WIDTH;
    let vy = ux * SLIVER_HALF_WIDTH;

    Polygon::new(
        LineString::from(vec![
            (lo.x + vx, lo.y + vy),
            (hi.x + vx, hi.y + vy),
            (hi.x - vx, hi.y - vy),
            (lo.x - vx, lo.y - vy),
        ]),
        vec![],
    )
}
