//! End-to-end pseudo-boundary generation.
//!
//! Composes the focused stages: partition the feature stream, hull each
//! closed group, resolve hull overlaps, stamp identifiers. Degenerate
//! groups are skipped with a warning rather than aborting the run.

use log::{debug, warn};

use crate::error::Result;
use crate::hull::build_hull;
use crate::overlap::resolve_overlaps;
use crate::partition::partition_features;
use crate::stamp::stamp_boundaries;
use crate::{BoundaryHull, FeatureGroup, LineFeature, PartitionConfig, PseudoBoundary};

/// Run the full pipeline over an ordered feature stream.
///
/// Output order is deterministic for a given input, with or without the
/// `parallel` feature; only the generated UUIDs differ between runs.
pub fn generate_boundaries(
    features: &[LineFeature],
    config: &PartitionConfig,
    id_prefix: &str,
    boundary_type: &str,
) -> Result<Vec<PseudoBoundary>> {
    let groups = partition_features(features, config)?;
    debug!(
        "partitioned {} features into {} groups",
        features.len(),
        groups.len()
    );

    let hulls = build_hulls(&groups);
    debug!("built {} hulls", hulls.len());

    let resolved = resolve_overlaps(&hulls)?;
    Ok(stamp_boundaries(resolved, id_prefix, boundary_type))
}

#[cfg(not(feature = "parallel"))]
fn build_hulls(groups: &[FeatureGroup]) -> Vec<BoundaryHull> {
    groups.iter().filter_map(try_hull).collect()
}

#[cfg(feature = "parallel")]
fn build_hulls(groups: &[FeatureGroup]) -> Vec<BoundaryHull> {
    use rayon::prelude::*;

    groups.par_iter().filter_map(try_hull).collect()
}

fn try_hull(group: &FeatureGroup) -> Option<BoundaryHull> {
    match build_hull(group) {
        Ok(hull) => Some(hull),
        Err(err) => {
            warn!(
                "skipping group {} ({} features): {}",
                group.index,
                group.len(),
                err
            );
            None
        }
    }
}
