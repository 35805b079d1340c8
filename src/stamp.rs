//! Identifier stamping for resolved boundary polygons.

use uuid::Uuid;

use crate::{PseudoBoundary, ResolvedBoundary};

/// Attach synthetic identifiers to resolved boundaries, in iteration
/// order.
///
/// Per polygon: a fresh brace-wrapped v4 UUID, an external identifier
/// `<prefix>-<ordinal>` with the ordinal starting at 1, the caller's
/// constant boundary-type tag, and a description mirroring the external
/// identifier.
pub fn stamp_boundaries(
    resolved: Vec<ResolvedBoundary>,
    id_prefix: &str,
    boundary_type: &str,
) -> Vec<PseudoBoundary> {
    resolved
        .into_iter()
        .enumerate()
        .map(|(position, boundary)| {
            let external_id = format!("{}-{}", id_prefix, position + 1);
            PseudoBoundary {
                geometry: boundary.geometry,
                id: format!("{{{}}}", Uuid::new_v4()),
                description: external_id.clone(),
                external_id,
                boundary_type: boundary_type.to_string(),
            }
        })
        .collect()
}
