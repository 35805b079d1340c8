//! Tests for the stamp module

use std::collections::HashSet;

use geo::{LineString, MultiPolygon, Polygon};
use pseudobound::{ResolvedBoundary, stamp_boundaries};
use uuid::Uuid;

fn boundary(source_group: usize) -> ResolvedBoundary {
    let offset = source_group as f64 * 100.0;
    ResolvedBoundary {
        source_group,
        geometry: MultiPolygon::new(vec![Polygon::new(
            LineString::from(vec![
                (offset, 0.0),
                (offset + 10.0, 0.0),
                (offset + 10.0, 10.0),
                (offset, 10.0),
                (offset, 0.0),
            ]),
            vec![],
        )]),
    }
}

#[test]
fn test_external_ids_are_sequential_from_one() {
    let stamped = stamp_boundaries(
        vec![boundary(0), boundary(1), boundary(2)],
        "PB",
        "district",
    );

    let external: Vec<_> = stamped.iter().map(|b| b.external_id.as_str()).collect();
    assert_eq!(external, vec!["PB-1", "PB-2", "PB-3"]);
}

#[test]
fn test_description_mirrors_external_id() {
    let stamped = stamp_boundaries(vec![boundary(0), boundary(1)], "ZONE", "district");

    for b in &stamped {
        assert_eq!(b.description, b.external_id);
    }
}

#[test]
fn test_boundary_type_applied_to_all() {
    let stamped = stamp_boundaries(vec![boundary(0), boundary(1)], "PB", "gas-distribution");

    for b in &stamped {
        assert_eq!(b.boundary_type, "gas-distribution");
    }
}

#[test]
fn test_id_is_brace_wrapped_uuid() {
    let stamped = stamp_boundaries(vec![boundary(0)], "PB", "district");
    let id = &stamped[0].id;

    assert_eq!(id.len(), 38);
    assert!(id.starts_with('{') && id.ends_with('}'));
    assert!(Uuid::parse_str(&id[1..id.len() - 1]).is_ok());
}

#[test]
fn test_ids_are_unique() {
    let stamped = stamp_boundaries(
        (0..50).map(boundary).collect(),
        "PB",
        "district",
    );

    let unique: HashSet<_> = stamped.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(unique.len(), stamped.len());
}
