use planetsort_compare::{
    Error, OrderTypeIdReverseVersion, OrderTypeIdVersion, check_disjoint_magnitudes, check_sorted,
    is_sorted, magnitude_collisions,
};
use planetsort_types::{ObjectHeader, TypedId};
use pretty_assertions::assert_eq;

fn tid(s: &str) -> TypedId {
    s.parse().unwrap()
}

// ── is_sorted / check_sorted ──────────────────────────────────────

#[test]
fn empty_and_single_streams_are_sorted() {
    let empty: Vec<ObjectHeader> = Vec::new();
    assert!(is_sorted(&empty, OrderTypeIdVersion));
    assert!(check_sorted(&[ObjectHeader::way(1, 1)], OrderTypeIdReverseVersion).is_ok());
}

#[test]
fn sorted_stream_passes() {
    let items = [
        ObjectHeader::node(1, 1),
        ObjectHeader::way(5, 3),
        ObjectHeader::way(5, 2),
        ObjectHeader::way(-6, 1),
    ];
    assert!(is_sorted(&items, OrderTypeIdReverseVersion));
    assert!(check_sorted(&items, OrderTypeIdReverseVersion).is_ok());
    assert!(!is_sorted(&items, OrderTypeIdVersion));
}

#[test]
fn duplicates_do_not_break_sortedness() {
    let items = [ObjectHeader::way(5, 2), ObjectHeader::way(5, 2)];
    assert!(is_sorted(&items, OrderTypeIdVersion));
    assert!(is_sorted(&items, OrderTypeIdReverseVersion));
}

#[test]
fn check_sorted_reports_first_violation() {
    let items = [
        ObjectHeader::way(5, 1),
        ObjectHeader::way(5, 2),
        ObjectHeader::way(5, 3),
    ];
    let err = check_sorted(&items, OrderTypeIdReverseVersion).unwrap_err();
    match err {
        Error::OutOfOrder {
            index,
            previous,
            next,
        } => {
            assert_eq!(index, 1);
            assert_eq!(previous, tid("w5"));
            assert_eq!(next, tid("w5"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn check_sorted_error_message_names_items() {
    let items = [ObjectHeader::relation(1, 1), ObjectHeader::node(2, 1)];
    let err = check_sorted(&items, OrderTypeIdVersion).unwrap_err();
    assert_eq!(err.to_string(), "item 1 (n2) sorts before its predecessor (r1)");
}

#[test]
fn check_sorted_works_on_references() {
    let values = [ObjectHeader::way(2, 1), ObjectHeader::way(1, 1)];
    let refs: Vec<&ObjectHeader> = values.iter().collect();
    assert!(!is_sorted(&refs, OrderTypeIdVersion));
}

// ── magnitude collisions ──────────────────────────────────────────

#[test]
fn no_collisions_in_disjoint_stream() {
    let items = [
        ObjectHeader::way(5, 1),
        ObjectHeader::way(5, 2),
        ObjectHeader::way(-6, 1),
        ObjectHeader::node(-5, 1),
    ];
    assert!(magnitude_collisions(&items).is_empty());
    assert!(check_disjoint_magnitudes(&items).is_ok());
}

#[test]
fn same_magnitude_in_different_kinds_is_not_a_collision() {
    let items = [ObjectHeader::node(7, 1), ObjectHeader::way(-7, 1)];
    assert!(magnitude_collisions(&items).is_empty());
}

#[test]
fn collisions_reported_once_per_pair() {
    let items = [
        ObjectHeader::way(7, 1),
        ObjectHeader::way(-7, 1),
        ObjectHeader::way(7, 2),
        ObjectHeader::way(-7, 3),
        ObjectHeader::node(3, 1),
        ObjectHeader::node(-3, 1),
        ObjectHeader::relation(9, 1),
    ];
    assert_eq!(
        magnitude_collisions(&items),
        vec![(tid("n-3"), tid("n3")), (tid("w-7"), tid("w7"))]
    );
}

#[test]
fn check_disjoint_magnitudes_reports_first_collision() {
    let items = [ObjectHeader::way(-7, 1), ObjectHeader::way(7, 1)];
    let err = check_disjoint_magnitudes(&items).unwrap_err();
    assert!(matches!(
        err,
        Error::MagnitudeCollision { first, second } if first == tid("w-7") && second == tid("w7")
    ));
}

/// Adjacent checks alone cannot see a group split by an equal-magnitude id;
/// the collision check is what catches it.
#[test]
fn split_group_needs_collision_check() {
    let items = [
        ObjectHeader::way(7, 2),
        ObjectHeader::way(-7, 1),
        ObjectHeader::way(7, 1),
    ];
    assert!(is_sorted(&items, OrderTypeIdReverseVersion));
    assert!(check_disjoint_magnitudes(&items).is_err());
}
