//! Property tests for the snapshot differ.

use std::collections::HashSet;

use proptest::prelude::*;

use adbmux::diff;

use super::strategies::snapshot;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: added, removed and changed never share an id.
    #[test]
    fn property_diff_sets_are_disjoint(previous in snapshot(), current in snapshot()) {
        let changes = diff(&previous, &current);

        let added: HashSet<_> = changes.added.iter().map(|d| d.id().to_string()).collect();
        let removed: HashSet<_> = changes.removed.iter().map(|d| d.id().to_string()).collect();
        let changed: HashSet<_> = changes.changed.iter().map(|d| d.id().to_string()).collect();

        prop_assert!(added.is_disjoint(&removed));
        prop_assert!(added.is_disjoint(&changed));
        prop_assert!(removed.is_disjoint(&changed));
    }

    /// PROPERTY: diffing a snapshot against itself yields nothing.
    #[test]
    fn property_diff_is_idempotent(snapshot in snapshot()) {
        prop_assert!(diff(&snapshot, &snapshot).is_empty());
    }

    /// PROPERTY: every id is classified by membership and equality.
    #[test]
    fn property_diff_classifies_every_id(previous in snapshot(), current in snapshot()) {
        let changes = diff(&previous, &current);

        for device in current.devices() {
            let in_added = changes.added.contains(device);
            let in_changed = changes.changed.contains(device);
            match previous.get(device.id()) {
                None => prop_assert!(in_added && !in_changed),
                Some(old) if old == device => prop_assert!(!in_added && !in_changed),
                Some(_) => prop_assert!(in_changed && !in_added),
            }
        }
        for device in previous.devices() {
            prop_assert_eq!(
                changes.removed.contains(device),
                !current.contains(device.id())
            );
        }
    }

    /// PROPERTY: added and changed keep the order of the current snapshot.
    #[test]
    fn property_diff_preserves_current_order(previous in snapshot(), current in snapshot()) {
        let changes = diff(&previous, &current);
        let position = |id: &str| current.devices().iter().position(|d| d.id() == id);

        for set in [&changes.added, &changes.changed] {
            let positions: Vec<_> = set.iter().map(|d| position(d.id())).collect();
            let mut sorted = positions.clone();
            sorted.sort();
            prop_assert_eq!(positions, sorted);
        }
    }
}
