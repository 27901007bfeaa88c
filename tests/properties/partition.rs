//! Property tests for online/offline partitioning.

use proptest::prelude::*;

use adbmux::domain::entities::Partition;

use super::strategies::device;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every device lands in exactly one side, in input order.
    #[test]
    fn property_partition_is_complete(devices in proptest::collection::vec(device(), 0..10)) {
        let partition = Partition::of(&devices);

        prop_assert_eq!(partition.online.len() + partition.offline.len(), devices.len());
        prop_assert!(partition.online.iter().all(|d| d.is_online()));
        prop_assert!(partition.offline.iter().all(|d| !d.is_online()));

        let online: Vec<_> = devices.iter().filter(|d| d.is_online()).cloned().collect();
        prop_assert_eq!(&partition.online, &online);
        prop_assert_eq!(partition.has_online(), !online.is_empty());
    }
}
