//! Shared generators.

use proptest::prelude::*;

use adbmux::{Device, DeviceState, Snapshot};

pub fn state() -> impl Strategy<Value = DeviceState> {
    prop_oneof![
        Just(DeviceState::Online),
        Just(DeviceState::Offline),
        Just(DeviceState::Unauthorized),
    ]
}

/// Devices drawn from a small id pool so snapshots overlap often
pub fn device() -> impl Strategy<Value = Device> {
    ("[A-F]", prop_oneof![Just("Pixel"), Just("Galaxy")], state())
        .prop_map(|(id, model, state)| Device::new(id, model, state))
}

pub fn snapshot() -> impl Strategy<Value = Snapshot> {
    proptest::collection::vec(device(), 0..8).prop_map(Snapshot::new)
}
