//! Parser for `adb devices -l` output
//!
//! ```text
//! * daemon not running; starting now at tcp:5037
//! * daemon started successfully
//! List of devices attached
//! emulator-5554          device product:sdk_gphone64 model:sdk_gphone64_x86_64 device:emu64x transport_id:1
//! R58M12ABCDE            unauthorized usb:1-1 transport_id:2
//! 0123456789ABCDEF       no permissions (user in plugdev group; are your udev rules wrong?); see [http://developer.android.com/tools/device.html]
//! ```

use crate::domain::entities::{Device, DeviceState, Snapshot};
use crate::error::DetectionError;

const HEADER: &str = "List of devices attached";

/// Model shown when the host does not report one
pub const UNKNOWN_MODEL: &str = "unknown";

pub fn parse_device_list(output: &str) -> Result<Snapshot, DetectionError> {
    let mut seen_header = false;
    let mut devices = Vec::new();

    for (idx, raw) in output.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('*') {
            continue;
        }

        if !seen_header {
            if line.starts_with(HEADER) {
                seen_header = true;
                continue;
            }
            return Err(DetectionError::Malformed {
                line: idx + 1,
                content: line.to_string(),
            });
        }

        devices.push(parse_entry(line).ok_or_else(|| DetectionError::Malformed {
            line: idx + 1,
            content: line.to_string(),
        })?);
    }

    if !seen_header {
        return Err(DetectionError::Malformed {
            line: 0,
            content: "missing device list header".to_string(),
        });
    }

    Ok(Snapshot::new(devices))
}

fn parse_entry(line: &str) -> Option<Device> {
    let mut parts = line.split_whitespace();
    let id = parts.next()?;
    let rest: Vec<&str> = parts.collect();
    let state_word = rest.first()?;

    // "no permissions (...)" spans several words
    let state = if state_word.eq_ignore_ascii_case("no") && rest.get(1) == Some(&"permissions") {
        DeviceState::Unauthorized
    } else {
        parse_state(state_word)
    };

    let model = rest
        .iter()
        .find_map(|field| field.strip_prefix("model:"))
        .filter(|m| !m.is_empty())
        .map(|m| m.replace('_', " "))
        .unwrap_or_else(|| UNKNOWN_MODEL.to_string());

    Some(Device::new(id, model, state))
}

fn parse_state(word: &str) -> DeviceState {
    match word {
        "device" => DeviceState::Online,
        "unauthorized" | "authorizing" => DeviceState::Unauthorized,
        _ => DeviceState::Offline,
    }
}
