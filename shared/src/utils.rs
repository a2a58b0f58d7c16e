use crate::constants::*;

pub fn bridge_display_name(bridge: &str) -> &str {
    BRIDGE_DISPLAY_NAMES.get(bridge.to_lowercase().as_str()).copied().unwrap_or(bridge)
}

pub fn wait_time_display(wait_time: &str) -> &str {
    match wait_time.trim() {
        "" | UNAVAILABLE_WAIT_TIME => UNAVAILABLE_WAIT_TIME,
        _ => wait_time,
    }
}

/// The Whirlpool Rapids bridge is restricted to NEXUS card holders, so general listings leave it out
pub fn is_nexus_only(bridge: &str) -> bool {
    bridge.to_lowercase().contains("whirlpool")
}
