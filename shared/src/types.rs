use crate::constants::*;
use crate::imports::*;

/// Wait times for a single bridge, keyed by lower-cased vehicle type (e.g. "cars", "trucks").
pub type VehicleWaitTimes = IndexMap<String, String>;

/// Wait times for every bridge in one direction, keyed by bridge name as displayed in the source table.
pub type BridgeTable = IndexMap<String, VehicleWaitTimes>;

#[derive(Copy, Clone, Debug, Deserialize, Display, EnumIter, EnumString, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    ToUsa,
    ToCanada,
}

#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum WaitStatus {
    Unavailable,
    NoDelay,
    Delay,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct WaitTimeReport {
    pub timestamp: String,
    pub to_usa: BridgeTable,
    pub to_canada: BridgeTable,
}

impl Direction {
    /// Position of this direction's table among the tables of the traffic conditions page
    pub fn table_index(&self) -> usize {
        match *self {
            Direction::ToUsa => 0,
            Direction::ToCanada => 1,
        }
    }

    pub fn title(&self) -> &'static str {
        match *self {
            Direction::ToUsa => "Canada to USA",
            Direction::ToCanada => "USA to Canada",
        }
    }
}

impl WaitStatus {
    pub fn classify(wait_time: &str) -> WaitStatus {
        let wait_time = wait_time.trim();
        if wait_time.is_empty() || wait_time == UNAVAILABLE_WAIT_TIME {
            WaitStatus::Unavailable
        } else if wait_time.to_lowercase().contains(NO_DELAY_TEXT) {
            WaitStatus::NoDelay
        } else {
            WaitStatus::Delay
        }
    }
}

impl WaitTimeReport {
    pub fn new(timestamp: String, to_usa: BridgeTable, to_canada: BridgeTable) -> WaitTimeReport {
        WaitTimeReport { timestamp, to_usa, to_canada }
    }

    pub fn table(&self, direction: Direction) -> &BridgeTable {
        match direction {
            Direction::ToUsa => &self.to_usa,
            Direction::ToCanada => &self.to_canada,
        }
    }

    pub fn has_known_timestamp(&self) -> bool {
        self.timestamp != UNKNOWN_TIMESTAMP
    }
}
