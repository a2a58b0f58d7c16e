use crate::imports::*;

pub const NIAGARA_BRIDGES_BASE_URL: &str = "https://www.niagarafallsbridges.com";
pub const TRAFFIC_CONDITIONS_URL: &str = concatcp!(NIAGARA_BRIDGES_BASE_URL, "/services/traffic-conditions");

// The traffic conditions site rejects requests carrying reqwest's default user agent
pub const BROWSER_USER_AGENT: &str = concatcp!(
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/114.0 Safari/537.36"
);

pub const WAIT_TIMES_FILE_NAME: &str = "waitTimes.json";

pub const UNKNOWN_TIMESTAMP: &str = "Unknown time";

pub const UNAVAILABLE_WAIT_TIME: &str = "N/A";

pub const NO_DELAY_TEXT: &str = "no delay";

// Keys are lower-cased bridge names as they appear in the source tables
pub static BRIDGE_DISPLAY_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from_iter([
        ("lewistonqueenston", "Lewiston-Queenston"),
        ("rainbow", "Rainbow Bridge"),
        ("whirlpool**(nexus only)", "Whirlpool Rapids"),
        ("whirlpool", "Whirlpool Rapids"),
        ("peacebridge", "Peace Bridge"),
    ])
});
