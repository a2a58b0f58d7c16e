use crate::imports::*;

// Relative to this crate, so the scraper lands its output in the web front end's public directory. Resolved at
// compile time, so a relocated binary still points into the checkout it was built from.
pub const DEFAULT_OUTPUT_FILE: &str = concatcp!(env!("CARGO_MANIFEST_DIR"), "/../public/", WAIT_TIMES_FILE_NAME);
