use crate::constants::*;
use crate::imports::*;
use ::clap::Args;

#[derive(Args, Clone, Debug)]
pub struct Options {
    /// Traffic conditions page to scrape
    #[clap(long, value_name = "URL", env = "BRIDGEWAIT_URL", default_value = TRAFFIC_CONDITIONS_URL)]
    pub url: String,

    /// User-Agent header sent with the request
    #[clap(long, value_name = "USER_AGENT", env = "BRIDGEWAIT_USER_AGENT", default_value = BROWSER_USER_AGENT)]
    pub user_agent: String,

    /// Parse traffic conditions HTML from this file instead of downloading it
    #[clap(long, value_name = "PATH", env = "BRIDGEWAIT_INPUT_FILE")]
    pub input_file: Option<PathBuf>,

    /// Wait times JSON output file. The default is the checkout's public/waitTimes.json, fixed at build time
    #[clap(short, long, value_name = "PATH", env = "BRIDGEWAIT_OUTPUT_FILE", default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: PathBuf,
}
