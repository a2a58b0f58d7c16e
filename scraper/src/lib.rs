mod constants;
mod error;
mod fetch;
mod imports;
mod macros;
mod output;
mod parser;
mod pipeline;
mod types;
mod utils;

pub use crate::constants::DEFAULT_OUTPUT_FILE;
pub use crate::error::ScrapeError;
pub use crate::fetch::{read_html_file, Fetcher};
pub use crate::output::write_output;
pub use crate::parser::parse_report;
pub use crate::pipeline::run;
pub use crate::types::Options;
