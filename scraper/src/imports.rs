pub use ::anyhow::{Context, Result};
pub use ::bridgewait_shared::constants::*;
pub use ::bridgewait_shared::types::*;
pub use ::bridgewait_shared::utils::*;
pub use ::const_format::concatcp;
pub use ::log::{debug, info, warn};
pub use ::once_cell::sync::OnceCell;
pub use ::scraper::{ElementRef, Html, Selector};
pub use ::std::fs;
pub use ::std::path::{Path, PathBuf};
