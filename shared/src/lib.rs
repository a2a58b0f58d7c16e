mod imports;

pub mod constants;
pub mod types;
pub mod utils;
