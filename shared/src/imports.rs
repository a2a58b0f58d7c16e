pub use ::const_format::concatcp;
pub use ::indexmap::IndexMap;
pub use ::once_cell::sync::Lazy;
pub use ::serde::{Deserialize, Serialize};
pub use ::std::collections::HashMap;
pub use ::strum_macros::{Display, EnumIter, EnumString};
