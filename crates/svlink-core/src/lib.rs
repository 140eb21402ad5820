pub mod config;
pub mod logging;

pub mod analyze;
pub mod extract;
pub mod panorama;

pub use extract::{parse, try_parse, ExtractError};
pub use panorama::PanoramaReference;
