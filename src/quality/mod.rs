//! Available resolutions for a URL

pub mod map;
pub mod resolver;
pub mod selection;

pub use map::{QualityMap, Resolution};
pub use resolver::QualityResolver;
pub use selection::QualitySelection;
