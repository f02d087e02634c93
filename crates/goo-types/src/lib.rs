pub mod types;

pub use types::ExtractionMode;
