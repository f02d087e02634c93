pub mod preprocess;

pub use preprocess::{DefaultPreprocessor, Preprocessor, extract_terms};
