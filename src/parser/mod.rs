pub mod run_splitter;

pub use run_splitter::{tokenize, split_segments, classify};
