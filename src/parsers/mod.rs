pub mod java;

pub use java::{parse_file, parse_source};
