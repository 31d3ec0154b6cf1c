pub mod generate;

pub use generate::{run, GenerateSummary};
