pub mod output;
pub mod walker;

pub use output::write_output_file;
pub use walker::{find_java_files, SourceWalker};
