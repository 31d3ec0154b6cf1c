pub mod java_file;
pub mod manifest;
pub mod wrapper;

pub use java_file::{JavaField, JavaFile, JavaMethod};
pub use manifest::{registration_manifest, wrapped_classes};
pub use wrapper::build_wrapper;
