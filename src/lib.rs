// Export modules for library usage
pub mod classify;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod generate;
pub mod ident;
pub mod io;
pub mod parsers;
pub mod resolve;

// Re-export commonly used types
pub use crate::config::GeneratorConfig;
pub use crate::core::{
    Annotation, CanonicalOperation, Declaration, ExtractedMethod, MethodDeclaration, Parameter,
    ParameterRole,
};
pub use crate::errors::ParseError;
pub use crate::resolve::GenerationContext;
