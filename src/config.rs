use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Generator configuration.
///
/// The defaults reproduce the fixed relative paths and whitelists of the
/// original batch tool, so running with no configuration file and no CLI
/// overrides regenerates the standard wrapper set.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Root of the decompressed CLIJ2 source distribution.
    #[serde(default = "default_source_root")]
    pub source_root: PathBuf,

    /// Directory the generated wrapper sources are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Optional JSON map of fully-qualified class name to description text.
    #[serde(default)]
    pub descriptions_file: Option<PathBuf>,

    /// Java package of the generated wrappers.
    #[serde(default = "default_output_package")]
    pub output_package: String,

    /// Namespace token prefixed to every canonical identifier.
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Icon resource referenced by every registration line.
    #[serde(default = "default_icon")]
    pub icon: String,

    /// The library's own context/handle types, always excluded from wrappers.
    #[serde(default = "default_context_types")]
    pub context_types: Vec<String>,

    /// Buffer-like types that carry image payloads between operations.
    #[serde(default = "default_buffer_types")]
    pub buffer_types: Vec<String>,

    /// Primitive and string types accepted as node parameters.
    #[serde(default = "default_scalar_types")]
    pub scalar_types: Vec<String>,

    /// Glob patterns excluded from the source walk.
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            output_dir: default_output_dir(),
            descriptions_file: None,
            output_package: default_output_package(),
            namespace: default_namespace(),
            icon: default_icon(),
            context_types: default_context_types(),
            buffer_types: default_buffer_types(),
            scalar_types: default_scalar_types(),
            ignore_patterns: Vec::new(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a TOML file, or the defaults when `path` is None.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config file {}", path.display()))?;
                let config: GeneratorConfig = toml::from_str(&content)
                    .with_context(|| format!("invalid config file {}", path.display()))?;
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn is_context_type(&self, type_name: &str) -> bool {
        self.context_types.iter().any(|t| t == type_name)
    }

    pub fn is_buffer_type(&self, type_name: &str) -> bool {
        self.buffer_types.iter().any(|t| t == type_name)
    }

    pub fn is_scalar_type(&self, type_name: &str) -> bool {
        self.scalar_types.iter().any(|t| t == type_name)
    }
}

fn default_source_root() -> PathBuf {
    PathBuf::from("clij2/src/main/java")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("generated/algorithms")
}

fn default_output_package() -> String {
    "org.hkijena.jipipe.plugins.clij2.algorithms".to_string()
}

fn default_namespace() -> String {
    "clij2".to_string()
}

fn default_icon() -> String {
    "apps/clij.png".to_string()
}

fn default_context_types() -> Vec<String> {
    vec!["CLIJ2".to_string(), "CLIJ".to_string(), "CLIJx".to_string()]
}

fn default_buffer_types() -> Vec<String> {
    vec![
        "ClearCLBuffer".to_string(),
        "ClearCLImage".to_string(),
        "ClearCLImageInterface".to_string(),
    ]
}

fn default_scalar_types() -> Vec<String> {
    [
        "int", "long", "float", "double", "boolean", "Integer", "Long", "Float", "Double",
        "Boolean", "String",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
