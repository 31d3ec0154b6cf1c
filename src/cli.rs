use crate::config::GeneratorConfig;
use clap::Parser;
use std::path::PathBuf;

/// The tool runs with no required arguments: the defaults reproduce the fixed
/// relative paths of a standard regeneration. Every path can be overridden.
#[derive(Parser, Debug)]
#[command(name = "clijgen")]
#[command(about = "Generates JIPipe plugin node wrappers from the CLIJ2 source tree", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Root of the CLIJ2 source distribution
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Directory to write generated wrappers into
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// JSON map of fully-qualified class name to description text
    #[arg(long)]
    pub descriptions: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn into_config(self) -> anyhow::Result<GeneratorConfig> {
        let mut config = GeneratorConfig::load(self.config.as_deref())?;
        if let Some(source_root) = self.source_root {
            config.source_root = source_root;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
        if let Some(descriptions) = self.descriptions {
            config.descriptions_file = Some(descriptions);
        }
        Ok(config)
    }
}
