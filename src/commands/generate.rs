//! The generation pipeline: walk, parse, classify, resolve, emit.
//!
//! Single-threaded batch run. A parse or I/O failure aborts the whole run;
//! files already written stay in place and are overwritten on the next
//! successful run.

use crate::classify;
use crate::config::GeneratorConfig;
use crate::core::{CanonicalOperation, Declaration, ExtractedMethod};
use crate::generate::{build_wrapper, registration_manifest, wrapped_classes};
use crate::io::{find_java_files, write_output_file};
use crate::parsers;
use crate::resolve::{resolve, GenerationContext};
use anyhow::{Context, Result};
use log::{info, warn};
use std::collections::HashMap;

pub const MANIFEST_FILE: &str = "registrations.txt";
pub const WRAPPED_CLASSES_FILE: &str = "wrapped-classes.txt";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    pub classes_scanned: usize,
    pub methods_retained: usize,
    pub overloads_dropped: usize,
    pub files_written: usize,
}

pub fn run(config: &GeneratorConfig) -> Result<GenerateSummary> {
    let files = find_java_files(&config.source_root, config.ignore_patterns.clone())
        .with_context(|| format!("failed to walk {}", config.source_root.display()))?;
    info!(
        "scanning {} source files under {}",
        files.len(),
        config.source_root.display()
    );

    let mut declarations: Vec<Declaration> = Vec::new();
    for path in &files {
        declarations.extend(parsers::parse_file(path)?);
    }

    let mut retained: Vec<ExtractedMethod> = Vec::new();
    for declaration in &declarations {
        retained.extend(classify::extract_methods(declaration, config));
    }
    info!(
        "retained {} methods from {} classes",
        retained.len(),
        declarations.len()
    );

    let descriptions = load_descriptions(config)?;
    let audit = wrapped_classes(&retained);
    let retained_count = retained.len();

    let mut context = GenerationContext::new();
    let operations = resolve(retained, &config.namespace, &mut context);
    let overloads_dropped = retained_count - operations.len();

    let mut files_written = 0;
    for operation in &operations {
        let description = description_for(operation, &descriptions);
        let wrapper = build_wrapper(operation, description, config);
        write_output_file(&config.output_dir, &wrapper.file_name(), &wrapper.render())?;
        files_written += 1;
    }

    write_output_file(
        &config.output_dir,
        MANIFEST_FILE,
        &registration_manifest(&operations, &config.icon),
    )?;
    write_output_file(&config.output_dir, WRAPPED_CLASSES_FILE, &audit)?;
    files_written += 2;

    let summary = GenerateSummary {
        classes_scanned: declarations.len(),
        methods_retained: retained_count,
        overloads_dropped,
        files_written,
    };
    info!(
        "generated {} operations ({} overloads dropped), {} files written to {}",
        operations.len(),
        summary.overloads_dropped,
        summary.files_written,
        config.output_dir.display()
    );
    Ok(summary)
}

fn load_descriptions(config: &GeneratorConfig) -> Result<HashMap<String, String>> {
    let Some(path) = &config.descriptions_file else {
        return Ok(HashMap::new());
    };
    if !path.exists() {
        warn!(
            "description map {} not found, descriptions will be empty",
            path.display()
        );
        return Ok(HashMap::new());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read description map {}", path.display()))?;
    let map = serde_json::from_str(&content)
        .with_context(|| format!("invalid description map {}", path.display()))?;
    Ok(map)
}

fn description_for<'a>(
    operation: &CanonicalOperation,
    descriptions: &'a HashMap<String, String>,
) -> &'a str {
    descriptions
        .get(&operation.method.declaring_class)
        .map(String::as_str)
        .unwrap_or("")
}
