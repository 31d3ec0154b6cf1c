//! Signature classification.
//!
//! Assigns every parameter of a candidate method one of the four structural
//! roles and decides whether the method is eligible for wrapping. A method
//! with any parameter outside the whitelists is excluded without aborting
//! the run.

use crate::config::GeneratorConfig;
use crate::core::{Declaration, ExtractedMethod, MethodDeclaration, Parameter, ParameterRole};
use log::debug;

/// Name substrings that mark a buffer-like parameter as an output. Checked
/// before the implicit trailing-output rule; swapping that precedence changes
/// role assignment for some signatures.
const OUTPUT_NAME_HINTS: &[&str] = &["out", "dst", "dest", "result"];

/// Classify one parsed class, returning every method retained for wrapping.
pub fn extract_methods(declaration: &Declaration, config: &GeneratorConfig) -> Vec<ExtractedMethod> {
    if declaration.is_deprecated() {
        debug!("skipping deprecated class {}", declaration.qualified_name());
        return Vec::new();
    }

    let class_id = class_id_for(declaration);
    declaration
        .methods
        .iter()
        .filter(|method| method.is_static() && method.is_public() && !method.is_deprecated())
        .filter_map(|method| classify_method(declaration, method, &class_id, config))
        .collect()
}

/// The logical-operation identifier of a class: a literal `name` element on a
/// class-level annotation wins verbatim, otherwise `package + "-" + name`.
fn class_id_for(declaration: &Declaration) -> String {
    declaration
        .annotations
        .iter()
        .find_map(|annotation| annotation.name_value.clone())
        .unwrap_or_else(|| format!("{}-{}", declaration.package, declaration.simple_name))
}

fn classify_method(
    declaration: &Declaration,
    method: &MethodDeclaration,
    class_id: &str,
    config: &GeneratorConfig,
) -> Option<ExtractedMethod> {
    let last_index = method.parameters.len().checked_sub(1)?;
    let mut roles = Vec::with_capacity(method.parameters.len());
    let mut has_output = false;

    for (index, parameter) in method.parameters.iter().enumerate() {
        let role = if config.is_context_type(&parameter.type_name) {
            ParameterRole::Skip
        } else if config.is_buffer_type(&parameter.type_name) {
            if names_output(&parameter.name) || (index == last_index && !has_output) {
                ParameterRole::Output
            } else {
                ParameterRole::Input
            }
        } else if config.is_scalar_type(&parameter.type_name) {
            ParameterRole::Scalar
        } else {
            debug!(
                "excluding {}.{}: unsupported parameter type {}",
                declaration.qualified_name(),
                method.name,
                parameter.type_name
            );
            return None;
        };
        if role == ParameterRole::Output {
            has_output = true;
        }
        roles.push(role);
    }

    let inputs = bucket(&method.parameters, &roles, ParameterRole::Input);
    let outputs = bucket(&method.parameters, &roles, ParameterRole::Output);
    let scalars = bucket(&method.parameters, &roles, ParameterRole::Scalar);

    if inputs.is_empty() || outputs.is_empty() {
        debug!(
            "excluding {}.{}: needs at least one input and one output",
            declaration.qualified_name(),
            method.name
        );
        return None;
    }

    Some(ExtractedMethod {
        declaring_class: declaration.qualified_name(),
        method_name: method.name.clone(),
        parameters: method.parameters.clone(),
        roles,
        inputs,
        outputs,
        scalars,
        class_id: class_id.to_string(),
        canonical_id: None,
    })
}

fn names_output(name: &str) -> bool {
    let lowered = name.to_lowercase();
    OUTPUT_NAME_HINTS.iter().any(|hint| lowered.contains(hint))
}

fn bucket(
    parameters: &[Parameter],
    roles: &[ParameterRole],
    wanted: ParameterRole,
) -> Vec<(usize, Parameter)> {
    parameters
        .iter()
        .enumerate()
        .zip(roles)
        .filter(|(_, role)| **role == wanted)
        .map(|((index, parameter), _)| (index, parameter.clone()))
        .collect()
}
