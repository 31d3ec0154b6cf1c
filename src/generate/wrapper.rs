//! Builds the wrapper-node IR for one canonical operation.
//!
//! Exactly one wrapper shape exists: an iterating algorithm node with one
//! slot per buffer parameter and one node parameter per scalar. Operations
//! with more than one input use the multi-input base class.

use super::java_file::{JavaField, JavaFile, JavaMethod};
use crate::config::GeneratorConfig;
use crate::core::{CanonicalOperation, ParameterRole};
use crate::ident::kebab_case;

pub fn build_wrapper(
    operation: &CanonicalOperation,
    description: &str,
    config: &GeneratorConfig,
) -> JavaFile {
    let method = &operation.method;
    let superclass = if method.inputs.len() > 1 {
        "JIPipeIteratingAlgorithm"
    } else {
        "JIPipeSimpleIteratingAlgorithm"
    };

    let mut imports = vec![
        "net.haesleinhuepf.clij.clearcl.ClearCLBuffer".to_string(),
        "net.haesleinhuepf.clij2.CLIJ2".to_string(),
        method.declaring_class.clone(),
        "org.hkijena.jipipe.api.JIPipeDocumentation".to_string(),
        "org.hkijena.jipipe.api.JIPipeOrganization".to_string(),
        "org.hkijena.jipipe.api.JIPipeProgressInfo".to_string(),
        "org.hkijena.jipipe.api.data.JIPipeInputSlot".to_string(),
        "org.hkijena.jipipe.api.data.JIPipeOutputSlot".to_string(),
        "org.hkijena.jipipe.api.nodes.JIPipeNodeInfo".to_string(),
        format!("org.hkijena.jipipe.api.nodes.{superclass}"),
        "org.hkijena.jipipe.api.nodes.JIPipeSingleIterationStep".to_string(),
        "org.hkijena.jipipe.api.nodes.categories.ImagesNodeTypeCategory".to_string(),
        "org.hkijena.jipipe.api.parameters.JIPipeParameter".to_string(),
        "org.hkijena.jipipe.plugins.clij2.datatypes.CLIJImageData".to_string(),
    ];
    imports.sort();
    imports.dedup();

    let mut annotations = vec![
        format!(
            "@JIPipeDocumentation(name = \"{}\", description = \"{}\")",
            title_of(operation, &config.namespace),
            escape_java_string(description)
        ),
        "@JIPipeOrganization(nodeTypeCategory = ImagesNodeTypeCategory.class, menuPath = \"CLIJ2\")"
            .to_string(),
    ];
    for (_, input) in &method.inputs {
        annotations.push(format!(
            "@JIPipeInputSlot(value = CLIJImageData.class, slotName = \"{}\", autoCreate = true)",
            input.name
        ));
    }
    for (_, output) in &method.outputs {
        annotations.push(format!(
            "@JIPipeOutputSlot(value = CLIJImageData.class, slotName = \"{}\", autoCreate = true)",
            output.name
        ));
    }

    let fields = method
        .scalars
        .iter()
        .map(|(_, scalar)| JavaField {
            type_name: scalar.type_name.clone(),
            name: scalar.name.clone(),
        })
        .collect();

    let constructors = vec![
        JavaMethod {
            annotations: vec![],
            signature: format!("public {}(JIPipeNodeInfo info)", operation.class_name),
            body: vec!["super(info);".to_string()],
        },
        copy_constructor(operation),
    ];

    let mut methods = vec![run_iteration(operation)];
    for (_, scalar) in &method.scalars {
        methods.extend(accessors(&scalar.name, &scalar.type_name));
    }

    JavaFile {
        package: config.output_package.clone(),
        imports,
        annotations,
        class_name: operation.class_name.clone(),
        superclass: superclass.to_string(),
        fields,
        constructors,
        methods,
    }
}

fn copy_constructor(operation: &CanonicalOperation) -> JavaMethod {
    let mut body = vec!["super(other);".to_string()];
    for (_, scalar) in &operation.method.scalars {
        body.push(format!("this.{0} = other.{0};", scalar.name));
    }
    JavaMethod {
        annotations: vec![],
        signature: format!(
            "public {0}({0} other)",
            operation.class_name
        ),
        body,
    }
}

fn run_iteration(operation: &CanonicalOperation) -> JavaMethod {
    let method = &operation.method;
    let mut body = vec!["CLIJ2 clij2 = CLIJ2.getInstance();".to_string()];

    for (_, input) in &method.inputs {
        body.push(format!(
            "ClearCLBuffer {0} = iterationStep.getInputData(getInputSlot(\"{0}\"), CLIJImageData.class, progressInfo).getImage();",
            input.name
        ));
    }
    // The library needs explicit allocation; size outputs like the first input.
    let sizing_reference = &method.inputs[0].1.name;
    for (_, output) in &method.outputs {
        body.push(format!(
            "ClearCLBuffer {} = clij2.create({});",
            output.name, sizing_reference
        ));
    }

    let arguments: Vec<String> = method
        .parameters
        .iter()
        .zip(&method.roles)
        .map(|(parameter, role)| match role {
            ParameterRole::Skip => "clij2".to_string(),
            _ => parameter.name.clone(),
        })
        .collect();
    body.push(String::new());
    body.push(format!(
        "{}.{}({});",
        method.declaring_simple_name(),
        method.method_name,
        arguments.join(", ")
    ));
    body.push(String::new());

    for (_, output) in &method.outputs {
        body.push(format!(
            "iterationStep.addOutputData(getOutputSlot(\"{0}\"), new CLIJImageData({0}), progressInfo);",
            output.name
        ));
    }

    JavaMethod {
        annotations: vec!["@Override".to_string()],
        signature:
            "protected void runIteration(JIPipeSingleIterationStep iterationStep, JIPipeProgressInfo progressInfo)"
                .to_string(),
        body,
    }
}

fn accessors(field_name: &str, type_name: &str) -> Vec<JavaMethod> {
    let key = kebab_case(field_name);
    let suffix = accessor_suffix(field_name);
    vec![
        JavaMethod {
            annotations: vec![format!("@JIPipeParameter(\"{key}\")")],
            signature: format!("public {type_name} get{suffix}()"),
            body: vec![format!("return {field_name};")],
        },
        JavaMethod {
            annotations: vec![format!("@JIPipeParameter(\"{key}\")")],
            signature: format!("public void set{suffix}({type_name} value)"),
            body: vec![format!("this.{field_name} = value;")],
        },
    ]
}

fn accessor_suffix(field_name: &str) -> String {
    let mut chars = field_name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Human-readable node title: identifier segments, capitalized, space-joined.
fn title_of(operation: &CanonicalOperation, namespace: &str) -> String {
    let remainder = operation
        .identifier
        .strip_prefix(&format!("{namespace}:"))
        .unwrap_or(&operation.identifier);
    remainder
        .split('-')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn escape_java_string(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\r', "")
        .replace('\n', "\\n")
        .replace('\t', "\\t")
}
