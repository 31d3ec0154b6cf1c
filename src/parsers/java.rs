//! Java source parsing via tree-sitter.
//!
//! Only class declarations are extracted; interfaces, enums and records are
//! ignored. The declaration tree keeps exactly what classification needs:
//! package, class name, annotations (with any literal `name = "..."` element),
//! method modifiers and ordered parameter lists.

use crate::core::{Annotation, Declaration, MethodDeclaration, Parameter};
use crate::errors::ParseError;
use std::path::Path;
use tree_sitter::{Node, Parser};

pub fn parse_file(path: &Path) -> Result<Vec<Declaration>, ParseError> {
    let source = std::fs::read_to_string(path).map_err(|source| ParseError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_source(&source, path)
}

pub fn parse_source(source: &str, path: &Path) -> Result<Vec<Declaration>, ParseError> {
    let mut parser = Parser::new();
    let language = tree_sitter_java::LANGUAGE;
    parser
        .set_language(&language.into())
        .map_err(|e| ParseError::syntax(path, e.to_string()))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| ParseError::syntax(path, "tree-sitter returned no tree"))?;

    let root = tree.root_node();
    if root.has_error() {
        return Err(ParseError::syntax(path, "syntax error in source file"));
    }

    let source_bytes = source.as_bytes();
    let package = extract_package(&root, source_bytes);

    let mut declarations = Vec::new();
    collect_classes(&root, source_bytes, &package, path, &mut declarations);
    Ok(declarations)
}

fn extract_package(root: &Node, source: &[u8]) -> String {
    for child in root.children(&mut root.walk()) {
        if child.kind() == "package_declaration" {
            for part in child.children(&mut child.walk()) {
                if part.kind() == "scoped_identifier" || part.kind() == "identifier" {
                    return node_text(&part, source);
                }
            }
        }
    }
    String::new()
}

/// Recursively collect class declarations, including nested classes.
fn collect_classes(
    node: &Node,
    source: &[u8],
    package: &str,
    path: &Path,
    out: &mut Vec<Declaration>,
) {
    for child in node.children(&mut node.walk()) {
        if child.kind() == "class_declaration" {
            if let Some(declaration) = parse_class(&child, source, package, path) {
                out.push(declaration);
            }
            if let Some(body) = child.child_by_field_name("body") {
                collect_classes(&body, source, package, path, out);
            }
        } else {
            collect_classes(&child, source, package, path, out);
        }
    }
}

fn parse_class(node: &Node, source: &[u8], package: &str, path: &Path) -> Option<Declaration> {
    let name = node_text(&node.child_by_field_name("name")?, source);
    let annotations = extract_annotations(node, source);

    let mut methods = Vec::new();
    if let Some(body) = node.child_by_field_name("body") {
        for member in body.children(&mut body.walk()) {
            if member.kind() == "method_declaration" {
                if let Some(method) = parse_method(&member, source) {
                    methods.push(method);
                }
            }
        }
    }

    Some(Declaration {
        path: path.to_path_buf(),
        package: package.to_string(),
        simple_name: name,
        annotations,
        methods,
    })
}

fn parse_method(node: &Node, source: &[u8]) -> Option<MethodDeclaration> {
    let name = node_text(&node.child_by_field_name("name")?, source);
    let modifiers = extract_modifiers(node, source);
    let annotations = extract_annotations(node, source);

    let mut parameters = Vec::new();
    let params_node = node.child_by_field_name("parameters")?;
    for param in params_node.children(&mut params_node.walk()) {
        match param.kind() {
            "formal_parameter" => {
                let type_name = node_text(&param.child_by_field_name("type")?, source);
                let param_name = node_text(&param.child_by_field_name("name")?, source);
                parameters.push(Parameter {
                    name: param_name,
                    type_name,
                });
            }
            "spread_parameter" => {
                // Varargs never match a whitelisted type; keep the raw text so
                // classification excludes the method instead of mislabeling it.
                parameters.push(Parameter {
                    name: String::new(),
                    type_name: node_text(&param, source),
                });
            }
            _ => {}
        }
    }

    Some(MethodDeclaration {
        name,
        modifiers,
        annotations,
        parameters,
    })
}

/// Plain modifier keywords (`public`, `static`, ...) from the declaration's
/// `modifiers` node, annotations excluded.
fn extract_modifiers(node: &Node, source: &[u8]) -> Vec<String> {
    let mut modifiers = Vec::new();
    for child in node.children(&mut node.walk()) {
        if child.kind() == "modifiers" {
            for modifier in child.children(&mut child.walk()) {
                match modifier.kind() {
                    "marker_annotation" | "annotation" => {}
                    _ => modifiers.push(node_text(&modifier, source)),
                }
            }
        }
    }
    modifiers
}

fn extract_annotations(node: &Node, source: &[u8]) -> Vec<Annotation> {
    let mut annotations = Vec::new();
    for child in node.children(&mut node.walk()) {
        if child.kind() == "modifiers" {
            for modifier in child.children(&mut child.walk()) {
                match modifier.kind() {
                    "marker_annotation" => {
                        if let Some(name) = modifier.child_by_field_name("name") {
                            annotations.push(Annotation::marker(node_text(&name, source)));
                        }
                    }
                    "annotation" => {
                        if let Some(annotation) = parse_annotation(&modifier, source) {
                            annotations.push(annotation);
                        }
                    }
                    _ => {}
                }
            }
        }
    }
    annotations
}

fn parse_annotation(node: &Node, source: &[u8]) -> Option<Annotation> {
    let name = node_text(&node.child_by_field_name("name")?, source);
    let mut name_value = None;
    if let Some(arguments) = node.child_by_field_name("arguments") {
        for argument in arguments.children(&mut arguments.walk()) {
            if argument.kind() == "element_value_pair" {
                let key = argument.child_by_field_name("key")?;
                if node_text(&key, source) == "name" {
                    let value = argument.child_by_field_name("value")?;
                    if value.kind() == "string_literal" {
                        name_value = Some(strip_quotes(&node_text(&value, source)));
                    }
                }
            }
        }
    }
    Some(Annotation { name, name_value })
}

fn node_text(node: &Node, source: &[u8]) -> String {
    node.utf8_text(source).unwrap_or_default().to_string()
}

fn strip_quotes(literal: &str) -> String {
    literal
        .trim_start_matches('"')
        .trim_end_matches('"')
        .to_string()
}
