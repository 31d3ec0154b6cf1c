use std::path::PathBuf;

/// A single annotation attached to a class or method declaration.
///
/// `name_value` holds the literal of an explicit `name = "..."` element when
/// the annotation carries one (e.g. `@Plugin(type = ..., name = "CLIJ2_copy")`),
/// and nothing otherwise. Other annotation arguments are not retained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Annotation {
    pub name: String,
    pub name_value: Option<String>,
}

impl Annotation {
    pub fn marker(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            name_value: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub type_name: String,
}

#[derive(Clone, Debug)]
pub struct MethodDeclaration {
    pub name: String,
    pub modifiers: Vec<String>,
    pub annotations: Vec<Annotation>,
    pub parameters: Vec<Parameter>,
}

impl MethodDeclaration {
    pub fn is_static(&self) -> bool {
        self.modifiers.iter().any(|m| m == "static")
    }

    pub fn is_public(&self) -> bool {
        self.modifiers.iter().any(|m| m == "public")
    }

    pub fn is_deprecated(&self) -> bool {
        self.annotations.iter().any(|a| a.name == "Deprecated")
    }
}

/// A parsed Java class. Created once per source file and immutable afterwards.
#[derive(Clone, Debug)]
pub struct Declaration {
    pub path: PathBuf,
    pub package: String,
    pub simple_name: String,
    pub annotations: Vec<Annotation>,
    pub methods: Vec<MethodDeclaration>,
}

impl Declaration {
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.simple_name.clone()
        } else {
            format!("{}.{}", self.package, self.simple_name)
        }
    }

    pub fn is_deprecated(&self) -> bool {
        self.annotations.iter().any(|a| a.name == "Deprecated")
    }
}

/// Structural role of a method parameter. Roles partition the parameter list
/// of every retained method.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterRole {
    /// The library's own context/handle type; never surfaces in the wrapper.
    Skip,
    /// Buffer-like data consumed by the operation.
    Input,
    /// Buffer-like data produced by the operation.
    Output,
    /// Whitelisted primitive or string parameter, exposed as a node parameter.
    Scalar,
}

/// A method that survived classification, with its parameters bucketed by role.
///
/// The `(usize, Parameter)` pairs keep the original declaration index so the
/// generator can reassemble the call in source order.
#[derive(Clone, Debug)]
pub struct ExtractedMethod {
    pub declaring_class: String,
    pub method_name: String,
    pub parameters: Vec<Parameter>,
    pub roles: Vec<ParameterRole>,
    pub inputs: Vec<(usize, Parameter)>,
    pub outputs: Vec<(usize, Parameter)>,
    pub scalars: Vec<(usize, Parameter)>,
    pub class_id: String,
    pub canonical_id: Option<String>,
}

impl ExtractedMethod {
    /// Simple name of the declaring class, e.g. `AbsoluteDifference`.
    pub fn declaring_simple_name(&self) -> &str {
        self.declaring_class
            .rsplit('.')
            .next()
            .unwrap_or(&self.declaring_class)
    }
}

/// The single representative of an overload group, ready for code generation.
#[derive(Clone, Debug)]
pub struct CanonicalOperation {
    pub method: ExtractedMethod,
    /// Namespaced kebab identifier, e.g. `clij2:absolute-difference`.
    pub identifier: String,
    /// PascalCase wrapper class name, e.g. `Clij2AbsoluteDifference`.
    pub class_name: String,
}
