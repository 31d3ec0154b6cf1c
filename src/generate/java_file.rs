//! Structured representation of one generated Java source file.
//!
//! The wrapper builder fills this IR and a single formatter renders it, so
//! generation logic stays independent of formatting and testable on its own.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JavaFile {
    pub package: String,
    pub imports: Vec<String>,
    /// Class-level annotation lines, rendered verbatim in order.
    pub annotations: Vec<String>,
    pub class_name: String,
    pub superclass: String,
    pub fields: Vec<JavaField>,
    pub constructors: Vec<JavaMethod>,
    pub methods: Vec<JavaMethod>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JavaField {
    pub type_name: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JavaMethod {
    pub annotations: Vec<String>,
    /// Everything up to the opening brace, e.g. `public void setSigma(float value)`.
    pub signature: String,
    pub body: Vec<String>,
}

impl JavaFile {
    pub fn file_name(&self) -> String {
        format!("{}.java", self.class_name)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("package {};\n\n", self.package));

        for import in &self.imports {
            out.push_str(&format!("import {import};\n"));
        }
        if !self.imports.is_empty() {
            out.push('\n');
        }

        for annotation in &self.annotations {
            out.push_str(annotation);
            out.push('\n');
        }
        out.push_str(&format!(
            "public class {} extends {} {{\n",
            self.class_name, self.superclass
        ));

        for field in &self.fields {
            out.push_str(&format!("    private {} {};\n", field.type_name, field.name));
        }
        if !self.fields.is_empty() {
            out.push('\n');
        }

        for method in self.constructors.iter().chain(&self.methods) {
            render_method(&mut out, method);
        }

        // Drop the trailing blank line left after the last member.
        if out.ends_with("\n\n") {
            out.pop();
        }
        out.push_str("}\n");
        out
    }
}

fn render_method(out: &mut String, method: &JavaMethod) {
    for annotation in &method.annotations {
        out.push_str(&format!("    {annotation}\n"));
    }
    out.push_str(&format!("    {} {{\n", method.signature));
    for line in &method.body {
        if line.is_empty() {
            out.push('\n');
        } else {
            out.push_str(&format!("        {line}\n"));
        }
    }
    out.push_str("    }\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_a_minimal_class() {
        let file = JavaFile {
            package: "org.example".to_string(),
            imports: vec!["java.util.List".to_string()],
            annotations: vec!["@Generated".to_string()],
            class_name: "Demo".to_string(),
            superclass: "Base".to_string(),
            fields: vec![JavaField {
                type_name: "float".to_string(),
                name: "sigma".to_string(),
            }],
            constructors: vec![JavaMethod {
                annotations: vec![],
                signature: "public Demo()".to_string(),
                body: vec!["super();".to_string()],
            }],
            methods: vec![JavaMethod {
                annotations: vec!["@Override".to_string()],
                signature: "public float getSigma()".to_string(),
                body: vec!["return sigma;".to_string()],
            }],
        };

        let expected = "\
package org.example;

import java.util.List;

@Generated
public class Demo extends Base {
    private float sigma;

    public Demo() {
        super();
    }

    @Override
    public float getSigma() {
        return sigma;
    }
}
";
        assert_eq!(file.render(), expected);
    }
}
