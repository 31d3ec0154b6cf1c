//! Registration manifest and audit listing.

use crate::core::{CanonicalOperation, ExtractedMethod};

/// One `registerNodeType` statement per canonical operation, binding the
/// identifier to the generated wrapper type and the fixed icon resource.
pub fn registration_manifest(operations: &[CanonicalOperation], icon: &str) -> String {
    let mut out = String::new();
    for operation in operations {
        out.push_str(&format!(
            "registerNodeType(\"{}\", {}.class, UIUtils.getIconURLFromResources(\"{}\"));\n",
            operation.identifier, operation.class_name, icon
        ));
    }
    out
}

/// Fully-qualified declaring class of every retained method, one per line.
/// Dropped overloads are included; duplicates are expected and kept for
/// downstream auditing.
pub fn wrapped_classes(methods: &[ExtractedMethod]) -> String {
    let mut out = String::new();
    for method in methods {
        out.push_str(&method.declaring_class);
        out.push('\n');
    }
    out
}
