//! Identifier normalization helpers.
//!
//! Canonical identifiers are pure string rewrites of the discovered
//! `class_id` values; there is no semantic awareness of what an operation
//! does. The `2d`/`3d` corrections exist because kebab-casing camelCase
//! leaves digit-letter boundaries unseparated (`affineTransform2D` becomes
//! `affine-transform2d` without them).

/// Lower-kebab-case a camelCase/underscored identifier.
///
/// A dash is inserted before an uppercase letter that follows a lowercase
/// letter; every non-alphanumeric character becomes a dash; dash runs are
/// collapsed. Digit-to-uppercase boundaries (`blur2D`) are deliberately not
/// split here; the `2d`/`3d` corrections handle them afterwards.
pub fn kebab_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut prev_lower = false;
    for c in input.chars() {
        if c.is_alphanumeric() {
            if c.is_uppercase() && prev_lower {
                out.push('-');
            }
            out.extend(c.to_lowercase());
            prev_lower = c.is_lowercase();
        } else {
            out.push('-');
            prev_lower = false;
        }
    }
    collapse_dashes(&out)
}

/// PascalCase type name derived from a canonical identifier:
/// split on separators, capitalize each segment, concatenate.
pub fn pascal_case(identifier: &str) -> String {
    identifier
        .split(|c| c == ':' || c == '-' || c == '_' || c == '.')
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect()
}

/// Build the namespaced canonical identifier for a `class_id`.
///
/// The remainder is kebab-cased, a leading duplicate of the namespace token
/// (the `CLIJ2_` macro prefix of annotated plugin names) is dropped, and the
/// two fixed `2d`/`3d` boundary corrections are applied.
pub fn normalize_identifier(namespace: &str, class_id: &str) -> String {
    let mut id = kebab_case(class_id);
    if let Some(rest) = id.strip_prefix(&format!("{namespace}-")) {
        id = rest.to_string();
    }
    id = id.replace("2d", "-2d").replace("3d", "-3d");
    let id = collapse_dashes(&id);
    format!("{namespace}:{id}")
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn collapse_dashes(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_dash = true; // also trims a leading dash
    for c in input.chars() {
        if c == '-' {
            if !prev_dash {
                out.push('-');
            }
            prev_dash = true;
        } else {
            out.push(c);
            prev_dash = false;
        }
    }
    if out.ends_with('-') {
        out.pop();
    }
    out
}
