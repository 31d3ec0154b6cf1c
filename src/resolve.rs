//! Overload grouping and identifier disambiguation.
//!
//! Retained methods are grouped by `class_id` in first-seen order. Each group
//! contributes exactly one canonical operation: the overload with the most
//! scalar parameters (a stable ascending sort, so ties keep their first-seen
//! relative order and the latest-declared maximum wins). Everything else in
//! the group is dropped from generation.

use crate::core::{CanonicalOperation, ExtractedMethod};
use crate::ident::{normalize_identifier, pascal_case};
use log::debug;
use std::collections::{HashMap, HashSet};

/// Run-wide generation state: the set of identifiers already issued.
/// Single writer, passed explicitly so the pipeline stays a pure function of
/// its inputs.
#[derive(Debug, Default)]
pub struct GenerationContext {
    issued: HashSet<String>,
}

impl GenerationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a unique identifier, suffixing `-1`, `-2`, ... on collision.
    pub fn issue(&mut self, candidate: &str) -> String {
        if self.issued.insert(candidate.to_string()) {
            return candidate.to_string();
        }
        let mut counter = 1;
        loop {
            let suffixed = format!("{candidate}-{counter}");
            if self.issued.insert(suffixed.clone()) {
                debug!("identifier collision: {candidate} issued as {suffixed}");
                return suffixed;
            }
            counter += 1;
        }
    }
}

/// Pick one canonical operation per `class_id` group and assign its
/// normalized, globally unique identifier.
pub fn resolve(
    methods: Vec<ExtractedMethod>,
    namespace: &str,
    context: &mut GenerationContext,
) -> Vec<CanonicalOperation> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<ExtractedMethod>> = HashMap::new();
    for method in methods {
        if !groups.contains_key(&method.class_id) {
            order.push(method.class_id.clone());
        }
        groups.entry(method.class_id.clone()).or_default().push(method);
    }

    let mut operations = Vec::new();
    for class_id in order {
        let mut group = groups.remove(&class_id).unwrap_or_default();
        if group.len() > 1 {
            debug!(
                "{}: choosing among {} overloads by scalar count",
                class_id,
                group.len()
            );
            group.sort_by_key(|method| method.scalars.len());
        }
        let mut chosen = match group.pop() {
            Some(method) => method,
            None => continue,
        };

        let identifier = context.issue(&normalize_identifier(namespace, &class_id));
        chosen.canonical_id = Some(identifier.clone());
        let class_name = pascal_case(&identifier);
        operations.push(CanonicalOperation {
            method: chosen,
            identifier,
            class_name,
        });
    }
    operations
}
