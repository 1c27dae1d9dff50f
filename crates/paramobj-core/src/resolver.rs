//! Name resolution: maps a signature plus a naming policy to the identifier
//! of the generated type.

use crate::signature::{NamingPolicy, Signature};

/// Fully-qualified name of a generated type: package plus simple name.
///
/// Computed once per signature by [`resolve`] and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeIdentifier {
    package: String,
    name: String,
}

impl TypeIdentifier {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Resolve the identifier of the type generated for `signature`.
///
/// Pure and deterministic:
/// - name: the policy's class name if present, otherwise
///   `capitalize(owner) + capitalize(method) + "Parameters"`;
/// - package: the policy's package name if present, otherwise the owner's
///   package.
///
/// Two signatures may resolve to the same identifier; no collision detection
/// happens here or anywhere downstream. The later write wins or conflicts
/// depending on the sink.
pub fn resolve(signature: &Signature, policy: &NamingPolicy) -> TypeIdentifier {
    let name = match policy.class_name() {
        Some(name) => name.to_string(),
        None => format!(
            "{}{}Parameters",
            capitalize(signature.owner_type_name()),
            capitalize(signature.method_name())
        ),
    };
    let package = policy
        .package_name()
        .unwrap_or_else(|| signature.owner_package())
        .to_string();
    TypeIdentifier::new(package, name)
}

/// Uppercase the first character only; the rest is passed through verbatim.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}


#[cfg(test)]
#[path = "resolver/resolver_parameterized_tests.rs"]
mod resolver_parameterized_tests;
