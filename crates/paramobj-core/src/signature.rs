//! Read-only inputs to a synthesis call: the introspected function shape and
//! the naming overrides attached to it.

use proc_macro2::Ident;
use syn::Type;

/// One source parameter: a name (unique within its signature) and an opaque
/// type reference.
///
/// The type is passed through to the generated field unchanged; the engine
/// never inspects or converts it.
#[derive(Debug, Clone)]
pub struct Parameter {
    name: Ident,
    ty: Type,
}

impl Parameter {
    pub fn new(name: Ident, ty: Type) -> Self {
        Self { name, ty }
    }

    pub fn name(&self) -> &Ident {
        &self.name
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }
}

/// The introspected shape of one annotated function.
///
/// Produced by a host integration (the attribute macro or the
/// [`Extractor`](crate::Extractor)); read-only to the engine. Parameter names
/// are guaranteed unique by the host, and parameter order is declaration
/// order.
#[derive(Debug, Clone)]
pub struct Signature {
    owner_type_name: String,
    owner_package: String,
    method_name: String,
    parameters: Vec<Parameter>,
}

impl Signature {
    pub fn new(
        owner_type_name: impl Into<String>,
        owner_package: impl Into<String>,
        method_name: impl Into<String>,
        parameters: Vec<Parameter>,
    ) -> Self {
        Self {
            owner_type_name: owner_type_name.into(),
            owner_package: owner_package.into(),
            method_name: method_name.into(),
            parameters,
        }
    }

    /// Simple name of the type that declares the annotated function. May be
    /// empty for free functions.
    pub fn owner_type_name(&self) -> &str {
        &self.owner_type_name
    }

    /// Package (module path) enclosing the owner type.
    pub fn owner_package(&self) -> &str {
        &self.owner_package
    }

    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }
}

/// Optional overrides for the generated type's package and name.
///
/// Values are trimmed on construction; blank or whitespace-only strings
/// behave exactly like absent values rather than "explicitly empty".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamingPolicy {
    class_name: Option<String>,
    package_name: Option<String>,
}

impl NamingPolicy {
    pub fn new(class_name: Option<String>, package_name: Option<String>) -> Self {
        Self {
            class_name: normalize(class_name),
            package_name: normalize(package_name),
        }
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    pub fn package_name(&self) -> Option<&str> {
        self.package_name.as_deref()
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
