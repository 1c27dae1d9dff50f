//! Source scanner that extracts synthesis requests from functions annotated
//! with `#[parameter_object]`.
//!
//! This is the offline host integration, meant for build scripts: scan
//! source files, collect one [`SynthesisRequest`] per annotated function or
//! impl method, and feed the batch to a [`Processor`](crate::Processor).
//! The inline path (the attribute macro) does not go through here.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use syn::{Attribute, FnArg, ImplItem, Item, ItemFn, ItemImpl, Pat, Type};
use walkdir::WalkDir;

use crate::error::{SynthesisError, SynthesisResult};
use crate::processor::SynthesisRequest;
use crate::signature::{NamingPolicy, Parameter, Signature};

/// Extractor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Package prepended to the module path of every extracted signature
    /// (e.g. the crate name). Empty by default.
    #[serde(default)]
    pub root_package: String,

    /// Attribute name that marks a function for extraction. Matched against
    /// the last path segment, so `paramobj::parameter_object` and re-exports
    /// are recognized as well.
    #[serde(default = "default_marker")]
    pub marker: String,
}

fn default_marker() -> String {
    "parameter_object".to_string()
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            root_package: String::new(),
            marker: default_marker(),
        }
    }
}

impl ExtractorConfig {
    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
    }
}

/// Collects [`SynthesisRequest`]s from Rust source.
#[derive(Debug, Default)]
pub struct Extractor {
    config: ExtractorConfig,
    requests: Vec<SynthesisRequest>,
}

impl Extractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            config,
            requests: Vec::new(),
        }
    }

    /// Recursively scan a directory for `.rs` files.
    pub fn add_source_dir(&mut self, root: impl AsRef<Path>) -> SynthesisResult<&mut Self> {
        let root = root.as_ref();
        for entry in WalkDir::new(root) {
            let entry = entry.map_err(|e| SynthesisError::Parse {
                path: root.display().to_string(),
                message: e.to_string(),
            })?;
            if entry.file_type().is_file()
                && entry.path().extension().is_some_and(|ext| ext == "rs")
            {
                self.add_source_file(entry.path())?;
            }
        }
        Ok(self)
    }

    pub fn add_source_file(&mut self, path: impl AsRef<Path>) -> SynthesisResult<&mut Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| SynthesisError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        self.add_source_text(&path.display().to_string(), &source)
    }

    /// Scan source text directly. `label` only names the origin in
    /// diagnostics.
    pub fn add_source_text(&mut self, label: &str, source: &str) -> SynthesisResult<&mut Self> {
        let file = syn::parse_file(source).map_err(|e| SynthesisError::Parse {
            path: label.to_string(),
            message: e.to_string(),
        })?;
        let mut module_path = Vec::new();
        self.visit_items(label, &file.items, &mut module_path)?;
        Ok(self)
    }

    pub fn requests(&self) -> &[SynthesisRequest] {
        &self.requests
    }

    pub fn into_requests(self) -> Vec<SynthesisRequest> {
        self.requests
    }

    fn visit_items(
        &mut self,
        label: &str,
        items: &[Item],
        module_path: &mut Vec<String>,
    ) -> SynthesisResult<()> {
        for item in items {
            match item {
                Item::Fn(function) => self.visit_fn(label, function, module_path)?,
                Item::Impl(imp) => self.visit_impl(label, imp, module_path)?,
                Item::Mod(module) => {
                    if let Some((_, items)) = &module.content {
                        module_path.push(module.ident.to_string());
                        self.visit_items(label, items, module_path)?;
                        module_path.pop();
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn visit_fn(
        &mut self,
        label: &str,
        function: &ItemFn,
        module_path: &[String],
    ) -> SynthesisResult<()> {
        self.collect(label, &function.attrs, &function.sig, "", module_path)
    }

    fn visit_impl(
        &mut self,
        label: &str,
        imp: &ItemImpl,
        module_path: &[String],
    ) -> SynthesisResult<()> {
        let Some(owner) = self_type_name(&imp.self_ty) else {
            return Ok(());
        };
        for item in &imp.items {
            if let ImplItem::Fn(method) = item {
                self.collect(label, &method.attrs, &method.sig, &owner, module_path)?;
            }
        }
        Ok(())
    }

    fn collect(
        &mut self,
        label: &str,
        attrs: &[Attribute],
        sig: &syn::Signature,
        owner: &str,
        module_path: &[String],
    ) -> SynthesisResult<()> {
        let Some(attr) = marker_attr(attrs, &self.config.marker) else {
            return Ok(());
        };
        let (policy, owner_override) = parse_attr_options(label, attr)?;
        let parameters = parameters_from(sig)?;
        let package = package_of(&self.config.root_package, module_path);
        let owner = owner_override.unwrap_or_else(|| owner.to_string());
        self.requests.push(SynthesisRequest::new(
            Signature::new(owner, package, sig.ident.to_string(), parameters),
            policy,
        ));
        Ok(())
    }
}

/// Simple name of an impl block's self type, when it has one.
fn self_type_name(self_ty: &Type) -> Option<String> {
    match self_ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.to_string()),
        _ => None,
    }
}

fn marker_attr<'a>(attrs: &'a [Attribute], marker: &str) -> Option<&'a Attribute> {
    attrs.iter().find(|attr| {
        attr.path()
            .segments
            .last()
            .is_some_and(|segment| segment.ident == marker)
    })
}

/// Parse `name = "..."`, `package = "..."`, and `owner = "..."` options from
/// the marker attribute. A bare `#[parameter_object]` yields the default
/// policy.
fn parse_attr_options(
    label: &str,
    attr: &Attribute,
) -> SynthesisResult<(NamingPolicy, Option<String>)> {
    let mut name = None;
    let mut package = None;
    let mut owner = None;
    if !matches!(attr.meta, syn::Meta::Path(_)) {
        attr.parse_nested_meta(|meta| {
            let value = meta.value()?.parse::<syn::LitStr>()?.value();
            if meta.path.is_ident("name") {
                name = Some(value);
            } else if meta.path.is_ident("package") {
                package = Some(value);
            } else if meta.path.is_ident("owner") {
                owner = Some(value);
            } else {
                return Err(meta.error("unknown parameter_object option"));
            }
            Ok(())
        })
        .map_err(|e| SynthesisError::Parse {
            path: label.to_string(),
            message: e.to_string(),
        })?;
    }
    Ok((NamingPolicy::new(name, package), owner))
}

fn parameters_from(sig: &syn::Signature) -> SynthesisResult<Vec<Parameter>> {
    let mut parameters = Vec::new();
    for input in &sig.inputs {
        match input {
            // Receivers carry no field; the parameter object covers the
            // value parameters only.
            FnArg::Receiver(_) => {}
            FnArg::Typed(pat_type) => match &*pat_type.pat {
                Pat::Ident(pat_ident) => {
                    parameters.push(Parameter::new(
                        pat_ident.ident.clone(),
                        (*pat_type.ty).clone(),
                    ));
                }
                _ => {
                    return Err(SynthesisError::UnnamedParameter {
                        function: sig.ident.to_string(),
                    });
                }
            },
        }
    }
    Ok(parameters)
}

fn package_of(root_package: &str, module_path: &[String]) -> String {
    let mut segments = Vec::new();
    if !root_package.is_empty() {
        segments.push(root_package.to_string());
    }
    segments.extend(module_path.iter().cloned());
    segments.join("::")
}
