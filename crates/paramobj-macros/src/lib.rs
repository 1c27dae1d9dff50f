//! paramobj-macros - Attribute macro host integration for paramobj
//!
//! This crate provides `#[parameter_object]`, the inline expansion path: the
//! annotated function is re-emitted unchanged, followed by the parameter
//! object type synthesized by `paramobj-core`.

use darling::FromMeta;
use darling::ast::NestedMeta;
use proc_macro::TokenStream;
use quote::quote;
use syn::{FnArg, Item, ItemFn, Pat};

use paramobj_core::{
    NamingPolicy, Parameter, ParameterCollection, Signature, SynthesisError, TypeBuilder, resolve,
};

/// Options accepted by the `#[parameter_object]` attribute
#[derive(Debug, Default, FromMeta)]
#[darling(default)]
struct ParameterObjectOpts {
    /// Desired type name. If not specified the default naming strategy is
    /// applied: `capitalize(owner) + capitalize(function) + "Parameters"`.
    name: Option<String>,

    /// Desired package. Only meaningful to the offline generator; the inline
    /// expansion always emits the type next to the annotated function.
    package: Option<String>,

    /// Owner type name used by the default naming strategy. Free functions
    /// have no enclosing type, so it defaults to empty.
    owner: Option<String>,
}

/// Expand an annotated function into the function plus its parameter object.
///
/// # Example
///
/// ```ignore
/// use paramobj::parameter_object;
///
/// #[parameter_object(owner = "Example")]
/// pub fn create_user(username: String, password: Vec<char>) {
///     // ...
/// }
///
/// // expands to the function above plus:
/// // pub struct ExampleCreate_userParameters { username: String, password: Vec<char> }
/// // with new(), from_arguments(), to_arguments(), and one accessor per field.
/// ```
///
/// Applying the attribute to anything but a function is a compile error.
#[proc_macro_attribute]
pub fn parameter_object(attr: TokenStream, item: TokenStream) -> TokenStream {
    match expand(attr.into(), item.into()) {
        Ok(tokens) => tokens.into(),
        Err(error) => error.to_compile_error().into(),
    }
}

fn expand(
    attr: proc_macro2::TokenStream,
    item: proc_macro2::TokenStream,
) -> syn::Result<proc_macro2::TokenStream> {
    let metas = NestedMeta::parse_meta_list(attr)?;
    let opts = match ParameterObjectOpts::from_list(&metas) {
        Ok(opts) => opts,
        Err(error) => return Ok(error.write_errors()),
    };

    let item: Item = syn::parse2(item)?;
    let function = match item {
        Item::Fn(function) => function,
        other => {
            let error = SynthesisError::InvalidTarget {
                found: item_kind(&other).to_string(),
            };
            return Err(syn::Error::new_spanned(&other, error.to_string()));
        }
    };

    let parameters = collect_parameters(&function)?;
    let signature = Signature::new(
        opts.owner.unwrap_or_default(),
        String::new(),
        function.sig.ident.to_string(),
        parameters,
    );
    let policy = NamingPolicy::new(opts.name, opts.package);

    let identifier = resolve(&signature, &policy);
    let collection = ParameterCollection::from_signature(&signature);
    let generated = TypeBuilder::new(identifier, collection)
        .build()
        .map_err(|error| syn::Error::new(function.sig.ident.span(), error.to_string()))?;

    Ok(quote! {
        #function
        #generated
    })
}

fn collect_parameters(function: &ItemFn) -> syn::Result<Vec<Parameter>> {
    let mut parameters = Vec::new();
    for input in &function.sig.inputs {
        match input {
            FnArg::Receiver(receiver) => {
                return Err(syn::Error::new_spanned(
                    receiver,
                    "#[parameter_object] is only supported on free functions",
                ));
            }
            FnArg::Typed(pat_type) => match &*pat_type.pat {
                Pat::Ident(pat_ident) => {
                    parameters.push(Parameter::new(
                        pat_ident.ident.clone(),
                        (*pat_type.ty).clone(),
                    ));
                }
                other => {
                    let error = SynthesisError::UnnamedParameter {
                        function: function.sig.ident.to_string(),
                    };
                    return Err(syn::Error::new_spanned(other, error.to_string()));
                }
            },
        }
    }
    Ok(parameters)
}

fn item_kind(item: &Item) -> &'static str {
    match item {
        Item::Const(_) => "a const",
        Item::Enum(_) => "an enum",
        Item::Impl(_) => "an impl block",
        Item::Mod(_) => "a module",
        Item::Static(_) => "a static",
        Item::Struct(_) => "a struct",
        Item::Trait(_) => "a trait",
        Item::Type(_) => "a type alias",
        Item::Union(_) => "a union",
        Item::Use(_) => "a use declaration",
        _ => "a non-function item",
    }
}

#[cfg(test)]
mod lib_tests;
