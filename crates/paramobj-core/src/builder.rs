//! Assembly of a complete generated type definition from a resolved
//! identifier and a parameter collection.

use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote};
use syn::Type;

use crate::container;
use crate::descriptor::ParameterCollection;
use crate::error::{SynthesisError, SynthesisResult};
use crate::resolver::TypeIdentifier;

/// One field of a generated type, mirroring a source parameter 1:1.
#[derive(Debug, Clone)]
pub struct GeneratedField {
    name: String,
    ty: Type,
}

impl GeneratedField {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }
}

/// A complete generated parameter object definition.
///
/// Structurally: one private field per source parameter (same order, same
/// types), a public all-args constructor, a private container constructor
/// behind a public `from_arguments` factory, a public `to_arguments` method,
/// and one public accessor per field. Nothing else.
///
/// The definition is target-language tokens; [`ToTokens`] and
/// [`GeneratedType::render`] are the rendering seam, so the same structural
/// content can back other emitters.
#[derive(Debug, Clone)]
pub struct GeneratedType {
    identifier: TypeIdentifier,
    fields: Vec<GeneratedField>,
    definition: TokenStream,
}

impl GeneratedType {
    pub fn identifier(&self) -> &TypeIdentifier {
        &self.identifier
    }

    /// Fields in declaration order of the source parameters.
    pub fn fields(&self) -> &[GeneratedField] {
        &self.fields
    }

    /// Render the definition as source text.
    pub fn render(&self) -> String {
        self.definition.to_string()
    }
}

impl ToTokens for GeneratedType {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(self.definition.clone());
    }
}

/// Assembles a [`GeneratedType`] from a resolved identifier and the
/// collection of parameter descriptors.
#[derive(Debug)]
pub struct TypeBuilder {
    identifier: TypeIdentifier,
    parameters: ParameterCollection,
}

impl TypeBuilder {
    pub fn new(identifier: TypeIdentifier, parameters: ParameterCollection) -> Self {
        Self {
            identifier,
            parameters,
        }
    }

    pub fn build(self) -> SynthesisResult<GeneratedType> {
        let type_name: syn::Ident = syn::parse_str(self.identifier.name()).map_err(|_| {
            SynthesisError::InvalidTypeName {
                name: self.identifier.name().to_string(),
            }
        })?;
        let container_var = syn::Ident::new("arguments", Span::call_site());
        let container_ty = container::container_type();

        let fields = self.parameters.all_fields();
        let accessors = self.parameters.all_accessors();
        let all_args_constructor = self.build_all_args_constructor();
        let container_constructor = self.build_container_constructor(&container_var);
        let factory = Self::build_factory(&container_var);
        let to_arguments = self.build_to_arguments(&container_var, &container_ty);

        let definition = quote! {
            pub struct #type_name {
                #fields
            }

            impl #type_name {
                #all_args_constructor
                #container_constructor
                #factory
                #to_arguments
                #accessors
            }
        };

        let fields = self
            .parameters
            .descriptors()
            .iter()
            .map(|descriptor| GeneratedField {
                name: descriptor.name().to_string(),
                ty: descriptor.ty().clone(),
            })
            .collect();

        Ok(GeneratedType {
            identifier: self.identifier,
            fields,
            definition,
        })
    }

    /// The public, positional, declaration-order constructor. Valid with zero
    /// parameters as well, hence the `new_without_default` allowance in the
    /// emitted code.
    fn build_all_args_constructor(&self) -> TokenStream {
        let parameters = self.parameters.all_constructor_parameters();
        let assignments = self.parameters.assign_all_to_fields();
        quote! {
            #[allow(clippy::new_without_default)]
            pub fn new(#parameters) -> Self {
                Self { #assignments }
            }
        }
    }

    /// The private constructor performing the unchecked per-field coercions.
    /// Intentionally not public; `from_arguments` is the only supported
    /// deserialization entry point.
    fn build_container_constructor(&self, container_var: &syn::Ident) -> TokenStream {
        let container_ty = container::container_type();
        if self.parameters.is_empty() {
            quote! {
                fn from_arguments_unchecked(_arguments: #container_ty) -> Self {
                    Self {}
                }
            }
        } else {
            let loads = self.parameters.load_all_from(container_var);
            quote! {
                fn from_arguments_unchecked(mut #container_var: #container_ty) -> Self {
                    Self { #loads }
                }
            }
        }
    }

    fn build_factory(container_var: &syn::Ident) -> TokenStream {
        let parameter = container::parameter(container_var);
        quote! {
            pub fn from_arguments(#parameter) -> Self {
                Self::from_arguments_unchecked(#container_var)
            }
        }
    }

    fn build_to_arguments(&self, container_var: &syn::Ident, container_ty: &TokenStream) -> TokenStream {
        let body = if self.parameters.is_empty() {
            quote!(<#container_ty>::new())
        } else {
            let initialize = container::initialize(container_var);
            let stores = self.parameters.store_all_into(container_var);
            let result = container::return_result(container_var);
            quote! {
                #initialize
                #stores
                #result
            }
        };
        quote! {
            pub fn to_arguments(&self) -> #container_ty {
                #body
            }
        }
    }
}
