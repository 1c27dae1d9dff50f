//! Per-parameter fragment derivation and order-preserving batch operations.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::Type;

use crate::signature::{Parameter, Signature};

/// Derives the code fragments one source parameter contributes to the
/// generated type: its field, accessor, constructor parameter, and the store
/// and load statements of the container codec.
#[derive(Debug, Clone)]
pub struct ParameterDescriptor {
    name: Ident,
    ty: Type,
}

impl ParameterDescriptor {
    pub fn new(parameter: &Parameter) -> Self {
        Self {
            name: parameter.name().clone(),
            ty: parameter.ty().clone(),
        }
    }

    pub fn name(&self) -> &Ident {
        &self.name
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// The private, immutable field backing this parameter.
    pub fn field(&self) -> TokenStream {
        let name = &self.name;
        let ty = &self.ty;
        quote! {
            #name: #ty,
        }
    }

    /// The public accessor returning a borrow of the field's current value.
    pub fn accessor(&self) -> TokenStream {
        let name = &self.name;
        let ty = &self.ty;
        let accessor = format_ident!("get_{}", name);
        quote! {
            pub fn #accessor(&self) -> &#ty {
                &self.#name
            }
        }
    }

    /// The formal parameter of the all-args constructor.
    pub fn constructor_parameter(&self) -> TokenStream {
        let name = &self.name;
        let ty = &self.ty;
        quote!(#name: #ty)
    }

    /// Insert the field's current value into the container variable, keyed by
    /// the parameter name.
    pub fn store_fragment(&self, container: &Ident) -> TokenStream {
        let name = &self.name;
        let key = name.to_string();
        quote! {
            #container.insert(#key, self.#name.clone());
        }
    }

    /// Initialize the field from the container variable, coercing the stored
    /// value to the declared type.
    ///
    /// The coercion is unchecked: a stored value of the wrong runtime type
    /// fails here, at generated-type use time, not at synthesis time.
    pub fn load_fragment(&self, container: &Ident) -> TokenStream {
        let name = &self.name;
        let ty = &self.ty;
        let key = name.to_string();
        quote! {
            #name: #container.take::<#ty>(#key),
        }
    }

    /// Initialize the field from the identically-named constructor parameter.
    pub fn field_assignment(&self) -> TokenStream {
        let name = &self.name;
        quote! {
            #name,
        }
    }
}

/// An ordered aggregate of [`ParameterDescriptor`]s.
///
/// Every batch operation iterates in the original declaration order and
/// concatenates per-parameter fragments; an empty parameter list yields empty
/// fragments everywhere, which still assemble into a valid type.
#[derive(Debug, Clone)]
pub struct ParameterCollection {
    descriptors: Vec<ParameterDescriptor>,
}

impl ParameterCollection {
    pub fn from_signature(signature: &Signature) -> Self {
        Self {
            descriptors: signature
                .parameters()
                .iter()
                .map(ParameterDescriptor::new)
                .collect(),
        }
    }

    pub fn descriptors(&self) -> &[ParameterDescriptor] {
        &self.descriptors
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn all_fields(&self) -> TokenStream {
        let fields = self.descriptors.iter().map(ParameterDescriptor::field);
        quote!(#(#fields)*)
    }

    pub fn all_accessors(&self) -> TokenStream {
        let accessors = self.descriptors.iter().map(ParameterDescriptor::accessor);
        quote!(#(#accessors)*)
    }

    pub fn all_constructor_parameters(&self) -> TokenStream {
        let parameters = self
            .descriptors
            .iter()
            .map(ParameterDescriptor::constructor_parameter);
        quote!(#(#parameters),*)
    }

    pub fn assign_all_to_fields(&self) -> TokenStream {
        let assignments = self
            .descriptors
            .iter()
            .map(ParameterDescriptor::field_assignment);
        quote!(#(#assignments)*)
    }

    pub fn store_all_into(&self, container: &Ident) -> TokenStream {
        let stores = self
            .descriptors
            .iter()
            .map(|descriptor| descriptor.store_fragment(container));
        quote!(#(#stores)*)
    }

    pub fn load_all_from(&self, container: &Ident) -> TokenStream {
        let loads = self
            .descriptors
            .iter()
            .map(|descriptor| descriptor.load_fragment(container));
        quote!(#(#loads)*)
    }
}
