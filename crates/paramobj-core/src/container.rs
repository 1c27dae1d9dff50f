//! Container facade: the code fragments shared by every generated codec.
//!
//! Generated types serialize through one container abstraction, the
//! `Arguments` type provided by the `paramobj` runtime crate: a string-keyed
//! mapping from field name to an untyped value, hash-based, with no ordering
//! semantics. This module fixes the tokens the builder emits at that
//! boundary so every generated constructor and `to_arguments` method agrees
//! on the container type and its construction protocol.

use proc_macro2::{Ident, TokenStream};
use quote::quote;

/// The container type as referenced from generated code.
pub fn container_type() -> TokenStream {
    quote!(::paramobj::Arguments)
}

/// A formal parameter of the container type.
pub fn parameter(name: &Ident) -> TokenStream {
    let ty = container_type();
    quote!(#name: #ty)
}

/// Declare and initialize an empty container in a local variable.
pub fn initialize(variable: &Ident) -> TokenStream {
    let ty = container_type();
    quote! {
        let mut #variable = <#ty>::new();
    }
}

/// Produce the container variable as the trailing expression of a block.
pub fn return_result(variable: &Ident) -> TokenStream {
    quote!(#variable)
}

#[cfg(test)]
#[path = "container/container_tests.rs"]
mod container_tests;
