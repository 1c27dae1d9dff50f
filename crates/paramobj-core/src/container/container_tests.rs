#![allow(non_snake_case)]

use super::*;
use proc_macro2::Span;
use quote::quote;

fn var(name: &str) -> Ident {
    Ident::new(name, Span::call_site())
}

#[test]
fn container_type___always___names_the_runtime_arguments_type() {
    assert_eq!(
        container_type().to_string(),
        quote!(::paramobj::Arguments).to_string()
    );
}

#[test]
fn parameter___named_variable___is_typed_with_the_container_type() {
    let fragment = parameter(&var("arguments"));

    assert_eq!(
        fragment.to_string(),
        quote!(arguments: ::paramobj::Arguments).to_string()
    );
}

#[test]
fn initialize___named_variable___declares_a_fresh_mutable_container() {
    let fragment = initialize(&var("result"));

    assert_eq!(
        fragment.to_string(),
        quote! {
            let mut result = <::paramobj::Arguments>::new();
        }
        .to_string()
    );
}

#[test]
fn return_result___named_variable___produces_the_variable() {
    assert_eq!(return_result(&var("result")).to_string(), "result");
}
