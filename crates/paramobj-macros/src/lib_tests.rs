#![allow(non_snake_case)]

use super::*;
use quote::quote;
use test_case::test_case;

fn expand_ok(
    attr: proc_macro2::TokenStream,
    item: proc_macro2::TokenStream,
) -> proc_macro2::TokenStream {
    expand(attr, item).expect("expansion should succeed")
}

#[test]
fn expand___function_with_owner___emits_function_and_generated_type() {
    let output = expand_ok(
        quote!(owner = "Example"),
        quote! {
            pub fn createUser(username: String, password: Vec<char>) {
                let _ = (username, password);
            }
        },
    );

    let rendered = output.to_string();
    assert!(rendered.contains("pub fn createUser"));
    assert!(rendered.contains("struct ExampleCreateUserParameters"));
    assert!(rendered.contains("get_username"));
    assert!(rendered.contains("get_password"));
    assert!(rendered.contains("from_arguments"));
    assert!(rendered.contains("to_arguments"));
}

#[test]
fn expand___no_options___derives_name_from_function_only() {
    let output = expand_ok(
        quote!(),
        quote! {
            fn ping() {}
        },
    );

    assert!(output.to_string().contains("struct PingParameters"));
}

#[test]
fn expand___name_override___wins_over_default() {
    let output = expand_ok(
        quote!(name = "AwesomeParameters", owner = "Example"),
        quote! {
            fn createUser(username: String) {}
        },
    );

    let rendered = output.to_string();
    assert!(rendered.contains("struct AwesomeParameters"));
    assert!(!rendered.contains("ExampleCreateUserParameters"));
}

#[test]
fn expand___blank_name_override___behaves_as_absent() {
    let output = expand_ok(
        quote!(name = "  ", owner = "Example"),
        quote! {
            fn createUser(username: String) {}
        },
    );

    assert!(output.to_string().contains("struct ExampleCreateUserParameters"));
}

#[test]
fn expand___zero_parameters___generates_a_valid_empty_type() {
    let output = expand_ok(
        quote!(owner = "Example"),
        quote! {
            fn ping() {}
        },
    );

    let rendered = output.to_string();
    assert!(rendered.contains("struct ExamplePingParameters"));
    assert!(rendered.contains("pub fn new"));
}

#[test]
fn expand___struct_target___is_rejected() {
    let result = expand(
        quote!(),
        quote! {
            struct NotAFunction;
        },
    );

    let error = result.expect_err("non-function targets must be rejected");
    assert!(error.to_string().contains("found a struct"));
}

#[test]
fn expand___trait_target___is_rejected() {
    let result = expand(
        quote!(),
        quote! {
            trait NotAFunction {}
        },
    );

    assert!(result.is_err());
}

#[test]
fn expand___method_with_receiver___is_rejected() {
    let result = expand(
        quote!(),
        quote! {
            fn method(&self, value: u64) {}
        },
    );

    let error = result.expect_err("receivers are not supported");
    assert!(error.to_string().contains("free functions"));
}

#[test]
fn expand___tuple_pattern_parameter___is_rejected() {
    let result = expand(
        quote!(),
        quote! {
            fn odd((a, b): (u8, u8)) {}
        },
    );

    let error = result.expect_err("pattern parameters are not supported");
    assert!(error.to_string().contains("plain identifier"));
}

#[test]
fn expand___unknown_option___reports_a_darling_error() {
    let output = expand_ok(
        quote!(nonsense = "value"),
        quote! {
            fn ping() {}
        },
    );

    // darling turns unknown options into compile_error! tokens
    assert!(output.to_string().contains("compile_error"));
}

#[test_case(quote!(struct S;), "a struct")]
#[test_case(quote!(enum E {}), "an enum")]
#[test_case(quote!(mod m {}), "a module")]
#[test_case(quote!(trait T {}), "a trait")]
#[test_case(quote!(const C: u8 = 0;), "a const")]
#[test_case(quote!(use std::fmt;), "a use declaration")]
fn item_kind___common_items___have_readable_names(
    tokens: proc_macro2::TokenStream,
    expected: &str,
) {
    let item: Item = syn::parse2(tokens).expect("fixture parses");

    assert_eq!(item_kind(&item), expected);
}
