#![allow(non_snake_case)]

use super::*;
use crate::signature::Signature;
use test_case::test_case;

fn signature(owner: &str, package: &str, method: &str) -> Signature {
    Signature::new(owner, package, method, vec![])
}

// ============================================================================
// Blank-equivalence: "", whitespace, and absent all resolve identically
// ============================================================================

#[test_case(None; "absent")]
#[test_case(Some(""); "empty")]
#[test_case(Some(" "); "single space")]
#[test_case(Some("   "); "spaces")]
#[test_case(Some("\t\n"); "other whitespace")]
fn resolve___blank_class_name___falls_back_to_default(class_name: Option<&str>) {
    let policy = NamingPolicy::new(class_name.map(str::to_string), None);

    let identifier = resolve(&signature("Example", "net.x", "createUser"), &policy);

    assert_eq!(identifier.name(), "ExampleCreateUserParameters");
}

#[test_case(None; "absent")]
#[test_case(Some(""); "empty")]
#[test_case(Some("  "); "spaces")]
#[test_case(Some("\t"); "tab")]
fn resolve___blank_package_name___falls_back_to_owner_package(package_name: Option<&str>) {
    let policy = NamingPolicy::new(None, package_name.map(str::to_string));

    let identifier = resolve(&signature("Example", "net.x", "createUser"), &policy);

    assert_eq!(identifier.package(), "net.x");
}

// ============================================================================
// Default naming across owner/method shapes
// ============================================================================

#[test_case("Class", "method", "ClassMethodParameters")]
#[test_case("Example", "createUser", "ExampleCreateUserParameters")]
#[test_case("order", "submit", "OrderSubmitParameters")]
#[test_case("HTTPClient", "send", "HTTPClientSendParameters")]
#[test_case("", "", "Parameters")]
fn resolve___default_policy___concatenates_capitalized_fragments(
    owner: &str,
    method: &str,
    expected: &str,
) {
    let identifier = resolve(&signature(owner, "net.x", method), &NamingPolicy::default());

    assert_eq!(identifier.name(), expected);
}

#[test_case("net.x")]
#[test_case("net.anatolich.util")]
#[test_case("crate::accounts")]
#[test_case("")]
fn resolve___default_policy___passes_owner_package_through(package: &str) {
    let identifier = resolve(
        &signature("Example", package, "createUser"),
        &NamingPolicy::default(),
    );

    assert_eq!(identifier.package(), package);
}
