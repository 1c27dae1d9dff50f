//! Property-based tests for name resolution.

use paramobj_core::{NamingPolicy, Signature, resolve};
use proptest::prelude::*;

fn identifier_fragment() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9_]{0,12}"
}

fn package() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,6}(\\.[a-z][a-z0-9]{0,6}){0,3}"
}

proptest! {
    #[test]
    fn default_name_always_ends_with_parameters(
        owner in identifier_fragment(),
        method in identifier_fragment(),
        pkg in package(),
    ) {
        let signature = Signature::new(owner, pkg, method, vec![]);

        let identifier = resolve(&signature, &NamingPolicy::default());

        prop_assert!(identifier.name().ends_with("Parameters"));
    }

    #[test]
    fn default_package_is_passed_through(
        owner in identifier_fragment(),
        method in identifier_fragment(),
        pkg in package(),
    ) {
        let signature = Signature::new(owner, pkg.clone(), method, vec![]);

        let identifier = resolve(&signature, &NamingPolicy::default());

        prop_assert_eq!(identifier.package(), pkg.as_str());
    }

    #[test]
    fn default_name_preserves_fragment_tails(
        owner in identifier_fragment(),
        method in identifier_fragment(),
    ) {
        let signature = Signature::new(owner.clone(), "net.x", method.clone(), vec![]);

        let identifier = resolve(&signature, &NamingPolicy::default());

        // Everything after the first character of each fragment is verbatim.
        prop_assert!(identifier.name().contains(&owner[1..]));
        prop_assert!(identifier.name().contains(&method[1..]));
    }

    #[test]
    fn class_name_override_always_wins(
        owner in identifier_fragment(),
        method in identifier_fragment(),
        custom in "[A-Z][a-zA-Z0-9]{0,12}",
    ) {
        let signature = Signature::new(owner, "net.x", method, vec![]);
        let policy = NamingPolicy::new(Some(custom.clone()), None);

        let identifier = resolve(&signature, &policy);

        prop_assert_eq!(identifier.name(), custom.as_str());
        prop_assert_eq!(identifier.package(), "net.x");
    }

    #[test]
    fn package_override_never_touches_the_name(
        owner in identifier_fragment(),
        method in identifier_fragment(),
        custom_pkg in package(),
    ) {
        let signature = Signature::new(owner.clone(), "net.x", method.clone(), vec![]);
        let defaulted = resolve(&signature, &NamingPolicy::default());

        let policy = NamingPolicy::new(None, Some(custom_pkg.clone()));
        let identifier = resolve(&signature, &policy);

        prop_assert_eq!(identifier.package(), custom_pkg.as_str());
        prop_assert_eq!(identifier.name(), defaulted.name());
    }

    #[test]
    fn resolution_is_deterministic(
        owner in identifier_fragment(),
        method in identifier_fragment(),
        pkg in package(),
    ) {
        let signature = Signature::new(owner, pkg, method, vec![]);

        prop_assert_eq!(
            resolve(&signature, &NamingPolicy::default()),
            resolve(&signature, &NamingPolicy::default())
        );
    }
}
