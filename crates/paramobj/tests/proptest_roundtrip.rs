//! Property-based round-trip tests: `from_arguments(to_arguments())` must
//! reproduce every field value, for arbitrary values.

#![allow(non_snake_case)]
#![allow(dead_code)]

use paramobj::parameter_object;
use proptest::prelude::*;

#[parameter_object(owner = "Account")]
fn register(username: String, age: u64, active: bool, tags: Vec<String>) {
    let _ = (username, age, active, tags);
}

proptest! {
    #[test]
    fn roundtrip_preserves_all_fields(
        username in ".*",
        age in any::<u64>(),
        active in any::<bool>(),
        tags in proptest::collection::vec("[a-z]{0,8}", 0..5),
    ) {
        let original = AccountRegisterParameters::new(
            username,
            age,
            active,
            tags,
        );

        let restored = AccountRegisterParameters::from_arguments(original.to_arguments());

        prop_assert_eq!(restored.get_username(), original.get_username());
        prop_assert_eq!(restored.get_age(), original.get_age());
        prop_assert_eq!(restored.get_active(), original.get_active());
        prop_assert_eq!(restored.get_tags(), original.get_tags());
    }

    #[test]
    fn container_holds_exactly_one_entry_per_field(
        username in ".*",
        age in any::<u64>(),
    ) {
        let params = AccountRegisterParameters::new(username, age, false, vec![]);

        let arguments = params.to_arguments();

        prop_assert_eq!(arguments.len(), 4);
        prop_assert!(arguments.contains("username"));
        prop_assert!(arguments.contains("age"));
        prop_assert!(arguments.contains("active"));
        prop_assert!(arguments.contains("tags"));
    }
}
