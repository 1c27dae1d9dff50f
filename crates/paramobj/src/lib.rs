//! # paramobj
//!
//! Generate immutable "parameter object" types from annotated functions.
//!
//! Each generated type carries one field per source parameter, in
//! declaration order, and converts to and from [`Arguments`], a generic
//! string-keyed value container.
//!
//! ## Quick Start
//!
//! ```ignore
//! use paramobj::parameter_object;
//!
//! #[parameter_object(owner = "Example")]
//! pub fn create_user(username: String, password: Vec<char>) {
//!     // ...
//! }
//!
//! let params = ExampleCreate_userParameters::new("alice".into(), vec!['s']);
//! let restored = ExampleCreate_userParameters::from_arguments(params.to_arguments());
//! assert_eq!(restored.get_username(), params.get_username());
//! ```
//!
//! For offline generation from a build script, see `paramobj-core`'s
//! `Extractor` and `Processor`.

mod container;

pub use container::Arguments;

#[cfg(feature = "macros")]
pub use paramobj_macros::parameter_object;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::Arguments;

    #[cfg(feature = "macros")]
    pub use crate::parameter_object;
}
