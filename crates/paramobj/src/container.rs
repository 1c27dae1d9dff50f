//! The string-keyed value container generated codecs serialize through.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

/// A mapping from field name to an untyped value.
///
/// Keys are unique; ordering is not observable and not relied upon by
/// generated code. Any conforming source of key/value pairs can be turned
/// into one via [`From<HashMap<String, Box<dyn Any>>>`](#impl-From).
///
/// # Coercion contract
///
/// [`take`](Arguments::take) performs the unchecked coercion generated
/// `from_arguments` constructors rely on: the caller guarantees that the
/// stored value's runtime type matches the declared field type. A mismatch
/// or a missing key panics at that call site; nothing validates ahead of
/// time.
#[derive(Default)]
pub struct Arguments {
    values: HashMap<String, Box<dyn Any>>,
}

impl Arguments {
    /// Create an empty container
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Store a value under `name`, replacing any previous value.
    pub fn insert<T: Any>(&mut self, name: impl Into<String>, value: T) {
        self.values.insert(name.into(), Box::new(value));
    }

    /// Borrow the value stored under `name`, if present and of type `T`.
    pub fn get<T: Any>(&self, name: &str) -> Option<&T> {
        self.values.get(name)?.downcast_ref()
    }

    /// Remove and return the value stored under `name`, coerced to `T`.
    ///
    /// # Panics
    ///
    /// Panics if no value is stored under `name` or if the stored value's
    /// runtime type is not `T`. This is the documented coercion contract of
    /// generated `from_arguments` constructors.
    pub fn take<T: Any>(&mut self, name: &str) -> T {
        match self.values.remove(name) {
            Some(value) => match value.downcast::<T>() {
                Ok(value) => *value,
                Err(_) => panic!("argument `{name}` does not have the expected type"),
            },
            None => panic!("missing argument `{name}`"),
        }
    }
}

impl From<HashMap<String, Box<dyn Any>>> for Arguments {
    fn from(values: HashMap<String, Box<dyn Any>>) -> Self {
        Self { values }
    }
}

impl fmt::Debug for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Values are untyped; only the keys are printable.
        f.debug_set().entries(self.values.keys()).finish()
    }
}
