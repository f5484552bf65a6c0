//! Runtime descriptor of a kernel's output type.

use std::fmt;

/// Identifies an output type by its compiler-provided name.
///
/// Two descriptors are equal when their type names are equal. Built from a
/// type parameter with [`of`](Self::of) or from a value with
/// [`of_val`](Self::of_val); neither requires `'static`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReturnType {
    name: &'static str,
}

impl ReturnType {
    /// Descriptor for `T`.
    pub fn of<T: ?Sized>() -> Self {
        Self {
            name: std::any::type_name::<T>(),
        }
    }

    /// Descriptor for the type of `value`.
    pub fn of_val<T: ?Sized>(_value: &T) -> Self {
        Self::of::<T>()
    }

    /// The type name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
