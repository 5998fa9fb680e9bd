//! Capability for anything that exposes a `text` attribute

use crate::value::{Builder, ImmutableValue};

/// A source of a `text` attribute.
///
/// Consumed by [`ImmutableValue::copy_of`] and [`Builder::from`](crate::Builder::from).
pub trait HasText {
    /// The current value of the `text` attribute
    fn text(&self) -> &str;

    /// Produce an immutable copy of this source, read through its `text`
    /// accessor.
    ///
    /// Implementors that are already immutable may return themselves.
    fn to_immutable(&self) -> ImmutableValue {
        Builder::new().from(self).finish()
    }
}

impl HasText for str {
    fn text(&self) -> &str {
        self
    }
}

impl HasText for String {
    fn text(&self) -> &str {
        self.as_str()
    }
}

impl<T: HasText + ?Sized> HasText for &T {
    fn text(&self) -> &str {
        (**self).text()
    }

    fn to_immutable(&self) -> ImmutableValue {
        (**self).to_immutable()
    }
}
