//! The immutable `B` value
//!
//! An [`ImmutableValue`] holds a single required `text` attribute. It is never
//! mutated after construction: [`ImmutableValue::with_text`] returns a new
//! value, or the same one when the text is unchanged.

mod builder;
mod hash;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValueError};
use crate::source::HasText;

pub use builder::Builder;

/// Name used in the string form and in build errors
pub(crate) const TYPE_NAME: &str = "B";

/// Immutable value holding one `text` attribute.
///
/// Clones share the same storage, so cloning is cheap and
/// [`ImmutableValue::ptr_eq`] can tell a reused instance from a rebuilt one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Fields", try_from = "Fields")]
pub struct ImmutableValue {
    text: Arc<str>,
}

/// Wire shape of [`ImmutableValue`]. Deserialization goes through the
/// builder so a missing `text` fails the same way `build` does.
#[derive(Serialize, Deserialize)]
#[serde(rename = "B")]
struct Fields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl ImmutableValue {
    /// Create a builder for this value
    pub fn builder() -> Builder {
        Builder::new()
    }

    pub(crate) fn from_text(text: &str) -> Self {
        Self {
            text: Arc::from(text),
        }
    }

    /// The value of the `text` attribute
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Copy this value with a new `text`.
    ///
    /// Returns a clone sharing this value's storage when `value` equals the
    /// current text.
    pub fn with_text(&self, value: &str) -> Self {
        if *self.text == *value {
            return self.clone();
        }
        Self::from_text(value)
    }

    /// Like [`ImmutableValue::with_text`], but rejects an absent value
    pub fn try_with_text(&self, value: Option<&str>) -> Result<Self> {
        match value {
            Some(value) => Ok(self.with_text(value)),
            None => Err(ValueError::InvalidArgument { attribute: "text" }),
        }
    }

    /// Immutable copy of any `text` source. An [`ImmutableValue`] is
    /// returned as is.
    pub fn copy_of<S: HasText + ?Sized>(source: &S) -> Self {
        source.to_immutable()
    }

    /// Whether both values share the same storage
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.text, &other.text)
    }

    /// 32-bit hash code derived from `text` only.
    ///
    /// Equal values always have equal hash codes.
    pub fn hash_code(&self) -> i32 {
        hash::value_hash(&self.text)
    }
}

impl HasText for ImmutableValue {
    fn text(&self) -> &str {
        &self.text
    }

    fn to_immutable(&self) -> ImmutableValue {
        tracing::trace!("Reusing immutable instance {}", self);
        self.clone()
    }
}

impl fmt::Display for ImmutableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{text={}}}", TYPE_NAME, self.text)
    }
}

impl From<ImmutableValue> for Fields {
    fn from(value: ImmutableValue) -> Self {
        Self {
            text: Some(value.text.to_string()),
        }
    }
}

impl TryFrom<Fields> for ImmutableValue {
    type Error = ValueError;

    fn try_from(fields: Fields) -> Result<Self> {
        let builder = match fields.text {
            Some(text) => ImmutableValue::builder().text(text),
            None => ImmutableValue::builder(),
        };
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(text: &str) -> ImmutableValue {
        ImmutableValue::builder().text(text).build().unwrap()
    }

    #[test]
    fn test_display() {
        assert_eq!(value("hello").to_string(), "B{text=hello}");
        assert_eq!(value("").to_string(), "B{text=}");
    }

    #[test]
    fn test_with_text_same_value_reuses_instance() {
        let original = value("same");
        let copy = original.with_text("same");
        assert!(ImmutableValue::ptr_eq(&original, &copy));
    }

    #[test]
    fn test_with_text_new_value() {
        let original = value("old");
        let copy = original.with_text("new");
        assert_eq!(copy.text(), "new");
        assert_eq!(original.text(), "old");
        assert!(!ImmutableValue::ptr_eq(&original, &copy));
    }

    #[test]
    fn test_try_with_text_rejects_none() {
        let original = value("old");
        assert_eq!(
            original.try_with_text(None),
            Err(ValueError::InvalidArgument { attribute: "text" })
        );
    }

    #[test]
    fn test_equality_is_structural() {
        let a = value("x");
        let b = value("x");
        assert_eq!(a, b);
        assert!(!ImmutableValue::ptr_eq(&a, &b));
        assert_ne!(a, value("y"));
    }

    #[test]
    fn test_hash_code_matches_for_equal_values() {
        assert_eq!(value("x").hash_code(), value("x").hash_code());
        assert_eq!(value("hello").hash_code(), 5381 * 33 + 99162322);
    }

    #[test]
    fn test_copy_of_reuses_immutable_instance() {
        let original = value("kept");
        let copy = ImmutableValue::copy_of(&original);
        assert!(ImmutableValue::ptr_eq(&original, &copy));
    }

    #[test]
    fn test_copy_of_other_source() {
        let copy = ImmutableValue::copy_of("plain");
        assert_eq!(copy, value("plain"));
    }

    #[test]
    fn test_value_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ImmutableValue>();
    }
}
