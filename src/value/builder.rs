//! Single-use builder for [`ImmutableValue`]

use std::sync::Arc;

use super::{ImmutableValue, TYPE_NAME};
use crate::error::{Result, ValueError};
use crate::source::HasText;

const INIT_BIT_TEXT: u64 = 0x1;

/// Accumulates attribute values and validates completeness before producing
/// an [`ImmutableValue`].
///
/// A builder is meant to be created, filled and consumed by [`Builder::build`]
/// in one go rather than stored.
#[derive(Debug)]
pub struct Builder {
    /// Bits of required attributes not yet set
    init_bits: u64,
    text: String,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            init_bits: INIT_BIT_TEXT,
            text: String::new(),
        }
    }
}

impl Builder {
    /// Create a builder with no attributes set
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the builder from any source exposing `text`
    pub fn from<S: HasText + ?Sized>(self, source: &S) -> Self {
        self.text(source.text())
    }

    /// Like [`Builder::from`], but rejects an absent source
    pub fn try_from_source<S: HasText + ?Sized>(self, source: Option<&S>) -> Result<Self> {
        match source {
            Some(source) => Ok(self.from(source)),
            None => Err(ValueError::InvalidArgument {
                attribute: "instance",
            }),
        }
    }

    /// Set the `text` attribute. Setting it again replaces the previous value.
    pub fn text(mut self, value: impl Into<String>) -> Self {
        self.text = value.into();
        self.init_bits &= !INIT_BIT_TEXT;
        self
    }

    /// Like [`Builder::text`], but rejects an absent value
    pub fn try_text<V: Into<String>>(self, value: Option<V>) -> Result<Self> {
        match value {
            Some(value) => Ok(self.text(value)),
            None => Err(ValueError::InvalidArgument { attribute: "text" }),
        }
    }

    /// Whether every required attribute has been set
    pub fn is_complete(&self) -> bool {
        self.init_bits == 0
    }

    fn missing_attributes(&self) -> Vec<&'static str> {
        let mut attributes = Vec::new();
        if self.init_bits & INIT_BIT_TEXT != 0 {
            attributes.push("text");
        }
        attributes
    }

    /// Build the value, failing if a required attribute was never set
    pub fn build(self) -> Result<ImmutableValue> {
        if !self.is_complete() {
            let attributes = self.missing_attributes();
            tracing::debug!("Cannot build {}: missing {:?}", TYPE_NAME, attributes);
            return Err(ValueError::MissingAttributes {
                type_name: TYPE_NAME,
                attributes,
            });
        }
        Ok(self.finish())
    }

    /// Construct the value from whatever is set. Callers must have set every
    /// required attribute.
    pub(crate) fn finish(self) -> ImmutableValue {
        debug_assert!(self.is_complete());
        ImmutableValue {
            text: Arc::from(self.text),
        }
    }
}
