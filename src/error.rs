//! Error types for value construction

use thiserror::Error;

/// Result type for value construction
pub type Result<T> = std::result::Result<T, ValueError>;

/// Errors raised while building or modifying a value.
///
/// Both variants are programmer errors: they surface immediately and are not
/// meant to be retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// An absent value was passed where a present one is required.
    /// Displays as the bare attribute name.
    #[error("{attribute}")]
    InvalidArgument { attribute: &'static str },

    /// `build` was called before every required attribute was set
    #[error(
        "Cannot build {type_name}, some of required attributes are not set [{}]",
        .attributes.join(", ")
    )]
    MissingAttributes {
        type_name: &'static str,
        attributes: Vec<&'static str>,
    },
}

impl ValueError {
    /// Names of the attributes this error refers to
    pub fn attributes(&self) -> Vec<&'static str> {
        match self {
            ValueError::InvalidArgument { attribute } => vec![*attribute],
            ValueError::MissingAttributes { attributes, .. } => attributes.clone(),
        }
    }
}
