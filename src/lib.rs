//! text-value: an immutable single-attribute value with a validating builder
//!
//! This library provides:
//! - [`ImmutableValue`], an immutable value holding one required `text` attribute
//! - [`Builder`], a single-use builder that refuses to build without `text`
//! - [`HasText`], the capability any `text` source exposes to
//!   [`ImmutableValue::copy_of`] and [`Builder::from`]
//! - [`cli::run`], the line-oriented driver behind the `text-value` binary
//!
//! # Example
//!
//! ```
//! use text_value::ImmutableValue;
//!
//! let value = ImmutableValue::builder().text("hello").build().unwrap();
//! assert_eq!(value.to_string(), "B{text=hello}");
//!
//! let renamed = value.with_text("world");
//! assert_eq!(renamed.text(), "world");
//! assert_eq!(value.text(), "hello");
//! ```

pub mod cli;
pub mod error;
pub mod source;
pub mod value;

pub use error::{Result, ValueError};
pub use source::HasText;
pub use value::{Builder, ImmutableValue};
