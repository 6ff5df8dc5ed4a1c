//! Core error and source-location types shared by the conformance components.
//!
//! # Overview
//!
//! - [`JsError`] - an error thrown by built-in code, with its [`ErrorKind`]
//! - [`JsResult`] - result alias for operations that may throw
//! - [`SourcePosition`] - a location inside a fixture source
//!
//! # Examples
//!
//! ```
//! use core_types::{ErrorKind, JsError};
//!
//! let error = JsError::type_error("undefined is not a function");
//! assert_eq!(error.kind, ErrorKind::TypeError);
//! assert_eq!(error.to_string(), "TypeError: undefined is not a function");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod source;

pub use error::{ErrorKind, JsError, JsResult};
pub use source::SourcePosition;
