//! Evaluation environment for the conformance fixtures
//!
//! This crate provides the object model and the small set of built-ins the
//! fixtures exercise:
//! - objects with data and accessor properties, prototypes and extensibility
//! - the ES5 type conversions, including `valueOf`-driven ToNumber
//! - `Object.defineProperty`, `Object.preventExtensions`, `Object.isFrozen`
//!   and their siblings
//! - generic `Array.prototype.indexOf` / `lastIndexOf`
//!
//! # Example
//!
//! ```
//! use builtins::{ArrayPrototype, JsValue, ObjectConstructor, Realm};
//!
//! let realm = Realm::new();
//!
//! // An array-like object searched with Array.prototype.indexOf
//! let arr = realm.object();
//! arr.put("length", 3.0).unwrap();
//! arr.put("1", "needle").unwrap();
//! let index = ArrayPrototype::index_of(&arr, &JsValue::string("needle"), None).unwrap();
//! assert_eq!(index, 1);
//!
//! // A non-extensible object with no properties is frozen
//! let obj = realm.object();
//! ObjectConstructor::prevent_extensions(&obj).unwrap();
//! assert!(ObjectConstructor::is_frozen(&obj).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod array;
pub mod conversion;
pub mod object;
pub mod property;
pub mod realm;
pub mod value;

// Re-export main types for convenience
pub use array::ArrayPrototype;
pub use conversion::PreferredType;
pub use object::{ObjectConstructor, ObjectPrototype};
pub use property::{Property, PropertyDescriptor};
pub use realm::Realm;
pub use value::{JsError, JsResult, JsValue, NativeFunction, ObjectData};
