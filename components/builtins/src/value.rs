//! JavaScript value representation and the object internal methods
//!
//! Objects are reference-counted and single-threaded. Functions are
//! objects with a native call behaviour. No borrow of an object is held
//! while user code (getters, setters, `valueOf`) runs, so that code may
//! freely mutate the objects it closes over.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::property::{validate_and_apply, Property, PropertyDescriptor};

pub use core_types::{JsError, JsResult};

/// Native call behaviour: `(this, arguments) -> completion`
pub type NativeFunction = Rc<dyn Fn(&JsValue, &[JsValue]) -> JsResult<JsValue>>;

/// Internal object data
pub struct ObjectData {
    /// Value of the `[[Class]]` internal property
    pub class: &'static str,
    /// Own properties in insertion order
    pub properties: Vec<(String, Property)>,
    /// Optional prototype reference
    pub prototype: Option<JsValue>,
    /// Whether new properties may be added
    pub extensible: bool,
    /// `[[Call]]` for function objects
    pub call: Option<NativeFunction>,
    /// `[[PrimitiveValue]]` for Boolean, Number and String wrappers
    pub primitive: Option<JsValue>,
}

impl ObjectData {
    /// Create extensible object data with no properties
    pub fn new(class: &'static str, prototype: Option<JsValue>) -> Self {
        ObjectData {
            class,
            properties: Vec::new(),
            prototype,
            extensible: true,
            call: None,
            primitive: None,
        }
    }

    /// Look up an own property
    pub fn own(&self, key: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, p)| p)
    }

    /// Insert or replace an own property, keeping its original position
    pub fn insert(&mut self, key: &str, property: Property) {
        match self.properties.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => *slot = property,
            None => self.properties.push((key.to_string(), property)),
        }
    }

    /// Remove an own property
    pub fn remove(&mut self, key: &str) -> Option<Property> {
        let index = self.properties.iter().position(|(k, _)| k == key)?;
        Some(self.properties.remove(index).1)
    }
}

impl fmt::Debug for ObjectData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectData")
            .field("class", &self.class)
            .field(
                "keys",
                &self.properties.iter().map(|(k, _)| k).collect::<Vec<_>>(),
            )
            .field("extensible", &self.extensible)
            .field("callable", &self.call.is_some())
            .finish()
    }
}

/// JavaScript value representation
#[derive(Clone)]
pub enum JsValue {
    /// undefined
    Undefined,
    /// null
    Null,
    /// Boolean value
    Boolean(bool),
    /// Number (IEEE 754 double)
    Number(f64),
    /// String value
    String(String),
    /// Object, function or array
    Object(Rc<RefCell<ObjectData>>),
}

impl fmt::Debug for JsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsValue::Undefined => write!(f, "Undefined"),
            JsValue::Null => write!(f, "Null"),
            JsValue::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            JsValue::Number(n) => f.debug_tuple("Number").field(n).finish(),
            JsValue::String(s) => f.debug_tuple("String").field(s).finish(),
            // Objects may be cyclic; print identity only.
            JsValue::Object(obj) => match obj.try_borrow() {
                Ok(data) => write!(f, "Object([{}] @{:p})", data.class, Rc::as_ptr(obj)),
                Err(_) => write!(f, "Object(@{:p})", Rc::as_ptr(obj)),
            },
        }
    }
}

impl PartialEq for JsValue {
    fn eq(&self, other: &Self) -> bool {
        self.strict_equals(other)
    }
}

impl From<bool> for JsValue {
    fn from(v: bool) -> Self {
        JsValue::Boolean(v)
    }
}

impl From<f64> for JsValue {
    fn from(v: f64) -> Self {
        JsValue::Number(v)
    }
}

impl From<i32> for JsValue {
    fn from(v: i32) -> Self {
        JsValue::Number(v as f64)
    }
}

impl From<&str> for JsValue {
    fn from(v: &str) -> Self {
        JsValue::String(v.to_string())
    }
}

impl From<String> for JsValue {
    fn from(v: String) -> Self {
        JsValue::String(v)
    }
}

/// Canonical string form of an array index, if `key` is one
pub(crate) fn array_index(key: &str) -> Option<u32> {
    let index: u32 = key.parse().ok()?;
    (index != u32::MAX && index.to_string() == key).then_some(index)
}

impl JsValue {
    /// Create undefined value
    pub fn undefined() -> Self {
        JsValue::Undefined
    }

    /// Create null value
    pub fn null() -> Self {
        JsValue::Null
    }

    /// Create boolean value
    pub fn boolean(v: bool) -> Self {
        JsValue::Boolean(v)
    }

    /// Create number value
    pub fn number(v: f64) -> Self {
        JsValue::Number(v)
    }

    /// Create string value
    pub fn string(s: impl Into<String>) -> Self {
        JsValue::String(s.into())
    }

    /// Wrap object data into a value
    pub fn from_data(data: ObjectData) -> Self {
        JsValue::Object(Rc::new(RefCell::new(data)))
    }

    /// Create empty object with no prototype
    pub fn object() -> Self {
        Self::from_data(ObjectData::new("Object", None))
    }

    /// Create object with prototype
    pub fn object_with_proto(proto: &JsValue) -> Self {
        Self::from_data(ObjectData::new("Object", Some(proto.clone())))
    }

    /// Create a function object with no prototype
    pub fn function<F>(func: F) -> Self
    where
        F: Fn(&JsValue, &[JsValue]) -> JsResult<JsValue> + 'static,
    {
        Self::function_with_proto(func, None)
    }

    /// Create a function object with the given prototype
    pub fn function_with_proto<F>(func: F, proto: Option<&JsValue>) -> Self
    where
        F: Fn(&JsValue, &[JsValue]) -> JsResult<JsValue> + 'static,
    {
        let mut data = ObjectData::new("Function", proto.cloned());
        data.call = Some(Rc::new(func));
        Self::from_data(data)
    }

    /// Create array from values, with no prototype
    pub fn array_from(values: Vec<JsValue>) -> Self {
        Self::array_with_proto(values, None)
    }

    /// Create array from values with the given prototype
    pub fn array_with_proto(values: Vec<JsValue>, proto: Option<&JsValue>) -> Self {
        let mut data = ObjectData::new("Array", proto.cloned());
        let length = values.len();
        for (index, value) in values.into_iter().enumerate() {
            data.insert(&index.to_string(), Property::data(value));
        }
        data.insert(
            "length",
            Property::Data {
                value: JsValue::number(length as f64),
                writable: true,
                enumerable: false,
                configurable: false,
            },
        );
        Self::from_data(data)
    }

    /// Check for undefined
    pub fn is_undefined(&self) -> bool {
        matches!(self, JsValue::Undefined)
    }

    /// Check for null
    pub fn is_null(&self) -> bool {
        matches!(self, JsValue::Null)
    }

    /// Check for a boolean
    pub fn is_boolean(&self) -> bool {
        matches!(self, JsValue::Boolean(_))
    }

    /// Check for a number
    pub fn is_number(&self) -> bool {
        matches!(self, JsValue::Number(_))
    }

    /// Check for a string
    pub fn is_string(&self) -> bool {
        matches!(self, JsValue::String(_))
    }

    /// Check for an object (including functions and arrays)
    pub fn is_object(&self) -> bool {
        matches!(self, JsValue::Object(_))
    }

    /// Check for anything that is not an object
    pub fn is_primitive(&self) -> bool {
        !self.is_object()
    }

    /// Check for a callable object
    pub fn is_callable(&self) -> bool {
        match self {
            JsValue::Object(obj) => obj.borrow().call.is_some(),
            _ => false,
        }
    }

    /// Check for an Array object
    pub fn is_array(&self) -> bool {
        self.class() == Some("Array")
    }

    /// `[[Class]]` of an object
    pub fn class(&self) -> Option<&'static str> {
        match self {
            JsValue::Object(obj) => Some(obj.borrow().class),
            _ => None,
        }
    }

    /// Get as boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            JsValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            JsValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            JsValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The JavaScript `typeof` result
    pub fn type_of(&self) -> &'static str {
        match self {
            JsValue::Undefined => "undefined",
            JsValue::Null => "object",
            JsValue::Boolean(_) => "boolean",
            JsValue::Number(_) => "number",
            JsValue::String(_) => "string",
            JsValue::Object(_) if self.is_callable() => "function",
            JsValue::Object(_) => "object",
        }
    }

    fn expect_object(&self, operation: &str) -> JsResult<&Rc<RefCell<ObjectData>>> {
        match self {
            JsValue::Object(obj) => Ok(obj),
            other => Err(JsError::type_error(format!(
                "{} called on non-object ({})",
                operation,
                other.type_of()
            ))),
        }
    }

    /// Get object prototype
    pub fn get_prototype(&self) -> Option<JsValue> {
        match self {
            JsValue::Object(obj) => obj.borrow().prototype.clone(),
            _ => None,
        }
    }

    /// Whether new properties may be added
    pub fn is_extensible(&self) -> bool {
        match self {
            JsValue::Object(obj) => obj.borrow().extensible,
            _ => false,
        }
    }

    /// Forbid adding new properties
    pub fn prevent_extensions(&self) -> JsResult<()> {
        self.expect_object("[[PreventExtensions]]")?
            .borrow_mut()
            .extensible = false;
        Ok(())
    }

    /// Own property keys in insertion order
    pub fn own_keys(&self) -> Vec<String> {
        match self {
            JsValue::Object(obj) => obj.borrow().properties.iter().map(|(k, _)| k.clone()).collect(),
            _ => Vec::new(),
        }
    }

    /// `[[GetOwnProperty]]`
    pub fn get_own_property(&self, key: &str) -> Option<Property> {
        match self {
            JsValue::Object(obj) => obj.borrow().own(key).cloned(),
            _ => None,
        }
    }

    /// `[[GetProperty]]`: own property or the first one up the prototype
    /// chain
    pub fn get_property(&self, key: &str) -> Option<Property> {
        let mut current = Some(self.clone());
        while let Some(JsValue::Object(obj)) = current {
            let data = obj.borrow();
            if let Some(property) = data.own(key) {
                return Some(property.clone());
            }
            current = data.prototype.clone();
        }
        None
    }

    /// `[[HasProperty]]`
    pub fn has_property(&self, key: &str) -> bool {
        self.get_property(key).is_some()
    }

    /// Check if object has own property
    pub fn has_own(&self, key: &str) -> bool {
        self.get_own_property(key).is_some()
    }

    /// `[[Get]]`: getters are invoked with this object as `this`
    pub fn get(&self, key: &str) -> JsResult<JsValue> {
        self.expect_object("[[Get]]")?;
        match self.get_property(key) {
            Some(Property::Data { value, .. }) => Ok(value),
            Some(Property::Accessor { get: Some(getter), .. }) => getter.call(self, &[]),
            Some(Property::Accessor { get: None, .. }) | None => Ok(JsValue::Undefined),
        }
    }

    /// `[[CanPut]]`
    pub fn can_put(&self, key: &str) -> bool {
        if let Some(own) = self.get_own_property(key) {
            return match own {
                Property::Accessor { set, .. } => set.is_some(),
                Property::Data { writable, .. } => writable,
            };
        }
        let extensible = self.is_extensible();
        let inherited = self.get_prototype().and_then(|proto| proto.get_property(key));
        match inherited {
            None => extensible,
            Some(Property::Accessor { set, .. }) => set.is_some(),
            Some(Property::Data { writable, .. }) => extensible && writable,
        }
    }

    /// `[[Put]]` with the non-strict semantics: refused writes are
    /// silently ignored
    pub fn put(&self, key: &str, value: impl Into<JsValue>) -> JsResult<()> {
        self.put_with(key, value.into(), false)
    }

    /// `[[Put]]`; when `throw` is set a refused write raises a TypeError
    pub fn put_with(&self, key: &str, value: JsValue, throw: bool) -> JsResult<()> {
        self.expect_object("[[Put]]")?;
        if !self.can_put(key) {
            if throw {
                return Err(JsError::type_error(format!(
                    "Cannot assign to read only property '{}'",
                    key
                )));
            }
            return Ok(());
        }

        if let Some(Property::Data { .. }) = self.get_own_property(key) {
            self.define_own_property(key, &PropertyDescriptor::new().value(value), throw)?;
            return Ok(());
        }

        if let Some(Property::Accessor { set: Some(setter), .. }) = self.get_property(key) {
            setter.call(self, &[value])?;
            return Ok(());
        }

        let desc = PropertyDescriptor::new()
            .value(value)
            .writable(true)
            .enumerable(true)
            .configurable(true);
        self.define_own_property(key, &desc, throw)?;
        Ok(())
    }

    /// `[[Delete]]`
    pub fn delete(&self, key: &str, throw: bool) -> JsResult<bool> {
        let obj = self.expect_object("[[Delete]]")?;
        let mut data = obj.borrow_mut();
        let configurable = match data.own(key) {
            None => return Ok(true),
            Some(property) => property.configurable(),
        };
        if configurable {
            data.remove(key);
            Ok(true)
        } else if throw {
            Err(JsError::type_error(format!(
                "Cannot delete property '{}'",
                key
            )))
        } else {
            Ok(false)
        }
    }

    /// `[[DefineOwnProperty]]`
    ///
    /// Returns whether the definition was applied. A rejected definition
    /// raises a TypeError when `throw` is set.
    pub fn define_own_property(
        &self,
        key: &str,
        desc: &PropertyDescriptor,
        throw: bool,
    ) -> JsResult<bool> {
        let obj = self.expect_object("[[DefineOwnProperty]]")?;
        let applied = if obj.borrow().class == "Array" {
            self.define_array_property(key, desc)?
        } else {
            Self::define_ordinary(obj, key, desc)
        };

        if !applied && throw {
            return Err(JsError::type_error(format!(
                "Cannot redefine property: {}",
                key
            )));
        }
        Ok(applied)
    }

    fn define_ordinary(obj: &Rc<RefCell<ObjectData>>, key: &str, desc: &PropertyDescriptor) -> bool {
        let mut data = obj.borrow_mut();
        let extensible = data.extensible;
        match validate_and_apply(data.own(key), extensible, desc) {
            Some(property) => {
                data.insert(key, property);
                true
            }
            None => false,
        }
    }

    /// Array exotic `[[DefineOwnProperty]]`: keeps `length` above every
    /// index and deletes indices when `length` shrinks
    fn define_array_property(&self, key: &str, desc: &PropertyDescriptor) -> JsResult<bool> {
        let JsValue::Object(obj) = self else {
            return Ok(false);
        };
        let (old_len, len_writable) = match obj.borrow().own("length") {
            Some(Property::Data {
                value: JsValue::Number(n),
                writable,
                ..
            }) => (*n as u32, *writable),
            _ => (0, true),
        };

        if key == "length" {
            let Some(value) = &desc.value else {
                return Ok(Self::define_ordinary(obj, key, desc));
            };
            let new_len = value.to_uint32()?;
            if new_len as f64 != value.to_number()? {
                return Err(JsError::range_error("Invalid array length"));
            }
            let len_desc = PropertyDescriptor {
                value: Some(JsValue::number(new_len as f64)),
                ..desc.clone()
            };
            if new_len >= old_len {
                return Ok(Self::define_ordinary(obj, key, &len_desc));
            }
            if !len_writable {
                return Ok(false);
            }
            // Leave length writable until the deletions are done.
            let final_writable = len_desc.writable.unwrap_or(true);
            let interim = PropertyDescriptor {
                writable: Some(true),
                ..len_desc.clone()
            };
            if !Self::define_ordinary(obj, key, &interim) {
                return Ok(false);
            }

            let mut indices: Vec<u32> = obj
                .borrow()
                .properties
                .iter()
                .filter_map(|(k, _)| array_index(k))
                .filter(|i| *i >= new_len)
                .collect();
            indices.sort_unstable_by(|a, b| b.cmp(a));
            for index in indices {
                if !self.delete(&index.to_string(), false)? {
                    let stuck = PropertyDescriptor::new()
                        .value(index as f64 + 1.0)
                        .writable(final_writable);
                    Self::define_ordinary(obj, key, &stuck);
                    return Ok(false);
                }
            }
            if !final_writable {
                Self::define_ordinary(obj, key, &PropertyDescriptor::new().writable(false));
            }
            return Ok(true);
        }

        if let Some(index) = array_index(key) {
            if index >= old_len && !len_writable {
                return Ok(false);
            }
            if !Self::define_ordinary(obj, key, desc) {
                return Ok(false);
            }
            if index >= old_len {
                let grown = PropertyDescriptor::new().value(index as f64 + 1.0);
                Self::define_ordinary(obj, "length", &grown);
            }
            return Ok(true);
        }

        Ok(Self::define_ordinary(obj, key, desc))
    }

    /// `[[Call]]`
    pub fn call(&self, this: &JsValue, args: &[JsValue]) -> JsResult<JsValue> {
        let func = match self {
            JsValue::Object(obj) => obj.borrow().call.clone(),
            _ => None,
        };
        match func {
            Some(func) => func(this, args),
            None => Err(JsError::type_error(format!(
                "{} is not a function",
                self.type_of()
            ))),
        }
    }

    /// Look up a method by name and call it with this value as `this`
    pub fn invoke(&self, name: &str, args: &[JsValue]) -> JsResult<JsValue> {
        let method = self.get(name)?;
        if !method.is_callable() {
            return Err(JsError::type_error(format!("{} is not a function", name)));
        }
        method.call(self, args)
    }

    /// Strict equality (`===`): NaN is never equal, objects compare by
    /// identity
    pub fn strict_equals(&self, other: &JsValue) -> bool {
        match (self, other) {
            (JsValue::Undefined, JsValue::Undefined) => true,
            (JsValue::Null, JsValue::Null) => true,
            (JsValue::Boolean(a), JsValue::Boolean(b)) => a == b,
            (JsValue::Number(a), JsValue::Number(b)) => a == b,
            (JsValue::String(a), JsValue::String(b)) => a == b,
            (JsValue::Object(a), JsValue::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// SameValue: like `===` except NaN equals NaN and +0 differs from -0
    pub fn same_value(&self, other: &JsValue) -> bool {
        match (self, other) {
            (JsValue::Number(a), JsValue::Number(b)) => {
                if a.is_nan() && b.is_nan() {
                    true
                } else {
                    a == b && a.is_sign_negative() == b.is_sign_negative()
                }
            }
            _ => self.strict_equals(other),
        }
    }
}
