//! Property records and descriptors
//!
//! A [`Property`] is what an object actually stores: a complete data or
//! accessor property. A [`PropertyDescriptor`] is the partial form used by
//! `Object.defineProperty`, where every field may be absent.

use crate::value::{JsResult, JsValue};
use core_types::JsError;

/// A complete own property of an object
#[derive(Debug, Clone, PartialEq)]
pub enum Property {
    /// Data property holding a value
    Data {
        /// Current value
        value: JsValue,
        /// Whether assignment may change the value
        writable: bool,
        /// Whether the property shows up in enumeration
        enumerable: bool,
        /// Whether the property can be deleted or redefined
        configurable: bool,
    },
    /// Accessor property backed by getter/setter functions
    Accessor {
        /// Getter function, `None` when undefined
        get: Option<JsValue>,
        /// Setter function, `None` when undefined
        set: Option<JsValue>,
        /// Whether the property shows up in enumeration
        enumerable: bool,
        /// Whether the property can be deleted or redefined
        configurable: bool,
    },
}

impl Property {
    /// A writable, enumerable, configurable data property, as created by
    /// plain assignment
    pub fn data(value: JsValue) -> Self {
        Property::Data {
            value,
            writable: true,
            enumerable: true,
            configurable: true,
        }
    }

    /// A writable, non-enumerable, configurable data property, as used for
    /// built-in methods
    pub fn method(value: JsValue) -> Self {
        Property::Data {
            value,
            writable: true,
            enumerable: false,
            configurable: true,
        }
    }

    /// Check if this is a data property
    pub fn is_data(&self) -> bool {
        matches!(self, Property::Data { .. })
    }

    /// Whether the property is enumerable
    pub fn enumerable(&self) -> bool {
        match self {
            Property::Data { enumerable, .. } | Property::Accessor { enumerable, .. } => *enumerable,
        }
    }

    /// Whether the property is configurable
    pub fn configurable(&self) -> bool {
        match self {
            Property::Data { configurable, .. } | Property::Accessor { configurable, .. } => {
                *configurable
            }
        }
    }

    /// Whether the property is a writable data property
    pub fn writable(&self) -> bool {
        matches!(self, Property::Data { writable: true, .. })
    }
}

/// Partial property descriptor for `defineProperty` and
/// `getOwnPropertyDescriptor`
///
/// For `get` and `set`, `Some(JsValue::Undefined)` means the field is present
/// and explicitly undefined.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyDescriptor {
    /// The value of the property
    pub value: Option<JsValue>,
    /// Whether the property value can be changed
    pub writable: Option<bool>,
    /// Getter function
    pub get: Option<JsValue>,
    /// Setter function
    pub set: Option<JsValue>,
    /// Whether the property shows up in for...in loops
    pub enumerable: Option<bool>,
    /// Whether the property can be deleted or attributes changed
    pub configurable: Option<bool>,
}

impl PropertyDescriptor {
    /// Create an empty (generic) descriptor
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `value` field
    pub fn value(mut self, value: impl Into<JsValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the `writable` field
    pub fn writable(mut self, writable: bool) -> Self {
        self.writable = Some(writable);
        self
    }

    /// Set the `get` field
    pub fn getter(mut self, get: JsValue) -> Self {
        self.get = Some(get);
        self
    }

    /// Set the `set` field
    pub fn setter(mut self, set: JsValue) -> Self {
        self.set = Some(set);
        self
    }

    /// Set the `enumerable` field
    pub fn enumerable(mut self, enumerable: bool) -> Self {
        self.enumerable = Some(enumerable);
        self
    }

    /// Set the `configurable` field
    pub fn configurable(mut self, configurable: bool) -> Self {
        self.configurable = Some(configurable);
        self
    }

    /// Check if this is a data descriptor
    pub fn is_data_descriptor(&self) -> bool {
        self.value.is_some() || self.writable.is_some()
    }

    /// Check if this is an accessor descriptor
    pub fn is_accessor_descriptor(&self) -> bool {
        self.get.is_some() || self.set.is_some()
    }

    /// Check if this is neither a data nor an accessor descriptor
    pub fn is_generic_descriptor(&self) -> bool {
        !self.is_data_descriptor() && !self.is_accessor_descriptor()
    }

    /// Check if no field is present
    pub fn is_empty(&self) -> bool {
        self.is_generic_descriptor() && self.enumerable.is_none() && self.configurable.is_none()
    }

    /// ToPropertyDescriptor: read a descriptor from a JavaScript object.
    ///
    /// Fields are read with `[[HasProperty]]` and `[[Get]]` in the order
    /// enumerable, configurable, value, writable, get, set.
    pub fn from_object(attributes: &JsValue) -> JsResult<Self> {
        if !attributes.is_object() {
            return Err(JsError::type_error(
                "Property description must be an object",
            ));
        }

        let mut desc = PropertyDescriptor::new();
        if attributes.has_property("enumerable") {
            desc.enumerable = Some(attributes.get("enumerable")?.to_boolean());
        }
        if attributes.has_property("configurable") {
            desc.configurable = Some(attributes.get("configurable")?.to_boolean());
        }
        if attributes.has_property("value") {
            desc.value = Some(attributes.get("value")?);
        }
        if attributes.has_property("writable") {
            desc.writable = Some(attributes.get("writable")?.to_boolean());
        }
        for (name, slot) in [("get", &mut desc.get), ("set", &mut desc.set)] {
            if attributes.has_property(name) {
                let func = attributes.get(name)?;
                if !func.is_undefined() && !func.is_callable() {
                    return Err(JsError::type_error(format!(
                        "{} must be a function or undefined",
                        name
                    )));
                }
                *slot = Some(func);
            }
        }

        if desc.is_data_descriptor() && desc.is_accessor_descriptor() {
            return Err(JsError::type_error(
                "Invalid property descriptor. Cannot both specify accessors and a value or writable attribute",
            ));
        }
        Ok(desc)
    }

    /// FromPropertyDescriptor on the Rust side: the complete descriptor of
    /// a stored property
    pub fn from_property(property: &Property) -> Self {
        match property {
            Property::Data {
                value,
                writable,
                enumerable,
                configurable,
            } => PropertyDescriptor {
                value: Some(value.clone()),
                writable: Some(*writable),
                enumerable: Some(*enumerable),
                configurable: Some(*configurable),
                ..Default::default()
            },
            Property::Accessor {
                get,
                set,
                enumerable,
                configurable,
            } => PropertyDescriptor {
                get: Some(get.clone().unwrap_or(JsValue::Undefined)),
                set: Some(set.clone().unwrap_or(JsValue::Undefined)),
                enumerable: Some(*enumerable),
                configurable: Some(*configurable),
                ..Default::default()
            },
        }
    }

    /// Whether every present field already matches `current`
    fn is_subset_of(&self, current: &Property) -> bool {
        let complete = PropertyDescriptor::from_property(current);
        fn same<T>(field: &Option<T>, current: &Option<T>, eq: impl Fn(&T, &T) -> bool) -> bool {
            match (field, current) {
                (None, _) => true,
                (Some(a), Some(b)) => eq(a, b),
                (Some(_), None) => false,
            }
        }
        same(&self.value, &complete.value, JsValue::same_value)
            && same(&self.writable, &complete.writable, |a, b| a == b)
            && same(&self.get, &complete.get, JsValue::same_value)
            && same(&self.set, &complete.set, JsValue::same_value)
            && same(&self.enumerable, &complete.enumerable, |a, b| a == b)
            && same(&self.configurable, &complete.configurable, |a, b| a == b)
    }
}

fn function_slot(field: &Option<JsValue>) -> Option<JsValue> {
    field.clone().filter(|f| !f.is_undefined())
}

/// ValidateAndApplyPropertyDescriptor.
///
/// Returns the property to store, or `None` when the definition must be
/// rejected.
pub fn validate_and_apply(
    current: Option<&Property>,
    extensible: bool,
    desc: &PropertyDescriptor,
) -> Option<Property> {
    let Some(current) = current else {
        if !extensible {
            return None;
        }
        let created = if desc.is_accessor_descriptor() {
            Property::Accessor {
                get: function_slot(&desc.get),
                set: function_slot(&desc.set),
                enumerable: desc.enumerable.unwrap_or(false),
                configurable: desc.configurable.unwrap_or(false),
            }
        } else {
            Property::Data {
                value: desc.value.clone().unwrap_or(JsValue::Undefined),
                writable: desc.writable.unwrap_or(false),
                enumerable: desc.enumerable.unwrap_or(false),
                configurable: desc.configurable.unwrap_or(false),
            }
        };
        return Some(created);
    };

    if desc.is_empty() || desc.is_subset_of(current) {
        return Some(current.clone());
    }

    let configurable = current.configurable();
    if !configurable {
        if desc.configurable == Some(true) {
            return None;
        }
        if desc.enumerable.is_some_and(|e| e != current.enumerable()) {
            return None;
        }
    }

    // Start from the current property, converted to the descriptor's kind
    // when it changes between data and accessor.
    let mut next = if desc.is_generic_descriptor() {
        current.clone()
    } else if current.is_data() != desc.is_data_descriptor() {
        if !configurable {
            return None;
        }
        if current.is_data() {
            Property::Accessor {
                get: None,
                set: None,
                enumerable: current.enumerable(),
                configurable,
            }
        } else {
            Property::Data {
                value: JsValue::Undefined,
                writable: false,
                enumerable: current.enumerable(),
                configurable,
            }
        }
    } else {
        match current {
            Property::Data {
                value, writable, ..
            } if !configurable && !writable => {
                if desc.writable == Some(true) {
                    return None;
                }
                if let Some(new_value) = &desc.value {
                    if !new_value.same_value(value) {
                        return None;
                    }
                }
            }
            Property::Accessor { get, set, .. } if !configurable => {
                let unchanged = |field: &Option<JsValue>, stored: &Option<JsValue>| match field {
                    None => true,
                    Some(f) => f.same_value(stored.as_ref().unwrap_or(&JsValue::Undefined)),
                };
                if !unchanged(&desc.set, set) || !unchanged(&desc.get, get) {
                    return None;
                }
            }
            _ => {}
        }
        current.clone()
    };

    match &mut next {
        Property::Data {
            value,
            writable,
            enumerable,
            configurable,
        } => {
            if let Some(v) = &desc.value {
                *value = v.clone();
            }
            if let Some(w) = desc.writable {
                *writable = w;
            }
            if let Some(e) = desc.enumerable {
                *enumerable = e;
            }
            if let Some(c) = desc.configurable {
                *configurable = c;
            }
        }
        Property::Accessor {
            get,
            set,
            enumerable,
            configurable,
        } => {
            if desc.get.is_some() {
                *get = function_slot(&desc.get);
            }
            if desc.set.is_some() {
                *set = function_slot(&desc.set);
            }
            if let Some(e) = desc.enumerable {
                *enumerable = e;
            }
            if let Some(c) = desc.configurable {
                *configurable = c;
            }
        }
    }
    Some(next)
}
