//! The Object constructor's static functions and Object.prototype methods

use crate::property::{Property, PropertyDescriptor};
use crate::value::{JsError, JsResult, JsValue};

fn require_object<'a>(value: &'a JsValue, function: &str) -> JsResult<&'a JsValue> {
    if value.is_object() {
        Ok(value)
    } else {
        Err(JsError::type_error(format!(
            "{} called on non-object",
            function
        )))
    }
}

/// Static functions of the Object constructor
pub struct ObjectConstructor;

impl ObjectConstructor {
    /// Object.defineProperty(O, P, Attributes)
    ///
    /// Returns `O`. A rejected definition throws a TypeError.
    pub fn define_property(
        target: &JsValue,
        key: &JsValue,
        attributes: &JsValue,
    ) -> JsResult<JsValue> {
        let target = require_object(target, "Object.defineProperty")?;
        let name = key.to_js_string()?;
        let desc = PropertyDescriptor::from_object(attributes)?;
        target.define_own_property(&name, &desc, true)?;
        Ok(target.clone())
    }

    /// Object.getOwnPropertyDescriptor(O, P)
    pub fn get_own_property_descriptor(
        target: &JsValue,
        key: &JsValue,
    ) -> JsResult<Option<PropertyDescriptor>> {
        let target = require_object(target, "Object.getOwnPropertyDescriptor")?;
        let name = key.to_js_string()?;
        Ok(target
            .get_own_property(&name)
            .map(|p| PropertyDescriptor::from_property(&p)))
    }

    /// Object.keys(O): own enumerable property names in insertion order
    pub fn keys(target: &JsValue) -> JsResult<Vec<String>> {
        let target = require_object(target, "Object.keys")?;
        Ok(target
            .own_keys()
            .into_iter()
            .filter(|k| target.get_own_property(k).is_some_and(|p| p.enumerable()))
            .collect())
    }

    /// Object.preventExtensions(O)
    pub fn prevent_extensions(target: &JsValue) -> JsResult<JsValue> {
        let target = require_object(target, "Object.preventExtensions")?;
        target.prevent_extensions()?;
        Ok(target.clone())
    }

    /// Object.isExtensible(O)
    pub fn is_extensible(target: &JsValue) -> JsResult<bool> {
        Ok(require_object(target, "Object.isExtensible")?.is_extensible())
    }

    /// Object.seal(O): make every own property non-configurable and the
    /// object non-extensible
    pub fn seal(target: &JsValue) -> JsResult<JsValue> {
        let target = require_object(target, "Object.seal")?;
        for key in target.own_keys() {
            let desc = PropertyDescriptor::new().configurable(false);
            target.define_own_property(&key, &desc, true)?;
        }
        target.prevent_extensions()?;
        Ok(target.clone())
    }

    /// Object.freeze(O): like seal, and data properties become read-only
    pub fn freeze(target: &JsValue) -> JsResult<JsValue> {
        let target = require_object(target, "Object.freeze")?;
        for key in target.own_keys() {
            let mut desc = PropertyDescriptor::new().configurable(false);
            if target.get_own_property(&key).is_some_and(|p| p.is_data()) {
                desc = desc.writable(false);
            }
            target.define_own_property(&key, &desc, true)?;
        }
        target.prevent_extensions()?;
        Ok(target.clone())
    }

    /// Object.isSealed(O)
    pub fn is_sealed(target: &JsValue) -> JsResult<bool> {
        let target = require_object(target, "Object.isSealed")?;
        let any_configurable = target
            .own_keys()
            .iter()
            .any(|k| target.get_own_property(k).is_some_and(|p| p.configurable()));
        Ok(!any_configurable && !target.is_extensible())
    }

    /// Object.isFrozen(O)
    ///
    /// An object is frozen when it is not extensible and every own property
    /// is non-configurable, with data properties also non-writable.
    pub fn is_frozen(target: &JsValue) -> JsResult<bool> {
        let target = require_object(target, "Object.isFrozen")?;
        for key in target.own_keys() {
            match target.get_own_property(&key) {
                Some(Property::Data { writable: true, .. }) => return Ok(false),
                Some(p) if p.configurable() => return Ok(false),
                _ => {}
            }
        }
        Ok(!target.is_extensible())
    }
}

/// Object.prototype methods
pub struct ObjectPrototype;

impl ObjectPrototype {
    /// Object.prototype.hasOwnProperty(V)
    pub fn has_own_property(this: &JsValue, key: &JsValue) -> JsResult<bool> {
        let name = key.to_js_string()?;
        Ok(this.to_object()?.has_own(&name))
    }

    /// Object.prototype.toString()
    pub fn to_string(this: &JsValue) -> JsResult<String> {
        let tag = match this {
            JsValue::Undefined => "Undefined",
            JsValue::Null => "Null",
            other => other.to_object()?.class().unwrap_or("Object"),
        };
        Ok(format!("[object {}]", tag))
    }

    /// Object.prototype.valueOf()
    pub fn value_of(this: &JsValue) -> JsResult<JsValue> {
        this.to_object()
    }
}
