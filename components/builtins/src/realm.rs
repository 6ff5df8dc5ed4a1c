//! Realm: a fresh set of intrinsic objects
//!
//! Each realm owns its own `%ObjectPrototype%`, `%FunctionPrototype%`,
//! `%ArrayPrototype%` and `Object` constructor, with the built-in methods
//! installed as callable properties. Nothing is shared between realms.
//!
//! Intrinsics reference each other, so a realm and the values it created
//! are never freed; values stay usable after the `Realm` is dropped.

use crate::array::ArrayPrototype;
use crate::object::{ObjectConstructor, ObjectPrototype};
use crate::property::{Property, PropertyDescriptor};
use crate::value::{JsResult, JsValue};

fn arg(args: &[JsValue], index: usize) -> JsValue {
    args.get(index).cloned().unwrap_or(JsValue::Undefined)
}

fn descriptor_to_object(realm_object_proto: &JsValue, desc: &PropertyDescriptor) -> JsResult<JsValue> {
    let obj = JsValue::object_with_proto(realm_object_proto);
    let fields: [(&str, Option<JsValue>); 6] = [
        ("value", desc.value.clone()),
        ("writable", desc.writable.map(JsValue::boolean)),
        ("get", desc.get.clone()),
        ("set", desc.set.clone()),
        ("enumerable", desc.enumerable.map(JsValue::boolean)),
        ("configurable", desc.configurable.map(JsValue::boolean)),
    ];
    for (name, value) in fields {
        if let Some(value) = value {
            obj.put(name, value)?;
        }
    }
    Ok(obj)
}

/// A set of intrinsic objects for one evaluation
pub struct Realm {
    object_prototype: JsValue,
    function_prototype: JsValue,
    array_prototype: JsValue,
    object_constructor: JsValue,
}

impl Realm {
    /// Create a realm with freshly allocated intrinsics
    pub fn new() -> Self {
        let object_prototype = JsValue::object();
        let function_prototype =
            JsValue::function_with_proto(|_, _| Ok(JsValue::Undefined), Some(&object_prototype));
        let array_prototype = JsValue::array_with_proto(Vec::new(), Some(&object_prototype));
        let proto_for_new_objects = object_prototype.clone();
        let object_constructor = JsValue::function_with_proto(
            move |_, args| match arg(args, 0) {
                JsValue::Undefined | JsValue::Null => {
                    Ok(JsValue::object_with_proto(&proto_for_new_objects))
                }
                value => value.to_object(),
            },
            Some(&function_prototype),
        );

        let realm = Realm {
            object_prototype,
            function_prototype,
            array_prototype,
            object_constructor,
        };
        realm.install_intrinsics();
        realm
    }

    fn define_method<F>(&self, target: &JsValue, name: &str, func: F)
    where
        F: Fn(&JsValue, &[JsValue]) -> JsResult<JsValue> + 'static,
    {
        let method = JsValue::function_with_proto(func, Some(&self.function_prototype));
        if let JsValue::Object(obj) = target {
            obj.borrow_mut().insert(name, Property::method(method));
        }
    }

    fn install_intrinsics(&self) {
        let object_proto = &self.object_prototype;
        self.define_method(object_proto, "valueOf", |this, _| ObjectPrototype::value_of(this));
        self.define_method(object_proto, "toString", |this, _| {
            ObjectPrototype::to_string(this).map(JsValue::from)
        });
        self.define_method(object_proto, "hasOwnProperty", |this, args| {
            ObjectPrototype::has_own_property(this, &arg(args, 0)).map(JsValue::from)
        });

        let array_proto = &self.array_prototype;
        self.define_method(array_proto, "indexOf", |this, args| {
            ArrayPrototype::index_of(this, &arg(args, 0), args.get(1))
                .map(|i| JsValue::number(i as f64))
        });
        self.define_method(array_proto, "lastIndexOf", |this, args| {
            ArrayPrototype::last_index_of(this, &arg(args, 0), args.get(1))
                .map(|i| JsValue::number(i as f64))
        });

        let ctor = &self.object_constructor;
        self.define_method(ctor, "defineProperty", |_, args| {
            ObjectConstructor::define_property(&arg(args, 0), &arg(args, 1), &arg(args, 2))
        });
        // The descriptor object needs this realm's %ObjectPrototype%.
        let proto_for_descriptors = self.object_prototype.clone();
        self.define_method(ctor, "getOwnPropertyDescriptor", move |_, args| {
            match ObjectConstructor::get_own_property_descriptor(&arg(args, 0), &arg(args, 1))? {
                Some(desc) => descriptor_to_object(&proto_for_descriptors, &desc),
                None => Ok(JsValue::Undefined),
            }
        });
        self.define_method(ctor, "preventExtensions", |_, args| {
            ObjectConstructor::prevent_extensions(&arg(args, 0))
        });
        self.define_method(ctor, "isExtensible", |_, args| {
            ObjectConstructor::is_extensible(&arg(args, 0)).map(JsValue::from)
        });
        self.define_method(ctor, "freeze", |_, args| ObjectConstructor::freeze(&arg(args, 0)));
        self.define_method(ctor, "isFrozen", |_, args| {
            ObjectConstructor::is_frozen(&arg(args, 0)).map(JsValue::from)
        });
        self.define_method(ctor, "seal", |_, args| ObjectConstructor::seal(&arg(args, 0)));
        self.define_method(ctor, "isSealed", |_, args| {
            ObjectConstructor::is_sealed(&arg(args, 0)).map(JsValue::from)
        });
        if let JsValue::Object(obj) = ctor {
            obj.borrow_mut().insert(
                "prototype",
                Property::Data {
                    value: self.object_prototype.clone(),
                    writable: false,
                    enumerable: false,
                    configurable: false,
                },
            );
        }
    }

    /// `%ObjectPrototype%`
    pub fn object_prototype(&self) -> &JsValue {
        &self.object_prototype
    }

    /// `%FunctionPrototype%`
    pub fn function_prototype(&self) -> &JsValue {
        &self.function_prototype
    }

    /// `%ArrayPrototype%`
    pub fn array_prototype(&self) -> &JsValue {
        &self.array_prototype
    }

    /// The `Object` constructor
    pub fn object_constructor(&self) -> &JsValue {
        &self.object_constructor
    }

    /// `{}`
    pub fn object(&self) -> JsValue {
        JsValue::object_with_proto(&self.object_prototype)
    }

    /// A function object inheriting from `%FunctionPrototype%`
    pub fn function<F>(&self, func: F) -> JsValue
    where
        F: Fn(&JsValue, &[JsValue]) -> JsResult<JsValue> + 'static,
    {
        JsValue::function_with_proto(func, Some(&self.function_prototype))
    }

    /// An array literal inheriting from `%ArrayPrototype%`
    pub fn array(&self, values: Vec<JsValue>) -> JsValue {
        JsValue::array_with_proto(values, Some(&self.array_prototype))
    }
}

impl Default for Realm {
    fn default() -> Self {
        Self::new()
    }
}
