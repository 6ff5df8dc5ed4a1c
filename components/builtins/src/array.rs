//! Array.prototype search methods
//!
//! Both methods are generic: `this` may be any object with a `length`,
//! not only an Array.

use crate::conversion::number_to_string;
use crate::value::{JsResult, JsValue};

/// Array.prototype methods
pub struct ArrayPrototype;

impl ArrayPrototype {
    /// Array.prototype.indexOf(searchElement [, fromIndex])
    ///
    /// `length` is read before `fromIndex` is converted, and elements are
    /// looked up only afterwards, so properties added while converting
    /// `fromIndex` are visible to the search. Returns -1 when not found.
    pub fn index_of(
        this: &JsValue,
        search: &JsValue,
        from_index: Option<&JsValue>,
    ) -> JsResult<i64> {
        let o = this.to_object()?;
        let len = o.get("length")?.to_uint32()? as i64;
        if len == 0 {
            return Ok(-1);
        }

        let n = match from_index {
            Some(v) => v.to_integer()?,
            None => 0.0,
        };
        if n >= len as f64 {
            return Ok(-1);
        }
        let mut k = if n >= 0.0 {
            n as i64
        } else {
            (len as f64 + n).max(0.0) as i64
        };

        while k < len {
            let key = number_to_string(k as f64);
            if o.has_property(&key) && search.strict_equals(&o.get(&key)?) {
                return Ok(k);
            }
            k += 1;
        }
        Ok(-1)
    }

    /// Array.prototype.lastIndexOf(searchElement [, fromIndex])
    ///
    /// Searches backwards from `fromIndex` (default `length - 1`).
    pub fn last_index_of(
        this: &JsValue,
        search: &JsValue,
        from_index: Option<&JsValue>,
    ) -> JsResult<i64> {
        let o = this.to_object()?;
        let len = o.get("length")?.to_uint32()? as i64;
        if len == 0 {
            return Ok(-1);
        }

        let n = match from_index {
            Some(v) => v.to_integer()?,
            None => (len - 1) as f64,
        };
        let mut k = if n >= 0.0 {
            n.min((len - 1) as f64) as i64
        } else {
            len + n as i64
        };

        while k >= 0 {
            let key = number_to_string(k as f64);
            if o.has_property(&key) && search.strict_equals(&o.get(&key)?) {
                return Ok(k);
            }
            k -= 1;
        }
        Ok(-1)
    }
}
