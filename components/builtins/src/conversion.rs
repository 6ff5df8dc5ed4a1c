//! Type conversion operations
//!
//! ToPrimitive, ToBoolean, ToNumber, ToInteger, ToUint32, ToString and
//! ToObject. Converting an object to a primitive calls back into user code
//! (`valueOf` / `toString`), so every conversion that may reach it returns
//! a [`JsResult`].

use crate::property::Property;
use crate::value::{JsError, JsResult, JsValue, ObjectData};

/// Hint passed to ToPrimitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferredType {
    /// No hint; behaves like `Number` for ordinary objects
    Default,
    /// Try `valueOf` before `toString`
    Number,
    /// Try `toString` before `valueOf`
    String,
}

/// Format a number the way `Number.prototype.toString()` does for radix 10
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = n.abs();
    if n.fract() == 0.0 && magnitude < 1e21 {
        if magnitude < 9007199254740992.0 {
            return format!("{:.0}", n);
        }
        return integral_shortest(n);
    }
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{:e}", n);
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        };
    }
    format!("{}", n)
}

/// Integral value of 2^53 or more: shortest round-trip digits padded with
/// zeros up to the decimal exponent
fn integral_shortest(n: f64) -> String {
    let formatted = format!("{:e}", n.abs());
    let Some((mantissa, exp)) = formatted.split_once('e') else {
        return format!("{:.0}", n);
    };
    let exp: usize = exp.parse().unwrap_or(0);
    let digits = mantissa.replace('.', "");
    let sign = if n < 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, digits, "0".repeat((exp + 1).saturating_sub(digits.len())))
}

/// WhiteSpace and LineTerminator as ES5 7.2 and 7.3 define them
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
            | '\u{000A}'
            | '\u{000D}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// StringToNumber: whitespace-trimmed decimal, hex or `Infinity` literal
fn string_to_number(s: &str) -> f64 {
    let s = s.trim_matches(is_js_whitespace);
    if s.is_empty() {
        return 0.0;
    }
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        return if !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            hex.chars()
                .fold(0.0, |acc, c| acc * 16.0 + c.to_digit(16).unwrap_or(0) as f64)
        } else {
            f64::NAN
        };
    }

    let (sign, unsigned) = match s.as_bytes()[0] {
        b'-' => (-1.0, &s[1..]),
        b'+' => (1.0, &s[1..]),
        _ => (1.0, s),
    };
    if unsigned == "Infinity" {
        return sign * f64::INFINITY;
    }
    // Rust also accepts "inf" and "nan"; JavaScript does not.
    let is_decimal = !unsigned.is_empty()
        && unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        && unsigned
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !is_decimal {
        return f64::NAN;
    }
    unsigned.parse::<f64>().map(|n| sign * n).unwrap_or(f64::NAN)
}

impl JsValue {
    /// ToBoolean
    pub fn to_boolean(&self) -> bool {
        match self {
            JsValue::Undefined | JsValue::Null => false,
            JsValue::Boolean(b) => *b,
            JsValue::Number(n) => !n.is_nan() && *n != 0.0,
            JsValue::String(s) => !s.is_empty(),
            JsValue::Object(_) => true,
        }
    }

    /// Returns whether this value is truthy in JavaScript semantics
    pub fn is_truthy(&self) -> bool {
        self.to_boolean()
    }

    /// ToPrimitive
    pub fn to_primitive(&self, hint: PreferredType) -> JsResult<JsValue> {
        if self.is_primitive() {
            return Ok(self.clone());
        }
        let order = match hint {
            PreferredType::String => ["toString", "valueOf"],
            PreferredType::Number | PreferredType::Default => ["valueOf", "toString"],
        };
        for name in order {
            let method = self.get(name)?;
            if method.is_callable() {
                let result = method.call(self, &[])?;
                if result.is_primitive() {
                    return Ok(result);
                }
            }
        }
        Err(JsError::type_error("Cannot convert object to primitive value"))
    }

    /// ToNumber
    pub fn to_number(&self) -> JsResult<f64> {
        Ok(match self {
            JsValue::Undefined => f64::NAN,
            JsValue::Null => 0.0,
            JsValue::Boolean(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            JsValue::Number(n) => *n,
            JsValue::String(s) => string_to_number(s),
            JsValue::Object(_) => self.to_primitive(PreferredType::Number)?.to_number()?,
        })
    }

    /// ToInteger
    pub fn to_integer(&self) -> JsResult<f64> {
        let n = self.to_number()?;
        Ok(if n.is_nan() {
            0.0
        } else if n == 0.0 || n.is_infinite() {
            n
        } else {
            n.trunc()
        })
    }

    /// ToUint32
    pub fn to_uint32(&self) -> JsResult<u32> {
        let n = self.to_number()?;
        if n.is_nan() || n.is_infinite() || n == 0.0 {
            return Ok(0);
        }
        Ok(n.trunc().rem_euclid(4_294_967_296.0) as u32)
    }

    /// ToString
    pub fn to_js_string(&self) -> JsResult<String> {
        Ok(match self {
            JsValue::Undefined => "undefined".to_string(),
            JsValue::Null => "null".to_string(),
            JsValue::Boolean(b) => b.to_string(),
            JsValue::Number(n) => number_to_string(*n),
            JsValue::String(s) => s.clone(),
            JsValue::Object(_) => self.to_primitive(PreferredType::String)?.to_js_string()?,
        })
    }

    /// ToObject; primitive wrappers get no prototype
    pub fn to_object(&self) -> JsResult<JsValue> {
        let (class, primitive) = match self {
            JsValue::Undefined | JsValue::Null => {
                return Err(JsError::type_error(format!(
                    "Cannot convert {} to object",
                    self.to_js_string()?
                )))
            }
            JsValue::Object(_) => return Ok(self.clone()),
            JsValue::Boolean(_) => ("Boolean", self.clone()),
            JsValue::Number(_) => ("Number", self.clone()),
            JsValue::String(_) => ("String", self.clone()),
        };

        let mut data = ObjectData::new(class, None);
        if let JsValue::String(s) = &primitive {
            let units: Vec<u16> = s.encode_utf16().collect();
            for (index, unit) in units.iter().enumerate() {
                data.insert(
                    &index.to_string(),
                    Property::Data {
                        value: JsValue::String(String::from_utf16_lossy(&[*unit])),
                        writable: false,
                        enumerable: true,
                        configurable: false,
                    },
                );
            }
            data.insert(
                "length",
                Property::Data {
                    value: JsValue::number(units.len() as f64),
                    writable: false,
                    enumerable: false,
                    configurable: false,
                },
            );
        }
        data.primitive = Some(primitive);
        Ok(JsValue::from_data(data))
    }
}
