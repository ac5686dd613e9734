//! Typed getters over a parsed JSON tree.
//!
//! Each getter either returns the field coerced to the requested type or
//! fails with [`ClientError::MissingField`] / [`ClientError::InvalidField`].
//! Nothing is written anywhere on failure.

use crate::error::{ClientError, Result};
use crate::utils::hex::validate_hex;
use serde_json::Value;

fn field<'a>(obj: &'a Value, key: &str) -> Result<&'a Value> {
    match obj.get(key) {
        Some(Value::Null) | None => Err(ClientError::missing(key)),
        Some(value) => Ok(value),
    }
}

/// Returns the field unless it is absent or `null`.
pub fn get_optional<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    match obj.get(key) {
        Some(Value::Null) | None => None,
        Some(value) => Some(value),
    }
}

pub fn get_object<'a>(obj: &'a Value, key: &str) -> Result<&'a Value> {
    let value = field(obj, key)?;
    if !value.is_object() {
        return Err(ClientError::invalid(key, "expected an object"));
    }
    Ok(value)
}

pub fn get_array<'a>(obj: &'a Value, key: &str) -> Result<&'a Vec<Value>> {
    field(obj, key)?
        .as_array()
        .ok_or_else(|| ClientError::invalid(key, "expected an array"))
}

pub fn get_str<'a>(obj: &'a Value, key: &str) -> Result<&'a str> {
    field(obj, key)?
        .as_str()
        .ok_or_else(|| ClientError::invalid(key, "expected a string"))
}

/// String field with a byte capacity. Longer values fail instead of
/// being truncated.
pub fn get_string(obj: &Value, key: &str, max_len: usize) -> Result<String> {
    let value = get_str(obj, key)?;
    if value.len() > max_len {
        return Err(ClientError::CapacityExceeded {
            field: key.to_string(),
            max: max_len,
        });
    }
    Ok(value.to_string())
}

/// String field that must be exactly `hex_len` hex characters.
pub fn get_hex_string(obj: &Value, key: &str, hex_len: usize) -> Result<String> {
    let value = get_str(obj, key)?;
    validate_hex(key, value, hex_len)?;
    Ok(value.to_string())
}

/// String field holding a decimal 64-bit unsigned number.
pub fn get_numeric_string(obj: &Value, key: &str) -> Result<String> {
    let value = get_str(obj, key)?;
    value
        .parse::<u64>()
        .map_err(|_| ClientError::invalid(key, "expected a 64-bit numeric string"))?;
    Ok(value.to_string())
}

pub fn get_u64(obj: &Value, key: &str) -> Result<u64> {
    field(obj, key)?
        .as_u64()
        .ok_or_else(|| ClientError::invalid(key, "expected an unsigned integer"))
}

pub fn get_u32(obj: &Value, key: &str) -> Result<u32> {
    narrow(key, get_u64(obj, key)?)
}

pub fn get_u16(obj: &Value, key: &str) -> Result<u16> {
    narrow(key, get_u64(obj, key)?)
}

pub fn get_u8(obj: &Value, key: &str) -> Result<u8> {
    narrow(key, get_u64(obj, key)?)
}

fn narrow<T: TryFrom<u64>>(key: &str, value: u64) -> Result<T> {
    T::try_from(value).map_err(|_| ClientError::invalid(key, format!("{value} out of range")))
}

pub fn get_bool(obj: &Value, key: &str) -> Result<bool> {
    field(obj, key)?
        .as_bool()
        .ok_or_else(|| ClientError::invalid(key, "expected a boolean"))
}

pub fn get_f32(obj: &Value, key: &str) -> Result<f32> {
    field(obj, key)?
        .as_f64()
        .map(|v| v as f32)
        .ok_or_else(|| ClientError::invalid(key, "expected a number"))
}

/// Array of strings, kept in wire order.
pub fn get_string_array(obj: &Value, key: &str) -> Result<Vec<String>> {
    get_array(obj, key)?
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| ClientError::invalid(key, "expected an array of strings"))
        })
        .collect()
}

/// Array of fixed-length hex strings, kept in wire order.
pub fn get_hex_string_array(obj: &Value, key: &str, hex_len: usize) -> Result<Vec<String>> {
    let items = get_string_array(obj, key)?;
    for item in &items {
        validate_hex(key, item, hex_len)?;
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "name": "HORNET",
            "count": 3,
            "big": 18446744073709551615u64,
            "negative": -1,
            "healthy": true,
            "rate": 99.5,
            "ids": ["00ff", "a1b2"],
            "mixed": ["00ff", 1],
            "nothing": null,
            "inner": {"k": 1}
        })
    }

    #[test]
    fn test_get_string_bounds() {
        let obj = sample();
        assert_eq!(get_string(&obj, "name", 16).unwrap(), "HORNET");
        assert_eq!(
            get_string(&obj, "name", 3),
            Err(ClientError::CapacityExceeded {
                field: "name".to_string(),
                max: 3
            })
        );
        assert_eq!(get_string(&obj, "absent", 8), Err(ClientError::missing("absent")));
        assert!(matches!(
            get_string(&obj, "count", 8),
            Err(ClientError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_get_unsigned_integers() {
        let obj = sample();
        assert_eq!(get_u8(&obj, "count").unwrap(), 3);
        assert_eq!(get_u64(&obj, "big").unwrap(), u64::MAX);
        assert!(get_u32(&obj, "big").is_err());
        assert!(get_u64(&obj, "negative").is_err());
        assert!(get_u64(&obj, "rate").is_err());
    }

    #[test]
    fn test_get_bool_and_float() {
        let obj = sample();
        assert!(get_bool(&obj, "healthy").unwrap());
        assert!(get_bool(&obj, "name").is_err());
        assert_eq!(get_f32(&obj, "rate").unwrap(), 99.5);
        assert_eq!(get_f32(&obj, "count").unwrap(), 3.0);
    }

    #[test]
    fn test_null_counts_as_missing() {
        let obj = sample();
        assert_eq!(get_u64(&obj, "nothing"), Err(ClientError::missing("nothing")));
        assert!(get_optional(&obj, "nothing").is_none());
        assert!(get_optional(&obj, "inner").is_some());
    }

    #[test]
    fn test_get_arrays() {
        let obj = sample();
        assert_eq!(get_string_array(&obj, "ids").unwrap(), vec!["00ff", "a1b2"]);
        assert!(get_string_array(&obj, "mixed").is_err());
        assert!(get_hex_string_array(&obj, "ids", 4).is_ok());
        assert!(get_hex_string_array(&obj, "ids", 6).is_err());
        assert!(get_object(&obj, "inner").is_ok());
        assert!(get_object(&obj, "ids").is_err());
    }

    #[test]
    fn test_get_numeric_string() {
        let obj = json!({"networkId": "14379272398717627559", "nonce": "12ab"});
        assert_eq!(
            get_numeric_string(&obj, "networkId").unwrap(),
            "14379272398717627559"
        );
        assert!(get_numeric_string(&obj, "nonce").is_err());
    }
}
