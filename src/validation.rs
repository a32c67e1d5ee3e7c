//! Request validation at the JSON boundary.

use serde_json::Value;

use crate::error::AppError;

/// Movement and request quantities must be positive. The SPA historically
/// sent numbers as strings, so a numeric string is accepted and normalized.
pub fn positive_quantity(body: &Value) -> Result<i64, AppError> {
    let raw = body
        .get("quantity")
        .ok_or_else(|| AppError::Validation("quantity is required".into()))?;
    let n = match raw {
        Value::Number(n) => n.as_i64().or_else(|| {
            // tolerate e.g. 3.0 but not 3.5
            n.as_f64()
                .filter(|f| f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    match n {
        Some(q) if q > 0 => Ok(q),
        _ => Err(AppError::Validation(
            "quantity must be a positive number".into(),
        )),
    }
}

/// Normalize the quantity field in place so downstream deserialization sees
/// a plain integer.
pub fn normalize_quantity(body: &mut Value) -> Result<(), AppError> {
    let q = positive_quantity(body)?;
    if let Some(obj) = body.as_object_mut() {
        obj.insert("quantity".into(), Value::from(q));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_positive_numbers_and_numeric_strings() {
        assert_eq!(positive_quantity(&json!({"quantity": 3})).unwrap(), 3);
        assert_eq!(positive_quantity(&json!({"quantity": "3"})).unwrap(), 3);
    }

    #[test]
    fn rejects_zero_negative_garbage_and_missing() {
        for body in [
            json!({"quantity": 0}),
            json!({"quantity": -5}),
            json!({"quantity": "abc"}),
            json!({"quantity": 3.5}),
            json!({"quantity": null}),
            json!({}),
        ] {
            assert!(
                positive_quantity(&body).is_err(),
                "should reject {}",
                body
            );
        }
    }

    #[test]
    fn normalize_rewrites_string_quantity() {
        let mut body = json!({"quantity": "7", "reason": "restock"});
        normalize_quantity(&mut body).unwrap();
        assert_eq!(body["quantity"], json!(7));
    }
}
