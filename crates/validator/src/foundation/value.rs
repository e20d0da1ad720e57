//! Helpers over the JSON value model.

use serde_json::{Number, Value};

/// Strict equality between two JSON values.
///
/// Scalars compare by value, with numbers compared numerically so `1` and
/// `1.0` are equal. Arrays and objects are only equal to themselves: two
/// separately built containers never compare equal, however alike.
///
/// # Examples
///
/// ```
/// use conform_validator::foundation::strict_equal;
/// use serde_json::json;
///
/// assert!(strict_equal(&json!(1), &json!(1.0)));
/// assert!(!strict_equal(&json!("1"), &json!(1)));
///
/// let list = json!([1, 2]);
/// assert!(strict_equal(&list, &list));
/// assert!(!strict_equal(&list, &json!([1, 2])));
/// ```
pub fn strict_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => number_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(_), Value::Array(_)) | (Value::Object(_), Value::Object(_)) => {
            std::ptr::eq(left, right)
        }
        _ => false,
    }
}

fn number_equal(a: &Number, b: &Number) -> bool {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
        return a == b;
    }
    a.as_f64() == b.as_f64()
}

/// Short name of a value's JSON kind, for log fields.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        assert!(strict_equal(&Value::Null, &Value::Null));
        assert!(strict_equal(&json!(true), &json!(true)));
        assert!(!strict_equal(&json!(true), &json!(false)));
        assert!(strict_equal(&json!("a"), &json!("a")));
        assert!(!strict_equal(&json!(null), &json!(false)));
        assert!(!strict_equal(&json!(0), &json!(false)));
    }

    #[test]
    fn test_numbers_compare_numerically() {
        assert!(strict_equal(&json!(-3), &json!(-3.0)));
        assert!(strict_equal(&json!(u64::MAX), &json!(u64::MAX)));
        assert!(!strict_equal(&json!(u64::MAX), &json!(i64::MAX)));
        assert!(!strict_equal(&json!(0.1), &json!(0.2)));
    }

    #[test]
    fn test_containers_compare_by_identity() {
        let obj = json!({ "a": 1 });
        assert!(strict_equal(&obj, &obj));
        assert!(!strict_equal(&obj, &obj.clone()));
        assert!(!strict_equal(&json!([]), &json!([])));
    }

    #[test]
    fn test_kind_of() {
        assert_eq!(kind_of(&json!(null)), "null");
        assert_eq!(kind_of(&json!([1])), "array");
        assert_eq!(kind_of(&json!({})), "object");
        assert_eq!(kind_of(&json!(2.5)), "number");
    }
}
