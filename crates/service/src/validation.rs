//! Form field parsing shared by the services. Every helper fails with
//! [`ServiceError::Validation`] naming the offending field, before any storage call.

use crate::errors::ServiceError;

/// Trimmed, non-empty value of a required field.
pub fn required<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, ServiceError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ServiceError::Validation(format!("{field} is required"))),
    }
}

/// Positive integer identifier.
pub fn parse_id(field: &str, value: Option<&str>) -> Result<i32, ServiceError> {
    let raw = required(field, value)?;
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ServiceError::Validation(format!("{field} must be a positive integer"))),
    }
}

pub fn parse_non_negative_int(field: &str, value: Option<&str>) -> Result<i32, ServiceError> {
    let raw = required(field, value)?;
    match raw.parse::<i32>() {
        Ok(n) if n >= 0 => Ok(n),
        _ => Err(ServiceError::Validation(format!("{field} must be a non-negative integer"))),
    }
}

/// Money amount: finite and not negative.
pub fn parse_amount(field: &str, value: Option<&str>) -> Result<f64, ServiceError> {
    let raw = required(field, value)?;
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Ok(n),
        _ => Err(ServiceError::Validation(format!("{field} must be a non-negative number"))),
    }
}

/// Optional text field; blank becomes `None`.
pub fn optional(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_missing_and_blank() {
        assert!(required("model", None).is_err());
        assert!(required("model", Some("   ")).is_err());
        assert_eq!(required("model", Some(" Civic ")).unwrap(), "Civic");
    }

    #[test]
    fn ids_must_be_positive_integers() {
        assert_eq!(parse_id("vehicle_id", Some("12")).unwrap(), 12);
        for bad in ["0", "-3", "abc", "1.5", ""] {
            let err = parse_id("vehicle_id", Some(bad)).unwrap_err();
            assert!(err.to_string().contains("vehicle_id"), "{bad}: {err}");
        }
    }

    #[test]
    fn mileage_and_amount() {
        assert_eq!(parse_non_negative_int("milage", Some("0")).unwrap(), 0);
        assert!(parse_non_negative_int("milage", Some("-1")).is_err());
        assert_eq!(parse_amount("amount", Some("19.99")).unwrap(), 19.99);
        assert!(parse_amount("amount", Some("NaN")).is_err());
        assert!(parse_amount("amount", Some("-5")).is_err());
    }

    #[test]
    fn optional_blank_is_none() {
        assert_eq!(optional(Some("  ")), None);
        assert_eq!(optional(None), None);
        assert_eq!(optional(Some(" user@upi ")), Some("user@upi".to_string()));
    }
}
