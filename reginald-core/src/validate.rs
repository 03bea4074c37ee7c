//! Argument validation utilities
//!
//! Pure checks run at a call site before any descriptor is constructed.
//! They are stateless and reentrant; failures propagate to the caller as
//! [`Error::Arity`](crate::Error::Arity) or [`Error::Type`](crate::Error::Type)
//! and indicate a programming error, not a transient condition.

use crate::{Error, Result, Value};

/// Check that at least `required` positional arguments were supplied
pub fn arity(operation: &'static str, args: &[Value], required: usize) -> Result<()> {
    if args.len() < required {
        return Err(Error::arity(operation, required, args.len()));
    }
    Ok(())
}

/// Check that a required argument is a string and extract it
pub fn string(operation: &'static str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(Error::type_mismatch(operation, "string", other.type_name())),
    }
}

/// Check that an optional argument, when present, is a string.
/// Absent arguments skip the check entirely.
pub fn optional_string(operation: &'static str, value: Option<&Value>) -> Result<Option<String>> {
    match value {
        None => Ok(None),
        Some(v) => string(operation, v).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_satisfied() {
        let args = vec![Value::from("accounts")];
        assert!(arity("create", &args, 1).is_ok());
    }

    #[test]
    fn test_arity_exact_boundary() {
        let args = vec![Value::from("accounts"), Value::from("uid")];
        assert!(arity("create", &args, 2).is_ok());
    }

    #[test]
    fn test_arity_too_few() {
        let err = arity("create", &[], 1).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Arity {
                required: 1,
                supplied: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_string_accepts_string() {
        let name = string("database", &Value::from("blog")).unwrap();
        assert_eq!(name, "blog");
    }

    #[test]
    fn test_string_rejects_number() {
        let err = string("database", &Value::from(42)).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Type {
                expected: "string",
                actual: "number",
                ..
            }
        ));
    }

    #[test]
    fn test_optional_string_skips_absent() {
        assert_eq!(optional_string("create", None).unwrap(), None);
    }

    #[test]
    fn test_optional_string_checks_present() {
        let ok = optional_string("create", Some(&Value::from("uid"))).unwrap();
        assert_eq!(ok, Some("uid".to_string()));

        let err = optional_string("create", Some(&Value::Bool(true))).unwrap_err();
        assert!(matches!(err, crate::Error::Type { actual: "bool", .. }));
    }
}
