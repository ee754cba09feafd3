//! Field validation — accept-or-reject kind checks.
//!
//! These checks never coerce: a value either matches the declared kind and
//! passes through unchanged, or the call fails with
//! [`ProfileError::InvalidField`] naming the field and expected kind. An
//! absent optional value is "not set" — downstream code must omit the field
//! entirely rather than emit an explicit null.

use crate::{FieldKind, FieldValue, ProfileError, ProfileResult};

/// Check a required field: absent or mismatched kind is an error.
pub fn required(
    value: Option<FieldValue>,
    field: &str,
    expected: FieldKind,
) -> ProfileResult<FieldValue> {
    match value {
        Some(v) if v.kind() == expected => Ok(v),
        _ => Err(ProfileError::invalid_field(field, expected)),
    }
}

/// Check an optional field: absent passes as `None`, mismatched kind is an
/// error.
pub fn optional(
    value: Option<FieldValue>,
    field: &str,
    expected: FieldKind,
) -> ProfileResult<Option<FieldValue>> {
    match value {
        None => Ok(None),
        Some(v) if v.kind() == expected => Ok(Some(v)),
        Some(_) => Err(ProfileError::invalid_field(field, expected)),
    }
}

/// Check a required text field, unwrapping to `String`.
pub fn required_text(value: Option<FieldValue>, field: &str) -> ProfileResult<String> {
    match required(value, field, FieldKind::Text)? {
        FieldValue::Text(s) => Ok(s),
        _ => unreachable!("required() returned a non-text value for a text check"),
    }
}

/// Check an optional text field, unwrapping to `Option<String>`.
pub fn optional_text(value: Option<FieldValue>, field: &str) -> ProfileResult<Option<String>> {
    match optional(value, field, FieldKind::Text)? {
        Some(FieldValue::Text(s)) => Ok(Some(s)),
        None => Ok(None),
        _ => unreachable!("optional() returned a non-text value for a text check"),
    }
}

/// Check an optional boolean field, unwrapping to `Option<bool>`.
pub fn optional_bool(value: Option<FieldValue>, field: &str) -> ProfileResult<Option<bool>> {
    match optional(value, field, FieldKind::Boolean)? {
        Some(FieldValue::Boolean(b)) => Ok(Some(b)),
        None => Ok(None),
        _ => unreachable!("optional() returned a non-boolean value for a boolean check"),
    }
}
