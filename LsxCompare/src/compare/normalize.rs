//! Value normalization for attribute comparison

use std::borrow::Cow;

use crate::formats::common::{is_float_class, resolve_type_tag};

/// Produce the form of an attribute value that is compared.
///
/// Float, float vector and 4x4 matrix values are split on whitespace and
/// every component is re-rendered with `precision` decimals, so writers that
/// print more or fewer digits compare equal. If any component fails to
/// parse, the raw value is returned and compared as written. All other
/// types are returned unchanged.
///
/// Underscores grouping digits (`1_000.5`) are accepted; any other
/// underscore makes the component unparsable.
pub fn normalize_value<'a>(value: &'a str, type_tag: &str, precision: usize) -> Cow<'a, str> {
    if !is_float_class(resolve_type_tag(type_tag)) {
        return Cow::Borrowed(value);
    }

    let components: Result<Vec<String>, _> = value
        .split_whitespace()
        .map(|part| {
            strip_digit_separators(part)
                .parse::<f64>()
                .map(|v| format!("{v:.precision$}"))
        })
        .collect();

    match components {
        Ok(parts) => Cow::Owned(parts.join(" ")),
        Err(_) => Cow::Borrowed(value),
    }
}

/// Remove `_` separators, each of which must sit between two ASCII digits
fn strip_digit_separators(part: &str) -> Cow<'_, str> {
    if !part.contains('_') {
        return Cow::Borrowed(part);
    }
    let bytes = part.as_bytes();
    let grouped = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    if grouped {
        Cow::Owned(part.replace('_', ""))
    } else {
        Cow::Borrowed(part)
    }
}
