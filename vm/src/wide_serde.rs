//! Serde helpers for `i128` values, which many formats (JSON among them) cannot carry
//! natively beyond the 64-bit range.

use serde::Serializer;

/// Serializes as a number when the value fits in an `i64`, and as a decimal string otherwise.
pub fn serialize<S>(value: &i128, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match i64::try_from(*value) {
        Ok(narrow) => s.serialize_i64(narrow),
        Err(_) => s.collect_str(value),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    #[derive(Serialize)]
    struct Wrapper(#[serde(with = "super")] i128);

    #[test]
    fn test_narrow_values_are_numbers() {
        assert_eq!(serde_json::to_string(&Wrapper(-45)).unwrap(), "-45");
    }

    #[test]
    fn test_wide_values_are_strings() {
        let wide = (i64::MIN as i128) * (i64::MIN as i128);
        assert_eq!(
            serde_json::to_string(&Wrapper(wide)).unwrap(),
            format!("\"{wide}\"")
        );
    }
}
