//! JSON output formatting.

/// Format a value as compact JSON.
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use venuecal_core::calendar::DisplayMonth;

    #[test]
    fn test_format_json_uses_month_shape() {
        let month = DisplayMonth::new(2025, 5).unwrap();
        assert_eq!(
            format_json(&month),
            r#"{"year":2025,"month":5,"name":"June"}"#
        );
    }
}
