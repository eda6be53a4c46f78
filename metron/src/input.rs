//! User input parsing

/// Parse user text into a finite number.
///
/// Returns `None` for anything that is not a number, and for NaN or
/// infinite values, so callers never build a quantity from them.
pub fn parse_value(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("12"), Some(12.0));
        assert_eq!(parse_value(" -3.25 "), Some(-3.25));
        assert_eq!(parse_value("1e3"), Some(1000.0));
    }

    #[test]
    fn test_parse_value_rejects() {
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("twelve"), None);
        assert_eq!(parse_value("NaN"), None);
        assert_eq!(parse_value("inf"), None);
        assert_eq!(parse_value("1e400"), None);
    }
}
