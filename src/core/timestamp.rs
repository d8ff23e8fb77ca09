//! Timestamp rendering for log entries
//!
//! Timestamps are rendered at emission time from the logger's configured
//! strftime pattern, using local time with no timezone offset unless the
//! pattern asks for one.

use chrono::Local;

/// Default timestamp pattern: `2024-01-02 15:04:05`
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render the current local time with the given strftime pattern
pub fn render(format: &str) -> String {
    Local::now().format(format).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format_shape() {
        let rendered = render(DEFAULT_TIME_FORMAT);
        // YYYY-MM-DD HH:MM:SS is always 19 characters
        assert_eq!(rendered.len(), 19);
        assert_eq!(rendered.as_bytes()[4], b'-');
        assert_eq!(rendered.as_bytes()[7], b'-');
        assert_eq!(rendered.as_bytes()[10], b' ');
        assert_eq!(rendered.as_bytes()[13], b':');
        assert_eq!(rendered.as_bytes()[16], b':');
    }

    #[test]
    fn test_custom_format() {
        let rendered = render("%Y");
        assert_eq!(rendered.len(), 4);
        assert!(rendered.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_format_with_timezone() {
        let rendered = render("%Y-%m-%d %H:%M:%S %z");
        assert!(rendered.len() > 19);
    }
}
