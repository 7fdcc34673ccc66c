//! String utilities for the domain layer.

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but ensures truncation occurs at valid
/// UTF-8 character boundaries.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

/// Treat blank optional input as absent.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // Each Devanagari code point here is 3 bytes
        assert_eq!(truncate("दिल्ली", 30), "दिल्ली");
        assert_eq!(truncate("दिल्ली", 9), "दि...");
    }

    #[test]
    fn test_truncate_rupee_sign() {
        // '₹' is 3 bytes: max_len=5 -> target=2 -> back to 0
        assert_eq!(truncate("₹₹₹", 5), "...");
        assert_eq!(truncate("₹₹₹", 6), "₹...");
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("   ".to_string())), None);
        assert_eq!(non_blank(Some("heavy".to_string())), Some("heavy".to_string()));
    }
}
