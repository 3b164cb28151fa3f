//! Quoting rules for YAML strings

use super::inline::is_reserved_word;

/// Characters that cannot appear anywhere in a plain scalar.
const SINGLE_QUOTE_ANYWHERE: [char; 12] = ['\'', '"', ':', '{', '}', '[', ']', ',', '&', '*', '#', '?'];

/// Indicator characters that cannot start a plain scalar.
const SINGLE_QUOTE_LEADING: [char; 10] = ['-', '?', '|', '<', '>', '=', '!', '%', '@', '`'];

/// Whether the string contains characters only expressible in double quotes.
pub fn requires_double_quoting(value: &str) -> bool {
    value.chars().any(needs_escape)
}

/// Whether the string would be misread as plain scalar.
pub fn requires_single_quoting(value: &str) -> bool {
    is_reserved_word(value)
        || value
            .chars()
            .any(|c| c.is_ascii_whitespace() || SINGLE_QUOTE_ANYWHERE.contains(&c))
        || value.starts_with(SINGLE_QUOTE_LEADING)
}

pub fn escape_with_single_quotes(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

pub fn escape_with_double_quotes(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('"');
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\0' => escaped.push_str("\\0"),
            '\x07' => escaped.push_str("\\a"),
            '\x08' => escaped.push_str("\\b"),
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\x0b' => escaped.push_str("\\v"),
            '\x0c' => escaped.push_str("\\f"),
            '\r' => escaped.push_str("\\r"),
            '\x1b' => escaped.push_str("\\e"),
            '\u{85}' => escaped.push_str("\\N"),
            '\u{a0}' => escaped.push_str("\\_"),
            '\u{2028}' => escaped.push_str("\\L"),
            '\u{2029}' => escaped.push_str("\\P"),
            c if c < ' ' || c == '\u{7f}' => escaped.push_str(&format!("\\x{:02x}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped.push('"');
    escaped
}

fn needs_escape(c: char) -> bool {
    c < ' ' || matches!(c, '\u{7f}' | '\u{85}' | '\u{a0}' | '\u{2028}' | '\u{2029}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_quote_escapes() {
        assert_eq!(escape_with_double_quotes("a\"b\\c"), r#""a\"b\\c""#);
        assert_eq!(escape_with_double_quotes("\0\x01\x1b"), r#""\0\x01\e""#);
        assert_eq!(escape_with_double_quotes("nbsp\u{a0}"), r#""nbsp\_""#);
    }

    #[test]
    fn test_double_quoting_only_for_control_characters() {
        assert!(requires_double_quoting("a\nb"));
        assert!(requires_double_quoting("\u{2028}"));
        assert!(requires_double_quoting("a\u{7f}b"));
        assert!(!requires_double_quoting("plain text: with colon"));
    }

    #[test]
    fn test_single_quoting_triggers() {
        assert!(requires_single_quoting("a: b"));
        assert!(requires_single_quoting("!tag"));
        assert!(requires_single_quoting("yes"));
        assert!(!requires_single_quoting("foo-bar_baz/qux"));
        assert!(!requires_single_quoting("em\u{2003}space"));
    }

    #[test]
    fn test_single_quotes_are_doubled() {
        assert_eq!(escape_with_single_quotes("it's"), "'it''s'");
    }
}
