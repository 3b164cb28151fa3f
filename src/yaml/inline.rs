//! Flow-style dumping of scalars and collections

use serde_json::{Number, Value};

use super::escaper;

/// Flow-style token for an empty collection.
pub const EMPTY_COLLECTION: &str = "{  }";

const RESERVED_WORDS: [&str; 10] = [
    "null", "~", "true", "false", "y", "n", "yes", "no", "on", "off",
];

/// Dump a value on a single line.
pub fn dump(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => dump_number(number),
        Value::String(string) => dump_str(string),
        Value::Array(items) if items.is_empty() => EMPTY_COLLECTION.to_string(),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(dump).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(key, value)| format!("{}: {}", dump_str(key), dump(value)))
                .collect();
            format!("{{ {} }}", entries.join(", "))
        }
    }
}

/// Dump a string, quoting it only when a plain scalar would read back as
/// something else.
pub fn dump_str(value: &str) -> String {
    if value.is_empty() {
        return "''".to_string();
    }
    if escaper::requires_double_quoting(value) {
        return escaper::escape_with_double_quotes(value);
    }
    if is_numeric(value)
        || escaper::requires_single_quoting(value)
        || is_digits_with_underscores(value)
        || is_hex(value)
        || is_date(value)
    {
        return escaper::escape_with_single_quotes(value);
    }
    value.to_string()
}

/// Whether `value` is one of the words YAML parsers read as null or boolean.
pub(crate) fn is_reserved_word(value: &str) -> bool {
    let lowered = value.to_ascii_lowercase();
    RESERVED_WORDS.contains(&lowered.as_str())
}

fn dump_number(number: &Number) -> String {
    // serde_json renders whole floats with a trailing ".0", which keeps them
    // floats when read back.
    number.to_string()
}

/// Decimal integer or float literal with optional sign and exponent.
fn is_numeric(value: &str) -> bool {
    let bytes = value.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        frac_digits = count_digits(&bytes[pos..]);
        pos += frac_digits;
    }
    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_digits = count_digits(&bytes[pos..]);
        if exp_digits == 0 {
            return false;
        }
        pos += exp_digits;
    }

    pos == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

fn is_digits_with_underscores(value: &str) -> bool {
    value.starts_with(|c: char| c.is_ascii_digit())
        && value.chars().all(|c| c.is_ascii_digit() || c == '_')
}

fn is_hex(value: &str) -> bool {
    let Some(digits) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) else {
        return false;
    };
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_hexdigit() || c == '_')
}

/// `YYYY-M-D` dates, optionally followed by `T` and an `h:mm:ss` time.
fn is_date(value: &str) -> bool {
    let mut parts = value.splitn(3, '-');
    let (Some(year), Some(month), Some(rest)) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    let day_len = count_digits(rest.as_bytes());
    let after_day = &rest[day_len..];

    year.len() == 4
        && count_digits(year.as_bytes()) == 4
        && (1..=2).contains(&month.len())
        && count_digits(month.as_bytes()) == month.len()
        && (1..=2).contains(&day_len)
        && (after_day.is_empty()
            || after_day
                .strip_prefix(['T', 't'])
                .is_some_and(is_time))
}

/// `h:mm:ss[.fraction]`, optionally followed by `Z` or a `+h[:mm]` offset.
fn is_time(value: &str) -> bool {
    let bytes = value.as_bytes();

    let hour = count_digits(bytes);
    if !(1..=2).contains(&hour) {
        return false;
    }
    let mut pos = hour;
    for _ in 0..2 {
        if bytes.get(pos) != Some(&b':') || count_digits(&bytes[pos + 1..]) != 2 {
            return false;
        }
        pos += 3;
    }
    if bytes.get(pos) == Some(&b'.') {
        pos += 1 + count_digits(&bytes[pos + 1..]);
    }

    is_time_zone(value[pos..].trim_start_matches([' ', '\t']))
}

fn is_time_zone(value: &str) -> bool {
    if value.is_empty() || value == "Z" {
        return true;
    }
    let Some(offset) = value.strip_prefix(['+', '-']) else {
        return false;
    };
    let bytes = offset.as_bytes();
    let hour = count_digits(bytes);
    if !(1..=2).contains(&hour) {
        return false;
    }
    match &bytes[hour..] {
        [] => true,
        [b':', minute @ ..] => minute.len() == 2 && count_digits(minute) == 2,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_scalars() {
        assert_eq!(dump(&json!(null)), "null");
        assert_eq!(dump(&json!(true)), "true");
        assert_eq!(dump(&json!(false)), "false");
        assert_eq!(dump(&json!(42)), "42");
        assert_eq!(dump(&json!(-7)), "-7");
        assert_eq!(dump(&json!(3.14159)), "3.14159");
        assert_eq!(dump(&json!(2.0)), "2.0");
    }

    #[test]
    fn test_collections() {
        assert_eq!(dump(&json!([])), EMPTY_COLLECTION);
        assert_eq!(dump(&json!({})), EMPTY_COLLECTION);
        assert_eq!(dump(&json!(["a", 1, null])), "[a, 1, null]");
        assert_eq!(
            dump(&json!({ "path": "/blog", "methods": ["GET", "POST"] })),
            "{ path: /blog, methods: [GET, POST] }"
        );
    }

    #[test]
    fn test_plain_strings_stay_unquoted() {
        for plain in [
            "foo",
            "/",
            "/blog",
            "phplist/foo.homepage",
            "Symfony\\Bundle\\FrameworkBundle\\FrameworkBundle",
            "_controller",
            "a-b",
        ] {
            assert_eq!(dump_str(plain), plain, "{plain:?} should stay plain");
        }
    }

    #[test]
    fn test_strings_needing_single_quotes() {
        let cases = [
            ("", "''"),
            ("PhpListEmptyStartPageBundle:Default:index", "'PhpListEmptyStartPageBundle:Default:index'"),
            ("two words", "'two words'"),
            ("it's", "'it''s'"),
            ("/blog/{slug}", "'/blog/{slug}'"),
            ("a,b", "'a,b'"),
            ("#comment", "'#comment'"),
            ("-leading", "'-leading'"),
            ("@service", "'@service'"),
            ("%parameter%", "'%parameter%'"),
            ("null", "'null'"),
            ("True", "'True'"),
            ("off", "'off'"),
            ("~", "'~'"),
            ("42", "'42'"),
            ("-1.5", "'-1.5'"),
            (".5", "'.5'"),
            ("1e10", "'1e10'"),
            ("1_000", "'1_000'"),
            ("0x1F", "'0x1F'"),
            ("2017-05-01", "'2017-05-01'"),
            ("2017-05-01T10:20:30", "'2017-05-01T10:20:30'"),
        ];

        for (input, expected) in cases {
            assert_eq!(dump_str(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_not_quite_numbers_stay_plain() {
        assert_eq!(dump_str("1.2.3"), "1.2.3");
        assert_eq!(dump_str("v1"), "v1");
        assert_eq!(dump_str("0xZZ"), "0xZZ");
        assert_eq!(dump_str("2017-05"), "2017-05");
        assert_eq!(dump_str("2017-05-01Tfoo"), "2017-05-01Tfoo");
    }

    #[test]
    fn test_control_characters_use_double_quotes() {
        assert_eq!(dump_str("line\nbreak"), "\"line\\nbreak\"");
        assert_eq!(dump_str("tab\there"), "\"tab\\there\"");
        assert_eq!(dump_str("a\u{7f}b"), "\"a\\x7fb\"");
    }

    #[test]
    fn test_unicode_spaces_stay_plain() {
        assert_eq!(dump_str("a\u{2003}b"), "a\u{2003}b");
    }

    #[test]
    fn test_timestamps() {
        assert!(is_date("2017-05-01t1:02:03"));
        assert!(is_date("2017-05-01T10:20:30.5Z"));
        assert!(is_date("2017-05-01T10:20:30+02:00"));
        assert!(is_date("2017-05-01T10:20:30 -5"));
        assert!(!is_date("2017-05-01T10:20:30+"));
        assert!(!is_date("2017-05-01T10:20:30foo"));
        assert!(!is_date("2017-05-01T"));
    }

    #[test]
    fn test_reserved_words_are_case_insensitive() {
        assert!(is_reserved_word("YES"));
        assert!(is_reserved_word("Null"));
        assert!(!is_reserved_word("nullable"));
    }
}
