//! Block-style dumping of nested values

use serde_json::Value;

use super::inline;

/// Levels written in block style before switching to flow style.
pub const DEFAULT_INLINE_LEVEL: usize = 2;

/// Spaces per nesting level in block style.
pub const DEFAULT_INDENTATION: usize = 4;

/// Dump `value` with the default inline level and indentation.
///
/// # Examples
///
/// ```
/// use serde_json::json;
///
/// let yaml = phplist4_modules::yaml::dump(&json!({ "phplist/foo": ["FooBundle"] }));
/// assert_eq!(yaml, "phplist/foo:\n    - FooBundle\n");
///
/// assert_eq!(phplist4_modules::yaml::dump(&json!({})), "{  }");
/// ```
pub fn dump(value: &Value) -> String {
    Dumper::default().dump(value, DEFAULT_INLINE_LEVEL, 0)
}

/// Block-style YAML dumper.
#[derive(Debug, Clone, Copy)]
pub struct Dumper {
    indentation: usize,
}

impl Default for Dumper {
    fn default() -> Self {
        Self::new(DEFAULT_INDENTATION)
    }
}

impl Dumper {
    /// Create a dumper indenting nested blocks by `indentation` spaces.
    pub fn new(indentation: usize) -> Self {
        Self { indentation }
    }

    /// Dump `input` in block style for `inline` levels, then in flow style.
    ///
    /// `indent` is the number of spaces prefixed to every block line. A value
    /// that ends up in flow style at the top level gets no trailing newline.
    pub fn dump(&self, input: &Value, inline: usize, indent: usize) -> String {
        let prefix = " ".repeat(indent);

        let entries: Vec<(Option<&str>, &Value)> = match input {
            Value::Object(map) if inline > 0 && !map.is_empty() => map
                .iter()
                .map(|(key, value)| (Some(key.as_str()), value))
                .collect(),
            Value::Array(items) if inline > 0 && !items.is_empty() => {
                items.iter().map(|value| (None, value)).collect()
            }
            _ => return format!("{prefix}{}", inline::dump(input)),
        };

        let mut output = String::new();
        for (key, value) in entries {
            let will_be_inlined = inline == 1 || is_scalar_or_empty(value);

            output.push_str(&prefix);
            match key {
                Some(key) => {
                    output.push_str(&inline::dump_str(key));
                    output.push(':');
                }
                None => output.push('-'),
            }

            if will_be_inlined {
                output.push(' ');
                output.push_str(&self.dump(value, inline - 1, 0));
                output.push('\n');
            } else {
                output.push('\n');
                output.push_str(&self.dump(value, inline - 1, indent + self.indentation));
            }
        }
        output
    }
}

fn is_scalar_or_empty(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => true,
    }
}
