// Fri Jan 16 2026 - Alex

use crate::utils::string::StringUtils;
use serde_json::{Map, Value};

/// JSON5-flavoured pretty printer for message payloads.
pub struct StructuredFormatter {
    indent_size: usize,
}

impl StructuredFormatter {
    pub fn new() -> Self {
        Self { indent_size: 2 }
    }

    pub fn with_indent_size(mut self, size: usize) -> Self {
        self.indent_size = size;
        self
    }

    pub fn format(&self, value: &Value) -> String {
        let mut out = String::new();
        self.write_value(&mut out, value, 0);
        out
    }

    fn write_value(&self, out: &mut String, value: &Value, depth: usize) {
        match value {
            Value::Null => out.push_str("null"),
            Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => out.push_str(&n.to_string()),
            Value::String(s) => out.push_str(&quote_string(s)),
            Value::Array(items) => self.write_array(out, items, depth),
            Value::Object(map) => self.write_object(out, map, depth),
        }
    }

    fn write_array(&self, out: &mut String, items: &[Value], depth: usize) {
        if items.is_empty() {
            out.push_str("[]");
            return;
        }

        out.push_str("[\n");
        for item in items {
            out.push_str(&self.pad(depth + 1));
            self.write_value(out, item, depth + 1);
            out.push_str(",\n");
        }
        out.push_str(&self.pad(depth));
        out.push(']');
    }

    fn write_object(&self, out: &mut String, map: &Map<String, Value>, depth: usize) {
        if map.is_empty() {
            out.push_str("{}");
            return;
        }

        out.push_str("{\n");
        for (key, item) in map {
            out.push_str(&self.pad(depth + 1));
            out.push_str(&format_key(key));
            out.push_str(": ");
            self.write_value(out, item, depth + 1);
            out.push_str(",\n");
        }
        out.push_str(&self.pad(depth));
        out.push('}');
    }

    fn pad(&self, depth: usize) -> String {
        " ".repeat(depth * self.indent_size)
    }
}

impl Default for StructuredFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn format_key(key: &str) -> String {
    if StringUtils::is_valid_identifier(key) {
        key.to_string()
    } else {
        quote_string(key)
    }
}

/// Single quotes unless the text holds more single quotes than double quotes.
fn quote_string(s: &str) -> String {
    let singles = StringUtils::count_occurrences(s, '\'');
    let doubles = StringUtils::count_occurrences(s, '"');
    let quote = if doubles < singles { '"' } else { '\'' };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);

    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{b}' => out.push_str("\\v"),
            '\0' => {
                if chars.peek().map_or(false, |next| next.is_ascii_digit()) {
                    out.push_str("\\x00");
                } else {
                    out.push_str("\\0");
                }
            }
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }

    out.push(quote);
    out
}

pub fn format_structured(value: &Value) -> String {
    StructuredFormatter::new().format(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_object() {
        assert_eq!(format_structured(&json!({"a": 1})), "{\n  a: 1,\n}");
    }

    #[test]
    fn test_nested_indentation() {
        let value = json!({"user": {"id": 7, "tags": ["x", "y"]}, "ok": true});
        let expected = "{\n  user: {\n    id: 7,\n    tags: [\n      'x',\n      'y',\n    ],\n  },\n  ok: true,\n}";
        assert_eq!(format_structured(&value), expected);
    }

    #[test]
    fn test_keys_quoted_when_needed() {
        let out = format_structured(&json!({"content-type": "json", "2fa": null, "$ok": []}));
        assert!(out.contains("'content-type': 'json',"));
        assert!(out.contains("'2fa': null,"));
        assert!(out.contains("$ok: [],"));
    }

    #[test]
    fn test_scalars_and_empty_containers() {
        assert_eq!(format_structured(&json!(null)), "null");
        assert_eq!(format_structured(&json!(false)), "false");
        assert_eq!(format_structured(&json!(3.5)), "3.5");
        assert_eq!(format_structured(&json!({})), "{}");
        assert_eq!(format_structured(&json!([])), "[]");
    }

    #[test]
    fn test_quote_selection_and_escapes() {
        assert_eq!(quote_string("it's"), "\"it's\"");
        assert_eq!(quote_string("say \"hi\""), "'say \"hi\"'");
        assert_eq!(quote_string("a'b\"c"), "'a\\'b\"c'");
        assert_eq!(quote_string("line\nbreak\ttab"), "'line\\nbreak\\ttab'");
        assert_eq!(quote_string("\u{1}"), "'\\x01'");
    }

    #[test]
    fn test_output_is_deterministic() {
        let value = json!({"b": [1, {"c": "d"}], "a": "z"});
        assert_eq!(format_structured(&value), format_structured(&value));
        // insertion order is kept
        assert!(format_structured(&value).starts_with("{\n  b: ["));
    }

    #[test]
    fn test_custom_indent_size() {
        let out = StructuredFormatter::new().with_indent_size(4).format(&json!([1]));
        assert_eq!(out, "[\n    1,\n]");
    }
}
