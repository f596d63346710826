// Fri Jan 16 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a frame's file, line and column are laid out:
/// - `Label`: `line: 3 column: 1 file: index.ts`
/// - `Coords`: `file: index.ts:3:1`
/// - `Full`: `line: 3 column: 1 file: index.ts:3:1`
///
/// Any other name is kept as `Unrecognized` and renders no frames.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum LocationStyle {
    #[default]
    Label,
    Coords,
    Full,
    Unrecognized(String),
}

impl LocationStyle {
    pub fn parse(name: &str) -> Self {
        match name {
            "label" => LocationStyle::Label,
            "coords" => LocationStyle::Coords,
            "full" => LocationStyle::Full,
            other => LocationStyle::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LocationStyle::Label => "label",
            LocationStyle::Coords => "coords",
            LocationStyle::Full => "full",
            LocationStyle::Unrecognized(name) => name,
        }
    }
}

impl From<String> for LocationStyle {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl From<&str> for LocationStyle {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl fmt::Display for LocationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StackFrame {
    pub line: Option<u32>,
    pub column: Option<u32>,
    pub file: Option<String>,
    pub native: bool,
    pub constructor: bool,
    pub eval_origin: Option<String>,
    pub eval_line: Option<u32>,
    pub eval_column: Option<u32>,
    pub eval_file: Option<String>,
    pub function: Option<String>,
    pub method: Option<String>,
}

impl StackFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(file: &str, line: u32, column: u32) -> Self {
        Self {
            file: Some(file.to_string()),
            line: Some(line),
            column: Some(column),
            ..Self::default()
        }
    }

    pub fn with_function(mut self, function: &str) -> Self {
        self.function = Some(function.to_string());
        self
    }

    pub fn with_method(mut self, method: &str) -> Self {
        self.method = Some(method.to_string());
        self
    }

    /// `file:line:column`, leaving out whatever is missing.
    pub fn location(&self) -> Option<String> {
        let file = self.file.as_ref()?;
        let mut location = file.clone();
        if let Some(line) = self.line {
            location.push_str(&format!(":{}", line));
        }
        if let Some(column) = self.column {
            location.push_str(&format!(":{}", column));
        }
        Some(location)
    }

    /// Parser-supplied fields other than line, column and file, in display order.
    pub fn extra_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();

        if self.constructor {
            fields.push(("constructor", "true".to_string()));
        }
        if let Some(ref origin) = self.eval_origin {
            fields.push(("evalOrigin", origin.clone()));
        }
        if let Some(line) = self.eval_line {
            fields.push(("evalLine", line.to_string()));
        }
        if let Some(column) = self.eval_column {
            fields.push(("evalColumn", column.to_string()));
        }
        if let Some(ref file) = self.eval_file {
            fields.push(("evalFile", file.clone()));
        }
        if self.native {
            fields.push(("native", "true".to_string()));
        }
        if let Some(ref function) = self.function {
            fields.push(("function", function.clone()));
        }
        if let Some(ref method) = self.method {
            fields.push(("method", method.clone()));
        }

        fields
    }

    pub fn layout(&self, style: &LocationStyle) -> Option<Vec<(&'static str, String)>> {
        let mut fields = Vec::new();

        match style {
            LocationStyle::Label => {
                self.push_coordinates(&mut fields);
                if let Some(ref file) = self.file {
                    fields.push(("file", file.clone()));
                }
            }
            LocationStyle::Coords => {
                if let Some(location) = self.location() {
                    fields.push(("file", location));
                }
            }
            LocationStyle::Full => {
                self.push_coordinates(&mut fields);
                if let Some(location) = self.location() {
                    fields.push(("file", location));
                }
            }
            LocationStyle::Unrecognized(_) => return None,
        }

        fields.extend(self.extra_fields());
        Some(fields)
    }

    /// Unstyled `key: value` rendering of [`StackFrame::layout`].
    pub fn describe(&self, style: &LocationStyle) -> Option<String> {
        let fields = self.layout(style)?;
        Some(
            fields
                .iter()
                .map(|(key, value)| format!("{}: {}", key, value))
                .collect::<Vec<_>>()
                .join(" "),
        )
    }

    fn push_coordinates(&self, fields: &mut Vec<(&'static str, String)>) {
        if let Some(line) = self.line {
            fields.push(("line", line.to_string()));
        }
        if let Some(column) = self.column {
            fields.push(("column", column.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_layout() {
        let frame = StackFrame::at("index.ts", 3, 1);
        assert_eq!(
            frame.describe(&LocationStyle::Label).unwrap(),
            "line: 3 column: 1 file: index.ts"
        );
    }

    #[test]
    fn test_coords_layout() {
        let frame = StackFrame::at("index.ts", 3, 1);
        let line = frame.describe(&LocationStyle::Coords).unwrap();
        assert_eq!(line, "file: index.ts:3:1");
        assert!(!line.contains("line:"));
        assert!(!line.contains("column:"));
    }

    #[test]
    fn test_full_layout() {
        let frame = StackFrame::at("index.ts", 3, 1);
        assert_eq!(
            frame.describe(&LocationStyle::Full).unwrap(),
            "line: 3 column: 1 file: index.ts:3:1"
        );
    }

    #[test]
    fn test_extra_fields_follow_location() {
        let frame = StackFrame::at("src/app.rs", 10, 4)
            .with_function("app::run")
            .with_method("start");
        assert_eq!(
            frame.describe(&LocationStyle::Coords).unwrap(),
            "file: src/app.rs:10:4 function: app::run method: start"
        );
    }

    #[test]
    fn test_extra_fields_order() {
        let frame = StackFrame {
            native: true,
            constructor: true,
            eval_origin: Some("build".to_string()),
            eval_line: Some(4),
            eval_column: Some(10),
            eval_file: Some("builder.js".to_string()),
            function: Some("Widget".to_string()),
            method: Some("make".to_string()),
            ..StackFrame::default()
        };
        let keys: Vec<_> = frame.extra_fields().into_iter().map(|(key, _)| key).collect();

        assert_eq!(
            keys,
            vec![
                "constructor", "evalOrigin", "evalLine", "evalColumn", "evalFile", "native",
                "function", "method",
            ]
        );
    }

    #[test]
    fn test_absent_fields_omitted() {
        let frame = StackFrame {
            native: true,
            function: Some("helper".to_string()),
            ..StackFrame::default()
        };
        for style in [LocationStyle::Label, LocationStyle::Coords, LocationStyle::Full] {
            assert_eq!(frame.describe(&style).unwrap(), "native: true function: helper");
        }
    }

    #[test]
    fn test_unrecognized_style_renders_nothing() {
        let frame = StackFrame::at("index.ts", 3, 1);
        assert!(frame.layout(&LocationStyle::parse("fancy")).is_none());
    }

    #[test]
    fn test_style_parsing() {
        assert_eq!(LocationStyle::from("coords"), LocationStyle::Coords);
        assert_eq!(LocationStyle::default(), LocationStyle::Label);
        let style: LocationStyle = serde_json::from_str("\"other\"").unwrap();
        assert_eq!(style, LocationStyle::Unrecognized("other".to_string()));
        assert_eq!(style.to_string(), "other");
    }
}
