//! JavaScript object literal builder.

use ecat_codegen::builder::Indent;
use serde_json::Value;

use super::arrays::JsArray;

/// How property keys are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyStyle {
    /// `path: "..."`
    #[default]
    Bare,
    /// `"path": "..."`
    Quoted,
}

/// A property in a JavaScript object literal.
#[derive(Debug, Clone)]
pub struct Property {
    pub key: String,
    pub value: PropertyValue,
}

/// The value of an object property.
#[derive(Debug, Clone)]
pub enum PropertyValue {
    /// A string literal (escaped and quoted).
    String(String),
    /// A raw expression (will not be quoted).
    Raw(String),
    /// Structured data, pretty-printed as JSON.
    Json(Value),
    Array(JsArray),
}

impl PropertyValue {
    /// Lines of this value, indented relative to its first line.
    fn to_lines(&self) -> Vec<String> {
        match self {
            PropertyValue::String(s) => vec![string_literal(s)],
            PropertyValue::Raw(s) => vec![s.clone()],
            PropertyValue::Json(value) => format!("{:#}", value).lines().map(String::from).collect(),
            PropertyValue::Array(arr) => arr.to_lines(),
        }
    }
}

/// Quote and escape a string as a JavaScript string literal.
pub fn string_literal(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}

/// Builder for JavaScript object literals.
///
/// Renders one property per line without a trailing comma after the last
/// property; an object without properties renders as `{}`.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    properties: Vec<Property>,
    key_style: KeyStyle,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// An object whose keys are written as string literals.
    pub fn quoted() -> Self {
        Self {
            properties: Vec::new(),
            key_style: KeyStyle::Quoted,
        }
    }

    fn push(mut self, key: impl Into<String>, value: PropertyValue) -> Self {
        self.properties.push(Property {
            key: key.into(),
            value,
        });
        self
    }

    /// Add a property with a string value (will be quoted).
    pub fn string(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, PropertyValue::String(value.into()))
    }

    /// Add a property with a raw expression value (will not be quoted).
    pub fn raw(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, PropertyValue::Raw(value.into()))
    }

    /// Add a property with a boolean value.
    pub fn bool(self, key: impl Into<String>, value: bool) -> Self {
        self.raw(key, value.to_string())
    }

    /// Conditionally add a boolean property using an Option.
    pub fn bool_opt(self, key: impl Into<String>, value: Option<bool>) -> Self {
        match value {
            Some(v) => self.bool(key, v),
            None => self,
        }
    }

    /// Add a property holding structured JSON data.
    pub fn json(self, key: impl Into<String>, value: Value) -> Self {
        self.push(key, PropertyValue::Json(value))
    }

    pub fn array(self, key: impl Into<String>, value: JsArray) -> Self {
        self.push(key, PropertyValue::Array(value))
    }

    /// Conditionally add an array property.
    pub fn array_if(self, condition: bool, key: impl Into<String>, value: JsArray) -> Self {
        if condition {
            self.array(key, value)
        } else {
            self
        }
    }

    fn key(&self, key: &str) -> String {
        match self.key_style {
            KeyStyle::Bare => key.to_string(),
            KeyStyle::Quoted => string_literal(key),
        }
    }

    /// Render to lines, indented relative to the opening brace.
    pub fn to_lines(&self) -> Vec<String> {
        if self.properties.is_empty() {
            return vec!["{}".to_string()];
        }

        let indent = Indent::JAVASCRIPT.as_str();
        let mut lines = vec!["{".to_string()];

        for (i, prop) in self.properties.iter().enumerate() {
            let mut value_lines = prop.value.to_lines().into_iter();
            let first = value_lines.next().unwrap_or_default();

            lines.push(format!("{}{}: {}", indent, self.key(&prop.key), first));
            lines.extend(value_lines.map(|line| format!("{}{}", indent, line)));

            if i + 1 < self.properties.len()
                && let Some(last) = lines.last_mut()
            {
                last.push(',');
            }
        }

        lines.push("}".to_string());
        lines
    }

    /// Build the object as a string.
    pub fn build(&self) -> String {
        self.to_lines().join("\n")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_empty_object() {
        assert_eq!(JsObject::new().build(), "{}");
        assert_eq!(JsObject::quoted().build(), "{}");
    }

    #[test]
    fn test_bare_keys() {
        let obj = JsObject::new()
            .string("path", "/system/demo/list")
            .raw("component", "List")
            .bool("entry", false)
            .build();

        assert_eq!(
            obj,
            "{\n  path: \"/system/demo/list\",\n  component: List,\n  entry: false\n}"
        );
    }

    #[test]
    fn test_quoted_keys() {
        let obj = JsObject::quoted().string("name", "sys_List").build();
        assert_eq!(obj, "{\n  \"name\": \"sys_List\"\n}");
    }

    #[test]
    fn test_strings_are_escaped() {
        let obj = JsObject::new().string("title", "say \"hi\"\n").build();
        assert!(obj.contains(r#"title: "say \"hi\"\n""#));
    }

    #[test]
    fn test_optional_bool() {
        let obj = JsObject::new()
            .bool_opt("alwaysShow", None)
            .bool_opt("hidden", Some(true))
            .build();

        assert_eq!(obj, "{\n  hidden: true\n}");
    }

    #[test]
    fn test_json_value_is_reindented() {
        let obj = JsObject::quoted()
            .json("meta", json!({ "title": "List", "roles": ["admin"] }))
            .raw("next", "1")
            .build();

        assert_eq!(
            obj,
            "{\n  \"meta\": {\n    \"title\": \"List\",\n    \"roles\": [\n      \"admin\"\n    ]\n  },\n  \"next\": 1\n}"
        );
    }

    #[test]
    fn test_empty_json_object() {
        let obj = JsObject::quoted().json("meta", json!({})).build();
        assert_eq!(obj, "{\n  \"meta\": {}\n}");
    }

    #[test]
    fn test_array_of_objects_is_reindented() {
        let children = JsArray::from_objects([JsObject::new().raw("a", "1")]);
        let obj = JsObject::new()
            .array_if(true, "children", children)
            .raw("b", "2")
            .build();

        assert_eq!(obj, "{\n  children: [\n    {\n      a: 1\n    }\n  ],\n  b: 2\n}");
    }

    #[test]
    fn test_array_if() {
        let obj = JsObject::new()
            .array_if(false, "children", JsArray::from_objects(Vec::<JsObject>::new()))
            .raw("a", "1")
            .build();

        assert_eq!(obj, "{\n  a: 1\n}");
    }
}
