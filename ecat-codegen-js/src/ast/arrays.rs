//! JavaScript array literal builder.

use ecat_codegen::builder::Indent;

use super::objects::JsObject;

/// An array literal of objects, one element per line.
#[derive(Debug, Clone)]
pub struct JsArray {
    objects: Vec<JsObject>,
}

impl JsArray {
    pub fn from_objects(objects: impl IntoIterator<Item = JsObject>) -> Self {
        Self {
            objects: objects.into_iter().collect(),
        }
    }

    /// Render to lines, indented relative to the opening bracket.
    pub fn to_lines(&self) -> Vec<String> {
        if self.objects.is_empty() {
            return vec!["[]".to_string()];
        }

        let indent = Indent::JAVASCRIPT.as_str();
        let mut lines = vec!["[".to_string()];

        for (i, object) in self.objects.iter().enumerate() {
            lines.extend(
                object
                    .to_lines()
                    .into_iter()
                    .map(|line| format!("{}{}", indent, line)),
            );
            if i + 1 < self.objects.len()
                && let Some(last) = lines.last_mut()
            {
                last.push(',');
            }
        }

        lines.push("]".to_string());
        lines
    }

    /// Build the array literal as a string.
    pub fn build(&self) -> String {
        self.to_lines().join("\n")
    }
}
