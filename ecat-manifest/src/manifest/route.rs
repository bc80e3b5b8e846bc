use serde::Deserialize;
use serde_json::{Map, Value};

/// Component value of a structural node that has no importable component.
pub const LAYOUT: &str = "Layout";

/// Redirect emitted when a route does not declare one.
pub const NO_REDIRECT: &str = "noRedirect";

/// One node of a module's route tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteNode {
    /// Import binding and suffix of the generated route name.
    pub name: String,

    /// Path segment. Top-level nested routes are mounted below the module path.
    pub path: String,

    /// Component file relative to the module directory, or [`LAYOUT`].
    pub component: String,

    #[serde(default)]
    pub redirect: Option<String>,

    #[serde(default)]
    pub hidden: Option<bool>,

    #[serde(default)]
    pub always_show: Option<bool>,

    /// Free-form attributes, emitted as-is in declaration order.
    #[serde(default)]
    pub meta: Option<Map<String, Value>>,

    #[serde(default)]
    pub children: Vec<RouteNode>,

    /// Flat variant only: marks the module's entry route.
    #[serde(default)]
    pub entry: Option<bool>,
}

impl RouteNode {
    /// Whether this node is a structural layout node.
    pub fn is_layout(&self) -> bool {
        self.component == LAYOUT
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Declared redirect; an absent or empty value falls back to [`NO_REDIRECT`].
    pub fn redirect_or_default(&self) -> &str {
        match self.redirect.as_deref() {
            Some(r) if !r.is_empty() => r,
            _ => NO_REDIRECT,
        }
    }

    pub fn hidden_or_default(&self) -> bool {
        self.hidden.unwrap_or(false)
    }

    pub fn entry_or_default(&self) -> bool {
        self.entry.unwrap_or(false)
    }

    /// Iterate over this node and its descendants in pre-order.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }
}

/// Pre-order iterator over a route subtree.
pub struct Walk<'a> {
    stack: Vec<&'a RouteNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a RouteNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(json: &str) -> RouteNode {
        serde_json::from_str(json).expect("valid route")
    }

    #[test]
    fn test_defaults() {
        let r = route(r#"{ "name": "List", "path": "list", "component": "list/Index" }"#);

        assert!(!r.is_layout());
        assert!(!r.has_children());
        assert!(!r.hidden_or_default());
        assert!(!r.entry_or_default());
        assert_eq!(r.redirect_or_default(), NO_REDIRECT);
        assert!(r.always_show.is_none());
        assert!(r.meta.is_none());
    }

    #[test]
    fn test_empty_redirect_falls_back() {
        let r = route(r#"{ "name": "A", "path": "a", "component": "a", "redirect": "" }"#);
        assert_eq!(r.redirect_or_default(), NO_REDIRECT);
    }

    #[test]
    fn test_declared_fields() {
        let r = route(
            r#"{
                "name": "A",
                "path": "a",
                "component": "Layout",
                "redirect": "/a/b",
                "hidden": true,
                "alwaysShow": false,
                "meta": { "title": "A", "icon": "user" }
            }"#,
        );

        assert!(r.is_layout());
        assert!(r.hidden_or_default());
        assert_eq!(r.redirect_or_default(), "/a/b");
        assert_eq!(r.always_show, Some(false));

        let keys: Vec<&String> = r.meta.as_ref().unwrap().keys().collect();
        assert_eq!(keys, ["title", "icon"]);
    }

    #[test]
    fn test_walk_visits_parent_before_children() {
        let r = route(
            r#"{
                "name": "A", "path": "a", "component": "Layout",
                "children": [
                    { "name": "B", "path": "b", "component": "Layout", "children": [
                        { "name": "C", "path": "c", "component": "c" }
                    ]},
                    { "name": "D", "path": "d", "component": "d" }
                ]
            }"#,
        );

        let names: Vec<&str> = r.walk().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C", "D"]);
    }
}
