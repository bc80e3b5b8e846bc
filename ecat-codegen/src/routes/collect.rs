use ecat_manifest::RouteNode;

/// A component that needs a static import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRef {
    /// Import binding, taken from the route name.
    pub name: String,
    /// Component file, relative to the module directory.
    pub path: String,
}

impl ComponentRef {
    fn from_route(route: &RouteNode) -> Self {
        Self {
            name: route.name.clone(),
            path: route.component.clone(),
        }
    }
}

/// Collect the components of a route tree in pre-order.
///
/// Parents come before their children and siblings keep declaration order.
/// `Layout` nodes contribute nothing but their children are still visited.
/// Names are not de-duplicated; see [`duplicate_bindings`](super::duplicate_bindings).
pub fn collect_components(routes: &[RouteNode]) -> Vec<ComponentRef> {
    routes
        .iter()
        .flat_map(RouteNode::walk)
        .filter(|route| !route.is_layout())
        .map(ComponentRef::from_route)
        .collect()
}

/// Collect the components of the top-level routes only.
pub fn collect_top_level(routes: &[RouteNode]) -> Vec<ComponentRef> {
    routes
        .iter()
        .filter(|route| !route.is_layout())
        .map(ComponentRef::from_route)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routes(json: &str) -> Vec<RouteNode> {
        serde_json::from_str(json).expect("valid routes")
    }

    fn names(components: &[ComponentRef]) -> Vec<&str> {
        components.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_pre_order_and_layout_skipped() {
        let routes = routes(
            r#"[
                { "name": "A", "path": "a", "component": "Layout", "children": [
                    { "name": "B", "path": "b", "component": "b/Index" },
                    { "name": "C", "path": "c", "component": "Layout", "children": [
                        { "name": "D", "path": "d", "component": "d/Index" }
                    ]}
                ]},
                { "name": "E", "path": "e", "component": "e/Index" }
            ]"#,
        );

        let components = collect_components(&routes);

        assert_eq!(names(&components), ["B", "D", "E"]);
        assert_eq!(
            components[0],
            ComponentRef {
                name: "B".to_string(),
                path: "b/Index".to_string()
            }
        );
    }

    #[test]
    fn test_parent_component_before_children() {
        let routes = routes(
            r#"[
                { "name": "Parent", "path": "p", "component": "p/Index", "children": [
                    { "name": "Child", "path": "c", "component": "c/Index" }
                ]}
            ]"#,
        );

        assert_eq!(names(&collect_components(&routes)), ["Parent", "Child"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let routes = routes(
            r#"[
                { "name": "Same", "path": "a", "component": "a/Index" },
                { "name": "Same", "path": "b", "component": "b/Index" }
            ]"#,
        );

        assert_eq!(names(&collect_components(&routes)), ["Same", "Same"]);
    }

    #[test]
    fn test_empty_routes() {
        assert!(collect_components(&[]).is_empty());
    }

    #[test]
    fn test_top_level_ignores_children() {
        let routes = routes(
            r#"[
                { "name": "List", "path": "list", "component": "list/Index", "children": [
                    { "name": "Edit", "path": "edit", "component": "list/Edit" }
                ]},
                { "name": "Group", "path": "group", "component": "Layout" }
            ]"#,
        );

        assert_eq!(names(&collect_top_level(&routes)), ["List"]);
    }
}
