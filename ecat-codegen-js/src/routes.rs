//! Route Node renderers for the two route shapes.

use ecat_codegen::routes::{ComponentRef, RoutePaths, collect_components, collect_top_level};
use ecat_manifest::{LAYOUT, RouteNode, Variant};
use serde_json::Value;

use crate::ast::{JsArray, JsObject};

/// Renders a module's route tree into a JavaScript route array.
pub trait RouteRenderer {
    fn variant(&self) -> Variant;

    /// Components that need a static import, in import order.
    fn components(&self, routes: &[RouteNode]) -> Vec<ComponentRef>;

    /// Render one route (and its children, where supported).
    fn render_route(
        &self,
        route: &RouteNode,
        paths: &RoutePaths,
        prefix: &str,
        depth: usize,
    ) -> JsObject;

    /// Render the top-level routes of a module.
    fn render(&self, routes: &[RouteNode], paths: &RoutePaths, prefix: &str) -> JsArray {
        JsArray::from_objects(
            routes
                .iter()
                .map(|route| self.render_route(route, paths, prefix, 0)),
        )
    }
}

/// Select the renderer for a route shape.
pub fn renderer_for(variant: Variant) -> Box<dyn RouteRenderer> {
    match variant {
        Variant::Nested => Box::new(NestedRoutes),
        Variant::Flat => Box::new(FlatRoutes),
    }
}

/// `<module_name>_<route name>`
pub fn route_name(prefix: &str, route: &RouteNode) -> String {
    format!("{}_{}", prefix, route.name)
}

/// Layout nodes reference the host's layout by name; others use their import.
fn component(obj: JsObject, route: &RouteNode) -> JsObject {
    if route.is_layout() {
        obj.string("component", LAYOUT)
    } else {
        obj.raw("component", &route.name)
    }
}

/// Nested routes with layout nodes and relative child paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct NestedRoutes;

impl RouteRenderer for NestedRoutes {
    fn variant(&self) -> Variant {
        Variant::Nested
    }

    fn components(&self, routes: &[RouteNode]) -> Vec<ComponentRef> {
        collect_components(routes)
    }

    fn render_route(
        &self,
        route: &RouteNode,
        paths: &RoutePaths,
        prefix: &str,
        depth: usize,
    ) -> JsObject {
        let obj = JsObject::quoted()
            .string("name", route_name(prefix, route))
            .string("path", paths.route_path(&route.path, depth))
            .bool("hidden", route.hidden_or_default())
            .string("redirect", route.redirect_or_default());

        let children = JsArray::from_objects(
            route
                .children
                .iter()
                .map(|child| self.render_route(child, paths, prefix, depth + 1)),
        );

        component(obj, route)
            .bool_opt("alwaysShow", route.always_show)
            .json(
                "meta",
                Value::Object(route.meta.clone().unwrap_or_default()),
            )
            .array_if(route.has_children(), "children", children)
    }
}

/// A single level of routes mounted below the module path.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatRoutes;

impl RouteRenderer for FlatRoutes {
    fn variant(&self) -> Variant {
        Variant::Flat
    }

    fn components(&self, routes: &[RouteNode]) -> Vec<ComponentRef> {
        collect_top_level(routes)
    }

    fn render_route(
        &self,
        route: &RouteNode,
        paths: &RoutePaths,
        prefix: &str,
        depth: usize,
    ) -> JsObject {
        let obj = JsObject::new()
            .string("path", paths.route_path(&route.path, depth))
            .string("name", route_name(prefix, route));

        component(obj, route).bool("entry", route.entry_or_default())
    }
}
