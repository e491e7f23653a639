//! Entity route table.
//!
//! Maps a URL path segment to the entity screen it loads, plus the page
//! title shown while that screen is active. Screens are resolved on demand.

use serde::Serialize;

/// Entity screens reachable from the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityScreen {
    Foo,
}

/// One entry of the entity route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntityRoute {
    pub path: &'static str,
    pub page_title: &'static str,
    pub screen: EntityScreen,
}

const ENTITY_ROUTES: &[EntityRoute] = &[EntityRoute {
    path: "foo",
    page_title: "Foos",
    screen: EntityScreen::Foo,
}];

/// Return every entity route, in declaration order.
pub fn entity_routes() -> &'static [EntityRoute] {
    ENTITY_ROUTES
}

/// Find the route for `path`. Surrounding slashes are ignored; matching is exact.
pub fn resolve_route(path: &str) -> Option<&'static EntityRoute> {
    let segment = path.trim_matches('/');
    let route = ENTITY_ROUTES.iter().find(|r| r.path == segment);
    if route.is_none() {
        tracing::debug!(path, "No entity route matched");
    }
    route
}
