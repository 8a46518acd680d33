//! Route registry for the site.

/// Metadata attached to a registered route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// Page title override.
    pub title: Option<String>,
    /// Whether the route is linked from the main navigation.
    pub in_nav: bool,
}

/// One registered route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    /// Route pattern (e.g., "/blog/:slug").
    pub path: String,
    /// Component name rendered for this route.
    pub component: String,
    /// Route metadata.
    pub meta: RouteMeta,
}

/// The site's route table.
///
/// The registry is descriptive: the Leptos `<Routes>` tree does the actual
/// matching, while this table drives the navigation bar and lets tests
/// assert the route inventory.
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    routes: Vec<RouteEntry>,
}

impl RouteRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route.
    pub fn register(&mut self, path: impl Into<String>, component: impl Into<String>) {
        self.routes.push(RouteEntry {
            path: path.into(),
            component: component.into(),
            meta: RouteMeta::default(),
        });
    }

    /// Register a route that appears in the main navigation.
    pub fn register_nav(
        &mut self,
        path: impl Into<String>,
        component: impl Into<String>,
        title: impl Into<String>,
    ) {
        self.routes.push(RouteEntry {
            path: path.into(),
            component: component.into(),
            meta: RouteMeta {
                title: Some(title.into()),
                in_nav: true,
            },
        });
    }

    /// All registered routes, in registration order.
    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    /// Routes that appear in the main navigation.
    pub fn nav_routes(&self) -> Vec<&RouteEntry> {
        self.routes.iter().filter(|r| r.meta.in_nav).collect()
    }

    /// Look up a route by exact pattern.
    pub fn find(&self, path: &str) -> Option<&RouteEntry> {
        self.routes.iter().find(|r| r.path == path)
    }
}

/// The Folio site's route table.
pub fn site_routes() -> RouteRegistry {
    let mut registry = RouteRegistry::new();
    registry.register_nav("/", "HomePage", "Home");
    registry.register_nav("/about", "AboutPage", "About");
    registry.register_nav("/projects", "ProjectsPage", "Projects");
    registry.register_nav("/blog", "BlogPage", "Blog");
    registry.register_nav("/contact", "ContactPage", "Contact");
    registry.register_nav("/demos", "DemosPage", "Demos");
    registry.register("/blog/:slug", "BlogPostPage");
    registry.register("/demos/shop", "ShopDemoPage");
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_route_inventory() {
        let registry = site_routes();
        assert!(registry.find("/").is_some());
        assert!(registry.find("/blog/:slug").is_some());
        assert!(registry.find("/demos/shop").is_some());
        assert!(registry.find("/checkout").is_none());
    }

    #[test]
    fn test_nav_excludes_detail_routes() {
        let registry = site_routes();
        let nav: Vec<&str> = registry.nav_routes().iter().map(|r| r.path.as_str()).collect();
        assert!(nav.contains(&"/"));
        assert!(!nav.contains(&"/blog/:slug"));
    }
}
