use tedbot_app_core::{Navigator, Route};

/// Tracks which top-level screen is shown.
#[derive(Debug, Default)]
pub struct UiRouter {
    current: Route,
}

impl UiRouter {
    pub fn current(&self) -> Route {
        self.current
    }
}

impl Navigator for UiRouter {
    fn navigate(&mut self, route: Route) {
        tracing::debug!(path = route.path(), "navigate");
        self.current = route;
    }
}
