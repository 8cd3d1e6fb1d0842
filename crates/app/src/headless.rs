//! Navigator and dialogs for running without a UI: every request is
//! logged, and the navigator remembers where it was sent.

use std::sync::RwLock;

use mealplan_application::ports::{Dialogs, Navigator};
use mealplan_domain::{Modal, Route};
use tracing::{info, warn};

/// Logs navigations and keeps the last route.
#[derive(Debug, Default)]
pub struct LogNavigator {
    current: RwLock<Option<Route>>,
}

impl Navigator for LogNavigator {
    fn current_route(&self) -> Option<Route> {
        self.current.read().ok().and_then(|current| current.clone())
    }

    fn navigate(&self, route: Route) {
        info!(route = %route, "navigate");
        if let Ok(mut current) = self.current.write() {
            *current = Some(route);
        }
    }
}

/// Logs modal dialogs.
#[derive(Debug, Default)]
pub struct LogDialogs;

impl Dialogs for LogDialogs {
    fn show_modal(&self, modal: Modal) {
        match modal {
            Modal::Maintenance => warn!("the service is unreachable or in maintenance"),
            Modal::Premium => info!("this feature needs a premium subscription"),
        }
    }
}
