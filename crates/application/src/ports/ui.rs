//! Ports implemented by the UI.

use mealplan_domain::{Modal, Route};

/// Router of the UI.
pub trait Navigator: Send + Sync {
    /// The route currently shown, if any.
    fn current_route(&self) -> Option<Route>;

    /// Shows `route`.
    fn navigate(&self, route: Route);
}

/// Global modal dialogs of the UI.
pub trait Dialogs: Send + Sync {
    /// Opens `modal` on top of the current view.
    fn show_modal(&self, modal: Modal);
}
