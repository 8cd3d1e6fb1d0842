//! Global reactions to API classifications.

use std::sync::Arc;

use async_trait::async_trait;
use mealplan_domain::{ErrorClass, Modal, Route, SignInReason};
use tracing::info;

use crate::gateway::{ApiEvent, ApiEventListener};
use crate::ports::{Dialogs, Navigator};
use crate::session::SessionContext;

/// Turns gateway events into modals, navigation and session changes.
pub struct ResponseDispatcher {
    session: SessionContext,
    navigator: Arc<dyn Navigator>,
    dialogs: Arc<dyn Dialogs>,
}

impl ResponseDispatcher {
    /// Creates a dispatcher acting on `session` through the UI ports.
    #[must_use]
    pub fn new(
        session: SessionContext,
        navigator: Arc<dyn Navigator>,
        dialogs: Arc<dyn Dialogs>,
    ) -> Self {
        Self {
            session,
            navigator,
            dialogs,
        }
    }

    async fn remember_current_route(&self) {
        if let Some(current) = self.navigator.current_route() {
            self.session.set_pending_redirect(current).await;
        }
    }

    async fn on_rejection(&self, class: ErrorClass) {
        match class {
            ErrorClass::Unreachable | ErrorClass::Maintenance => {
                self.dialogs.show_modal(Modal::Maintenance);
            }
            ErrorClass::ServerError => self.navigator.navigate(Route::CriticalError),
            ErrorClass::Unauthenticated => {
                self.remember_current_route().await;
                self.navigator
                    .navigate(Route::sign_in(SignInReason::Required));
            }
            ErrorClass::SessionExpired => {
                info!("session rejected by the server");
                self.session.logout().await;
                self.remember_current_route().await;
                self.navigator.navigate(Route::sign_in(SignInReason::Expired));
            }
            ErrorClass::PermissionDenied => self.navigator.navigate(Route::PermissionDenied),
            // The gateway already logged the redirect.
            ErrorClass::UnexpectedRedirect | ErrorClass::Unhandled => {}
        }
    }
}

#[async_trait]
impl ApiEventListener for ResponseDispatcher {
    async fn on_event(&self, event: ApiEvent) {
        match event {
            ApiEvent::PremiumRequired => self.dialogs.show_modal(Modal::Premium),
            ApiEvent::Rejected(class) => self.on_rejection(class).await,
        }
    }
}
