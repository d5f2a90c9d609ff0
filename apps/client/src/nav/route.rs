use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::auth::session::Session;
use crate::nav::guard::{self, Admission};

/// Top-level areas of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Root,
    Login,
    Admin,
    User,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Login => "/login",
            Route::Admin => "/admin",
            Route::User => "/user",
        }
    }

    /// Whether navigating here must pass the admission guard.
    pub fn is_protected(self) -> bool {
        matches!(self, Route::Admin | Route::User)
    }
}

/// Holds the current route and applies the admission guard on every
/// navigation to a protected area. The admission decision is recomputed per
/// call, never cached.
pub struct Navigator {
    session: Arc<Session>,
    current: RwLock<Route>,
}

impl Navigator {
    pub fn new(session: Arc<Session>) -> Self {
        Self {
            session,
            current: RwLock::new(Route::Root),
        }
    }

    pub fn current(&self) -> Route {
        *self.current.read()
    }

    /// Navigate to `target`, landing wherever the guard says; returns the
    /// route actually landed on.
    pub fn navigate(&self, target: Route) -> Route {
        let landed = if target.is_protected() {
            match guard::check(&self.session) {
                Admission::Granted => target,
                Admission::Redirect(route) => {
                    debug!(target = target.path(), "admission denied, redirecting");
                    route
                }
            }
        } else {
            target
        };
        *self.current.write() = landed;
        landed
    }
}
