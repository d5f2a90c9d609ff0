//! Navigation: routes, the admission guard and post-login role dispatch.

pub mod guard;
pub mod role_router;
pub mod route;

use crate::auth::session::Session;
use crate::notify::Notifier;
use route::{Navigator, Route};

/// Full logout flow: drop the whole session, tell the user, land on root.
pub fn logout(session: &Session, notifier: &Notifier, navigator: &Navigator) -> Route {
    session.clear();
    notifier.success("Signed out successfully");
    navigator.navigate(Route::Root)
}
