use tracing::{debug, warn};

use crate::auth::now_unix;
use crate::auth::session::Session;
use crate::auth::token::{Claims, RawToken};
use crate::nav::route::Route;

/// Role claim value the backend issues for administrators.
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";
/// Role claim value the backend issues for regular users.
pub const ROLE_USER: &str = "ROLE_USUARIO";

/// Land a freshly logged-in user in the right area.
pub fn land(session: &Session, token: &RawToken) -> Route {
    land_at(session, token, now_unix())
}

/// Persist the token, then dispatch on the role claim.
///
/// Missing or expired claims land on root just like an unknown role does;
/// none of these are error conditions.
pub fn land_at(session: &Session, token: &RawToken, now: i64) -> Route {
    if let Err(e) = session.save(token) {
        warn!(error = %e, "failed to persist login token");
        return Route::Root;
    }

    let claims = match Claims::decode(token) {
        Some(claims) => claims,
        None => return Route::Root,
    };
    let (role, exp) = match (claims.role, claims.exp) {
        (Some(role), Some(exp)) => (role, exp),
        _ => return Route::Root,
    };
    if exp <= now {
        return Route::Root;
    }

    // Cache the role for quick reuse; routing proceeds even if the write
    // fails, the claim itself stays authoritative.
    if let Err(e) = session.cache_role(&role) {
        warn!(error = %e, "failed to cache role");
    }

    match role.as_str() {
        ROLE_ADMIN => Route::Admin,
        ROLE_USER => Route::User,
        other => {
            debug!(role = other, "unrecognized role, landing on root");
            Route::Root
        }
    }
}
