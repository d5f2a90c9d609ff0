use tracing::warn;

use crate::auth::now_unix;
use crate::auth::session::Session;
use crate::auth::token::Claims;
use crate::nav::route::Route;

/// Outcome of an admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Granted,
    Redirect(Route),
}

/// Decide whether a protected view may be entered right now.
pub fn check(session: &Session) -> Admission {
    check_at(session, now_unix())
}

/// Admission against an explicit clock, in seconds since the epoch.
///
/// A token is admissible when it is present, its claims decode, and its
/// `exp` lies in the future. This is a structural check only; the signature
/// is not verified anywhere in this client.
pub fn check_at(session: &Session, now: i64) -> Admission {
    let token = match session.token() {
        Some(token) => token,
        None => {
            warn!("no token present, redirecting to root");
            return Admission::Redirect(Route::Root);
        }
    };

    let exp = match Claims::decode(&token).and_then(|claims| claims.exp) {
        Some(exp) => exp,
        None => {
            warn!("token undecodable or missing expiry, redirecting to root");
            return Admission::Redirect(Route::Root);
        }
    };

    if exp <= now {
        warn!(exp, now, "token expired, redirecting to root");
        return Admission::Redirect(Route::Root);
    }

    Admission::Granted
}
