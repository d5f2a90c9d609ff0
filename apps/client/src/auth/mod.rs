//! Session and credential handling.
//!
//! The token issued by the backend is carried verbatim and decoded without
//! signature verification; the [`token::RawToken`] / [`token::Claims`] split
//! keeps that trust boundary visible in the types.

pub mod session;
pub mod storage;
pub mod token;

/// Current time in whole seconds since the Unix epoch, the unit `exp` uses.
pub fn now_unix() -> i64 {
    time::OffsetDateTime::now_utc().unix_timestamp()
}
