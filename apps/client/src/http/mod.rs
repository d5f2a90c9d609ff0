//! Outbound HTTP: the middleware pipeline and its stages.
//!
//! Every remote call flows through one pipeline composed at client
//! construction: bearer authentication, then fault translation, then the
//! transport. Stages see immutable request values and buffered responses.

pub mod bearer;
pub mod client;
pub mod fault;
pub mod middleware;
