//! Typed wrappers for the remote API, one module per backend controller.
//!
//! These functions only shape requests and responses; authentication and
//! failure notification happen in the pipeline they all run through.

pub mod admin;
pub mod artists;
pub mod auth;
pub mod recommendations;
pub mod social;
pub mod songs;
pub mod users;
