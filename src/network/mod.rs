//! Network Module
//!
//! HTTP front end over the engine.
//!
//! ## Architecture
//! - axum router, one handler per engine operation
//! - Engine shared across handlers as `Arc<Engine>`
//! - Engine errors mapped to status codes in the handlers

mod handlers;
mod server;

pub use server::{router, Server};
