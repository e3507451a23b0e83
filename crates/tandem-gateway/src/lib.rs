//! tandem-gateway - HTTP surface for the completion router
//!
//! Exposes a single completion endpoint plus a health check:
//! - POST    /         — forward a chat request through the router
//! - OPTIONS /         — CORS preflight
//! - GET     /healthz  — liveness and configured provider names

pub mod server;

pub use server::{GatewayServer, GatewayState};
