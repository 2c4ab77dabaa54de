//! HTTP API: server, routing, and request/response mapping for the sales forms.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;
pub mod store;
