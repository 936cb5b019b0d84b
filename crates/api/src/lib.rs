//! HTTP API: routing, request decoding, endpoint dispatch and response encoding.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;
