//! HTTP surface for the `kata` utilities.
//!
//! The binary in `main.rs` only parses configuration and serves
//! [`server::routes::router`]; everything else lives here so the handlers can
//! be exercised in-process.

pub mod server;
