//! # LifePlus Client
//!
//! Client SDK for the LifePlus healthcare platform API (API v2).
//!
//! The crate exposes one client per API resource (products, doctors,
//! hospitals, orders, cart, packages, ambulance, home sample collection,
//! home care, telemedicine, wellbeing, partners, lookup, appointments,
//! addresses, auth) plus [`client::LifePlusClient`], a facade that manages the
//! bearer-token session lifecycle and hands out lazily-built resource clients
//! over a shared configuration.
//!
//! Calls are async and map one-to-one onto HTTP requests: no retries, no
//! caching, no pagination auto-following.
//!
//! # Example
//! ```ignore
//! use lifeplus_client::client::LifePlusClient;
//! use lifeplus_client::model::requests::ListProductsRequest;
//!
//! let client = LifePlusClient::new("https://api.lifeplusbd.com/api/v2");
//!
//! // Public endpoints work without a session
//! let products = client
//!     .products()
//!     .list_products(&ListProductsRequest::new().with_search_key("paracetamol"))
//!     .await?;
//!
//! // Authenticated endpoints need a login first
//! client.login("01712345678", "secret").await?;
//! let cart = client.cart().get_cart().await?;
//! client.logout().await?;
//! ```

/// Module containing per-resource API clients
pub mod api;
/// Module containing the high-level facade client
pub mod client;
/// Module containing configuration types and the shared config handle
pub mod config;
/// Module containing global constants
pub mod constants;
/// Module containing error types
pub mod error;
/// Module containing request and response models
pub mod model;
/// Module containing commonly used re-exports
pub mod prelude;
/// Module containing the HTTP transport trait and implementation
pub mod transport;
/// Module containing stateless helpers and configuration utilities
pub mod utils;

/// Library version, taken from the crate manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
