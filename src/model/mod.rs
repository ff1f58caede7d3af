/// Module containing authentication request and response models
pub mod auth;
/// Module containing request parameter types for resource clients
pub mod requests;
/// Module containing resource records returned by the API
pub mod resources;
/// Module containing generic response wrappers
pub mod responses;
/// Module containing serde adapters for lenient API payloads
pub mod serialization;
