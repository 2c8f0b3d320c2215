//! Infrastructure layer - External service implementations

pub mod galaxia;
pub mod http_client;
pub mod logging;
