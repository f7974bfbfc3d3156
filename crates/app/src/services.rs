//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from the browser.

pub mod field_service;
pub mod log_service;
pub mod navigation_service;
pub mod relay_service;
pub mod status_service;
pub mod upload_service;
