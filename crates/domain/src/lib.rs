//! # relayboard-domain
//!
//! Pure domain model for the relayboard control panel.
//!
//! ## Responsibilities
//! - Foundational types: relay identifiers, error conventions
//! - Define the **Status Snapshot** reported by the device
//! - Define the **view binding** that maps a snapshot to button updates
//!   (tone, label, monitoring dot)
//! - Define the **form field policy** (ping and schedule field enablement)
//! - Name the device **endpoints** the panel talks to
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod relay;

pub mod endpoint;
pub mod form;
pub mod status;
pub mod view;
