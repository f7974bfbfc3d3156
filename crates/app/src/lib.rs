//! # relayboard-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that the browser adapter implements:
//!   - `DeviceApi` — status, toggle and clear-log requests to the device
//!   - `RelayView` / `FormView` — write button and form field state
//!   - `Dialogs`, `Navigator`, `UploadControl` — confirm/alert, page
//!     navigation, the hidden config upload form
//!   - `Scheduler` — run tasks now or after a delay
//! - Provide the **use-case services**:
//!   - `StatusService` — fetch a snapshot and bind it to the buttons
//!   - `RelayService` — toggle a relay, then refresh after a delay
//!   - `LogService` — confirmed log clearing
//!   - `UploadService` — confirmed config upload with auto-submit
//!   - `FieldService` — ping and schedule field enablement
//!   - `NavigationService` — delayed return to the relay page
//! - Load and validate the panel configuration
//!
//! ## Dependency rule
//! Depends on `relayboard-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod config;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
mod testing;
