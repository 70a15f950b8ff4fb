// File: console/src/http/mod.rs
//! HTTP clients for the monitoring backend
//!
//! Four clients are built once at startup and published on the application's
//! global properties so any component can issue requests without repeating
//! the base path.
//!
//! ```text
//! $axios  → <origin>            (unscoped, full URLs)
//! $host   → <origin>/api/v1/host
//! $agents → <origin>/api/v1/agents
//! $api    → <origin>/api/v1/
//! ```
//!
//! Request failures are whatever the underlying client reports; nothing here
//! retries or intercepts them.

pub mod client;
pub mod registry;

pub use client::{ApiClient, ClientDescriptor, ClientName};
pub use registry::{initialize, GlobalProperties};
