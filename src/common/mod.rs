//! # Common Components
//!
//! Shared utilities and data structures used by the client and the CLI.
//!
//! ## Modules
//!
//! - [`payload`]: Request body builders for the login and auth actions
//! - [`messages`]: Response envelopes returned by the ticket endpoint
//! - [`format`]: Display helpers (fixed-width splitting, pretty JSON)
//! - [`config`]: Configuration parsing utilities
//! - [`logging`]: Logger initialisation for the binaries

pub mod config;
pub mod format;
pub mod logging;
pub mod messages;
pub mod payload;
