//! # Client Components
//!
//! ## Ticket Client ([`client`])
//! Runs the login and auth operations and writes their outcome into the page.
//!
//! ## Transport ([`transport`])
//! POSTs a JSON body to the endpoint and hands back the response body.
//!
//! ## UI Slots ([`ui`])
//! The named surfaces the client reads from and renders into.

pub mod client;
pub mod transport;
pub mod ui;

// Re-export for convenience
pub use client::TicketClient;
pub use transport::{HttpTransport, Transport};
pub use ui::{MemoryPage, MessageState, Surface, UiElements, UiError};
