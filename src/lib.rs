//! # ticketforge
//!
//! Client for a ticket-forgery demonstration endpoint. A login request obtains
//! an encrypted ticket from the server; an auth request replays a (possibly
//! tampered) ticket to see whether the server accepts it.
//!
//! - [`common`]: wire payloads, response envelopes, display formatting, config, logging
//! - [`client`]: UI slots, HTTP transport and the [`TicketClient`] itself

pub mod client;
pub mod common;

pub use client::{TicketClient, UiElements};
