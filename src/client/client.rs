//! # Ticket Client
//!
//! [`TicketClient`] drives the two halves of the forgery demonstration:
//!
//! - [`login`](TicketClient::login): send the user's `info` fragment, unescaped,
//!   and show the ticket the server issues for it
//! - [`authenticate`](TicketClient::authenticate): replay a (possibly tampered)
//!   ciphertext and show whether the server accepted it
//!
//! Both follow the same shape: reset the message area, POST one JSON body,
//! parse the envelope, then write the outcome into the page. Transport and
//! parse failures are returned to the caller untouched; in that case the
//! message area is left idle and hidden.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let page = MemoryPage::new();
//! let elements = page.elements()?;
//! let client = TicketClient::new("http://127.0.0.1:8080/cgi-bin/ticket", &elements);
//!
//! page.set_input(ui::INFO, r#"{"note":"hi"}"#);
//! client.login().await?;
//! ```

use anyhow::Result;
use log::{info, warn};
use uuid::Uuid;

use super::transport::{HttpTransport, Transport};
use super::ui::{set_message_state, MessageState, Surface, UiElements};
use crate::common::format::{
    pretty_json, reformat_json, split_text, CIPHERTEXT_WIDTH, PLAINTEXT_WIDTH,
};
use crate::common::messages::{display_text, AuthResponse, LoginResponse};
use crate::common::payload::{auth_payload, raw};

/// Client bound to one endpoint and one page of UI slots.
///
/// The page is borrowed; the client never creates or drops surfaces.
pub struct TicketClient<'ui, T = HttpTransport> {
    endpoint: String,
    ui: &'ui UiElements,
    transport: T,
}

impl<'ui> TicketClient<'ui, HttpTransport> {
    /// Client that talks HTTP to `endpoint`.
    ///
    /// The endpoint is not validated here; a bad URL fails on first use.
    pub fn new(endpoint: impl Into<String>, ui: &'ui UiElements) -> Self {
        Self::with_transport(endpoint, ui, HttpTransport::new())
    }
}

impl<'ui, T: Transport> TicketClient<'ui, T> {
    /// Client that sends its requests through `transport`.
    pub fn with_transport(endpoint: impl Into<String>, ui: &'ui UiElements, transport: T) -> Self {
        Self {
            endpoint: endpoint.into(),
            ui,
            transport,
        }
    }

    /// URL every request is posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Request a ticket, passing the `info` slot's text through unescaped.
    ///
    /// # Errors
    ///
    /// Transport failures, a body that is not a valid envelope, and a
    /// `decrypted_ticket` that is not JSON are all returned as errors.
    pub async fn login(&self) -> Result<()> {
        let ui = self.ui;
        reset_message(ui.msg_login.as_ref());

        let payload = raw::login_payload(&ui.info.value());
        info!("Login with payload: {}", payload);

        let body = self.post(payload).await?;
        match LoginResponse::from_json(&body)? {
            LoginResponse::Ok {
                ticket,
                decrypted_ticket,
            } => {
                // Parse first so a bad ticket leaves the page untouched
                let pretty = reformat_json(&decrypted_ticket)?;

                ui.msg_login.set_content("Login successful.");
                set_message_state(ui.msg_login.as_ref(), MessageState::Success);
                ui.login_ciphertext
                    .set_value(&split_text(&ticket, CIPHERTEXT_WIDTH));
                ui.login_plaintext
                    .set_value(&split_text(&decrypted_ticket, PLAINTEXT_WIDTH));
                ui.login_plaintext_pretty.set_value(&pretty);
                info!("Ticket issued ({} hex chars)", ticket.len());
            }
            LoginResponse::Error { text } => {
                let text = display_text(text.as_deref());
                ui.msg_login.set_content(&format!("Login failed: {}", text));
                set_message_state(ui.msg_login.as_ref(), MessageState::Error);
                ui.login_ciphertext.set_value("");
                ui.login_plaintext.set_value("");
                ui.login_plaintext_pretty.set_value("");
                warn!("Login rejected: {}", text);
            }
        }

        ui.msg_login.set_visible(true);
        Ok(())
    }

    /// Replay the ciphertext in the `auth_ciphertext` slot.
    ///
    /// # Errors
    ///
    /// Transport failures and unparseable response bodies.
    pub async fn authenticate(&self) -> Result<()> {
        let ui = self.ui;
        reset_message(ui.msg_auth.as_ref());

        let payload = auth_payload(&ui.auth_ciphertext.value())?;
        let body = self.post(payload).await?;

        match AuthResponse::from_json(&body)? {
            AuthResponse::Ok {
                ticket_text,
                ticket_data,
            } => {
                let pretty = pretty_json(&ticket_data)?;
                ui.msg_auth.set_content("Attack successful!");
                set_message_state(ui.msg_auth.as_ref(), MessageState::Success);
                ui.auth_plaintext
                    .set_value(&split_text(&ticket_text, PLAINTEXT_WIDTH));
                ui.auth_plaintext_pretty.set_value(&pretty);
                info!("Forged ticket accepted");
            }
            AuthResponse::Failed {
                text,
                ticket_text,
                ticket_data,
            } => {
                let pretty = pretty_json(&ticket_data)?;
                let text = display_text(text.as_deref());
                ui.msg_auth.set_content(&format!("Attack failed: {}", text));
                set_message_state(ui.msg_auth.as_ref(), MessageState::Failed);
                ui.auth_plaintext
                    .set_value(&split_text(&ticket_text, PLAINTEXT_WIDTH));
                ui.auth_plaintext_pretty.set_value(&pretty);
                info!("Forged ticket rejected: {}", text);
            }
            AuthResponse::Error { text } => {
                let text = display_text(text.as_deref());
                ui.msg_auth.set_content(&format!("Login failed: {}", text));
                set_message_state(ui.msg_auth.as_ref(), MessageState::Error);
                ui.auth_plaintext.set_value("");
                ui.auth_plaintext_pretty.set_value("");
                warn!("Auth request refused: {}", text);
            }
        }

        ui.msg_auth.set_visible(true);
        Ok(())
    }

    async fn post(&self, payload: String) -> Result<String> {
        let request_id = Uuid::new_v4();
        info!("📤 Request {} to {}", request_id, self.endpoint);

        let body = self.transport.post_json(&self.endpoint, payload).await?;

        info!("📨 Response {} received ({} bytes)", request_id, body.len());
        Ok(body)
    }
}

fn reset_message(surface: &dyn Surface) {
    surface.set_content("");
    set_message_state(surface, MessageState::Idle);
    surface.set_visible(false);
}
