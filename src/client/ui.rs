//! # UI Slots
//!
//! The client never lays out a page. It is handed a fixed set of named display
//! and input surfaces by its host and only reads or writes their value,
//! content, class and visibility.
//!
//! - [`Surface`]: one slot as seen by the client
//! - [`UiElements`]: the nine slots the client needs, validated on construction
//! - [`MemorySurface`] / [`MemoryPage`]: in-process surfaces for the CLI and tests

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;

pub const INFO: &str = "info";
pub const MSG_LOGIN: &str = "msg_login";
pub const LOGIN_CIPHERTEXT: &str = "login_ciphertext";
pub const LOGIN_PLAINTEXT: &str = "login_plaintext";
pub const LOGIN_PLAINTEXT_PRETTY: &str = "login_plaintext_pretty";
pub const AUTH_CIPHERTEXT: &str = "auth_ciphertext";
pub const MSG_AUTH: &str = "msg_auth";
pub const AUTH_PLAINTEXT: &str = "auth_plaintext";
pub const AUTH_PLAINTEXT_PRETTY: &str = "auth_plaintext_pretty";

/// Every slot name, in page order.
pub const SLOT_NAMES: [&str; 9] = [
    INFO,
    MSG_LOGIN,
    LOGIN_CIPHERTEXT,
    LOGIN_PLAINTEXT,
    LOGIN_PLAINTEXT_PRETTY,
    AUTH_CIPHERTEXT,
    MSG_AUTH,
    AUTH_PLAINTEXT,
    AUTH_PLAINTEXT_PRETTY,
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UiError {
    #[error("required UI slot '{0}' is missing")]
    MissingSlot(&'static str),
}

/// A display or input surface owned by the host.
///
/// Methods take `&self`; implementations provide their own interior mutability
/// so that concurrent operations can write to their (disjoint) slots.
pub trait Surface: Send + Sync {
    /// Current input value (e.g. a text field's contents).
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
    /// Replace the displayed content (message areas).
    fn set_content(&self, content: &str);
    /// Replace the style class attribute.
    fn set_class(&self, class: &str);
    fn set_visible(&self, visible: bool);
}

/// Visual state of a message area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageState {
    Idle,
    Success,
    Error,
    Failed,
}

impl MessageState {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageState::Idle => "idle",
            MessageState::Success => "success",
            MessageState::Error => "error",
            MessageState::Failed => "failed",
        }
    }

    /// Full class attribute applied to a message container.
    pub fn class_name(&self) -> String {
        format!("message {}", self.as_str())
    }
}

impl fmt::Display for MessageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set a message container's class to reflect `state`.
pub fn set_message_state(surface: &dyn Surface, state: MessageState) {
    surface.set_class(&state.class_name());
}

/// The slots a [`TicketClient`](super::TicketClient) reads and writes.
pub struct UiElements {
    pub info: Arc<dyn Surface>,
    pub msg_login: Arc<dyn Surface>,
    pub login_ciphertext: Arc<dyn Surface>,
    pub login_plaintext: Arc<dyn Surface>,
    pub login_plaintext_pretty: Arc<dyn Surface>,
    pub auth_ciphertext: Arc<dyn Surface>,
    pub msg_auth: Arc<dyn Surface>,
    pub auth_plaintext: Arc<dyn Surface>,
    pub auth_plaintext_pretty: Arc<dyn Surface>,
}

impl UiElements {
    /// Build from a name → surface map, failing on the first missing slot.
    ///
    /// Extra entries are ignored.
    pub fn from_slots(slots: &HashMap<String, Arc<dyn Surface>>) -> Result<Self, UiError> {
        let take = |name: &'static str| -> Result<Arc<dyn Surface>, UiError> {
            slots
                .get(name)
                .cloned()
                .ok_or(UiError::MissingSlot(name))
        };

        Ok(Self {
            info: take(INFO)?,
            msg_login: take(MSG_LOGIN)?,
            login_ciphertext: take(LOGIN_CIPHERTEXT)?,
            login_plaintext: take(LOGIN_PLAINTEXT)?,
            login_plaintext_pretty: take(LOGIN_PLAINTEXT_PRETTY)?,
            auth_ciphertext: take(AUTH_CIPHERTEXT)?,
            msg_auth: take(MSG_AUTH)?,
            auth_plaintext: take(AUTH_PLAINTEXT)?,
            auth_plaintext_pretty: take(AUTH_PLAINTEXT_PRETTY)?,
        })
    }
}

/// Observable state of a [`MemorySurface`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceState {
    pub value: String,
    pub content: String,
    pub class: String,
    pub visible: bool,
}

/// A surface backed by a mutex-guarded [`SurfaceState`].
#[derive(Debug, Default)]
pub struct MemorySurface {
    state: Mutex<SurfaceState>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface whose value is pre-filled, as a host input field would be.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(SurfaceState {
                value: value.into(),
                ..SurfaceState::default()
            }),
        }
    }

    pub fn snapshot(&self) -> SurfaceState {
        self.lock().clone()
    }

    // A poisoned lock still holds plain strings; keep using them.
    fn lock(&self) -> MutexGuard<'_, SurfaceState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Surface for MemorySurface {
    fn value(&self) -> String {
        self.lock().value.clone()
    }

    fn set_value(&self, value: &str) {
        self.lock().value = value.to_string();
    }

    fn set_content(&self, content: &str) {
        self.lock().content = content.to_string();
    }

    fn set_class(&self, class: &str) {
        self.lock().class = class.to_string();
    }

    fn set_visible(&self, visible: bool) {
        self.lock().visible = visible;
    }
}

/// A complete in-memory page: one [`MemorySurface`] per slot.
pub struct MemoryPage {
    surfaces: HashMap<&'static str, Arc<MemorySurface>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        let surfaces = SLOT_NAMES
            .iter()
            .map(|name| (*name, Arc::new(MemorySurface::new())))
            .collect();
        Self { surfaces }
    }

    /// Look up a slot by name.
    pub fn slot(&self, name: &str) -> Option<Arc<MemorySurface>> {
        self.surfaces.get(name).cloned()
    }

    /// Snapshot of a slot, or the default state for an unknown name.
    pub fn state(&self, name: &str) -> SurfaceState {
        self.slot(name).map(|s| s.snapshot()).unwrap_or_default()
    }

    /// Fill an input slot's value. Unknown names are ignored.
    pub fn set_input(&self, name: &str, value: &str) {
        if let Some(surface) = self.surfaces.get(name) {
            surface.set_value(value);
        }
    }

    /// Wire the page's surfaces into a [`UiElements`].
    pub fn elements(&self) -> Result<UiElements, UiError> {
        let slots: HashMap<String, Arc<dyn Surface>> = self
            .surfaces
            .iter()
            .map(|(name, surface)| {
                let surface: Arc<dyn Surface> = surface.clone();
                (name.to_string(), surface)
            })
            .collect();
        UiElements::from_slots(&slots)
    }
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_slots() -> HashMap<String, Arc<dyn Surface>> {
        SLOT_NAMES
            .iter()
            .map(|name| {
                let surface: Arc<dyn Surface> = Arc::new(MemorySurface::new());
                (name.to_string(), surface)
            })
            .collect()
    }

    #[test]
    fn test_from_slots_accepts_complete_set() {
        assert!(UiElements::from_slots(&full_slots()).is_ok());
    }

    #[test]
    fn test_from_slots_reports_missing_slot() {
        for name in SLOT_NAMES {
            let mut slots = full_slots();
            slots.remove(name);
            match UiElements::from_slots(&slots) {
                Err(UiError::MissingSlot(missing)) => assert_eq!(missing, name),
                Ok(_) => panic!("accepted page without '{}'", name),
            }
        }
    }

    #[test]
    fn test_message_class_names() {
        assert_eq!(MessageState::Idle.class_name(), "message idle");
        assert_eq!(MessageState::Success.class_name(), "message success");
        assert_eq!(MessageState::Error.class_name(), "message error");
        assert_eq!(MessageState::Failed.class_name(), "message failed");
        assert_eq!(MessageState::Failed.to_string(), "failed");
        assert_eq!(format!("{}", MessageState::Idle), "idle");
    }

    #[test]
    fn test_elements_share_page_surfaces() {
        let page = MemoryPage::new();
        let ui = page.elements().unwrap();

        page.set_input(INFO, "{\"a\":1}");
        assert_eq!(ui.info.value(), "{\"a\":1}");

        set_message_state(ui.msg_auth.as_ref(), MessageState::Failed);
        ui.msg_auth.set_visible(true);
        let state = page.state(MSG_AUTH);
        assert_eq!(state.class, "message failed");
        assert!(state.visible);
    }
}
