//! # Request Payloads
//!
//! The two request bodies sent to the ticket endpoint are built in deliberately
//! different ways:
//!
//! - [`raw::login_payload`] splices the user's `info` text into the body by
//!   string concatenation. Nothing is escaped or validated, so whatever the user
//!   typed reaches the server exactly as written. This is the injection surface
//!   the login demonstration relies on.
//! - [`auth_payload`] goes through `serde_json`, producing a well-formed body in
//!   which only the ticket value itself is attacker controlled.
//!
//! The raw builder lives in its own module and never calls into `serde_json`.

use anyhow::Result;
use serde::Serialize;

/// Raw passthrough builders. Do not route these through a JSON encoder.
pub mod raw {
    /// Body sent when the `info` field is left empty.
    pub const EMPTY_LOGIN: &str = "{\"action\":\"login\"}";

    const LOGIN_PREFIX: &str = "{\"action\":\"login\",\"info\": ";
    const LOGIN_SUFFIX: &str = " }";

    /// Build the login body with `info` embedded byte for byte.
    ///
    /// The template puts one space on each side of the fragment; the fragment
    /// itself is never trimmed or re-spaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use ticketforge::common::payload::raw::login_payload;
    ///
    /// assert_eq!(login_payload(""), r#"{"action":"login"}"#);
    /// assert_eq!(login_payload(r#"{"x":1}"#), r#"{"action":"login","info": {"x":1} }"#);
    /// ```
    pub fn login_payload(info: &str) -> String {
        if info.is_empty() {
            return EMPTY_LOGIN.to_string();
        }

        let mut payload =
            String::with_capacity(LOGIN_PREFIX.len() + info.len() + LOGIN_SUFFIX.len());
        payload.push_str(LOGIN_PREFIX);
        payload.push_str(info);
        payload.push_str(LOGIN_SUFFIX);
        payload
    }
}

#[derive(Debug, Serialize)]
struct AuthRequest<'a> {
    action: &'static str,
    ticket: &'a str,
}

/// Encode `{"action":"auth","ticket":<ticket>}` with proper JSON escaping.
pub fn auth_payload(ticket: &str) -> Result<String> {
    let request = AuthRequest {
        action: "auth",
        ticket,
    };
    Ok(serde_json::to_string(&request)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_info_uses_bare_login() {
        assert_eq!(raw::login_payload(""), r#"{"action":"login"}"#);
    }

    #[test]
    fn test_info_is_embedded_verbatim() {
        let inputs = [
            r#"{"x":1}"#,
            r#" {"x":1} "#,
            "not json at all",
            r#""quoted" \ backslash"#,
            r#"{"a":1},"privs":["read","write","execute"]"#,
            " ",
            "ünïcødé\n\ttabs",
        ];

        for info in inputs {
            let payload = raw::login_payload(info);
            assert_eq!(payload, format!("{{\"action\":\"login\",\"info\": {} }}", info));
            assert_eq!(
                &payload[r#"{"action":"login","info": "#.len()..payload.len() - 2],
                info
            );
        }
    }

    #[test]
    fn test_login_template_spaces_the_fragment() {
        assert_eq!(
            raw::login_payload(r#"{"x":1}"#),
            r#"{"action":"login","info": {"x":1} }"#
        );
    }

    #[test]
    fn test_whitespace_is_not_normalised() {
        assert_eq!(
            raw::login_payload(r#" {"x":1} "#),
            r#"{"action":"login","info":  {"x":1}  }"#
        );
    }

    #[test]
    fn test_auth_payload_is_well_formed() {
        let payload = auth_payload("ZZZZ").unwrap();
        assert_eq!(payload, r#"{"action":"auth","ticket":"ZZZZ"}"#);
    }

    #[test]
    fn test_auth_payload_escapes_ticket() {
        let ticket = r#"abc","action":"login"#;
        let payload = auth_payload(ticket).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(parsed["action"], "auth");
        assert_eq!(parsed["ticket"], ticket);
    }
}
