use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use ticketforge::client::Transport;

/// Transport double: records every request and answers from a fixed script.
#[derive(Clone)]
pub struct ScriptedTransport {
    login_reply: Reply,
    auth_reply: Reply,
    pub requests: Arc<Mutex<Vec<(String, String)>>>,
}

#[derive(Clone)]
pub enum Reply {
    Body(String),
    Fail(String),
}

impl ScriptedTransport {
    /// Same reply for every request.
    pub fn replying(body: &str) -> Self {
        Self::routed(Reply::Body(body.to_string()), Reply::Body(body.to_string()))
    }

    pub fn failing(reason: &str) -> Self {
        Self::routed(Reply::Fail(reason.to_string()), Reply::Fail(reason.to_string()))
    }

    /// Separate replies for login and auth bodies.
    pub fn routed(login_reply: Reply, auth_reply: Reply) -> Self {
        Self {
            login_reply,
            auth_reply,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn bodies(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(_, body)| body.clone())
            .collect()
    }
}

impl Transport for ScriptedTransport {
    async fn post_json(&self, endpoint: &str, body: String) -> Result<String> {
        let reply = if body.starts_with(r#"{"action":"auth""#) {
            self.auth_reply.clone()
        } else {
            self.login_reply.clone()
        };
        self.requests
            .lock()
            .unwrap()
            .push((endpoint.to_string(), body));

        // Let the other operation interleave when run concurrently
        tokio::task::yield_now().await;

        match reply {
            Reply::Body(body) => Ok(body),
            Reply::Fail(reason) => Err(anyhow!(reason)),
        }
    }
}
