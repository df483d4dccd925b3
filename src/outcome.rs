//! Response Interpretation
//!
//! Maps a finished HTTP response to the message shown to the user and the
//! action taken once the feedback popup is dismissed.

use serde::Deserialize;

/// Shown when a failed response carries no usable error message
pub const GENERIC_FAILURE: &str = "An error occurred.";

/// The parts of a fetch response the interpreter looks at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMeta {
    pub status: u16,
    pub ok: bool,
    pub redirected: bool,
    /// Final URL after any redirects were followed
    pub url: String,
}

impl ResponseMeta {
    pub fn new(status: u16, redirected: bool, url: impl Into<String>) -> Self {
        Self {
            status,
            ok: (200..300).contains(&status),
            redirected,
            url: url.into(),
        }
    }
}

/// What happens after a success popup is dismissed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterSuccess {
    /// Follow the response to wherever the server redirected
    Redirect,
    Reload,
    Stay,
}

/// Per-action success handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessPolicy {
    pub message: &'static str,
    pub after: AfterSuccess,
}

impl SuccessPolicy {
    pub const fn reload(message: &'static str) -> Self {
        Self { message, after: AfterSuccess::Reload }
    }

    pub const fn redirect(message: &'static str) -> Self {
        Self { message, after: AfterSuccess::Redirect }
    }

    pub const fn stay(message: &'static str) -> Self {
        Self { message, after: AfterSuccess::Stay }
    }

    /// Redirect-aware policies also count a followed redirect as success
    pub fn is_success(&self, meta: &ResponseMeta) -> bool {
        match self.after {
            AfterSuccess::Redirect => meta.ok || meta.redirected,
            AfterSuccess::Reload | AfterSuccess::Stay => meta.ok,
        }
    }
}

/// Action performed when the success popup goes away
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowUp {
    Navigate(String),
    Reload,
    Nothing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success { message: String, follow_up: FollowUp },
    Failure { message: String },
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorDetail>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

/// Pull `error.message` out of a JSON error body
pub fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .and_then(|detail| detail.message)
        .filter(|message| !message.is_empty())
}

pub fn interpret(meta: &ResponseMeta, body: &str, policy: &SuccessPolicy) -> Outcome {
    if policy.is_success(meta) {
        let follow_up = match policy.after {
            AfterSuccess::Redirect => FollowUp::Navigate(meta.url.clone()),
            AfterSuccess::Reload => FollowUp::Reload,
            AfterSuccess::Stay => FollowUp::Nothing,
        };
        return Outcome::Success { message: policy.message.to_string(), follow_up };
    }

    let message = error_message(body).unwrap_or_else(|| GENERIC_FAILURE.to_string());
    Outcome::Failure { message }
}
