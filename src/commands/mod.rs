//! Backend Request Wrappers
//!
//! Frontend bindings to the backend's form endpoints, organized by domain.
//! Planning a request is pure; only [`send`] touches the network.

mod todo;
mod user;

use std::fmt;

use gloo_net::http::Request;

use crate::error::ClientError;
use crate::form_body::FormBody;
use crate::outcome::ResponseMeta;

// Re-export all public items
pub use todo::*;
pub use user::*;

const CSRF_HEADER: &str = "X-CSRF-Token";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Post,
    Patch,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        })
    }
}

/// A planned backend call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<FormBody>,
    /// Whether the endpoint expects the page's CSRF token
    pub csrf: bool,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), body: None, csrf: false }
    }

    fn with_body(mut self, body: FormBody) -> Self {
        self.body = Some(body);
        self
    }

    fn with_csrf(mut self) -> Self {
        self.csrf = true;
        self
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// A finished response with its body already read
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub meta: ResponseMeta,
    pub body: String,
}

/// Send a planned request. Redirects are followed by the browser.
pub async fn send(request: &ApiRequest, csrf_token: Option<&str>) -> Result<ApiResponse, ClientError> {
    let mut builder = match request.method {
        Method::Post => Request::post(&request.path),
        Method::Patch => Request::patch(&request.path),
        Method::Delete => Request::delete(&request.path),
    };

    if request.csrf {
        match csrf_token {
            Some(token) => builder = builder.header(CSRF_HEADER, token),
            None => log::warn!("no CSRF token on page, sending {} without it", request),
        }
    }

    let sent = match &request.body {
        Some(body) => {
            let prepared = builder
                .header("Content-Type", FORM_CONTENT_TYPE)
                .body(body.encode())
                .map_err(|e| ClientError::RequestBuild(e.to_string()))?;
            prepared.send().await
        }
        None => builder.send().await,
    };
    let response = sent.map_err(|e| ClientError::Network(e.to_string()))?;

    let meta = ResponseMeta::new(response.status(), response.redirected(), response.url());
    let body = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            log::debug!("could not read body of {}: {}", request, e);
            String::new()
        }
    };
    log::debug!("{} -> {} (redirected: {})", request, meta.status, meta.redirected);
    Ok(ApiResponse { meta, body })
}
