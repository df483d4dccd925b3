//! User Requests
//!
//! Authentication and account endpoints.

use super::{ApiRequest, Method};
use crate::form_body::FormBody;

fn credentials(email: &str, password: &str) -> FormBody {
    FormBody::new().append("email", email).append("password", password)
}

pub fn login(email: &str, password: &str) -> ApiRequest {
    ApiRequest::new(Method::Post, "/user/login").with_body(credentials(email, password))
}

pub fn signup(email: &str, password: &str) -> ApiRequest {
    ApiRequest::new(Method::Post, "/user/signup").with_body(credentials(email, password))
}

pub fn forgot_password(email: &str) -> ApiRequest {
    ApiRequest::new(Method::Post, "/user/forgot-password").with_body(FormBody::new().append("email", email))
}

/// `vtoken` is the `v` query parameter of the reset link
pub fn reset_password(password: &str, vtoken: &str) -> ApiRequest {
    let body = FormBody::new().append("password", password).append("vtoken", vtoken);
    ApiRequest::new(Method::Post, "/user/reset-password").with_body(body)
}

pub fn update_email(email: &str) -> ApiRequest {
    ApiRequest::new(Method::Patch, "/user")
        .with_body(FormBody::new().append("email", email))
        .with_csrf()
}

pub fn update_password(password: &str) -> ApiRequest {
    ApiRequest::new(Method::Patch, "/user")
        .with_body(FormBody::new().append("password", password))
        .with_csrf()
}

pub fn delete_account() -> ApiRequest {
    ApiRequest::new(Method::Delete, "/user").with_csrf()
}

pub fn logout() -> ApiRequest {
    ApiRequest::new(Method::Post, "/user/logout").with_csrf()
}
