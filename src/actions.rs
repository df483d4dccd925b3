//! Form Kinds and Confirmed Actions
//!
//! Everything the popups can submit: the title and fields of each form, the
//! request it sends and how its success is handled.

use crate::commands::{self, ApiRequest};
use crate::config::PageContext;
use crate::error::ClientError;
use crate::models::TodoId;
use crate::outcome::SuccessPolicy;
use crate::store::FormValues;

/// Inputs of the shared form popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
    Summary,
    Task,
    DueTime,
}

/// The form currently bound to the form popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    SignIn,
    SignUp,
    ForgotPassword,
    ResetPassword,
    ChangeEmail,
    ChangePassword,
    AddTodo,
    EditTodo(TodoId),
}

impl FormKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Sign Up",
            Self::ForgotPassword => "Forgot Password",
            Self::ResetPassword => "Reset Password",
            Self::ChangeEmail => "Change E-Mail",
            Self::ChangePassword => "Change Password",
            Self::AddTodo => "Add New To-Do",
            Self::EditTodo(_) => "Update Your To-Do",
        }
    }

    pub fn fields(&self) -> &'static [Field] {
        match self {
            Self::SignIn => &[Field::Email, Field::Password],
            Self::SignUp => &[Field::Email, Field::Password, Field::ConfirmPassword],
            Self::ForgotPassword | Self::ChangeEmail => &[Field::Email],
            Self::ResetPassword | Self::ChangePassword => &[Field::Password, Field::ConfirmPassword],
            Self::AddTodo | Self::EditTodo(_) => &[Field::Summary, Field::Task, Field::DueTime],
        }
    }

    pub fn shows(&self, field: Field) -> bool {
        self.fields().contains(&field)
    }

    /// Hidden inputs must never block submission
    pub fn requires(&self, field: Field) -> bool {
        field != Field::DueTime && self.shows(field)
    }

    pub fn policy(&self) -> SuccessPolicy {
        match self {
            Self::SignIn => SuccessPolicy::redirect("Successfully signed in!"),
            Self::SignUp => SuccessPolicy::reload("Successfully signed up!"),
            Self::ForgotPassword => SuccessPolicy::stay("Password reset link sent! Check your e-mail."),
            Self::ResetPassword => SuccessPolicy::redirect("Password successfully reset!"),
            Self::ChangeEmail => SuccessPolicy::reload("E-Mail updated successfully!"),
            Self::ChangePassword => SuccessPolicy::reload("Password updated successfully!"),
            Self::AddTodo => SuccessPolicy::reload("To-Do added successfully!"),
            Self::EditTodo(_) => SuccessPolicy::reload("To-Do updated successfully!"),
        }
    }

    /// Validate the current values and plan the request.
    /// Validation failures mean nothing is sent.
    pub fn build_request(&self, values: &FormValues, page: &PageContext) -> Result<ApiRequest, ClientError> {
        if self.shows(Field::ConfirmPassword) {
            check_passwords(&values.password, &values.confirm_password)?;
        }

        let request = match self {
            Self::SignIn => commands::login(&values.email, &values.password),
            Self::SignUp => commands::signup(&values.email, &values.password),
            Self::ForgotPassword => commands::forgot_password(&values.email),
            Self::ResetPassword => {
                let token = page.reset_token.as_deref().ok_or(ClientError::MissingResetToken)?;
                commands::reset_password(&values.password, token)
            }
            Self::ChangeEmail => commands::update_email(&values.email),
            Self::ChangePassword => commands::update_password(&values.password),
            Self::AddTodo => commands::create_todo(&values.todo_draft()),
            Self::EditTodo(id) => commands::update_todo(*id, &values.todo_draft()),
        };
        Ok(request)
    }
}

pub fn check_passwords(password: &str, confirm: &str) -> Result<(), ClientError> {
    if password == confirm {
        Ok(())
    } else {
        Err(ClientError::PasswordMismatch)
    }
}

/// Destructive actions that wait for an explicit confirmation click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteAccount,
    CompleteTodo(TodoId),
}

impl ConfirmAction {
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::DeleteAccount => "Are you sure you want to delete your account? This cannot be undone.",
            Self::CompleteTodo(_) => "Mark this To-Do as completed?",
        }
    }

    pub fn request(&self) -> ApiRequest {
        match self {
            Self::DeleteAccount => commands::delete_account(),
            Self::CompleteTodo(id) => commands::complete_todo(*id),
        }
    }

    pub fn policy(&self) -> SuccessPolicy {
        match self {
            Self::DeleteAccount => SuccessPolicy::reload("Account deleted successfully!"),
            Self::CompleteTodo(_) => SuccessPolicy::reload("To-Do completed!"),
        }
    }
}

pub const SIGN_OUT: SuccessPolicy = SuccessPolicy::reload("Successfully signed out!");
