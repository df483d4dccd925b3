//! To-Do Requests

use super::{ApiRequest, Method};
use crate::models::{TodoDraft, TodoId};

pub fn create_todo(draft: &TodoDraft) -> ApiRequest {
    ApiRequest::new(Method::Post, "/todo").with_body(draft.to_body()).with_csrf()
}

pub fn update_todo(id: TodoId, draft: &TodoDraft) -> ApiRequest {
    ApiRequest::new(Method::Patch, format!("/todo/{}", id))
        .with_body(draft.to_body())
        .with_csrf()
}

/// Completing a to-do deletes it on the server
pub fn complete_todo(id: TodoId) -> ApiRequest {
    ApiRequest::new(Method::Delete, format!("/todo/{}", id)).with_csrf()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> TodoDraft {
        TodoDraft { summary: "Call mom".into(), task: "Sunday".into(), due_time: String::new() }
    }

    #[test]
    fn test_create_and_update_targets() {
        let create = create_todo(&draft());
        assert_eq!(create.to_string(), "POST /todo");
        assert!(create.csrf);

        let update = update_todo(12, &draft());
        assert_eq!(update.to_string(), "PATCH /todo/12");
        assert_eq!(update.body.unwrap().encode(), "summary=Call+mom&task=Sunday");
    }

    #[test]
    fn test_complete_is_bodyless_delete() {
        let request = complete_todo(3);
        assert_eq!(request.to_string(), "DELETE /todo/3");
        assert!(request.body.is_none());
        assert!(request.csrf);
    }
}
