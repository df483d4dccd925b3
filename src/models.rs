//! Frontend Models
//!
//! Data read back out of server-rendered list items.

use crate::form_body::FormBody;

/// Server-side to-do identifier (`data-todo-id`)
pub type TodoId = u32;

/// Field values of a to-do as shown on the page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoDraft {
    pub summary: String,
    pub task: String,
    /// `datetime-local` value; empty when the to-do has no due time
    pub due_time: String,
}

impl TodoDraft {
    /// Build a draft from a rendered item. Missing nodes become empty fields.
    pub fn from_display(summary: Option<String>, task: Option<String>, due_time: Option<String>) -> Self {
        Self {
            summary: summary.unwrap_or_default(),
            task: task.unwrap_or_default(),
            due_time: due_time.unwrap_or_default(),
        }
    }

    /// `summary` and `task` always, `duetime` only when set
    pub fn to_body(&self) -> FormBody {
        let body = FormBody::new()
            .append("summary", self.summary.as_str())
            .append("task", self.task.as_str());
        if self.due_time.is_empty() {
            body
        } else {
            body.append("duetime", self.due_time.as_str())
        }
    }
}

/// Parse a `data-todo-id` attribute
pub fn parse_todo_id(raw: &str) -> Option<TodoId> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_display_reads_values_exactly() {
        let draft = TodoDraft::from_display(
            Some("  Groceries ".into()),
            Some("milk\neggs".into()),
            Some("2024-05-01T09:30".into()),
        );
        assert_eq!(draft.summary, "  Groceries ");
        assert_eq!(draft.task, "milk\neggs");
        assert_eq!(draft.due_time, "2024-05-01T09:30");
    }

    #[test]
    fn test_absent_due_time_is_empty() {
        let draft = TodoDraft::from_display(Some("a".into()), Some("b".into()), None);
        assert_eq!(draft.due_time, "");
    }

    #[test]
    fn test_body_skips_empty_due_time() {
        let draft = TodoDraft { summary: "a".into(), task: "b".into(), due_time: String::new() };
        assert_eq!(draft.to_body().encode(), "summary=a&task=b");

        let draft = TodoDraft { due_time: "2024-05-01T09:30".into(), ..draft };
        assert_eq!(draft.to_body().get("duetime"), Some("2024-05-01T09:30"));
    }

    #[test]
    fn test_parse_todo_id() {
        assert_eq!(parse_todo_id("42"), Some(42));
        assert_eq!(parse_todo_id(" 7 "), Some(7));
        assert_eq!(parse_todo_id("abc"), None);
        assert_eq!(parse_todo_id(""), None);
    }
}
