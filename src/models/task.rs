use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    pub label: String,
    pub done: bool,
}

impl TaskItem {
    pub fn pending(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            done: false,
        }
    }
}
