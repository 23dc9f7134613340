//! Task records as persisted in the database file.
//!
//! Field names match the on-disk format (`Description`, `Priority`, `Done`)
//! so existing database files stay readable.

use serde::{Deserialize, Serialize};

/// Default priority used by the CLI when `--priority` is omitted
pub const DEFAULT_PRIORITY: i64 = 2;

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Priority")]
    pub priority: i64,
    #[serde(rename = "Done")]
    pub done: bool,
}

impl Task {
    /// Build a new, not yet done task from description words.
    ///
    /// Words are joined with single spaces and the result always ends
    /// with a period.
    pub fn new<S: AsRef<str>>(words: &[S], priority: i64) -> Self {
        Self {
            description: normalize_description(words),
            priority,
            done: false,
        }
    }
}

/// Join description words and terminate the sentence with a period
pub fn normalize_description<S: AsRef<str>>(words: &[S]) -> String {
    let mut text = words
        .iter()
        .map(|word| word.as_ref())
        .collect::<Vec<_>>()
        .join(" ");
    if !text.ends_with('.') {
        text.push('.');
    }
    text
}

/// Pair each task with its 1-based positional ID
pub fn numbered(tasks: &[Task]) -> impl Iterator<Item = (usize, &Task)> {
    tasks.iter().enumerate().map(|(idx, task)| (idx + 1, task))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_joins_words_and_adds_period() {
        let task = Task::new(&["Clean", "the", "house"], 1);
        assert_eq!(task.description, "Clean the house.");
        assert_eq!(task.priority, 1);
        assert!(!task.done);
    }

    #[test]
    fn existing_period_is_not_doubled() {
        assert_eq!(normalize_description(&["Buy milk."]), "Buy milk.");
    }

    #[test]
    fn persisted_field_names() {
        let task = Task::new(&["Walk", "dog"], 3);
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["Description"], "Walk dog.");
        assert_eq!(json["Priority"], 3);
        assert_eq!(json["Done"], false);
    }

    #[test]
    fn numbered_is_one_based() {
        let tasks = vec![Task::new(&["a"], 1), Task::new(&["b"], 2)];
        let ids: Vec<usize> = numbered(&tasks).map(|(id, _)| id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
