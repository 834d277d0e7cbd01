//! A single multiple-choice question.
use serde::{Deserialize, Serialize};

/// Anything with a fixed choice list and one correct choice.
pub trait Answerable {
    fn choice_count(&self) -> usize;
    fn correct_index(&self) -> usize;

    fn is_correct_choice(&self, choice: usize) -> bool {
        choice == self.correct_index()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizItem {
    pub prompt: String,
    pub choices: Vec<String>,
    pub correct_index: usize,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl QuizItem {
    /// Checks the choice list is non-empty and the answer points into it.
    pub fn validate(&self) -> Result<(), String> {
        if self.choices.is_empty() {
            return Err(format!("question '{}' has no choices", self.prompt));
        }
        if self.correct_index >= self.choices.len() {
            return Err(format!(
                "question '{}' marks choice {} correct but only has {} choices",
                self.prompt,
                self.correct_index,
                self.choices.len()
            ));
        }
        Ok(())
    }

    pub fn correct_choice(&self) -> Option<&str> {
        self.choices.get(self.correct_index).map(String::as_str)
    }
}

impl Answerable for QuizItem {
    fn choice_count(&self) -> usize {
        self.choices.len()
    }

    fn correct_index(&self) -> usize {
        self.correct_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(correct_index: usize) -> QuizItem {
        QuizItem {
            prompt: "She _____ to the gym every morning.".to_string(),
            choices: vec!["go".into(), "goes".into(), "going".into(), "gone".into()],
            correct_index,
            explanation: None,
            category: Some("Simple present".into()),
        }
    }

    #[test]
    fn test_validate_accepts_in_bounds_answer() {
        let q = item(1);
        assert!(q.validate().is_ok());
        assert_eq!(q.correct_choice(), Some("goes"));
        assert!(q.is_correct_choice(1));
        assert!(!q.is_correct_choice(0));
    }

    #[test]
    fn test_validate_rejects_out_of_bounds_answer() {
        assert!(item(4).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_choices() {
        let mut q = item(0);
        q.choices.clear();
        assert!(q.validate().is_err());
    }
}
