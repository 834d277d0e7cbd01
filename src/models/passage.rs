//! Reading articles and listening transcripts, each with comprehension questions.
use super::{Level, QuizItem};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PassageItem {
    pub title: String,
    pub level: Level,
    pub topic: String,
    pub duration_secs: u32,
    pub body: String,
    pub questions: Vec<QuizItem>,
}

impl PassageItem {
    /// Paragraphs are separated by blank lines.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.body
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// First `max_chars` characters of the body, for library listings.
    pub fn excerpt(&self, max_chars: usize) -> String {
        let mut chars = self.body.chars();
        let head: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            format!("{head}...")
        } else {
            head
        }
    }

    pub fn duration_label(&self) -> String {
        let minutes = self.duration_secs / 60;
        if minutes > 0 {
            format!("{minutes} min")
        } else {
            format!("{}s", self.duration_secs)
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.questions.is_empty() {
            return Err(format!("passage '{}' has no questions", self.title));
        }
        if self.body.trim().is_empty() {
            return Err(format!("passage '{}' has no text", self.title));
        }
        self.questions.iter().try_for_each(QuizItem::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passage(body: &str) -> PassageItem {
        PassageItem {
            title: "Test".into(),
            level: Level::Intermediate,
            topic: "Education".into(),
            duration_secs: 300,
            body: body.into(),
            questions: vec![QuizItem {
                prompt: "Q?".into(),
                choices: vec!["a".into(), "b".into()],
                correct_index: 1,
                explanation: None,
                category: None,
            }],
        }
    }

    #[test]
    fn test_paragraphs_split_on_blank_lines() {
        let p = passage("First one.\n\nSecond one.\n\n\n\nThird.");
        let paragraphs: Vec<_> = p.paragraphs().collect();
        assert_eq!(paragraphs, vec!["First one.", "Second one.", "Third."]);
    }

    #[test]
    fn test_excerpt_and_duration() {
        let p = passage("abcdef");
        assert_eq!(p.excerpt(3), "abc...");
        assert_eq!(p.excerpt(10), "abcdef");
        assert_eq!(p.duration_label(), "5 min");
    }

    #[test]
    fn test_validate_requires_questions() {
        let mut p = passage("text");
        assert!(p.validate().is_ok());
        p.questions.clear();
        assert!(p.validate().is_err());
    }
}
