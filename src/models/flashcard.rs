//! Vocabulary card: a term with its pronunciation, translation and an example sentence.
use super::Level;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlashcardItem {
    pub term: String,
    pub pronunciation: String,
    pub translation: String,
    pub example: String,
    pub example_translation: String,
    pub level: Level,
    #[serde(default)]
    pub mastered: bool,
}

impl FlashcardItem {
    pub fn mark_mastered(&mut self) {
        self.mastered = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mastered_defaults_to_false() {
        let json = r#"{
            "term": "accomplish",
            "pronunciation": "/əˈkʌmplɪʃ/",
            "translation": "完成，实现",
            "example": "She accomplished her goal.",
            "example_translation": "她完成了她的目标。",
            "level": "intermediate"
        }"#;
        let mut card: FlashcardItem = serde_json::from_str(json).unwrap();
        assert!(!card.mastered);
        assert_eq!(card.level, Level::Intermediate);

        card.mark_mastered();
        assert!(card.mastered);
    }
}
