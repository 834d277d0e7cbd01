//! Speaking material: role-play dialogues and pronunciation drills.
use super::Level;
use serde::{Deserialize, Serialize};

/// Speaker name reserved for the learner's own lines.
pub const LEARNER_SPEAKER: &str = "You";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DialogueLine {
    pub speaker: String,
    pub text: String,
}

impl DialogueLine {
    pub fn is_learner(&self) -> bool {
        self.speaker == LEARNER_SPEAKER
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DialogueScenario {
    pub title: String,
    pub level: Level,
    pub category: String,
    pub lines: Vec<DialogueLine>,
    pub key_phrases: Vec<String>,
}

impl DialogueScenario {
    pub fn validate(&self) -> Result<(), String> {
        if self.lines.is_empty() {
            return Err(format!("scenario '{}' has no dialogue", self.title));
        }
        if self.key_phrases.is_empty() {
            return Err(format!("scenario '{}' has no key phrases", self.title));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PronunciationDrill {
    pub word: String,
    pub phonetic: String,
    pub tip: String,
}
