//! Built-in learning material: vocabulary, grammar, reading, listening,
//! speaking and the dashboard figures.
//!
//! Everything is loaded once at start-up and never written back.

pub mod json;

use crate::error::ContentError;
use crate::models::{
    Dashboard, DialogueScenario, FlashcardItem, PassageItem, PronunciationDrill, QuizItem,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

pub const VOCABULARY: &str = "vocabulary";
pub const GRAMMAR: &str = "grammar";
pub const READING: &str = "reading";
pub const LISTENING: &str = "listening";
pub const SPEAKING: &str = "speaking";
pub const DASHBOARD: &str = "dashboard";

fn embedded_text(dataset: &str) -> Option<&'static str> {
    Some(match dataset {
        VOCABULARY => include_str!("data/vocabulary.json"),
        GRAMMAR => include_str!("data/grammar.json"),
        READING => include_str!("data/reading.json"),
        LISTENING => include_str!("data/listening.json"),
        SPEAKING => include_str!("data/speaking.json"),
        DASHBOARD => include_str!("data/dashboard.json"),
        _ => return None,
    })
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GrammarTopic {
    pub name: String,
    pub description: String,
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GrammarSet {
    pub questions: Vec<QuizItem>,
    pub topics: Vec<GrammarTopic>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeakingSet {
    pub scenarios: Vec<DialogueScenario>,
    pub pronunciation: Vec<PronunciationDrill>,
    #[serde(default)]
    pub tips: Vec<String>,
}

/// All datasets the pages draw from.
#[derive(Clone, Debug)]
pub struct Library {
    pub vocabulary: Vec<FlashcardItem>,
    pub grammar: GrammarSet,
    pub reading: Vec<PassageItem>,
    pub listening: Vec<PassageItem>,
    pub speaking: SpeakingSet,
    pub dashboard: Dashboard,
}

impl Library {
    /// Datasets compiled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        let library = Self::from_source(|dataset| {
            embedded_text(dataset)
                .map(str::to_string)
                .ok_or_else(|| ContentError::invalid(dataset, "no embedded copy"))
        })?;
        info!("loaded embedded content");
        Ok(library)
    }

    /// Datasets read from `<dir>/<name>.json`.
    pub fn load_from_dir(dir: &Path) -> Result<Self, ContentError> {
        let library = Self::from_source(|dataset| json::read_dataset(dir, dataset))?;
        info!(dir = %dir.display(), "loaded content from directory");
        Ok(library)
    }

    /// Uses `content_dir` when given, otherwise the embedded datasets.
    pub fn load(content_dir: Option<&Path>) -> Result<Self, ContentError> {
        match content_dir {
            Some(dir) => Self::load_from_dir(dir),
            None => Self::embedded(),
        }
    }

    fn from_source<F>(read: F) -> Result<Self, ContentError>
    where
        F: Fn(&str) -> Result<String, ContentError>,
    {
        let library = Self {
            vocabulary: json::parse_dataset(VOCABULARY, &read(VOCABULARY)?)?,
            grammar: json::parse_dataset(GRAMMAR, &read(GRAMMAR)?)?,
            reading: json::parse_dataset(READING, &read(READING)?)?,
            listening: json::parse_dataset(LISTENING, &read(LISTENING)?)?,
            speaking: json::parse_dataset(SPEAKING, &read(SPEAKING)?)?,
            dashboard: json::parse_dataset(DASHBOARD, &read(DASHBOARD)?)?,
        };
        library.validate()?;
        Ok(library)
    }

    /// Checks that lists are non-empty and every answer index is in range.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.vocabulary.is_empty() {
            return Err(ContentError::invalid(VOCABULARY, "no words"));
        }

        if self.grammar.questions.is_empty() {
            return Err(ContentError::invalid(GRAMMAR, "no questions"));
        }
        for question in &self.grammar.questions {
            question
                .validate()
                .map_err(|reason| ContentError::invalid(GRAMMAR, reason))?;
        }

        for (dataset, passages) in [(READING, &self.reading), (LISTENING, &self.listening)] {
            if passages.is_empty() {
                return Err(ContentError::invalid(dataset, "no passages"));
            }
            for passage in passages {
                passage
                    .validate()
                    .map_err(|reason| ContentError::invalid(dataset, reason))?;
            }
        }

        if self.speaking.scenarios.is_empty() {
            return Err(ContentError::invalid(SPEAKING, "no scenarios"));
        }
        for scenario in &self.speaking.scenarios {
            scenario
                .validate()
                .map_err(|reason| ContentError::invalid(SPEAKING, reason))?;
        }

        self.dashboard
            .validate()
            .map_err(|reason| ContentError::invalid(DASHBOARD, reason))
    }

    /// Counts for the home page module cards.
    pub fn stats(&self) -> LibraryStats {
        LibraryStats {
            words: self.vocabulary.len(),
            grammar_questions: self.grammar.questions.len(),
            articles: self.reading.len(),
            recordings: self.listening.len(),
            scenarios: self.speaking.scenarios.len(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LibraryStats {
    pub words: usize,
    pub grammar_questions: usize,
    pub articles: usize,
    pub recordings: usize,
    pub scenarios: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Answerable, FlashcardDeck, QuizProgress};
    use std::fs;

    #[test]
    fn test_embedded_library_is_valid() {
        let library = Library::embedded().unwrap();
        assert_eq!(library.vocabulary.len(), 5);
        assert_eq!(library.grammar.questions.len(), 5);
        assert_eq!(library.grammar.topics.len(), 6);
        assert_eq!(library.reading.len(), 2);
        assert_eq!(library.listening.len(), 2);
        assert_eq!(library.speaking.scenarios.len(), 4);
        assert_eq!(library.speaking.pronunciation.len(), 5);
        assert_eq!(library.dashboard.weekly.len(), 7);
        assert_eq!(library.dashboard.unlocked_count(), 5);
        assert!(library.vocabulary.iter().all(|w| !w.mastered));
    }

    #[test]
    fn test_embedded_grammar_first_answer() {
        let library = Library::embedded().unwrap();
        let mut quiz = QuizProgress::new(library.grammar.questions).unwrap();
        assert_eq!(quiz.current().correct_index(), 1);
        quiz.select(1);
        quiz.submit();
        assert_eq!(quiz.score(), 1);
    }

    #[test]
    fn test_embedded_vocabulary_reset() {
        let library = Library::embedded().unwrap();
        let mut deck = FlashcardDeck::new(library.vocabulary).unwrap();
        deck.know();
        deck.know();
        assert_eq!(deck.mastered_count(), 2);
        deck.reset_progress();
        assert_eq!(deck.mastered_count(), 0);
    }

    #[test]
    fn test_validate_rejects_bad_answer_index() {
        let mut library = Library::embedded().unwrap();
        library.reading[0].questions[0].correct_index = 9;
        let err = library.validate().unwrap_err();
        assert!(matches!(&err, ContentError::Invalid { dataset, .. } if dataset == READING));
    }

    #[test]
    fn test_validate_rejects_empty_lists() {
        let mut library = Library::embedded().unwrap();
        library.listening.clear();
        assert!(library.validate().is_err());

        let mut library = Library::embedded().unwrap();
        library.speaking.scenarios[0].key_phrases.clear();
        assert!(library.validate().is_err());
    }

    #[test]
    fn test_load_from_dir() {
        let dir = std::env::temp_dir().join("english_trainer_library_dir");
        fs::create_dir_all(&dir).unwrap();
        for dataset in [VOCABULARY, GRAMMAR, READING, LISTENING, SPEAKING, DASHBOARD] {
            let text = embedded_text(dataset).unwrap();
            fs::write(json::dataset_path(&dir, dataset), text).unwrap();
        }

        let library = Library::load(Some(dir.as_path())).unwrap();
        assert_eq!(library.stats(), Library::embedded().unwrap().stats());

        fs::remove_file(json::dataset_path(&dir, DASHBOARD)).unwrap();
        let err = Library::load_from_dir(&dir).unwrap_err();
        assert!(matches!(&err, ContentError::Io { dataset, .. } if dataset == DASHBOARD));

        let _ = fs::remove_dir_all(&dir);
    }
}
