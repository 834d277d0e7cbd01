pub mod answer_sheet;
pub mod dashboard;
pub mod dialogue;
pub mod flashcard;
pub mod flashcard_deck;
pub mod level;
pub mod passage;
pub mod playback;
pub mod quiz_item;
pub mod quiz_progress;
pub mod speaking;

pub use answer_sheet::{AnswerSheet, PassagePractice};
pub use dashboard::{Dashboard, Skill};
pub use dialogue::{DialogueLine, DialogueScenario, PronunciationDrill};
pub use flashcard::FlashcardItem;
pub use flashcard_deck::FlashcardDeck;
pub use level::Level;
pub use passage::PassageItem;
pub use playback::{ListeningPractice, PlaybackSpeed, SimulatedPlayback};
pub use quiz_item::{Answerable, QuizItem};
pub use quiz_progress::{QuizProgress, SubmitOutcome};
pub use speaking::{PhraseChecklist, SimulatedRecording, SpeakingPractice};
