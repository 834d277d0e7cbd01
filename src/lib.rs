pub mod config;
pub mod content;
pub mod error;
pub mod models;
pub mod route;
pub mod speech;

pub use config::AppConfig;
pub use content::Library;
pub use error::{ContentError, TrainerError};
pub use models::{FlashcardDeck, PassagePractice, QuizItem, QuizProgress};
pub use route::Route;
