//! Vocabulary flashcard practice.
//! Cards cycle endlessly; the learner marks each one as known or not.

use super::FlashcardItem;
use super::quiz_progress::cycle_next;
use crate::error::ContentError;
use tracing::{debug, info};

#[derive(Clone, Debug)]
pub struct FlashcardDeck {
    pristine: Vec<FlashcardItem>,
    cards: Vec<FlashcardItem>,
    current_index: usize,
    show_translation: bool,
}

impl FlashcardDeck {
    pub fn new(cards: Vec<FlashcardItem>) -> Result<Self, ContentError> {
        if cards.is_empty() {
            return Err(ContentError::Empty {
                what: "flashcard deck",
            });
        }
        Ok(Self {
            pristine: cards.clone(),
            cards,
            current_index: 0,
            show_translation: false,
        })
    }

    pub fn current_card(&self) -> &FlashcardItem {
        &self.cards[self.current_index]
    }

    pub fn cards(&self) -> &[FlashcardItem] {
        &self.cards
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn show_translation(&self) -> bool {
        self.show_translation
    }

    pub fn toggle_translation(&mut self) {
        self.show_translation = !self.show_translation;
    }

    pub fn next(&mut self) {
        self.show_translation = false;
        self.current_index = cycle_next(self.current_index, self.cards.len());
    }

    /// Marks the current card mastered and moves on.
    pub fn know(&mut self) {
        let index = self.current_index;
        self.cards[index].mark_mastered();
        debug!(term = %self.cards[index].term, "card mastered");
        self.next();
    }

    pub fn dont_know(&mut self) {
        self.next();
    }

    /// Rebuilds the cards from the original dataset and returns to the first one.
    pub fn reset_progress(&mut self) {
        self.cards = self.pristine.clone();
        self.current_index = 0;
        self.show_translation = false;
        info!(cards = self.cards.len(), "vocabulary progress reset");
    }

    pub fn total_count(&self) -> usize {
        self.cards.len()
    }

    pub fn mastered_count(&self) -> usize {
        self.cards.iter().filter(|c| c.mastered).count()
    }

    pub fn remaining_count(&self) -> usize {
        self.total_count() - self.mastered_count()
    }

    pub fn progress_percent(&self) -> f32 {
        self.mastered_count() as f32 / self.total_count() as f32 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Level;

    fn card(term: &str) -> FlashcardItem {
        FlashcardItem {
            term: term.to_string(),
            pronunciation: String::new(),
            translation: String::new(),
            example: String::new(),
            example_translation: String::new(),
            level: Level::Intermediate,
            mastered: false,
        }
    }

    fn deck() -> FlashcardDeck {
        FlashcardDeck::new(
            ["accomplish", "determine", "significant", "perspective", "efficient"]
                .into_iter()
                .map(card)
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_know_marks_mastered_and_advances() {
        let mut deck = deck();
        deck.toggle_translation();
        deck.know();
        assert!(deck.cards()[0].mastered);
        assert_eq!(deck.current_index(), 1);
        assert!(!deck.show_translation());
        assert_eq!(deck.mastered_count(), 1);
        assert_eq!(deck.remaining_count(), 4);
        assert_eq!(deck.progress_percent(), 20.0);
    }

    #[test]
    fn test_know_on_last_card_wraps() {
        let mut deck = deck();
        for _ in 0..4 {
            deck.dont_know();
        }
        deck.know();
        assert_eq!(deck.current_index(), 0);
        assert!(deck.cards()[4].mastered);
        assert_eq!(deck.mastered_count(), 1);
    }

    #[test]
    fn test_reset_progress_clears_mastered() {
        let mut deck = deck();
        deck.know();
        deck.know();
        deck.toggle_translation();

        deck.reset_progress();
        assert_eq!(deck.mastered_count(), 0);
        assert!(deck.cards().iter().all(|c| !c.mastered));
        assert_eq!(deck.current_index(), 0);
        assert!(!deck.show_translation());
        assert_eq!(deck.current_card().term, "accomplish");
    }

    #[test]
    fn test_empty_deck_rejected() {
        assert!(FlashcardDeck::new(Vec::new()).is_err());
    }
}
