//! Step-by-step quiz progress over an ordered list of answerable items.
//!
//! One item is shown at a time. The learner picks a choice, submits it to reveal
//! the feedback, then moves on. Items cycle: stepping past the last item starts
//! over at the first. A correct answer scores once per item, no matter how often
//! it is submitted again.

use super::Answerable;
use crate::error::ContentError;
use std::collections::BTreeSet;
use tracing::debug;

/// Index following `index` in a list of `len` items, wrapping to 0.
pub(crate) fn cycle_next(index: usize, len: usize) -> usize {
    if index + 1 < len { index + 1 } else { 0 }
}

/// Result of a [`QuizProgress::submit`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was selected; state is unchanged.
    NoSelection,
    Correct { newly_scored: bool },
    Incorrect,
}

#[derive(Clone, Debug)]
pub struct QuizProgress<T> {
    items: Vec<T>,
    current_index: usize,
    selected_answer: Option<usize>,
    revealed: bool,
    score: usize,
    answered: BTreeSet<usize>,
    attempted: BTreeSet<usize>,
}

impl<T: Answerable> QuizProgress<T> {
    pub fn new(items: Vec<T>) -> Result<Self, ContentError> {
        if items.is_empty() {
            return Err(ContentError::Empty { what: "quiz" });
        }
        Ok(Self {
            items,
            current_index: 0,
            selected_answer: None,
            revealed: false,
            score: 0,
            answered: BTreeSet::new(),
            attempted: BTreeSet::new(),
        })
    }

    pub fn current(&self) -> &T {
        &self.items[self.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// 1-based position for display.
    pub fn position(&self) -> usize {
        self.current_index + 1
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn selected_answer(&self) -> Option<usize> {
        self.selected_answer
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// Indices of items answered correctly at least once.
    pub fn answered(&self) -> &BTreeSet<usize> {
        &self.answered
    }

    /// Whether the selected answer is the correct one. False with no selection.
    pub fn is_correct(&self) -> bool {
        self.selected_answer
            .is_some_and(|choice| self.current().is_correct_choice(choice))
    }

    /// Picks a choice for the current item.
    ///
    /// Ignored once the answer is revealed or when `choice` is not one of the
    /// item's choices. Returns whether the selection was taken.
    pub fn select(&mut self, choice: usize) -> bool {
        if self.revealed || choice >= self.current().choice_count() {
            return false;
        }
        self.selected_answer = Some(choice);
        self.revealed = false;
        true
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let Some(choice) = self.selected_answer else {
            return SubmitOutcome::NoSelection;
        };
        self.revealed = true;
        self.attempted.insert(self.current_index);

        if self.current().is_correct_choice(choice) {
            let newly_scored = self.answered.insert(self.current_index);
            if newly_scored {
                self.score += 1;
            }
            debug!(index = self.current_index, score = self.score, newly_scored, "correct answer");
            SubmitOutcome::Correct { newly_scored }
        } else {
            debug!(index = self.current_index, choice, "incorrect answer");
            SubmitOutcome::Incorrect
        }
    }

    pub fn next(&mut self) {
        self.selected_answer = None;
        self.revealed = false;
        self.current_index = cycle_next(self.current_index, self.items.len());
    }

    pub fn reset(&mut self) {
        self.current_index = 0;
        self.selected_answer = None;
        self.revealed = false;
        self.score = 0;
        self.answered.clear();
        self.attempted.clear();
    }

    /// Correct items over distinct items submitted, as a rounded percentage.
    pub fn accuracy_percent(&self) -> u32 {
        if self.attempted.is_empty() {
            return 0;
        }
        ((self.score as f64 / self.attempted.len() as f64) * 100.0).round() as u32
    }
}
