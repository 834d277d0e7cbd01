//! Batch comprehension quiz: every question is answered, then all are graded at once.

use super::{Answerable, PassageItem};
use crate::error::ContentError;
use std::collections::BTreeMap;
use tracing::{debug, info};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnswerSheet {
    question_count: usize,
    answers: BTreeMap<usize, usize>,
    show_results: bool,
}

impl AnswerSheet {
    pub fn new(question_count: usize) -> Self {
        Self {
            question_count,
            answers: BTreeMap::new(),
            show_results: false,
        }
    }

    pub fn answer(&self, question: usize) -> Option<usize> {
        self.answers.get(&question).copied()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn show_results(&self) -> bool {
        self.show_results
    }

    /// Records a choice. Ignored once results are shown or for an unknown question.
    pub fn choose(&mut self, question: usize, choice: usize) -> bool {
        if self.show_results || question >= self.question_count {
            return false;
        }
        self.answers.insert(question, choice);
        true
    }

    pub fn can_submit(&self) -> bool {
        !self.show_results && self.answers.len() == self.question_count
    }

    /// Reveals results. No-op until every question has an answer.
    pub fn submit(&mut self) -> bool {
        if !self.can_submit() {
            debug!(
                answered = self.answers.len(),
                total = self.question_count,
                "submit ignored, sheet incomplete"
            );
            return false;
        }
        self.show_results = true;
        true
    }

    /// Number of correct answers, once results are shown.
    pub fn score<T: Answerable>(&self, questions: &[T]) -> Option<usize> {
        if !self.show_results {
            return None;
        }
        let correct = questions
            .iter()
            .enumerate()
            .filter(|(i, q)| self.answer(*i).is_some_and(|a| q.is_correct_choice(a)))
            .count();
        Some(correct)
    }

    pub fn reset(&mut self) {
        self.answers.clear();
        self.show_results = false;
    }
}

/// A list of passages with one selected and its answer sheet.
#[derive(Clone, Debug)]
pub struct PassagePractice {
    passages: Vec<PassageItem>,
    selected: usize,
    sheet: AnswerSheet,
}

impl PassagePractice {
    pub fn new(passages: Vec<PassageItem>) -> Result<Self, ContentError> {
        let Some(first) = passages.first() else {
            return Err(ContentError::Empty {
                what: "passage list",
            });
        };
        let sheet = AnswerSheet::new(first.questions.len());
        Ok(Self {
            passages,
            selected: 0,
            sheet,
        })
    }

    pub fn passages(&self) -> &[PassageItem] {
        &self.passages
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn passage(&self) -> &PassageItem {
        &self.passages[self.selected]
    }

    pub fn sheet(&self) -> &AnswerSheet {
        &self.sheet
    }

    pub fn sheet_mut(&mut self) -> &mut AnswerSheet {
        &mut self.sheet
    }

    /// Switches passage and clears the answer sheet. Out-of-range indices are ignored.
    pub fn select_passage(&mut self, index: usize) -> bool {
        let Some(passage) = self.passages.get(index) else {
            return false;
        };
        self.selected = index;
        self.sheet = AnswerSheet::new(passage.questions.len());
        info!(title = %passage.title, "passage selected");
        true
    }

    pub fn score(&self) -> Option<usize> {
        self.sheet.score(&self.passage().questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Level, QuizItem};

    fn question(correct_index: usize) -> QuizItem {
        QuizItem {
            prompt: "Q".into(),
            choices: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_index,
            explanation: None,
            category: None,
        }
    }

    fn passage(title: &str, correct: &[usize]) -> PassageItem {
        PassageItem {
            title: title.into(),
            level: Level::Intermediate,
            topic: "Education".into(),
            duration_secs: 300,
            body: "Body".into(),
            questions: correct.iter().copied().map(question).collect(),
        }
    }

    #[test]
    fn test_submit_requires_every_answer() {
        let questions = vec![question(1), question(2), question(3)];
        let mut sheet = AnswerSheet::new(questions.len());
        sheet.choose(0, 1);
        sheet.choose(2, 3);
        assert!(!sheet.can_submit());
        assert!(!sheet.submit());
        assert_eq!(sheet.score(&questions), None);

        sheet.choose(1, 0);
        assert!(sheet.submit());
        assert_eq!(sheet.score(&questions), Some(2));
    }

    #[test]
    fn test_choices_locked_after_submit() {
        let questions = vec![question(1)];
        let mut sheet = AnswerSheet::new(1);
        sheet.choose(0, 0);
        sheet.submit();
        assert!(!sheet.choose(0, 1));
        assert_eq!(sheet.answer(0), Some(0));
        assert_eq!(sheet.score(&questions), Some(0));
    }

    #[test]
    fn test_unknown_question_ignored() {
        let mut sheet = AnswerSheet::new(2);
        assert!(!sheet.choose(2, 0));
        assert_eq!(sheet.answered_count(), 0);
    }

    #[test]
    fn test_reset_clears_answers() {
        let mut sheet = AnswerSheet::new(1);
        sheet.choose(0, 0);
        sheet.submit();
        sheet.reset();
        assert_eq!(sheet.answered_count(), 0);
        assert!(!sheet.show_results());
    }

    #[test]
    fn test_selecting_passage_resets_sheet() {
        let mut practice =
            PassagePractice::new(vec![passage("one", &[1, 2, 3]), passage("two", &[0, 1])])
                .unwrap();
        practice.sheet_mut().choose(0, 1);
        assert!(practice.select_passage(1));
        assert_eq!(practice.passage().title, "two");
        assert_eq!(practice.sheet().answered_count(), 0);

        practice.sheet_mut().choose(0, 0);
        practice.sheet_mut().choose(1, 1);
        practice.sheet_mut().submit();
        assert_eq!(practice.score(), Some(2));

        assert!(!practice.select_passage(5));
        assert_eq!(practice.selected_index(), 1);
    }
}
