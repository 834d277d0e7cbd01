//! One renderer per route. Page state lives only as long as the page is open.

mod grammar;
mod home;
mod listening;
mod progress;
mod reading;
mod speaking;
mod vocabulary;

use eframe::egui::{self, Color32, RichText};
use english_trainer_app::models::{AnswerSheet, Level, QuizItem};
use english_trainer_app::speech::{SpeechRequest, SpeechSynthesizer};
use english_trainer_app::{ContentError, Library, Route};
use std::time::Duration;

pub use grammar::GrammarPage;
pub use listening::ListeningPage;
pub use reading::ReadingPage;
pub use speaking::SpeakingPage;
pub use vocabulary::VocabularyPage;

pub const CORRECT: Color32 = Color32::from_rgb(22, 163, 74);
pub const WRONG: Color32 = Color32::from_rgb(220, 38, 38);
pub const ACCENT: Color32 = Color32::from_rgb(124, 58, 237);

/// Timer settings handed to pages that simulate audio.
#[derive(Clone, Copy, Debug)]
pub struct Timings {
    pub playback_step: u8,
    pub playback_interval: Duration,
    pub recording: Duration,
}

/// Read-only services a page may use while drawing.
pub struct PageContext<'a> {
    pub library: &'a Library,
    speech: &'a dyn SpeechSynthesizer,
    lang: &'a str,
    rate: f32,
}

impl<'a> PageContext<'a> {
    pub fn new(
        library: &'a Library,
        speech: &'a dyn SpeechSynthesizer,
        lang: &'a str,
        rate: f32,
    ) -> Self {
        Self {
            library,
            speech,
            lang,
            rate,
        }
    }

    pub fn speak(&self, text: &str) {
        self.speech
            .speak(&SpeechRequest::new(text).with_voice(self.lang, self.rate));
    }

    /// Small speaker button; reads `text` aloud when clicked.
    pub fn speak_button(&self, ui: &mut egui::Ui, text: &str) {
        let button = ui
            .add_enabled(self.speech.is_available(), egui::Button::new("🔊").small())
            .on_hover_text("Listen");
        if button.clicked() {
            self.speak(text);
        }
    }
}

pub enum Page {
    Home,
    Vocabulary(VocabularyPage),
    Grammar(GrammarPage),
    Reading(ReadingPage),
    Listening(ListeningPage),
    Speaking(SpeakingPage),
    Progress,
}

impl Page {
    pub fn open(route: Route, library: &Library, timings: &Timings) -> Result<Self, ContentError> {
        Ok(match route {
            Route::Home => Page::Home,
            Route::Vocabulary => Page::Vocabulary(VocabularyPage::new(library)?),
            Route::Grammar => Page::Grammar(GrammarPage::new(library)?),
            Route::Reading => Page::Reading(ReadingPage::new(library)?),
            Route::Listening => Page::Listening(ListeningPage::new(library, timings)?),
            Route::Speaking => Page::Speaking(SpeakingPage::new(library, timings)?),
            Route::Progress => Page::Progress,
        })
    }

    pub fn tick(&mut self, elapsed: Duration) {
        match self {
            Page::Listening(page) => page.tick(elapsed),
            Page::Speaking(page) => page.tick(elapsed),
            _ => {}
        }
    }

    /// How soon the next frame is needed while a timer runs.
    pub fn repaint_interval(&self) -> Option<Duration> {
        match self {
            Page::Listening(page) => page.repaint_interval(),
            Page::Speaking(page) => page.repaint_interval(),
            _ => None,
        }
    }

    /// Draws the page. Returns a route when the page asks to navigate.
    pub fn show(&mut self, ui: &mut egui::Ui, cx: &PageContext<'_>) -> Option<Route> {
        match self {
            Page::Home => return home::show(ui, cx),
            Page::Vocabulary(page) => page.show(ui, cx),
            Page::Grammar(page) => page.show(ui, cx),
            Page::Reading(page) => page.show(ui, cx),
            Page::Listening(page) => page.show(ui, cx),
            Page::Speaking(page) => page.show(ui, cx),
            Page::Progress => progress::show(ui, cx),
        }
        None
    }
}

pub fn page_header(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.vertical_centered(|ui| {
        ui.heading(RichText::new(title).size(28.0).color(ACCENT).strong());
        ui.label(subtitle);
    });
    ui.add_space(12.0);
}

pub fn level_badge(ui: &mut egui::Ui, level: Level) {
    let color = if level.is_advanced() {
        WRONG
    } else {
        Color32::GRAY
    };
    ui.label(RichText::new(level.label()).small().strong().color(color));
}

pub fn tag(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).small().italics());
}

/// Radio list for one question. Returns the choice clicked this frame.
///
/// Once `revealed`, the list is locked, the correct choice is marked and a wrong
/// selection is flagged.
pub fn choice_list(
    ui: &mut egui::Ui,
    question: &QuizItem,
    selected: Option<usize>,
    revealed: bool,
) -> Option<usize> {
    let mut clicked = None;
    for (index, choice) in question.choices.iter().enumerate() {
        ui.horizontal(|ui| {
            let is_selected = selected == Some(index);
            let radio = ui.add_enabled(!revealed, egui::RadioButton::new(is_selected, choice));
            if radio.clicked() {
                clicked = Some(index);
            }
            if revealed {
                if index == question.correct_index {
                    ui.label(RichText::new("✔").color(CORRECT));
                } else if is_selected {
                    ui.label(RichText::new("✘").color(WRONG));
                }
            }
        });
    }
    clicked
}

/// Comprehension questions answered as a batch, with submit and retry buttons.
pub fn comprehension_quiz(ui: &mut egui::Ui, questions: &[QuizItem], sheet: &mut AnswerSheet) {
    ui.horizontal(|ui| {
        ui.strong("Comprehension questions");
        if let Some(score) = sheet.score(questions) {
            ui.label(
                RichText::new(format!("Score: {score} / {}", questions.len()))
                    .strong()
                    .color(CORRECT),
            );
        }
    });
    ui.label("Answer every question, then submit.");
    ui.add_space(6.0);

    let revealed = sheet.show_results();
    for (index, question) in questions.iter().enumerate() {
        ui.group(|ui| {
            ui.label(RichText::new(format!("{}. {}", index + 1, question.prompt)).strong());
            if let Some(choice) = choice_list(ui, question, sheet.answer(index), revealed) {
                sheet.choose(index, choice);
            }
        });
    }

    ui.add_space(6.0);
    if revealed {
        if ui.button("Try again").clicked() {
            sheet.reset();
        }
    } else if ui
        .add_enabled(sheet.can_submit(), egui::Button::new("Submit answers"))
        .clicked()
    {
        sheet.submit();
    }
}
