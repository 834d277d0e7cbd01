use super::{CORRECT, PageContext, WRONG, level_badge, page_header};
use eframe::egui::{self, RichText};
use english_trainer_app::models::{FlashcardDeck, FlashcardItem};
use english_trainer_app::{ContentError, Library};

#[derive(Clone, Copy, PartialEq, Eq, Default)]
enum Tab {
    #[default]
    Flashcards,
    List,
}

pub struct VocabularyPage {
    deck: FlashcardDeck,
    tab: Tab,
}

impl VocabularyPage {
    pub fn new(library: &Library) -> Result<Self, ContentError> {
        Ok(Self {
            deck: FlashcardDeck::new(library.vocabulary.clone())?,
            tab: Tab::default(),
        })
    }

    pub fn show(&mut self, ui: &mut egui::Ui, cx: &PageContext<'_>) {
        page_header(ui, "Vocabulary", "Memorise English words quickly with flashcards");
        self.render_progress(ui);
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.tab, Tab::Flashcards, "Flashcards");
            ui.selectable_value(&mut self.tab, Tab::List, "Word list");
        });
        ui.separator();

        match self.tab {
            Tab::Flashcards => self.render_flashcard(ui, cx),
            Tab::List => {
                for card in self.deck.cards() {
                    render_list_entry(ui, cx, card);
                }
            }
        }
    }

    fn render_progress(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.strong("Progress");
                if ui.button("⟲ Reset").clicked() {
                    self.deck.reset_progress();
                }
            });
            let percent = self.deck.progress_percent();
            ui.label(format!(
                "Mastered {} / {} words ({}%)",
                self.deck.mastered_count(),
                self.deck.total_count(),
                percent.round()
            ));
            ui.add(egui::ProgressBar::new(percent / 100.0));
            ui.horizontal(|ui| {
                ui.label(format!("Total: {}", self.deck.total_count()));
                ui.separator();
                ui.label(RichText::new(format!("Mastered: {}", self.deck.mastered_count())).color(CORRECT));
                ui.separator();
                ui.label(format!("To learn: {}", self.deck.remaining_count()));
            });
        });
    }

    fn render_flashcard(&mut self, ui: &mut egui::Ui, cx: &PageContext<'_>) {
        let card = self.deck.current_card().clone();
        let show_translation = self.deck.show_translation();

        ui.group(|ui| {
            ui.set_min_height(260.0);
            ui.vertical_centered(|ui| {
                level_badge(ui, card.level);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&card.term).size(36.0).strong());
                    cx.speak_button(ui, &card.term);
                });
                ui.label(RichText::new(&card.pronunciation).weak());
                ui.add_space(12.0);

                let toggle_text = if show_translation {
                    "Hide meaning"
                } else {
                    "Show meaning and example"
                };
                if ui.button(toggle_text).clicked() {
                    self.deck.toggle_translation();
                }

                if show_translation {
                    ui.add_space(8.0);
                    ui.label(RichText::new(&card.translation).size(20.0).strong());
                    ui.separator();
                    ui.label(RichText::new(format!("\"{}\"", card.example)).italics());
                    ui.label(RichText::new(&card.example_translation).weak());
                }
            });
        });

        ui.horizontal(|ui| {
            ui.label(format!(
                "{} / {}",
                self.deck.current_index() + 1,
                self.deck.total_count()
            ));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(RichText::new("✔ I know it").color(CORRECT)).clicked() {
                    self.deck.know();
                }
                if ui.button(RichText::new("✘ Not yet").color(WRONG)).clicked() {
                    self.deck.dont_know();
                }
            });
        });
        ui.small("Tip: reveal the meaning, then mark whether you knew the word.");
    }
}

fn render_list_entry(ui: &mut egui::Ui, cx: &PageContext<'_>, card: &FlashcardItem) {
    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&card.term).size(20.0).strong());
            cx.speak_button(ui, &card.term);
            level_badge(ui, card.level);
            if card.mastered {
                ui.label(RichText::new("★ Mastered").color(CORRECT));
            }
        });
        ui.label(RichText::new(&card.pronunciation).weak());
        ui.strong(&card.translation);
        ui.label(RichText::new(format!("\"{}\"", card.example)).italics());
        ui.small(&card.example_translation);
    });
}
