use super::{PageContext, comprehension_quiz, level_badge, page_header, tag};
use eframe::egui::{self, RichText};
use english_trainer_app::models::PassagePractice;
use english_trainer_app::{ContentError, Library};

const EXCERPT_CHARS: usize = 150;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
enum Tab {
    #[default]
    Article,
    Library,
}

pub struct ReadingPage {
    practice: PassagePractice,
    tab: Tab,
}

impl ReadingPage {
    pub fn new(library: &Library) -> Result<Self, ContentError> {
        Ok(Self {
            practice: PassagePractice::new(library.reading.clone())?,
            tab: Tab::default(),
        })
    }

    pub fn show(&mut self, ui: &mut egui::Ui, _cx: &PageContext<'_>) {
        page_header(ui, "Reading", "Improve reading comprehension across many topics");

        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.tab, Tab::Article, "Article");
            ui.selectable_value(&mut self.tab, Tab::Library, "Article library");
        });
        ui.separator();

        match self.tab {
            Tab::Article => self.render_article(ui),
            Tab::Library => self.render_library(ui),
        }
    }

    fn render_article(&mut self, ui: &mut egui::Ui) {
        let passage = self.practice.passage().clone();

        ui.group(|ui| {
            ui.heading(&passage.title);
            ui.horizontal(|ui| {
                level_badge(ui, passage.level);
                tag(ui, &passage.topic);
                tag(ui, &passage.duration_label());
            });
        });
        ui.add_space(8.0);

        ui.group(|ui| {
            for paragraph in passage.paragraphs() {
                ui.label(RichText::new(paragraph).size(15.0));
                ui.add_space(6.0);
            }
        });
        ui.add_space(8.0);

        ui.group(|ui| {
            comprehension_quiz(ui, &passage.questions, self.practice.sheet_mut());
        });
    }

    fn render_library(&mut self, ui: &mut egui::Ui) {
        let mut chosen = None;
        for (index, passage) in self.practice.passages().iter().enumerate() {
            let selected = index == self.practice.selected_index();
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    let title = RichText::new(&passage.title).strong();
                    if ui.selectable_label(selected, title).clicked() {
                        chosen = Some(index);
                    }
                    level_badge(ui, passage.level);
                    tag(ui, &passage.duration_label());
                });
                ui.label(RichText::new(passage.excerpt(EXCERPT_CHARS)).weak());
                ui.horizontal(|ui| {
                    tag(ui, &passage.topic);
                    ui.small(format!("{} questions", passage.questions.len()));
                });
            });
        }

        if let Some(index) = chosen {
            self.practice.select_passage(index);
            self.tab = Tab::Article;
        }
    }
}
