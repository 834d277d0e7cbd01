use super::{ACCENT, CORRECT, PageContext, choice_list, page_header, tag};
use eframe::egui::{self, RichText};
use english_trainer_app::models::{QuizItem, QuizProgress, SubmitOutcome};
use english_trainer_app::{ContentError, Library};
use tracing::info;

pub struct GrammarPage {
    quiz: QuizProgress<QuizItem>,
}

impl GrammarPage {
    pub fn new(library: &Library) -> Result<Self, ContentError> {
        Ok(Self {
            quiz: QuizProgress::new(library.grammar.questions.clone())?,
        })
    }

    pub fn show(&mut self, ui: &mut egui::Ui, cx: &PageContext<'_>) {
        page_header(ui, "Grammar", "Learn grammar step by step, with detailed explanations");
        self.render_score(ui);
        ui.add_space(12.0);
        self.render_question(ui);
        ui.add_space(16.0);
        render_topics(ui, cx);
    }

    fn render_score(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label("Score");
                    ui.label(
                        RichText::new(format!("{} / {}", self.quiz.score(), self.quiz.len()))
                            .size(24.0)
                            .color(ACCENT),
                    );
                });
                ui.add_space(40.0);
                ui.vertical(|ui| {
                    ui.label("Accuracy");
                    ui.label(
                        RichText::new(format!("{}%", self.quiz.accuracy_percent()))
                            .size(24.0)
                            .color(ACCENT),
                    );
                });
                ui.add_space(40.0);
                if ui.button("Start over").clicked() {
                    self.quiz.reset();
                    info!("grammar quiz reset");
                }
            });
        });
    }

    fn render_question(&mut self, ui: &mut egui::Ui) {
        let revealed = self.quiz.is_revealed();
        let selected = self.quiz.selected_answer();
        let question = self.quiz.current().clone();

        ui.group(|ui| {
            ui.horizontal(|ui| {
                if let Some(category) = &question.category {
                    tag(ui, category);
                }
                ui.label(format!("Question {} / {}", self.quiz.position(), self.quiz.len()));
            });
            ui.label(RichText::new(&question.prompt).size(20.0).strong());
            ui.add_space(8.0);

            if let Some(choice) = choice_list(ui, &question, selected, revealed) {
                self.quiz.select(choice);
            }

            if revealed {
                ui.add_space(8.0);
                let heading = if self.quiz.is_correct() {
                    RichText::new("✅ Correct!").color(CORRECT).strong()
                } else {
                    RichText::new("💡 Explanation").strong()
                };
                ui.label(heading);
                if !self.quiz.is_correct() {
                    if let Some(answer) = question.correct_choice() {
                        ui.label(format!("Correct answer: {answer}"));
                    }
                }
                if let Some(explanation) = &question.explanation {
                    ui.label(explanation);
                }
            }

            ui.add_space(8.0);
            if !revealed {
                let submit = ui.add_enabled(selected.is_some(), egui::Button::new("Submit answer"));
                if submit.clicked() {
                    let outcome = self.quiz.submit();
                    if outcome != SubmitOutcome::NoSelection {
                        info!(
                            question = self.quiz.position(),
                            ?outcome,
                            score = self.quiz.score(),
                            "grammar answer submitted"
                        );
                    }
                }
            } else if ui.button("Next question →").clicked() {
                self.quiz.next();
            }
        });
    }
}

fn render_topics(ui: &mut egui::Ui, cx: &PageContext<'_>) {
    ui.heading("Grammar topics");
    egui::Grid::new("grammar_topics")
        .num_columns(3)
        .spacing([16.0, 12.0])
        .show(ui, |ui| {
            for (i, topic) in cx.library.grammar.topics.iter().enumerate() {
                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&topic.icon).size(24.0));
                        ui.vertical(|ui| {
                            ui.strong(&topic.name);
                            ui.small(&topic.description);
                        });
                    });
                });
                if i % 3 == 2 {
                    ui.end_row();
                }
            }
        });
}
