use super::{ACCENT, PageContext, Timings, comprehension_quiz, level_badge, page_header, tag};
use eframe::egui::{self, RichText};
use english_trainer_app::models::playback::PROGRESS_MAX;
use english_trainer_app::models::{ListeningPractice, PlaybackSpeed, SimulatedPlayback};
use english_trainer_app::{ContentError, Library};
use std::time::Duration;

pub struct ListeningPage {
    listening: ListeningPractice,
}

impl ListeningPage {
    pub fn new(library: &Library, timings: &Timings) -> Result<Self, ContentError> {
        let playback = SimulatedPlayback::new(timings.playback_step, timings.playback_interval);
        Ok(Self {
            listening: ListeningPractice::new(library.listening.clone(), playback)?,
        })
    }

    pub fn tick(&mut self, elapsed: Duration) {
        self.listening.playback_mut().tick(elapsed);
    }

    pub fn repaint_interval(&self) -> Option<Duration> {
        let playback = self.listening.playback();
        playback.is_playing().then(|| playback.interval())
    }

    pub fn show(&mut self, ui: &mut egui::Ui, cx: &PageContext<'_>) {
        page_header(ui, "Listening", "Train your ear with real-life conversations");

        let mut chosen = None;
        ui.horizontal(|ui| {
            let selected = self.listening.practice().selected_index();
            for index in 0..self.listening.practice().passages().len() {
                let label = format!("Exercise {}", index + 1);
                if ui.selectable_label(selected == index, label).clicked() {
                    chosen = Some(index);
                }
            }
        });
        if let Some(index) = chosen {
            self.listening.select_exercise(index);
        }
        ui.add_space(8.0);

        let passage = self.listening.practice().passage().clone();
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.heading(&passage.title);
                cx.speak_button(ui, &passage.body);
            });
            ui.horizontal(|ui| {
                level_badge(ui, passage.level);
                tag(ui, &passage.topic);
            });
            ui.add_space(8.0);
            self.render_player(ui, passage.duration_secs);
            ui.add_space(8.0);

            let label = if self.listening.show_transcript() {
                "Hide transcript"
            } else {
                "Show transcript"
            };
            if ui.button(label).clicked() {
                self.listening.toggle_transcript();
            }
            if self.listening.show_transcript() {
                ui.group(|ui| {
                    for line in passage.body.lines() {
                        ui.label(line);
                    }
                });
            }
        });
        ui.add_space(8.0);

        ui.group(|ui| {
            comprehension_quiz(
                ui,
                &passage.questions,
                self.listening.practice_mut().sheet_mut(),
            );
        });
    }

    fn render_player(&mut self, ui: &mut egui::Ui, clip_secs: u32) {
        ui.horizontal(|ui| {
            let icon = if self.listening.playback().is_playing() {
                "⏸"
            } else {
                "▶"
            };
            if ui.button(RichText::new(icon).size(22.0).color(ACCENT)).clicked() {
                self.listening.playback_mut().toggle();
            }

            let mut position = self.listening.playback().progress();
            let slider = egui::Slider::new(&mut position, 0..=PROGRESS_MAX).show_value(false);
            if ui.add(slider).changed() {
                self.listening.playback_mut().scrub(position);
            }
            ui.label(format!(
                "{}s / {}s",
                self.listening.playback().elapsed_secs(clip_secs),
                clip_secs
            ));

            if ui.button("⟲").on_hover_text("Restart").clicked() {
                self.listening.playback_mut().reset();
            }
        });

        ui.horizontal(|ui| {
            ui.label("Speed:");
            let current = self.listening.speed();
            for speed in PlaybackSpeed::ALL {
                if ui.selectable_label(current == speed, speed.label()).clicked() {
                    self.listening.set_speed(speed);
                }
            }
        });
    }
}
