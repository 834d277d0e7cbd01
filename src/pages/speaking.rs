use super::{ACCENT, CORRECT, PageContext, Timings, WRONG, level_badge, page_header, tag};
use eframe::egui::{self, RichText};
use english_trainer_app::models::{SimulatedRecording, SpeakingPractice};
use english_trainer_app::{ContentError, Library};
use std::time::Duration;
use tracing::debug;

const RECORDING_REPAINT: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, PartialEq, Eq, Default)]
enum Tab {
    #[default]
    Dialogue,
    Pronunciation,
}

pub struct SpeakingPage {
    speaking: SpeakingPractice,
    tab: Tab,
}

impl SpeakingPage {
    pub fn new(library: &Library, timings: &Timings) -> Result<Self, ContentError> {
        let recording = SimulatedRecording::new(timings.recording);
        Ok(Self {
            speaking: SpeakingPractice::new(library.speaking.scenarios.clone(), recording)?,
            tab: Tab::default(),
        })
    }

    pub fn tick(&mut self, elapsed: Duration) {
        self.speaking.recording_mut().tick(elapsed);
    }

    pub fn repaint_interval(&self) -> Option<Duration> {
        self.speaking
            .recording()
            .is_recording()
            .then_some(RECORDING_REPAINT)
    }

    pub fn show(&mut self, ui: &mut egui::Ui, cx: &PageContext<'_>) {
        page_header(ui, "Speaking", "Practise pronunciation and everyday conversations");

        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.tab, Tab::Dialogue, "Dialogue practice");
            ui.selectable_value(&mut self.tab, Tab::Pronunciation, "Pronunciation");
        });
        ui.separator();

        match self.tab {
            Tab::Dialogue => self.render_dialogue(ui, cx),
            Tab::Pronunciation => self.render_pronunciation(ui, cx),
        }
        ui.add_space(12.0);
        render_tips(ui, cx);
    }

    fn render_dialogue(&mut self, ui: &mut egui::Ui, cx: &PageContext<'_>) {
        let mut chosen = None;
        ui.horizontal_wrapped(|ui| {
            let selected = self.speaking.selected_index();
            for (index, scenario) in self.speaking.scenarios().iter().enumerate() {
                if ui.selectable_label(selected == index, &scenario.title).clicked() {
                    chosen = Some(index);
                }
            }
        });
        if let Some(index) = chosen {
            if self.speaking.select_scenario(index) {
                debug!(scenario = index, "speaking scenario selected");
            }
        }
        ui.add_space(8.0);

        let scenario = self.speaking.scenario().clone();
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.heading(&scenario.title);
                level_badge(ui, scenario.level);
                tag(ui, &scenario.category);
            });
            ui.add_space(6.0);

            let recording = self.speaking.recording().is_recording();
            for line in &scenario.lines {
                ui.horizontal(|ui| {
                    let speaker = RichText::new(format!("{}:", line.speaker)).strong();
                    if line.is_learner() {
                        ui.label(speaker.color(ACCENT));
                    } else {
                        ui.label(speaker);
                    }
                    ui.label(&line.text);
                    cx.speak_button(ui, &line.text);
                    if line.is_learner() {
                        self.record_button(ui, recording);
                    }
                });
            }
            if recording {
                ui.label(RichText::new("Recording...").color(WRONG).italics());
            }
        });
        ui.add_space(8.0);

        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.strong("Key phrases");
                ui.label(format!(
                    "{} / {} practised",
                    self.speaking.checklist().completed_count(),
                    scenario.key_phrases.len()
                ));
            });
            let mut toggled = None;
            for (index, phrase) in scenario.key_phrases.iter().enumerate() {
                ui.horizontal(|ui| {
                    let mut done = self.speaking.checklist().is_done(index);
                    if ui.checkbox(&mut done, "").changed() {
                        toggled = Some(index);
                    }
                    let text = RichText::new(phrase);
                    ui.label(if done { text.color(CORRECT) } else { text });
                    cx.speak_button(ui, phrase);
                });
            }
            if let Some(index) = toggled {
                self.speaking.toggle_phrase(index);
            }
        });
    }

    fn render_pronunciation(&mut self, ui: &mut egui::Ui, cx: &PageContext<'_>) {
        let recording = self.speaking.recording().is_recording();
        for drill in &cx.library.speaking.pronunciation {
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&drill.word).size(22.0).strong());
                    cx.speak_button(ui, &drill.word);
                    self.record_button(ui, recording);
                    ui.label(RichText::new(&drill.phonetic).weak());
                });
                ui.label(format!("💡 {}", drill.tip));
            });
        }
        if recording {
            ui.label(RichText::new("Recording...").color(WRONG).italics());
        }
    }

    /// Microphone toggle shared by learner lines and pronunciation drills.
    fn record_button(&mut self, ui: &mut egui::Ui, recording: bool) {
        let mic = if recording {
            RichText::new("⏺").color(WRONG)
        } else {
            RichText::new("🎤")
        };
        let hover = if recording { "Stop" } else { "Record" };
        if ui.button(mic).on_hover_text(hover).clicked() {
            self.toggle_recording();
        }
    }

    fn toggle_recording(&mut self) {
        self.speaking.recording_mut().toggle();
    }
}

fn render_tips(ui: &mut egui::Ui, cx: &PageContext<'_>) {
    let tips = &cx.library.speaking.tips;
    if tips.is_empty() {
        return;
    }
    ui.group(|ui| {
        ui.strong("Speaking tips");
        for tip in tips {
            ui.label(format!("• {tip}"));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> SpeakingPage {
        let timings = Timings {
            playback_step: 2,
            playback_interval: Duration::from_millis(100),
            recording: Duration::from_secs(2),
        };
        SpeakingPage::new(&Library::embedded().unwrap(), &timings).unwrap()
    }

    #[test]
    fn test_recording_runs_on_pronunciation_tab() {
        let mut page = page();
        page.tab = Tab::Pronunciation;
        assert_eq!(page.repaint_interval(), None);

        page.toggle_recording();
        assert_eq!(page.repaint_interval(), Some(RECORDING_REPAINT));
        page.tick(Duration::from_secs(1));
        assert!(page.speaking.recording().is_recording());
        page.tick(Duration::from_secs(1));
        assert_eq!(page.repaint_interval(), None);
    }

    #[test]
    fn test_second_toggle_stops_recording() {
        let mut page = page();
        page.toggle_recording();
        page.toggle_recording();
        assert!(!page.speaking.recording().is_recording());
    }
}
