//! Main window: navigation bar, the active page and the frame clock that
//! drives simulated playback and recording.

use crate::pages::{Page, PageContext, Timings};
use eframe::egui;
use english_trainer_app::speech::{self, SpeechSynthesizer};
use english_trainer_app::{AppConfig, Library, Route};
use std::time::Instant;
use tracing::{error, info};

pub struct TrainerApp {
    library: Library,
    speech: Box<dyn SpeechSynthesizer>,
    speech_lang: String,
    speech_rate: f32,
    timings: Timings,

    route: Route,
    page: Page,
    last_frame: Option<Instant>,
    page_error: Option<String>,
}

impl TrainerApp {
    pub fn new(library: Library, cfg: &AppConfig) -> Self {
        let timings = Timings {
            playback_step: cfg.playback_step_or_default(),
            playback_interval: cfg.playback_interval_or_default(),
            recording: cfg.recording_duration_or_default(),
        };
        let mut app = Self {
            library,
            speech: speech::synthesizer(cfg.speech_enabled_or_default()),
            speech_lang: cfg.speech_lang_or_default(),
            speech_rate: cfg.speech_rate_or_default(),
            timings,
            route: Route::Home,
            page: Page::Home,
            last_frame: None,
            page_error: None,
        };
        app.navigate(cfg.start_route_or_default());
        app
    }

    /// Opens `route` with fresh page state. Whatever the previous page held,
    /// including a running playback timer, is dropped.
    fn navigate(&mut self, route: Route) {
        match Page::open(route, &self.library, &self.timings) {
            Ok(page) => {
                info!(route = %route, "navigate");
                self.route = route;
                self.page = page;
                self.page_error = None;
            }
            Err(e) => {
                error!(route = %route, error = %e, "failed to open page");
                self.route = Route::Home;
                self.page = Page::Home;
                self.page_error = Some(format!("Could not open {}: {e}", route.label()));
            }
        }
    }

    fn render_navigation(&self, ctx: &egui::Context) -> Option<Route> {
        let mut target = None;
        egui::TopBottomPanel::top("navigation").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let title = egui::RichText::new("English Trainer").heading().strong();
                if ui
                    .add(egui::Label::new(title).sense(egui::Sense::click()))
                    .clicked()
                {
                    target = Some(Route::Home);
                }
                ui.separator();
                for route in Route::ALL {
                    if ui.selectable_label(self.route == route, route.label()).clicked() {
                        target = Some(route);
                    }
                }
            });
        });
        target
    }

    fn render_footer(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.small("English Trainer - learning English made easy and fun");
                if !self.speech.is_available() {
                    ui.small("Text-to-speech is unavailable on this system.");
                }
            });
        });
    }
}

impl eframe::App for TrainerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let elapsed = self.last_frame.map(|t| now - t).unwrap_or_default();
        self.last_frame = Some(now);
        self.page.tick(elapsed);

        let mut target = self.render_navigation(ctx);
        self.render_footer(ctx);

        let cx = PageContext::new(
            &self.library,
            self.speech.as_ref(),
            &self.speech_lang,
            self.speech_rate,
        );
        let page = &mut self.page;
        let page_error = &self.page_error;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    if let Some(message) = page_error {
                        ui.colored_label(egui::Color32::RED, message);
                        ui.separator();
                    }
                    if let Some(route) = page.show(ui, &cx) {
                        target = Some(route);
                    }
                });
        });

        if let Some(route) = target.filter(|r| *r != self.route) {
            self.navigate(route);
        }
        if let Some(interval) = self.page.repaint_interval() {
            ctx.request_repaint_after(interval);
        }
    }
}
