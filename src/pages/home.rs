use super::{ACCENT, PageContext};
use eframe::egui::{self, RichText};
use english_trainer_app::Route;
use english_trainer_app::content::LibraryStats;

const RECENT_ACHIEVEMENTS: usize = 4;

pub fn show(ui: &mut egui::Ui, cx: &PageContext<'_>) -> Option<Route> {
    let mut target = None;

    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        ui.heading(RichText::new("English Trainer").size(34.0).strong().color(ACCENT));
        ui.label(Route::Home.description());
        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui.button(RichText::new("Start learning").size(16.0)).clicked() {
                target = Some(Route::Vocabulary);
            }
            if ui.button(RichText::new("View progress").size(16.0)).clicked() {
                target = Some(Route::Progress);
            }
        });
    });
    ui.add_space(16.0);

    let summary = &cx.library.dashboard.summary;
    ui.group(|ui| {
        ui.strong("Today's goal");
        ui.label(format!(
            "{} / {} minutes studied",
            summary.minutes_today, summary.daily_goal_minutes
        ));
        ui.add(
            egui::ProgressBar::new(summary.today_percent().min(100) as f32 / 100.0)
                .text(format!("{}%", summary.today_percent())),
        );
    });
    ui.add_space(12.0);

    let stats = cx.library.stats();
    ui.heading("Learning modules");
    egui::Grid::new("home_modules")
        .num_columns(3)
        .spacing([16.0, 12.0])
        .show(ui, |ui| {
            for (i, route) in Route::modules().enumerate() {
                ui.group(|ui| {
                    ui.set_min_width(220.0);
                    ui.vertical(|ui| {
                        ui.strong(route.label());
                        ui.small(route.description());
                        if let Some(blurb) = module_blurb(route, &stats) {
                            ui.label(RichText::new(blurb).weak());
                        }
                        if ui.link("Open →").clicked() {
                            target = Some(route);
                        }
                    });
                });
                if i % 3 == 2 {
                    ui.end_row();
                }
            }
        });
    ui.add_space(12.0);

    let dashboard = &cx.library.dashboard;
    ui.heading("Recent achievements");
    ui.horizontal_wrapped(|ui| {
        for achievement in dashboard.recent_achievements(RECENT_ACHIEVEMENTS) {
            ui.group(|ui| {
                ui.label(RichText::new(&achievement.icon).size(24.0));
                ui.vertical(|ui| {
                    ui.strong(&achievement.title);
                    ui.small(&achievement.description);
                });
            });
        }
    });

    target
}

fn module_blurb(route: Route, stats: &LibraryStats) -> Option<String> {
    match route {
        Route::Vocabulary => Some(format!("{} words", stats.words)),
        Route::Grammar => Some(format!("{} questions", stats.grammar_questions)),
        Route::Reading => Some(format!("{} articles", stats.articles)),
        Route::Listening => Some(format!("{} recordings", stats.recordings)),
        Route::Speaking => Some(format!("{} scenarios", stats.scenarios)),
        Route::Home | Route::Progress => None,
    }
}
