use super::{ACCENT, CORRECT, PageContext, page_header};
use chrono::{Datelike, Local};
use eframe::egui::{self, Color32, RichText};
use english_trainer_app::models::Skill;
use english_trainer_app::models::dashboard::{Dashboard, Rating};

pub fn show(ui: &mut egui::Ui, cx: &PageContext<'_>) {
    let dashboard = &cx.library.dashboard;
    let today = Local::now().date_naive();

    page_header(ui, "Progress", "Track your results and improvement");
    ui.vertical_centered(|ui| ui.small(format!("Today is {}", today.format("%Y-%m-%d"))));
    ui.add_space(8.0);

    render_summary(ui, dashboard);
    ui.add_space(12.0);
    render_skills(ui, dashboard);
    ui.add_space(12.0);
    render_weekly(ui, dashboard, today.weekday());
    ui.add_space(12.0);
    render_monthly(ui, dashboard);
    ui.add_space(12.0);
    render_achievements(ui, dashboard);
    ui.add_space(12.0);
    render_goals(ui, dashboard);
}

fn stat_card(ui: &mut egui::Ui, title: &str, value: String) {
    ui.group(|ui| {
        ui.set_min_width(150.0);
        ui.vertical(|ui| {
            ui.label(title);
            ui.label(RichText::new(value).size(24.0).strong().color(ACCENT));
        });
    });
}

fn render_summary(ui: &mut egui::Ui, dashboard: &Dashboard) {
    let summary = &dashboard.summary;
    let (hours, minutes) = summary.hours_and_minutes();
    ui.horizontal_wrapped(|ui| {
        stat_card(ui, "Study time", format!("{hours}h {minutes}m"));
        stat_card(ui, "Streak", format!("{} days", summary.streak_days));
        stat_card(ui, "Overall", format!("{}%", summary.overall_percent));
        stat_card(
            ui,
            "Achievements",
            format!("{} / {}", dashboard.unlocked_count(), dashboard.achievements.len()),
        );
    });
}

fn rating_color(rating: Rating) -> Color32 {
    match rating {
        Rating::Excellent => CORRECT,
        Rating::Good => ACCENT,
        Rating::KeepGoing => Color32::from_rgb(234, 179, 8),
    }
}

fn render_skills(ui: &mut egui::Ui, dashboard: &Dashboard) {
    ui.heading("Skills");
    egui::Grid::new("progress_skills")
        .num_columns(3)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            for skill in &dashboard.skills {
                let rating = skill.rating();
                ui.label(skill.skill.label());
                ui.add(
                    egui::ProgressBar::new(f32::from(skill.level) / 100.0)
                        .desired_width(260.0)
                        .text(format!("{}%", skill.level)),
                );
                ui.label(RichText::new(rating.label()).color(rating_color(rating)));
                ui.end_row();
            }
        });
}

fn render_weekly(ui: &mut egui::Ui, dashboard: &Dashboard, today: chrono::Weekday) {
    ui.heading("This week");
    egui::Grid::new("progress_weekly")
        .num_columns(Skill::ALL.len() + 2)
        .striped(true)
        .show(ui, |ui| {
            ui.strong("Day");
            for skill in Skill::ALL {
                ui.strong(skill.label());
            }
            ui.strong("Total");
            ui.end_row();

            for day in &dashboard.weekly {
                let name = RichText::new(day.weekday.to_string());
                if day.weekday == today {
                    ui.label(name.strong().color(ACCENT));
                } else {
                    ui.label(name);
                }
                for skill in Skill::ALL {
                    ui.label(day.count(skill).to_string());
                }
                ui.label(RichText::new(day.total().to_string()).strong());
                ui.end_row();
            }
        });
}

fn render_monthly(ui: &mut egui::Ui, dashboard: &Dashboard) {
    ui.heading("Monthly scores");
    egui::Grid::new("progress_monthly")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            for month in &dashboard.monthly {
                ui.label(month.month_name());
                ui.add(
                    egui::ProgressBar::new(month.score.min(100) as f32 / 100.0)
                        .desired_width(300.0)
                        .text(month.score.to_string()),
                );
                ui.end_row();
            }
        });
}

fn render_achievements(ui: &mut egui::Ui, dashboard: &Dashboard) {
    ui.heading("Achievements");
    ui.horizontal_wrapped(|ui| {
        for achievement in &dashboard.achievements {
            ui.group(|ui| {
                let icon = RichText::new(&achievement.icon).size(24.0);
                ui.label(if achievement.unlocked { icon } else { icon.weak() });
                ui.vertical(|ui| {
                    let title = RichText::new(&achievement.title).strong();
                    ui.label(if achievement.unlocked { title } else { title.weak() });
                    ui.small(&achievement.description);
                    if !achievement.unlocked {
                        ui.small("🔒 Locked");
                    }
                });
            });
        }
    });
}

fn render_goals(ui: &mut egui::Ui, dashboard: &Dashboard) {
    ui.heading("Study goals");
    for goal in &dashboard.goals {
        ui.label(format!("{} ({} / {})", goal.label, goal.current, goal.target));
        ui.add(
            egui::ProgressBar::new(goal.percent().min(100) as f32 / 100.0)
                .text(format!("{}%", goal.percent())),
        );
        ui.add_space(4.0);
    }
}
