mod app;
mod fonts;
mod pages;

use anyhow::Context;
use app::TrainerApp;
use english_trainer_app::{AppConfig, Library};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = AppConfig::load_or_default();

    let content_dir = cfg.content_dir();
    let library = Library::load(content_dir.as_deref()).context("failed to load learning content")?;

    let stats = library.stats();
    info!(
        words = stats.words,
        grammar = stats.grammar_questions,
        articles = stats.articles,
        recordings = stats.recordings,
        scenarios = stats.scenarios,
        "content ready"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(cfg.window_size_or_default()),
        ..Default::default()
    };
    eframe::run_native(
        "English Trainer",
        options,
        Box::new(move |cc| {
            fonts::install(&cc.egui_ctx, cfg.cjk_font_path().as_deref());
            Ok(Box::new(TrainerApp::new(library, &cfg)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("window failed: {e}"))
}
