//! Application configuration. Voice, timing, content location and window size.

use crate::error::TrainerError;
use crate::models::playback::{DEFAULT_INTERVAL, DEFAULT_STEP};
use crate::models::speaking::DEFAULT_RECORDING;
use crate::route::Route;
use crate::speech::{DEFAULT_LANG, DEFAULT_RATE};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

pub const ENV_PREFIX: &str = "ENGLISH_TRAINER";
pub const CONFIG_FILE_VAR: &str = "ENGLISH_TRAINER_CONFIG";

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct AppConfig {
    /// Read words and dialogue aloud. Read from ENGLISH_TRAINER_SPEECH_ENABLED.
    #[serde(default)]
    pub speech_enabled: Option<bool>,

    /// Voice language tag, e.g. "en-US". Read from ENGLISH_TRAINER_SPEECH_LANG.
    #[serde(default)]
    pub speech_lang: Option<String>,

    /// Speaking rate relative to normal. Read from ENGLISH_TRAINER_SPEECH_RATE.
    #[serde(default)]
    pub speech_rate: Option<f32>,

    /// Progress added per playback tick. Read from ENGLISH_TRAINER_PLAYBACK_STEP.
    #[serde(default)]
    pub playback_step: Option<u8>,

    /// Milliseconds between playback ticks. Read from ENGLISH_TRAINER_PLAYBACK_INTERVAL_MS.
    #[serde(default)]
    pub playback_interval_ms: Option<u64>,

    /// How long a simulated recording lasts. Read from ENGLISH_TRAINER_RECORDING_SECS.
    #[serde(default)]
    pub recording_secs: Option<u64>,

    /// Directory with replacement dataset files. Embedded content is used when unset.
    #[serde(default)]
    pub content_dir: Option<String>,

    /// Page shown at start-up, e.g. "/grammar".
    #[serde(default)]
    pub start_route: Option<String>,

    /// Font with CJK glyphs for translations and explanations.
    #[serde(default)]
    pub cjk_font_path: Option<String>,

    #[serde(default)]
    pub window_width: Option<f32>,

    #[serde(default)]
    pub window_height: Option<f32>,
}

impl AppConfig {
    /// Environment (prefix `ENGLISH_TRAINER_`), `.env`, and an optional file
    /// named by `ENGLISH_TRAINER_CONFIG`.
    pub fn load() -> Result<Self, TrainerError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var(CONFIG_FILE_VAR) {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true));
        let cfg: Self = c.build()?.try_deserialize()?;
        Ok(cfg)
    }

    /// Like [`AppConfig::load`], but falls back to defaults on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!(error = %e, "invalid configuration, using defaults");
            Self::default()
        })
    }

    pub fn speech_enabled_or_default(&self) -> bool {
        self.speech_enabled.unwrap_or(true)
    }

    pub fn speech_lang_or_default(&self) -> String {
        self.speech_lang
            .clone()
            .filter(|lang| !lang.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LANG.to_string())
    }

    /// Non-positive or non-finite rates fall back to the default.
    pub fn speech_rate_or_default(&self) -> f32 {
        self.speech_rate
            .filter(|rate| rate.is_finite() && *rate > 0.0)
            .unwrap_or(DEFAULT_RATE)
    }

    pub fn playback_step_or_default(&self) -> u8 {
        self.playback_step
            .filter(|step| (1..=100).contains(step))
            .unwrap_or(DEFAULT_STEP)
    }

    pub fn playback_interval_or_default(&self) -> Duration {
        self.playback_interval_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_INTERVAL)
    }

    pub fn recording_duration_or_default(&self) -> Duration {
        self.recording_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_RECORDING)
    }

    pub fn content_dir(&self) -> Option<PathBuf> {
        self.content_dir
            .as_deref()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
    }

    /// Unknown routes fall back to the home page.
    pub fn start_route_or_default(&self) -> Route {
        match self.start_route.as_deref() {
            None => Route::Home,
            Some(path) => Route::from_path(path).unwrap_or_else(|| {
                warn!(path, "unknown start route, opening home page");
                Route::Home
            }),
        }
    }

    pub fn cjk_font_path(&self) -> Option<PathBuf> {
        self.cjk_font_path.as_deref().map(PathBuf::from)
    }

    pub fn window_size_or_default(&self) -> [f32; 2] {
        [
            self.window_width.filter(|w| *w > 0.0).unwrap_or(960.0),
            self.window_height.filter(|h| *h > 0.0).unwrap_or(760.0),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert!(cfg.speech_enabled_or_default());
        assert_eq!(cfg.speech_lang_or_default(), "en-US");
        assert_eq!(cfg.speech_rate_or_default(), 0.8);
        assert_eq!(cfg.playback_step_or_default(), 2);
        assert_eq!(cfg.playback_interval_or_default(), Duration::from_millis(100));
        assert_eq!(cfg.recording_duration_or_default(), Duration::from_secs(2));
        assert_eq!(cfg.content_dir(), None);
        assert_eq!(cfg.start_route_or_default(), Route::Home);
        assert_eq!(cfg.window_size_or_default(), [960.0, 760.0]);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let cfg = AppConfig {
            speech_rate: Some(-1.0),
            playback_step: Some(0),
            playback_interval_ms: Some(0),
            content_dir: Some("  ".into()),
            start_route: Some("/settings".into()),
            ..Default::default()
        };
        assert_eq!(cfg.speech_rate_or_default(), 0.8);
        assert_eq!(cfg.playback_step_or_default(), 2);
        assert_eq!(cfg.playback_interval_or_default(), Duration::from_millis(100));
        assert_eq!(cfg.content_dir(), None);
        assert_eq!(cfg.start_route_or_default(), Route::Home);
    }

    #[test]
    fn test_start_route_parses() {
        let cfg = AppConfig {
            start_route: Some("listening".into()),
            ..Default::default()
        };
        assert_eq!(cfg.start_route_or_default(), Route::Listening);
    }

    #[test]
    fn test_deserialize_from_config_source() {
        let cfg: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                r#"{"speech_lang": "en-GB", "playback_step": 5, "content_dir": "/tmp/content"}"#,
                config::FileFormat::Json,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(cfg.speech_lang_or_default(), "en-GB");
        assert_eq!(cfg.playback_step_or_default(), 5);
        assert_eq!(cfg.content_dir(), Some(PathBuf::from("/tmp/content")));
    }
}
