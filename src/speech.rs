//! Text-to-speech for reading words and dialogue lines aloud.
//!
//! Speech is fire-and-forget: callers never learn when or whether the audio
//! finished. When no synthesizer is available every call is a silent no-op.

use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};

pub const DEFAULT_LANG: &str = "en-US";
pub const DEFAULT_RATE: f32 = 0.8;
/// Words per minute at rate 1.0.
const BASE_WORDS_PER_MINUTE: f32 = 175.0;

#[derive(Clone, Debug, PartialEq)]
pub struct SpeechRequest {
    pub text: String,
    pub lang: String,
    pub rate: f32,
}

impl SpeechRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lang: DEFAULT_LANG.to_string(),
            rate: DEFAULT_RATE,
        }
    }

    pub fn with_voice(mut self, lang: &str, rate: f32) -> Self {
        self.lang = lang.to_string();
        self.rate = rate;
        self
    }

    pub fn words_per_minute(&self) -> u32 {
        (BASE_WORDS_PER_MINUTE * self.rate.clamp(0.1, 4.0)).round() as u32
    }
}

pub trait SpeechSynthesizer {
    fn is_available(&self) -> bool;

    fn speak(&self, request: &SpeechRequest);
}

/// The absent capability.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentSpeech;

impl SpeechSynthesizer for SilentSpeech {
    fn is_available(&self) -> bool {
        false
    }

    fn speak(&self, request: &SpeechRequest) {
        debug!(text = %request.text, "speech unavailable, skipping");
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Engine {
    EspeakNg,
    Espeak,
    Say,
}

impl Engine {
    const PROBE_ORDER: [Engine; 3] = [Engine::EspeakNg, Engine::Espeak, Engine::Say];

    fn program(self) -> &'static str {
        match self {
            Engine::EspeakNg => "espeak-ng",
            Engine::Espeak => "espeak",
            Engine::Say => "say",
        }
    }

    fn args(self, request: &SpeechRequest) -> Vec<String> {
        let wpm = request.words_per_minute().to_string();
        match self {
            Engine::EspeakNg | Engine::Espeak => vec![
                "-v".to_string(),
                request.lang.to_lowercase(),
                "-s".to_string(),
                wpm,
                request.text.clone(),
            ],
            Engine::Say => vec!["-r".to_string(), wpm, request.text.clone()],
        }
    }
}

/// Speaks through a system TTS program found on `PATH`.
#[derive(Clone, Debug)]
pub struct CommandSpeech {
    engine: Option<(Engine, PathBuf)>,
}

impl CommandSpeech {
    /// Looks for a known TTS program once; later calls reuse the result.
    pub fn detect() -> Self {
        let search_path = std::env::var_os("PATH").unwrap_or_default();
        let dirs: Vec<PathBuf> = std::env::split_paths(&search_path).collect();
        let engine = Engine::PROBE_ORDER
            .into_iter()
            .find_map(|engine| find_program(&dirs, engine.program()).map(|path| (engine, path)));

        match &engine {
            Some((engine, path)) => {
                info!(engine = engine.program(), path = %path.display(), "speech available")
            }
            None => warn!("no text-to-speech program found, speech disabled"),
        }
        Self { engine }
    }
}

fn find_program(dirs: &[PathBuf], name: &str) -> Option<PathBuf> {
    dirs.iter()
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

impl SpeechSynthesizer for CommandSpeech {
    fn is_available(&self) -> bool {
        self.engine.is_some()
    }

    fn speak(&self, request: &SpeechRequest) {
        let Some((engine, path)) = &self.engine else {
            debug!(text = %request.text, "speech unavailable, skipping");
            return;
        };
        if request.text.trim().is_empty() {
            return;
        }

        let spawned = Command::new(path)
            .args(engine.args(request))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(mut child) => {
                debug!(text = %request.text, lang = %request.lang, rate = request.rate, "speaking");
                // Reap the process in the background so it does not linger as a zombie.
                std::thread::spawn(move || {
                    let _ = child.wait();
                });
            }
            Err(e) => warn!(error = %e, program = engine.program(), "failed to start speech"),
        }
    }
}

/// Picks [`CommandSpeech`] when enabled, [`SilentSpeech`] otherwise.
pub fn synthesizer(enabled: bool) -> Box<dyn SpeechSynthesizer> {
    if enabled {
        Box::new(CommandSpeech::detect())
    } else {
        info!("speech disabled by configuration");
        Box::new(SilentSpeech)
    }
}
