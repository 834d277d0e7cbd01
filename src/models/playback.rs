//! Simulated audio playback for listening exercises.
//!
//! There is no audio. A progress value runs from 0 to 100 in fixed steps while
//! playing; the caller feeds elapsed wall time through [`SimulatedPlayback::tick`].

use super::answer_sheet::PassagePractice;
use super::PassageItem;
use crate::error::ContentError;
use std::time::Duration;
use tracing::{debug, info};

pub const PROGRESS_MAX: u8 = 100;
pub const DEFAULT_STEP: u8 = 2;
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing,
}

/// Speed choices offered next to the player. Display only.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum PlaybackSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
    Faster,
}

impl PlaybackSpeed {
    pub const ALL: [PlaybackSpeed; 4] = [
        PlaybackSpeed::Slow,
        PlaybackSpeed::Normal,
        PlaybackSpeed::Fast,
        PlaybackSpeed::Faster,
    ];

    pub fn factor(self) -> f32 {
        match self {
            PlaybackSpeed::Slow => 0.75,
            PlaybackSpeed::Normal => 1.0,
            PlaybackSpeed::Fast => 1.25,
            PlaybackSpeed::Faster => 1.5,
        }
    }

    pub fn label(self) -> String {
        format!("{}x", self.factor())
    }
}

#[derive(Clone, Debug)]
pub struct SimulatedPlayback {
    progress: u8,
    state: PlaybackState,
    step: u8,
    interval: Duration,
    pending: Duration,
}

impl Default for SimulatedPlayback {
    fn default() -> Self {
        Self::new(DEFAULT_STEP, DEFAULT_INTERVAL)
    }
}

impl SimulatedPlayback {
    /// A zero step or interval falls back to the defaults.
    pub fn new(step: u8, interval: Duration) -> Self {
        Self {
            progress: 0,
            state: PlaybackState::Idle,
            step: if step == 0 { DEFAULT_STEP } else { step },
            interval: if interval.is_zero() {
                DEFAULT_INTERVAL
            } else {
                interval
            },
            pending: Duration::ZERO,
        }
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn play(&mut self) {
        if !self.is_playing() {
            self.state = PlaybackState::Playing;
            self.pending = Duration::ZERO;
            info!(progress = self.progress, "playback started");
        }
    }

    pub fn pause(&mut self) {
        if self.is_playing() {
            self.state = PlaybackState::Idle;
            self.pending = Duration::ZERO;
            info!(progress = self.progress, "playback paused");
        }
    }

    pub fn toggle(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Advances by one step per whole interval elapsed. At 100 the first
    /// following step stops playback instead of advancing.
    pub fn tick(&mut self, elapsed: Duration) {
        if !self.is_playing() {
            return;
        }
        self.pending += elapsed;
        while self.pending >= self.interval {
            self.pending -= self.interval;
            if self.progress >= PROGRESS_MAX {
                self.progress = PROGRESS_MAX;
                self.state = PlaybackState::Idle;
                self.pending = Duration::ZERO;
                debug!("playback finished");
                return;
            }
            self.progress = self.progress.saturating_add(self.step).min(PROGRESS_MAX);
        }
    }

    /// Moves the bar directly; there is no media to seek.
    pub fn scrub(&mut self, value: u8) {
        self.progress = value.min(PROGRESS_MAX);
    }

    pub fn reset(&mut self) {
        self.progress = 0;
        self.state = PlaybackState::Idle;
        self.pending = Duration::ZERO;
    }

    /// Seconds into a clip of `total_secs`, rounded down.
    pub fn elapsed_secs(&self, total_secs: u32) -> u32 {
        u32::from(self.progress) * total_secs / u32::from(PROGRESS_MAX)
    }
}

/// Listening page state: exercise selection, playback, transcript and answers.
#[derive(Clone, Debug)]
pub struct ListeningPractice {
    practice: PassagePractice,
    playback: SimulatedPlayback,
    show_transcript: bool,
    speed: PlaybackSpeed,
}

impl ListeningPractice {
    pub fn new(exercises: Vec<PassageItem>, playback: SimulatedPlayback) -> Result<Self, ContentError> {
        Ok(Self {
            practice: PassagePractice::new(exercises)?,
            playback,
            show_transcript: false,
            speed: PlaybackSpeed::default(),
        })
    }

    pub fn practice(&self) -> &PassagePractice {
        &self.practice
    }

    pub fn practice_mut(&mut self) -> &mut PassagePractice {
        &mut self.practice
    }

    pub fn playback(&self) -> &SimulatedPlayback {
        &self.playback
    }

    pub fn playback_mut(&mut self) -> &mut SimulatedPlayback {
        &mut self.playback
    }

    pub fn show_transcript(&self) -> bool {
        self.show_transcript
    }

    pub fn toggle_transcript(&mut self) {
        self.show_transcript = !self.show_transcript;
    }

    pub fn speed(&self) -> PlaybackSpeed {
        self.speed
    }

    pub fn set_speed(&mut self, speed: PlaybackSpeed) {
        self.speed = speed;
    }

    /// Switches exercise, stopping playback and hiding the transcript.
    pub fn select_exercise(&mut self, index: usize) -> bool {
        if !self.practice.select_passage(index) {
            return false;
        }
        self.playback.reset();
        self.show_transcript = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Level, QuizItem};

    const TICK: Duration = Duration::from_millis(100);

    #[test]
    fn test_tick_advances_only_while_playing() {
        let mut playback = SimulatedPlayback::default();
        playback.tick(TICK * 5);
        assert_eq!(playback.progress(), 0);

        playback.toggle();
        playback.tick(TICK * 5);
        assert_eq!(playback.progress(), 10);

        playback.toggle();
        assert_eq!(playback.state(), PlaybackState::Idle);
        playback.tick(TICK * 5);
        assert_eq!(playback.progress(), 10);
    }

    #[test]
    fn test_partial_intervals_accumulate() {
        let mut playback = SimulatedPlayback::default();
        playback.play();
        playback.tick(Duration::from_millis(60));
        assert_eq!(playback.progress(), 0);
        playback.tick(Duration::from_millis(60));
        assert_eq!(playback.progress(), 2);
    }

    #[test]
    fn test_stops_at_hundred() {
        let mut playback = SimulatedPlayback::default();
        playback.play();
        playback.tick(TICK * 50);
        assert_eq!(playback.progress(), 100);
        assert!(playback.is_playing());

        playback.tick(TICK);
        assert_eq!(playback.progress(), 100);
        assert!(!playback.is_playing());
    }

    #[test]
    fn test_odd_step_clamps_to_hundred() {
        let mut playback = SimulatedPlayback::new(3, TICK);
        playback.play();
        playback.tick(TICK * 40);
        assert_eq!(playback.progress(), 100);
        assert!(!playback.is_playing());
    }

    #[test]
    fn test_scrub_and_reset() {
        let mut playback = SimulatedPlayback::default();
        playback.scrub(150);
        assert_eq!(playback.progress(), 100);
        playback.scrub(50);
        assert_eq!(playback.elapsed_secs(60), 30);

        playback.play();
        playback.reset();
        assert_eq!(playback.progress(), 0);
        assert!(!playback.is_playing());
    }

    #[test]
    fn test_speed_labels() {
        let labels: Vec<_> = PlaybackSpeed::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["0.75x", "1x", "1.25x", "1.5x"]);
    }

    #[test]
    fn test_switching_exercise_resets_player() {
        let exercise = |title: &str| PassageItem {
            title: title.into(),
            level: Level::Beginner,
            topic: "Daily conversation".into(),
            duration_secs: 60,
            body: "Customer: Hi.".into(),
            questions: vec![QuizItem {
                prompt: "Q".into(),
                choices: vec!["a".into(), "b".into()],
                correct_index: 0,
                explanation: None,
                category: None,
            }],
        };
        let mut listening = ListeningPractice::new(
            vec![exercise("coffee"), exercise("meeting")],
            SimulatedPlayback::default(),
        )
        .unwrap();
        listening.playback_mut().play();
        listening.playback_mut().tick(TICK * 3);
        listening.toggle_transcript();
        listening.practice_mut().sheet_mut().choose(0, 1);

        assert!(listening.select_exercise(1));
        assert_eq!(listening.playback().progress(), 0);
        assert!(!listening.playback().is_playing());
        assert!(!listening.show_transcript());
        assert_eq!(listening.practice().sheet().answered_count(), 0);
    }
}
