//! Speaking practice: scenario selection, a simulated recorder and a phrase checklist.

use super::DialogueScenario;
use crate::error::ContentError;
use std::collections::BTreeSet;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_RECORDING: Duration = Duration::from_secs(2);

/// Stand-in for a microphone. Recording stops by itself after a fixed time.
#[derive(Clone, Debug)]
pub struct SimulatedRecording {
    limit: Duration,
    remaining: Option<Duration>,
}

impl Default for SimulatedRecording {
    fn default() -> Self {
        Self::new(DEFAULT_RECORDING)
    }
}

impl SimulatedRecording {
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            remaining: None,
        }
    }

    pub fn is_recording(&self) -> bool {
        self.remaining.is_some()
    }

    pub fn toggle(&mut self) {
        self.remaining = match self.remaining {
            Some(_) => None,
            None => Some(self.limit),
        };
        debug!(recording = self.is_recording(), "recording toggled");
    }

    pub fn tick(&mut self, elapsed: Duration) {
        if let Some(remaining) = self.remaining {
            self.remaining = remaining.checked_sub(elapsed).filter(|r| !r.is_zero());
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhraseChecklist {
    completed: BTreeSet<usize>,
}

impl PhraseChecklist {
    pub fn toggle(&mut self, index: usize) {
        if !self.completed.remove(&index) {
            self.completed.insert(index);
        }
    }

    pub fn is_done(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn clear(&mut self) {
        self.completed.clear();
    }
}

#[derive(Clone, Debug)]
pub struct SpeakingPractice {
    scenarios: Vec<DialogueScenario>,
    selected: usize,
    recording: SimulatedRecording,
    checklist: PhraseChecklist,
}

impl SpeakingPractice {
    pub fn new(
        scenarios: Vec<DialogueScenario>,
        recording: SimulatedRecording,
    ) -> Result<Self, ContentError> {
        if scenarios.is_empty() {
            return Err(ContentError::Empty {
                what: "scenario list",
            });
        }
        Ok(Self {
            scenarios,
            selected: 0,
            recording,
            checklist: PhraseChecklist::default(),
        })
    }

    pub fn scenarios(&self) -> &[DialogueScenario] {
        &self.scenarios
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn scenario(&self) -> &DialogueScenario {
        &self.scenarios[self.selected]
    }

    pub fn recording(&self) -> &SimulatedRecording {
        &self.recording
    }

    pub fn recording_mut(&mut self) -> &mut SimulatedRecording {
        &mut self.recording
    }

    pub fn checklist(&self) -> &PhraseChecklist {
        &self.checklist
    }

    /// Toggles a key phrase of the current scenario. Unknown indices are ignored.
    pub fn toggle_phrase(&mut self, index: usize) {
        if index < self.scenario().key_phrases.len() {
            self.checklist.toggle(index);
        }
    }

    /// Checklist indices refer to the scenario's phrases, so switching clears them.
    pub fn select_scenario(&mut self, index: usize) -> bool {
        if index >= self.scenarios.len() {
            return false;
        }
        if index != self.selected {
            self.selected = index;
            self.checklist.clear();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DialogueLine, Level};

    fn scenario(title: &str, phrases: usize) -> DialogueScenario {
        DialogueScenario {
            title: title.into(),
            level: Level::Beginner,
            category: "Daily life".into(),
            lines: vec![DialogueLine {
                speaker: "You".into(),
                text: "Hello".into(),
            }],
            key_phrases: (0..phrases).map(|i| format!("phrase {i}")).collect(),
        }
    }

    #[test]
    fn test_recording_stops_after_limit() {
        let mut recording = SimulatedRecording::default();
        recording.toggle();
        assert!(recording.is_recording());
        recording.tick(Duration::from_millis(1500));
        assert!(recording.is_recording());
        recording.tick(Duration::from_millis(500));
        assert!(!recording.is_recording());
    }

    #[test]
    fn test_recording_toggle_stops_early() {
        let mut recording = SimulatedRecording::default();
        recording.toggle();
        recording.toggle();
        assert!(!recording.is_recording());
        recording.tick(Duration::from_secs(5));
        assert!(!recording.is_recording());
    }

    #[test]
    fn test_phrase_toggle() {
        let mut checklist = PhraseChecklist::default();
        checklist.toggle(2);
        assert!(checklist.is_done(2));
        assert_eq!(checklist.completed_count(), 1);
        checklist.toggle(2);
        assert!(!checklist.is_done(2));
    }

    #[test]
    fn test_switching_scenario_clears_checklist() {
        let mut speaking = SpeakingPractice::new(
            vec![scenario("intro", 5), scenario("restaurant", 5)],
            SimulatedRecording::default(),
        )
        .unwrap();
        speaking.toggle_phrase(0);
        speaking.toggle_phrase(9);
        assert_eq!(speaking.checklist().completed_count(), 1);

        speaking.select_scenario(0);
        assert_eq!(speaking.checklist().completed_count(), 1);

        assert!(speaking.select_scenario(1));
        assert_eq!(speaking.scenario().title, "restaurant");
        assert_eq!(speaking.checklist().completed_count(), 0);
        assert!(!speaking.select_scenario(2));
    }
}
