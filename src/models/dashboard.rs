//! Figures shown on the progress dashboard.
use chrono::Weekday;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Skill {
    Vocabulary,
    Grammar,
    Reading,
    Listening,
    Speaking,
}

impl Skill {
    pub const ALL: [Skill; 5] = [
        Skill::Vocabulary,
        Skill::Grammar,
        Skill::Reading,
        Skill::Listening,
        Skill::Speaking,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Skill::Vocabulary => "Vocabulary",
            Skill::Grammar => "Grammar",
            Skill::Reading => "Reading",
            Skill::Listening => "Listening",
            Skill::Speaking => "Speaking",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rating {
    Excellent,
    Good,
    KeepGoing,
}

impl Rating {
    pub fn from_level(level: u8) -> Self {
        match level {
            80.. => Rating::Excellent,
            60..=79 => Rating::Good,
            _ => Rating::KeepGoing,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent",
            Rating::Good => "Good",
            Rating::KeepGoing => "Keep going",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillLevel {
    pub skill: Skill,
    pub level: u8,
}

impl SkillLevel {
    pub fn rating(&self) -> Rating {
        Rating::from_level(self.level)
    }
}

/// Exercises completed per skill on one day of the week.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyActivity {
    pub weekday: Weekday,
    pub vocabulary: u32,
    pub grammar: u32,
    pub reading: u32,
    pub listening: u32,
    pub speaking: u32,
}

impl DailyActivity {
    pub fn count(&self, skill: Skill) -> u32 {
        match skill {
            Skill::Vocabulary => self.vocabulary,
            Skill::Grammar => self.grammar,
            Skill::Reading => self.reading,
            Skill::Listening => self.listening,
            Skill::Speaking => self.speaking,
        }
    }

    pub fn total(&self) -> u32 {
        Skill::ALL.iter().map(|s| self.count(*s)).sum()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyScore {
    pub month: u32,
    pub score: u32,
}

impl MonthlyScore {
    pub fn month(&self) -> Option<chrono::Month> {
        u8::try_from(self.month)
            .ok()
            .and_then(|m| chrono::Month::try_from(m).ok())
    }

    pub fn month_name(&self) -> &'static str {
        self.month().map(|m| m.name()).unwrap_or("?")
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub unlocked: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudyGoal {
    pub label: String,
    pub current: u32,
    pub target: u32,
}

impl StudyGoal {
    pub fn percent(&self) -> u32 {
        if self.target == 0 {
            return 0;
        }
        ((self.current as f64 / self.target as f64) * 100.0).round() as u32
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudySummary {
    pub total_minutes: u32,
    pub streak_days: u32,
    pub overall_percent: u32,
    pub minutes_today: u32,
    pub daily_goal_minutes: u32,
}

impl StudySummary {
    /// Whole hours and leftover minutes of total study time.
    pub fn hours_and_minutes(&self) -> (u32, u32) {
        (self.total_minutes / 60, self.total_minutes % 60)
    }

    pub fn today_percent(&self) -> u32 {
        StudyGoal {
            label: String::new(),
            current: self.minutes_today,
            target: self.daily_goal_minutes,
        }
        .percent()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub summary: StudySummary,
    pub skills: Vec<SkillLevel>,
    pub weekly: Vec<DailyActivity>,
    pub monthly: Vec<MonthlyScore>,
    pub achievements: Vec<Achievement>,
    pub goals: Vec<StudyGoal>,
}

impl Dashboard {
    pub fn unlocked_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.unlocked).count()
    }

    pub fn recent_achievements(&self, limit: usize) -> impl Iterator<Item = &Achievement> {
        self.achievements.iter().filter(|a| a.unlocked).take(limit)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.skills.is_empty() || self.weekly.is_empty() || self.monthly.is_empty() {
            return Err("dashboard charts need data".to_string());
        }
        if self.summary.daily_goal_minutes == 0 {
            return Err("daily goal must be positive".to_string());
        }
        if let Some(goal) = self.goals.iter().find(|g| g.target == 0) {
            return Err(format!("goal '{}' has a zero target", goal.label));
        }
        if let Some(skill) = self.skills.iter().find(|s| s.level > 100) {
            return Err(format!("skill {} is above 100", skill.skill.label()));
        }
        if let Some(entry) = self.monthly.iter().find(|m| m.month().is_none()) {
            return Err(format!("month {} is not between 1 and 12", entry.month));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_buckets() {
        assert_eq!(Rating::from_level(85), Rating::Excellent);
        assert_eq!(Rating::from_level(80), Rating::Excellent);
        assert_eq!(Rating::from_level(72), Rating::Good);
        assert_eq!(Rating::from_level(60), Rating::Good);
        assert_eq!(Rating::from_level(59), Rating::KeepGoing);
    }

    #[test]
    fn test_goal_percent_rounds() {
        let goal = StudyGoal {
            label: "Study 60 minutes a day".into(),
            current: 25,
            target: 60,
        };
        assert_eq!(goal.percent(), 42);
    }

    #[test]
    fn test_summary_split() {
        let summary = StudySummary {
            total_minutes: 1250,
            streak_days: 15,
            overall_percent: 76,
            minutes_today: 25,
            daily_goal_minutes: 60,
        };
        assert_eq!(summary.hours_and_minutes(), (20, 50));
        assert_eq!(summary.today_percent(), 42);
    }

    #[test]
    fn test_daily_activity_and_months() {
        let json = r#"{"weekday":"Mon","vocabulary":20,"grammar":5,"reading":2,"listening":3,"speaking":4}"#;
        let day: DailyActivity = serde_json::from_str(json).unwrap();
        assert_eq!(day.weekday, Weekday::Mon);
        assert_eq!(day.count(Skill::Grammar), 5);
        assert_eq!(day.total(), 34);

        let month = MonthlyScore { month: 3, score: 78 };
        assert_eq!(month.month_name(), "March");
    }

    #[test]
    fn test_month_out_of_range() {
        let wrapped = MonthlyScore { month: 257, score: 50 };
        assert_eq!(wrapped.month(), None);
        assert_eq!(wrapped.month_name(), "?");
        assert_eq!(MonthlyScore { month: 0, score: 50 }.month_name(), "?");
        assert_eq!(MonthlyScore { month: 12, score: 50 }.month_name(), "December");

        let mut dashboard: Dashboard =
            serde_json::from_str(include_str!("../content/data/dashboard.json")).unwrap();
        assert!(dashboard.validate().is_ok());
        dashboard.monthly[0].month = 13;
        assert!(dashboard.validate().unwrap_err().contains("month 13"));
    }
}
