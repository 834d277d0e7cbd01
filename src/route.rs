//! The fixed set of pages and their paths.
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Home,
    Vocabulary,
    Grammar,
    Reading,
    Listening,
    Speaking,
    Progress,
}

impl Route {
    /// Navigation order.
    pub const ALL: [Route; 7] = [
        Route::Home,
        Route::Vocabulary,
        Route::Grammar,
        Route::Reading,
        Route::Listening,
        Route::Speaking,
        Route::Progress,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Vocabulary => "/vocabulary",
            Route::Grammar => "/grammar",
            Route::Reading => "/reading",
            Route::Listening => "/listening",
            Route::Speaking => "/speaking",
            Route::Progress => "/progress",
        }
    }

    /// Accepts paths with or without the leading slash.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim().trim_end_matches('/');
        let name = trimmed.strip_prefix('/').unwrap_or(trimmed);
        Self::ALL
            .into_iter()
            .find(|route| route.path().trim_start_matches('/') == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Vocabulary => "Vocabulary",
            Route::Grammar => "Grammar",
            Route::Reading => "Reading",
            Route::Listening => "Listening",
            Route::Speaking => "Speaking",
            Route::Progress => "Progress",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Route::Home => "Interactive, step-by-step English practice",
            Route::Vocabulary => "Memorise words quickly with flashcards",
            Route::Grammar => "Learn grammar with detailed explanations",
            Route::Reading => "Build reading comprehension across many topics",
            Route::Listening => "Train your ear with real-life conversations",
            Route::Speaking => "Practise pronunciation and everyday dialogues",
            Route::Progress => "Track your results and improvement",
        }
    }

    /// Learning modules listed on the home page.
    pub fn modules() -> impl Iterator<Item = Route> {
        Self::ALL.into_iter().filter(|r| *r != Route::Home)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_path(s).ok_or_else(|| format!("unknown route '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_from_path_variants() {
        assert_eq!(Route::from_path(""), Some(Route::Home));
        assert_eq!(Route::from_path("grammar"), Some(Route::Grammar));
        assert_eq!(Route::from_path("/listening/"), Some(Route::Listening));
        assert_eq!(Route::from_path("/grammar/1"), None);
        assert!("/settings".parse::<Route>().is_err());
    }

    #[test]
    fn test_modules_exclude_home() {
        let modules: Vec<_> = Route::modules().collect();
        assert_eq!(modules.len(), 6);
        assert!(!modules.contains(&Route::Home));
    }
}
