use serde::Deserialize;
use std::fmt;

/// Skill level the learner self-reports on the form.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        };
        f.write_str(s)
    }
}

/// How deep the generated learning path should go.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Depth {
    Overview,
    Standard,
    DeepDive,
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Depth::Overview => "overview",
            Depth::Standard => "standard",
            Depth::DeepDive => "deep-dive",
        };
        f.write_str(s)
    }
}

/// POST /api/auto request body.
#[derive(Debug, Deserialize)]
pub struct AutoRequest {
    pub main: String,
    pub level: Level,
    pub depth: Depth,
}

/// POST /api/learn request body.
/// `sub` order is significant: resource links come back positionally aligned
/// with it, and the prompt instructs the generator to keep that order.
#[derive(Debug, Deserialize)]
pub struct LearnRequest {
    pub main: String,
    pub level: Level,
    pub depth: Depth,
    pub sub: Vec<String>,
    #[serde(default)]
    pub goal: Option<String>,
}
