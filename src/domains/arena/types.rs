use serde::{Deserialize, Serialize};

/// Server configuration received once at session join. Read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArenaConfig {
    /// Side length of the square arena.
    #[serde(rename = "arenaSize")]
    pub arena_size: f64,
}

/// Current agent coordinates, refreshed every control cycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AgentPose {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CanonStatus {
    #[serde(rename = "shellInProgress")]
    pub shell_in_progress: bool,
}
