use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;

use crate::domains::arena::{AgentPose, ArenaConfig};

/// Wall the agent is currently following. Traversal is counter-clockwise,
/// so each wall has a fixed heading and a fixed successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationMode {
    Left,
    Bottom,
    Right,
    Top,
}

impl NavigationMode {
    /// Movement direction for this wall, radians, 0 = along +x.
    pub fn heading(self) -> f64 {
        match self {
            NavigationMode::Left => 1.5 * PI,
            NavigationMode::Bottom => 0.0,
            NavigationMode::Right => 0.5 * PI,
            NavigationMode::Top => PI,
        }
    }
}

/// Perimeter-following state machine. Holds the followed wall and the last
/// direction actually requested from the server, so redundant direction
/// commands are suppressed.
#[derive(Debug, Default)]
pub struct Navigator {
    mode: Option<NavigationMode>,
    requested_direction: Option<f64>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Option<NavigationMode> {
        self.mode
    }

    pub fn requested_direction(&self) -> Option<f64> {
        self.requested_direction
    }

    /// Wall of minimum distance for the first pose sample of a session.
    /// Ties break in enumeration order; the first minimum wins.
    pub fn initial_mode(pose: &AgentPose, conf: &ArenaConfig) -> NavigationMode {
        let choices = [
            (NavigationMode::Left, pose.x),
            (NavigationMode::Bottom, pose.y),
            (NavigationMode::Right, conf.arena_size - pose.x),
            (NavigationMode::Top, conf.arena_size - pose.y),
        ];

        let mut pick = choices[0];
        for choice in &choices[1..] {
            if choice.1 < pick.1 {
                pick = *choice;
            }
        }
        pick.0
    }

    /// Switch walls just before the corner. The threshold is a fifth of the
    /// arena side; until it is crossed the mode is stable.
    pub fn transition(
        mode: NavigationMode,
        pose: &AgentPose,
        conf: &ArenaConfig,
    ) -> NavigationMode {
        let turn_distance = conf.arena_size / 5.0;
        match mode {
            NavigationMode::Left if pose.y < turn_distance => NavigationMode::Bottom,
            NavigationMode::Bottom if pose.x > conf.arena_size - turn_distance => {
                NavigationMode::Right
            }
            NavigationMode::Right if pose.y > conf.arena_size - turn_distance => {
                NavigationMode::Top
            }
            NavigationMode::Top if pose.x < turn_distance => NavigationMode::Left,
            other => other,
        }
    }

    /// One navigation step for the given pose sample: initialize on the
    /// first sample, apply the corner transition, and return the heading to
    /// send — or `None` when it matches the last confirmed direction.
    ///
    /// The heading is only a candidate until [`Navigator::confirm_direction`]
    /// records the server's ack; a failed send leaves the navigator offering
    /// the same heading again next cycle.
    pub fn observe(&mut self, pose: &AgentPose, conf: &ArenaConfig) -> Option<f64> {
        let mode = match self.mode {
            None => {
                let initial = Self::initial_mode(pose, conf);
                debug!(?initial, x = pose.x, y = pose.y, "initial wall selected");
                initial
            }
            Some(current) => current,
        };

        let next = Self::transition(mode, pose, conf);
        if self.mode != Some(next) {
            debug!(mode = ?next, x = pose.x, y = pose.y, "mode set");
        }
        self.mode = Some(next);

        let heading = next.heading();
        if self.requested_direction == Some(heading) {
            None
        } else {
            Some(heading)
        }
    }

    /// Record a direction the server acknowledged.
    pub fn confirm_direction(&mut self, heading: f64) {
        self.requested_direction = Some(heading);
    }
}
