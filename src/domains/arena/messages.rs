use serde::{Deserialize, Serialize};

use super::types::ArenaConfig;

/// Requests the agent can send to the arena server. Variant and field names
/// follow the server's wire vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Request {
    #[serde(rename = "joinRequest")]
    Join { name: String },

    #[serde(rename = "getLocationRequest")]
    GetLocation,

    #[serde(rename = "setDirectionRequest")]
    SetDirection {
        #[serde(rename = "requestedDirection")]
        requested_direction: f64,
    },

    #[serde(rename = "setSpeedRequest")]
    SetSpeed {
        #[serde(rename = "requestedSpeed")]
        requested_speed: f64,
    },

    #[serde(rename = "getCanonRequest")]
    GetCanon,

    #[serde(rename = "scanRequest")]
    Scan {
        #[serde(rename = "startRadians")]
        start_radians: f64,
        #[serde(rename = "endRadians")]
        end_radians: f64,
    },

    #[serde(rename = "fireCanonRequest")]
    FireCanon { direction: f64, distance: f64 },
}

/// Replies the server sends back. An `Error` reply is a normal occurrence
/// whenever the agent's health reached zero since the last request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Reply {
    #[serde(rename = "joinReply")]
    Join { conf: ArenaConfig },

    #[serde(rename = "getLocationReply")]
    Location { x: f64, y: f64 },

    #[serde(rename = "setDirectionReply")]
    SetDirection,

    #[serde(rename = "setSpeedReply")]
    SetSpeed,

    #[serde(rename = "getCanonReply")]
    Canon {
        #[serde(rename = "shellInProgress")]
        shell_in_progress: bool,
    },

    #[serde(rename = "scanReply")]
    Scan {
        /// 0 means nothing was detected in the requested arc.
        distance: f64,
    },

    #[serde(rename = "fireCanonReply")]
    FireCanon,

    #[serde(rename = "Error")]
    Error { result: String },
}

impl Reply {
    pub fn kind(&self) -> &'static str {
        match self {
            Reply::Join { .. } => "joinReply",
            Reply::Location { .. } => "getLocationReply",
            Reply::SetDirection => "setDirectionReply",
            Reply::SetSpeed => "setSpeedReply",
            Reply::Canon { .. } => "getCanonReply",
            Reply::Scan { .. } => "scanReply",
            Reply::FireCanon => "fireCanonReply",
            Reply::Error { .. } => "Error",
        }
    }
}
