use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::common::ClientResult;

use super::types::{AgentPose, ArenaConfig, CanonStatus};

/// Port trait for the request/reply messaging collaborator the decision
/// engine talks to. Every call sends one request and waits for its reply;
/// implementations (adapters) provide the actual transport.
#[async_trait]
pub trait ArenaClient: Send + Sync {
    /// Establish session identity. Adapters apply their configured retry
    /// budget before giving up with a fatal error.
    async fn join(&self, name: &str) -> ClientResult<ArenaConfig>;

    async fn location(&self) -> ClientResult<AgentPose>;

    async fn set_direction(&self, radians: f64) -> ClientResult<()>;

    async fn set_speed(&self, speed: f64) -> ClientResult<()>;

    async fn canon(&self) -> ClientResult<CanonStatus>;

    /// Scan the arc from `start_radians` to `end_radians`. Returns the
    /// distance to the nearest detection, or 0 if the arc is empty.
    async fn scan(&self, start_radians: f64, end_radians: f64) -> ClientResult<f64>;

    async fn fire_canon(&self, direction: f64, distance: f64) -> ClientResult<()>;

    /// Cumulative transport counters, reported at shutdown.
    fn stats(&self) -> TransportStats;
}

pub type DynArenaClient = Arc<dyn ArenaClient>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransportStats {
    pub sent: u64,
    pub received: u64,
    pub errors: u64,
}

impl fmt::Display for TransportStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sent={} received={} errors={}",
            self.sent, self.received, self.errors
        )
    }
}
