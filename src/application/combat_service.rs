use tracing::debug;

use crate::common::ClientResult;
use crate::domains::arena::{ArenaConfig, DynArenaClient};
use crate::domains::gunnery;
use crate::domains::navigation::Navigator;

/// Speed requested on the fixed cadence.
pub const REQUESTED_SPEED: f64 = 50.0;
/// A speed command goes out every this many cycles, independent of mode
/// changes.
pub const SPEED_CADENCE: u64 = 10;

/// Decision loop: drives one control cycle after another against the arena
/// server. All per-session state lives here — nothing is process-global.
pub struct CombatService {
    client: DynArenaClient,
    conf: ArenaConfig,
    navigator: Navigator,
    cycles: u64,
}

impl CombatService {
    pub fn new(client: DynArenaClient, conf: ArenaConfig) -> Self {
        Self {
            client,
            conf,
            navigator: Navigator::new(),
            cycles: 0,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Run cycles until the caller drops the future. A failed cycle is a
    /// warning at most — it usually means our health reached zero since the
    /// last check — so the partial cycle is discarded and play continues.
    pub async fn run(&mut self) {
        loop {
            if let Err(error) = self.cycle().await {
                debug!(%error, "cycle aborted, continuing with the next one");
            }
        }
    }

    /// One control cycle, every sub-step awaited before the next: pose,
    /// navigation update, conditional movement commands, canon check, and
    /// target acquisition while no shell is in flight.
    pub async fn cycle(&mut self) -> ClientResult<()> {
        self.cycles += 1;

        let pose = self.client.location().await?;

        if let Some(heading) = self.navigator.observe(&pose, &self.conf) {
            self.client.set_direction(heading).await?;
            self.navigator.confirm_direction(heading);
        }

        if self.cycles % SPEED_CADENCE == 0 {
            self.client.set_speed(REQUESTED_SPEED).await?;
        }

        // Wait for the canon before scanning; with a shell still in flight
        // there is nothing to fire with.
        let canon = self.client.canon().await?;
        if !canon.shell_in_progress {
            gunnery::acquire_target(self.client.as_ref()).await?;
        }

        Ok(())
    }
}
