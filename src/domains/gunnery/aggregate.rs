use std::f64::consts::TAU;

use tracing::debug;

use crate::common::ClientResult;
use crate::domains::arena::ArenaClient;

/// Angular resolution of the scan space: the full circle is divided into
/// 128 units of `2π/128` radians each.
pub const SCAN_UNITS: f64 = 128.0;

pub fn unit_to_radians(unit: f64) -> f64 {
    unit / SCAN_UNITS * TAU
}

/// Half-open interval `[length, radius)` over the 128-unit circle, narrowed
/// step by step until it empties or a firing solution drops out.
///
/// The arithmetic is deliberately real-valued: `mid` sits at the true
/// midpoint and the halves are `[length, mid - 1]` / `[mid + 1, radius]`,
/// so successive widths follow a fixed sequence independent of which half
/// is taken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanWindow {
    pub length: f64,
    pub radius: f64,
}

impl ScanWindow {
    pub fn full_circle() -> Self {
        Self {
            length: 0.0,
            radius: SCAN_UNITS,
        }
    }

    /// The search is over once the interval inverts.
    pub fn is_exhausted(&self) -> bool {
        self.radius < self.length
    }

    pub fn midpoint(&self) -> f64 {
        self.length + (self.radius - self.length) / 2.0
    }

    /// Firing direction once the interval has narrowed to roughly one unit
    /// at either end. Both ends are checked on every narrowing step, low
    /// end first; at most one can trigger per step.
    pub fn pre_fire_direction(&self) -> Option<f64> {
        let mid = self.midpoint();
        if mid <= self.length + 1.0 {
            Some(unit_to_radians((mid + self.length) / 2.0))
        } else if mid >= self.radius - 1.0 {
            Some(unit_to_radians((mid + self.radius) / 2.0))
        } else {
            None
        }
    }

    /// The lower-half arc `[length, mid)` to probe next, in radians.
    pub fn scan_arc(&self) -> (f64, f64) {
        (
            unit_to_radians(self.length),
            unit_to_radians(self.midpoint()),
        )
    }

    /// Narrow to the lower half when the probe detected something, to the
    /// upper half when it came back empty.
    pub fn narrow(&self, hit: bool) -> ScanWindow {
        let mid = self.midpoint();
        if hit {
            ScanWindow {
                length: self.length,
                radius: mid - 1.0,
            }
        } else {
            ScanWindow {
                length: mid + 1.0,
                radius: self.radius,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquisitionOutcome {
    Fired { shots: u32 },
    NoTarget,
}

/// One full acquisition attempt over the whole circle.
pub async fn acquire_target(client: &dyn ArenaClient) -> ClientResult<AcquisitionOutcome> {
    acquire_within(client, ScanWindow::full_circle()).await
}

/// Binary-search acquisition over `window`: probe the lower half, keep the
/// half that contains a detection, and fire once an end check triggers.
///
/// Known anomaly, kept on purpose: the end checks run before the probe on
/// every step and a fire does not stop the search, so a single attempt can
/// issue more than one fire command and keeps scanning after firing. A fire
/// is skipped if no probe of this attempt has reported a distance yet, as
/// there is no range to shoot at.
pub async fn acquire_within(
    client: &dyn ArenaClient,
    window: ScanWindow,
) -> ClientResult<AcquisitionOutcome> {
    let mut window = window;
    let mut last_hit: Option<f64> = None;
    let mut shots = 0u32;

    while !window.is_exhausted() {
        if let Some(direction) = window.pre_fire_direction() {
            if let Some(distance) = last_hit {
                client.fire_canon(direction, distance).await?;
                shots += 1;
                debug!(direction, distance, "fired");
            }
        }

        let (start, end) = window.scan_arc();
        let distance = client.scan(start, end).await?;
        if distance != 0.0 {
            last_hit = Some(distance);
            window = window.narrow(true);
        } else {
            window = window.narrow(false);
        }
    }

    Ok(if shots > 0 {
        AcquisitionOutcome::Fired { shots }
    } else {
        AcquisitionOutcome::NoTarget
    })
}
