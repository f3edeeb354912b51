use super::{Detector, Snapshot};
use crate::config::{SPEED_CAP, SPEED_MIN_SCORE, SPEED_SUSTAIN_TICKS};

/// Fires once the speed has stayed under the cap for a sustained run and
/// the player has scored enough for the ramp to matter.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct SpeedBoundDetector {
    compliant_ticks: u32,
}

impl Detector for SpeedBoundDetector {
    fn observe(&mut self, snapshot: &Snapshot<'_>) -> bool {
        if snapshot.tick_rate > SPEED_CAP {
            self.compliant_ticks = 0;
            return false;
        }
        self.compliant_ticks += 1;
        snapshot.score >= SPEED_MIN_SCORE && self.compliant_ticks > SPEED_SUSTAIN_TICKS
    }
}
