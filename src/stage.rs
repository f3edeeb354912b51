use std::fmt;

use crate::defects::Defect;

/// Number of playable stages.
pub const TOTAL_STAGES: u8 = 7;

/// Position in the guided sequence: `1..=TOTAL_STAGES`, or one past the end
/// once every defect has been fixed.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Stage(u8);

impl Stage {
    pub const FIRST: Stage = Stage(1);
    pub const COMPLETE: Stage = Stage(TOTAL_STAGES + 1);

    /// Builds a stage from an untrusted number, clamping it into range.
    #[must_use]
    pub fn clamped(raw: i64) -> Self {
        let max = i64::from(Self::COMPLETE.0);
        // Clamped into 1..=8, so the narrowing cannot fail.
        Stage(u8::try_from(raw.clamp(1, max)).unwrap_or(1))
    }

    #[must_use]
    pub fn number(self) -> u8 {
        self.0
    }

    /// Returns true once every stage has been fixed.
    #[must_use]
    pub fn is_complete(self) -> bool {
        self.0 > TOTAL_STAGES
    }

    /// Returns the following stage; saturates at [`Stage::COMPLETE`].
    #[must_use]
    pub fn next(self) -> Self {
        Stage((self.0 + 1).min(Self::COMPLETE.0))
    }

    /// The seeded bug this stage asks the player to find.
    #[must_use]
    pub fn defect(self) -> Option<Defect> {
        Defect::ALL.get(usize::from(self.0).checked_sub(1)?).copied()
    }

    /// Panel hint nudging the player towards the bug.
    #[must_use]
    pub fn hint(self) -> &'static str {
        match self.defect() {
            Some(Defect::LeftTurnBlocked) => "Hint: Try turning LEFT...",
            Some(Defect::FoodHitScaled) => "Hint: Walk over the food cell",
            Some(Defect::GrowthOverflow) => "Hint: Eat food & watch length",
            Some(Defect::SpawnIgnoresBody) => "Hint: Where does food respawn?",
            Some(Defect::SpeedUncapped) => "Hint: Watch speed over time",
            Some(Defect::VerticalBoundByWidth) => "Hint: Walk along every wall",
            Some(Defect::CollisionByDuplicates) => "Hint: Can you crash into yourself?",
            None => "",
        }
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_complete() {
            f.write_str("ALL FIXED")
        } else {
            write!(f, "{}/{}", self.0, TOTAL_STAGES)
        }
    }
}
