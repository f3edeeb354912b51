use std::fmt;

use clap::ValueEnum;
use enum_map::{Enum, EnumMap, enum_map};

/// The catalogue of seeded bugs, in the order their stages are played.
#[derive(Debug, Clone, Copy, Enum, Eq, PartialEq, Hash, ValueEnum)]
pub enum Defect {
    /// Queued left turns are silently dropped.
    LeftTurnBlocked,
    /// Eating compares the head's pixel coordinates against the food's grid cell.
    FoodHitScaled,
    /// Each food grants several cells of growth instead of one.
    GrowthOverflow,
    /// Food respawns without avoiding the snake's body.
    SpawnIgnoresBody,
    /// Speed grows every tick and ignores the cap.
    SpeedUncapped,
    /// The bottom wall is checked against the grid width.
    VerticalBoundByWidth,
    /// Self-collision is only noticed once the body already overlaps itself.
    CollisionByDuplicates,
}

impl Defect {
    /// Every defect in stage order.
    pub const ALL: [Defect; 7] = [
        Defect::LeftTurnBlocked,
        Defect::FoodHitScaled,
        Defect::GrowthOverflow,
        Defect::SpawnIgnoresBody,
        Defect::SpeedUncapped,
        Defect::VerticalBoundByWidth,
        Defect::CollisionByDuplicates,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Defect::LeftTurnBlocked => "left turns blocked",
            Defect::FoodHitScaled => "food hit uses pixel coordinates",
            Defect::GrowthOverflow => "growth overflow",
            Defect::SpawnIgnoresBody => "food spawns inside the body",
            Defect::SpeedUncapped => "speed is uncapped",
            Defect::VerticalBoundByWidth => "bottom wall uses grid width",
            Defect::CollisionByDuplicates => "late self-collision",
        }
    }
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Which seeded defects are active in a session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Defects(EnumMap<Defect, bool>);

impl Defects {
    /// Every defect active, as the game ships.
    #[must_use]
    pub fn seeded() -> Self {
        Self(enum_map! { _ => true })
    }

    /// The fully corrected model.
    #[must_use]
    pub fn none() -> Self {
        Self(enum_map! { _ => false })
    }

    /// Returns a copy with `defect` corrected.
    #[must_use]
    pub fn without(mut self, defect: Defect) -> Self {
        self.0[defect] = false;
        self
    }

    /// Returns a copy with `defect` active.
    #[must_use]
    pub fn with(mut self, defect: Defect) -> Self {
        self.0[defect] = true;
        self
    }

    #[must_use]
    pub fn is_active(&self, defect: Defect) -> bool {
        self.0[defect]
    }

    /// Iterates over the defects still present, in stage order.
    pub fn active(&self) -> impl Iterator<Item = Defect> + '_ {
        self.0
            .iter()
            .filter_map(|(defect, &on)| on.then_some(defect))
    }
}

impl Default for Defects {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::{Defect, Defects};

    #[test]
    fn seeded_activates_everything() {
        let defects = Defects::seeded();
        assert_eq!(defects.active().collect::<Vec<_>>(), Defect::ALL.to_vec());
    }

    #[test]
    fn without_fixes_only_the_named_defect() {
        let defects = Defects::seeded().without(Defect::SpeedUncapped);
        assert!(!defects.is_active(Defect::SpeedUncapped));
        assert!(defects.is_active(Defect::LeftTurnBlocked));
        assert_eq!(defects.active().count(), Defect::ALL.len() - 1);
    }

    #[test]
    fn none_then_with_reintroduces_one() {
        let defects = Defects::none().with(Defect::GrowthOverflow);
        assert_eq!(
            defects.active().collect::<Vec<_>>(),
            vec![Defect::GrowthOverflow]
        );
    }
}
