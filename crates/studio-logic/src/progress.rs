//! Session-wide progression: universe phases and achievements.
//!
//! Nothing advances progress yet; the store only holds it.

use serde::{Deserialize, Serialize};

use crate::economy::CurrencyUpdate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UniversePhase {
    Origin,
    Expansion,
    Culmination,
    NewDirections,
}

impl UniversePhase {
    pub const ALL: [UniversePhase; 4] = [
        UniversePhase::Origin,
        UniversePhase::Expansion,
        UniversePhase::Culmination,
        UniversePhase::NewDirections,
    ];

    pub fn next(&self) -> Option<UniversePhase> {
        match self {
            Self::Origin => Some(Self::Expansion),
            Self::Expansion => Some(Self::Culmination),
            Self::Culmination => Some(Self::NewDirections),
            Self::NewDirections => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub completed: bool,
    pub reward: CurrencyUpdate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameProgress {
    /// Tracked independently of `Studio::level`.
    pub studio_level: u32,
    pub universe_phase: UniversePhase,
    pub achievements: Vec<Achievement>,
}

impl Default for GameProgress {
    fn default() -> Self {
        Self {
            studio_level: 1,
            universe_phase: UniversePhase::Origin,
            achievements: Vec::new(),
        }
    }
}

impl GameProgress {
    pub fn completed_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.completed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_origin() {
        let p = GameProgress::default();
        assert_eq!(p.studio_level, 1);
        assert_eq!(p.universe_phase, UniversePhase::Origin);
        assert!(p.achievements.is_empty());
        assert_eq!(p.completed_count(), 0);
    }

    #[test]
    fn phases_progress_in_order() {
        let phases: Vec<_> =
            std::iter::successors(Some(UniversePhase::Origin), |p| p.next()).collect();
        assert_eq!(phases, UniversePhase::ALL.to_vec());
    }
}
