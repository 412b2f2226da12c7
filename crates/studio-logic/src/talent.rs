//! Talent contracts — hireable actors, directors, and writers.
//!
//! Skills are 0.0–1.0. Only the skill matching the talent's role is
//! populated; chemistry (how well they work with others) and star power
//! (audience draw) are present for everyone.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{require_money, require_non_empty, require_unit, ModelError};

/// Role a contract is signed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TalentType {
    Actor,
    Director,
    Writer,
}

impl TalentType {
    pub const ALL: [TalentType; 3] = [TalentType::Actor, TalentType::Director, TalentType::Writer];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Actor => "Actor",
            Self::Director => "Director",
            Self::Writer => "Writer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TalentSkills {
    pub acting: Option<f32>,
    pub directing: Option<f32>,
    pub writing: Option<f32>,
    pub chemistry: f32,
    pub star_power: f32,
}

impl TalentSkills {
    /// Build a skill set with only the role-relevant skill populated.
    pub fn for_role(role: TalentType, primary: f32, chemistry: f32, star_power: f32) -> Self {
        let mut skills = Self {
            acting: None,
            directing: None,
            writing: None,
            chemistry,
            star_power,
        };
        match role {
            TalentType::Actor => skills.acting = Some(primary),
            TalentType::Director => skills.directing = Some(primary),
            TalentType::Writer => skills.writing = Some(primary),
        }
        skills
    }

    /// The skill that matters for `role`, if populated.
    pub fn primary(&self, role: TalentType) -> Option<f32> {
        match role {
            TalentType::Actor => self.acting,
            TalentType::Director => self.directing,
            TalentType::Writer => self.writing,
        }
    }

    /// Check that exactly the `role` skill is populated, and that every
    /// populated skill is in range.
    pub fn validate_for(&self, role: TalentType) -> Result<(), ModelError> {
        let populated = [
            (TalentType::Actor, self.acting),
            (TalentType::Director, self.directing),
            (TalentType::Writer, self.writing),
        ];
        let matches_role = populated
            .iter()
            .all(|(kind, skill)| skill.is_some() == (*kind == role));
        if !matches_role {
            return Err(ModelError::RoleSkillMismatch { role: role.label() });
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if let Some(v) = self.acting {
            require_unit("acting", v)?;
        }
        if let Some(v) = self.directing {
            require_unit("directing", v)?;
        }
        if let Some(v) = self.writing {
            require_unit("writing", v)?;
        }
        require_unit("chemistry", self.chemistry)?;
        require_unit("star_power", self.star_power)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TalentContract {
    pub id: String,
    pub name: String,
    pub talent_type: TalentType,
    pub skills: TalentSkills,
    /// Signing cost in studio coins.
    pub cost: f64,
    pub availability: bool,
    pub contract_end: DateTime<Utc>,
}

impl TalentContract {
    /// Create an available contract with a fresh id.
    pub fn new(
        name: impl Into<String>,
        talent_type: TalentType,
        skills: TalentSkills,
        cost: f64,
        contract_end: DateTime<Utc>,
    ) -> Result<Self, ModelError> {
        let contract = Self {
            id: crate::new_id(),
            name: name.into(),
            talent_type,
            skills,
            cost,
            availability: true,
            contract_end,
        };
        contract.validate()?;
        Ok(contract)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        require_non_empty("talent id", &self.id)?;
        require_non_empty("talent name", &self.name)?;
        require_money("cost", self.cost)?;
        self.skills.validate_for(self.talent_type)
    }

    /// Whether the contract has run out at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.contract_end <= now
    }
}
