//! The studio aggregate: wallet, lot facilities, films, and talent roster.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::economy::Currency;
use crate::error::{require_non_empty, ModelError};
use crate::film::Film;
use crate::geometry::Vec3;
use crate::talent::TalentContract;

/// Building types available on the lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacilityType {
    Office,
    Soundstage,
    Backlot,
    SpecialEffects,
    Marketing,
    TalentAgency,
    WritingRoom,
}

impl FacilityType {
    pub const ALL: [FacilityType; 7] = [
        FacilityType::Office,
        FacilityType::Soundstage,
        FacilityType::Backlot,
        FacilityType::SpecialEffects,
        FacilityType::Marketing,
        FacilityType::TalentAgency,
        FacilityType::WritingRoom,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Office => "Office",
            Self::Soundstage => "Soundstage",
            Self::Backlot => "Backlot",
            Self::SpecialEffects => "Special Effects",
            Self::Marketing => "Marketing",
            Self::TalentAgency => "Talent Agency",
            Self::WritingRoom => "Writing Room",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub id: String,
    pub name: String,
    pub facility_type: FacilityType,
    pub level: u32,
    pub position: Vec3,
}

impl Facility {
    pub fn new(
        name: impl Into<String>,
        facility_type: FacilityType,
        level: u32,
        position: Vec3,
    ) -> Result<Self, ModelError> {
        let facility = Self {
            id: crate::new_id(),
            name: name.into(),
            facility_type,
            level,
            position,
        };
        require_non_empty("facility name", &facility.name)?;
        if level == 0 {
            return Err(ModelError::ZeroLevel);
        }
        Ok(facility)
    }
}

/// The player's studio. One per session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Studio {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub currency: Currency,
    pub facilities: Vec<Facility>,
    pub films: Vec<Film>,
    /// The owning collection for every contract a film refers to.
    pub talent: Vec<TalentContract>,
}

impl Studio {
    /// Found a level-1 studio with empty lot, slate, and roster.
    pub fn found(name: impl Into<String>, currency: Currency) -> Result<Self, ModelError> {
        let name = name.into();
        require_non_empty("studio name", &name)?;
        Ok(Self {
            id: crate::new_id(),
            name,
            level: 1,
            currency,
            facilities: Vec::new(),
            films: Vec::new(),
            talent: Vec::new(),
        })
    }

    pub fn talent_by_id(&self, id: &str) -> Option<&TalentContract> {
        self.talent.iter().find(|t| t.id == id)
    }

    pub fn film_by_id(&self, id: &str) -> Option<&Film> {
        self.films.iter().find(|f| f.id == id)
    }

    /// Roster keyed by talent id.
    pub fn talent_index(&self) -> HashMap<&str, &TalentContract> {
        self.talent.iter().map(|t| (t.id.as_str(), t)).collect()
    }

    /// Resolve a film's cast ids through the roster, skipping unknown ids.
    pub fn resolve_cast<'a>(&'a self, film: &Film) -> Vec<&'a TalentContract> {
        let index = self.talent_index();
        film.cast
            .iter()
            .filter_map(|id| index.get(id.as_str()).copied())
            .collect()
    }

    /// First talent id referenced by `film` that is not on the roster.
    pub fn missing_talent<'f>(&self, film: &'f Film) -> Option<&'f str> {
        let index = self.talent_index();
        film.talent_ids().find(|id| !index.contains_key(*id))
    }
}
