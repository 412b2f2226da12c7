//! Films — genre, production lifecycle, quality, and talent references.
//!
//! A film refers to talent by id only. The studio's roster is the single
//! source of truth for contract data; see [`crate::studio::Studio::talent_by_id`].

use serde::{Deserialize, Serialize};

use crate::error::{require_money, require_non_empty, require_unit, ModelError};
use crate::geometry::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    SciFi,
    Fantasy,
    Crime,
    Comedy,
}

impl Genre {
    pub const ALL: [Genre; 5] = [
        Genre::Action,
        Genre::SciFi,
        Genre::Fantasy,
        Genre::Crime,
        Genre::Comedy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::SciFi => "Sci-Fi",
            Self::Fantasy => "Fantasy",
            Self::Crime => "Crime",
            Self::Comedy => "Comedy",
        }
    }
}

/// Production lifecycle, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProductionStatus {
    PreProduction,
    Production,
    PostProduction,
    Marketing,
    Released,
}

impl ProductionStatus {
    pub const ALL: [ProductionStatus; 5] = [
        ProductionStatus::PreProduction,
        ProductionStatus::Production,
        ProductionStatus::PostProduction,
        ProductionStatus::Marketing,
        ProductionStatus::Released,
    ];

    /// The following stage, or `None` once released.
    pub fn next(&self) -> Option<ProductionStatus> {
        match self {
            Self::PreProduction => Some(Self::Production),
            Self::Production => Some(Self::PostProduction),
            Self::PostProduction => Some(Self::Marketing),
            Self::Marketing => Some(Self::Released),
            Self::Released => None,
        }
    }

    pub fn is_released(&self) -> bool {
        matches!(self, Self::Released)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::PreProduction => "Pre-Production",
            Self::Production => "Production",
            Self::PostProduction => "Post-Production",
            Self::Marketing => "Marketing",
            Self::Released => "Released",
        }
    }
}

/// Five independent quality sub-scores (0.0–1.0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FilmQuality {
    pub script: f32,
    pub acting: f32,
    pub directing: f32,
    pub special_effects: f32,
    pub marketing: f32,
}

impl FilmQuality {
    pub fn validate(&self) -> Result<(), ModelError> {
        require_unit("script", self.script)?;
        require_unit("acting", self.acting)?;
        require_unit("directing", self.directing)?;
        require_unit("special_effects", self.special_effects)?;
        require_unit("marketing", self.marketing)
    }

    /// Unweighted mean of the sub-scores.
    pub fn overall(&self) -> f32 {
        (self.script + self.acting + self.directing + self.special_effects + self.marketing) / 5.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub id: String,
    pub title: String,
    pub genre: Genre,
    pub budget: f64,
    pub status: ProductionStatus,
    pub quality: FilmQuality,
    /// Talent ids of the cast, in billing order.
    pub cast: Vec<String>,
    pub director: String,
    pub writer: String,
    /// Only meaningful once released.
    pub box_office: f64,
    /// Ids of connected films (references, not ownership).
    pub related_films: Vec<String>,
    /// Position on the studio lot.
    pub position: Vec3,
}

impl Film {
    /// A new film in pre-production with a fresh id and no cast yet.
    pub fn new(
        title: impl Into<String>,
        genre: Genre,
        budget: f64,
        director: impl Into<String>,
        writer: impl Into<String>,
        position: Vec3,
    ) -> Result<Self, ModelError> {
        let film = Self {
            id: crate::new_id(),
            title: title.into(),
            genre,
            budget,
            status: ProductionStatus::PreProduction,
            quality: FilmQuality::default(),
            cast: Vec::new(),
            director: director.into(),
            writer: writer.into(),
            box_office: 0.0,
            related_films: Vec::new(),
            position,
        };
        film.validate()?;
        Ok(film)
    }

    pub fn with_cast(mut self, cast: Vec<String>) -> Self {
        self.cast = cast;
        self
    }

    pub fn with_quality(mut self, quality: FilmQuality) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_related(mut self, related: Vec<String>) -> Self {
        self.related_films = related;
        self
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        require_non_empty("film id", &self.id)?;
        require_non_empty("film title", &self.title)?;
        require_non_empty("director", &self.director)?;
        require_non_empty("writer", &self.writer)?;
        require_money("budget", self.budget)?;
        require_money("box_office", self.box_office)?;
        self.quality.validate()
    }

    /// Every talent id this film references: director, writer, then cast.
    pub fn talent_ids(&self) -> impl Iterator<Item = &str> {
        [self.director.as_str(), self.writer.as_str()]
            .into_iter()
            .chain(self.cast.iter().map(String::as_str))
    }
}
