//! The studio lot as the render layer sees it.
//!
//! [`LotLayout::from_studio`] turns a studio into a flat list of box
//! buildings plus the fixed ground and camera rig. Films come first, then
//! facilities, each in studio order. A film building's height and footprint
//! scale with its budget (one unit per million) and its colour flips from
//! blue to green once released. Clicking a film building produces a
//! [`LotAction`] the view feeds back into the store.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::film::{Film, ProductionStatus};
use crate::geometry::Vec3;
use crate::store::StudioStore;
use crate::studio::{Facility, FacilityType, Studio};

/// Base box size (width, height, depth) before scaling.
pub const BUILDING_SIZE: [f32; 3] = [2.0, 3.0, 2.0];
/// Budget that maps to a scale of 1.0.
pub const BUDGET_PER_SCALE_UNIT: f64 = 1_000_000.0;
pub const FACILITY_SCALE: f32 = 0.8;

pub const COLOR_IN_PRODUCTION: &str = "#2196F3";
pub const COLOR_RELEASED: &str = "#4CAF50";
pub const COLOR_FACILITY: &str = "#9C27B0";
pub const COLOR_GROUND: &str = "#3a7e3d";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LotAction {
    SelectFilm(String),
}

impl LotAction {
    /// Apply a click to the store.
    pub fn apply(&self, store: &mut StudioStore) -> Result<(), StoreError> {
        match self {
            Self::SelectFilm(id) => {
                let studio = store.studio().ok_or(StoreError::NoStudio)?;
                let film = studio
                    .film_by_id(id)
                    .cloned()
                    .ok_or_else(|| StoreError::UnknownFilm(id.clone()))?;
                store.select_film(Some(film));
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BuildingKind {
    Film(ProductionStatus),
    Facility(FacilityType),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LotBuilding {
    /// Id of the film or facility this building stands for.
    pub id: String,
    pub kind: BuildingKind,
    pub position: Vec3,
    pub scale: f32,
    pub color: &'static str,
    pub on_click: Option<LotAction>,
}

impl LotBuilding {
    fn for_film(film: &Film) -> Self {
        Self {
            id: film.id.clone(),
            kind: BuildingKind::Film(film.status),
            position: film.position,
            scale: (film.budget / BUDGET_PER_SCALE_UNIT) as f32,
            color: if film.status.is_released() {
                COLOR_RELEASED
            } else {
                COLOR_IN_PRODUCTION
            },
            on_click: Some(LotAction::SelectFilm(film.id.clone())),
        }
    }

    fn for_facility(facility: &Facility) -> Self {
        Self {
            id: facility.id.clone(),
            kind: BuildingKind::Facility(facility.facility_type),
            position: facility.position,
            scale: FACILITY_SCALE,
            color: COLOR_FACILITY,
            on_click: None,
        }
    }

    /// Box dimensions after scaling.
    pub fn size(&self) -> [f32; 3] {
        BUILDING_SIZE.map(|d| d * self.scale)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroundPlane {
    pub width: f32,
    pub depth: f32,
    pub elevation: f32,
    pub color: &'static str,
}

impl Default for GroundPlane {
    fn default() -> Self {
        Self {
            width: 100.0,
            depth: 100.0,
            elevation: -0.5,
            color: COLOR_GROUND,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraRig {
    pub position: Vec3,
    pub fov_degrees: f32,
    /// Orbit controls may not tilt past this polar angle (just above the horizon).
    pub max_polar_angle: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            position: Vec3::new(20.0, 15.0, 20.0),
            fov_degrees: 60.0,
            max_polar_angle: std::f32::consts::PI / 2.1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LotLayout {
    pub buildings: Vec<LotBuilding>,
    pub ground: GroundPlane,
    pub camera: CameraRig,
}

impl LotLayout {
    pub fn from_studio(studio: &Studio) -> Self {
        let buildings = studio
            .films
            .iter()
            .map(LotBuilding::for_film)
            .chain(studio.facilities.iter().map(LotBuilding::for_facility))
            .collect();
        Self {
            buildings,
            ..Self::default()
        }
    }

    /// Layout for whatever the store holds; empty lot before initialization.
    pub fn from_store(store: &StudioStore) -> Self {
        store.studio().map(Self::from_studio).unwrap_or_default()
    }

    /// Action bound to the building with `id`, if it is clickable.
    pub fn click(&self, id: &str) -> Option<&LotAction> {
        self.buildings
            .iter()
            .find(|b| b.id == id)
            .and_then(|b| b.on_click.as_ref())
    }
}
