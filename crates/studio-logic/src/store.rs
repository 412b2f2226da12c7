//! The session state store.
//!
//! [`StudioStore`] is an explicitly owned value: create one per session,
//! pass it by reference to whatever needs it, drop it (or [`StudioStore::reset`])
//! to tear the session down. Every mutation goes through one of its actions.
//!
//! Mutations of the studio never touch the current [`Studio`] value. Each
//! successful action builds a new studio and installs a fresh `Arc`, so a
//! reader holding an older snapshot can detect change with `Arc::ptr_eq`
//! (or by comparing [`StudioStore::revision`]) without a deep comparison.
//!
//! Actions that need a studio return [`StoreError::NoStudio`] when there is
//! none. A rejected action leaves every piece of state as it was.
//!
//! ```
//! use studio_logic::economy::CurrencyUpdate;
//! use studio_logic::store::StudioStore;
//!
//! let mut store = StudioStore::default();
//! store.initialize_studio("Universal Dreams Studio").unwrap();
//! store.update_currency(CurrencyUpdate::producer_credits(50)).unwrap();
//! assert_eq!(store.studio().unwrap().currency.producer_credits, 50);
//! ```

use std::sync::Arc;

use crate::config::StudioConfig;
use crate::economy::{Currency, CurrencyUpdate};
use crate::error::StoreError;
use crate::film::Film;
use crate::progress::GameProgress;
use crate::studio::Studio;
use crate::talent::{TalentContract, TalentType};

/// Read-only view of the store handed to the render layer.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSnapshot {
    pub studio: Option<Arc<Studio>>,
    pub selected_film: Option<Film>,
    pub selected_talent: Option<TalentContract>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub revision: u64,
}

impl StoreSnapshot {
    /// Whether the studio changed between `self` and `newer`.
    pub fn studio_changed(&self, newer: &StoreSnapshot) -> bool {
        match (&self.studio, &newer.studio) {
            (Some(a), Some(b)) => !Arc::ptr_eq(a, b),
            (None, None) => false,
            _ => true,
        }
    }
}

#[derive(Debug)]
pub struct StudioStore {
    starting_currency: Currency,
    studio: Option<Arc<Studio>>,
    game_progress: GameProgress,
    selected_film: Option<Film>,
    selected_talent: Option<TalentContract>,
    is_loading: bool,
    error: Option<String>,
    revision: u64,
}

impl Default for StudioStore {
    fn default() -> Self {
        Self::new(&StudioConfig::default())
    }
}

impl StudioStore {
    pub fn new(config: &StudioConfig) -> Self {
        Self {
            starting_currency: config.starting_currency,
            studio: None,
            game_progress: GameProgress::default(),
            selected_film: None,
            selected_talent: None,
            is_loading: false,
            error: None,
            revision: 0,
        }
    }

    // ── State ──────────────────────────────────────────────────────────

    pub fn studio(&self) -> Option<&Studio> {
        self.studio.as_deref()
    }

    /// Shared handle to the current studio snapshot.
    pub fn studio_handle(&self) -> Option<Arc<Studio>> {
        self.studio.clone()
    }

    pub fn game_progress(&self) -> &GameProgress {
        &self.game_progress
    }

    pub fn selected_film(&self) -> Option<&Film> {
        self.selected_film.as_ref()
    }

    pub fn selected_talent(&self) -> Option<&TalentContract> {
        self.selected_talent.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Incremented by every successful action.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            studio: self.studio.clone(),
            selected_film: self.selected_film.clone(),
            selected_talent: self.selected_talent.clone(),
            is_loading: self.is_loading,
            error: self.error.clone(),
            revision: self.revision,
        }
    }

    /// Resolve the cast of `film` through the studio roster.
    pub fn film_cast(&self, film: &Film) -> Vec<&TalentContract> {
        self.studio
            .as_deref()
            .map(|s| s.resolve_cast(film))
            .unwrap_or_default()
    }

    // ── Actions ────────────────────────────────────────────────────────

    /// Found the session's studio. Rejected if one already exists; use
    /// [`reset`](Self::reset) first for an intentional restart.
    pub fn initialize_studio(&mut self, name: &str) -> Result<(), StoreError> {
        if let Some(existing) = &self.studio {
            log::warn!("Studio already initialized ({})", existing.id);
            return Err(StoreError::AlreadyInitialized(existing.id.clone()));
        }
        if name.trim().is_empty() {
            log::warn!("Rejected studio initialization: blank name");
            return Err(StoreError::InvalidName);
        }
        let studio = Studio::found(name, self.starting_currency)?;
        log::info!(
            "Founded studio '{}' ({}) with {} coins, {} credits",
            studio.name,
            studio.id,
            studio.currency.studio_coins,
            studio.currency.producer_credits
        );
        self.studio = Some(Arc::new(studio));
        self.bump();
        Ok(())
    }

    pub fn select_film(&mut self, film: Option<Film>) {
        log::debug!(
            "Selected film: {}",
            film.as_ref().map(|f| f.title.as_str()).unwrap_or("<none>")
        );
        self.selected_film = film;
        self.bump();
    }

    pub fn select_talent(&mut self, talent: Option<TalentContract>) {
        log::debug!(
            "Selected talent: {}",
            talent.as_ref().map(|t| t.name.as_str()).unwrap_or("<none>")
        );
        self.selected_talent = talent;
        self.bump();
    }

    /// Merge the supplied fields into the studio wallet.
    pub fn update_currency(&mut self, update: CurrencyUpdate) -> Result<(), StoreError> {
        let current = self.current()?;
        let currency = current.currency.merged(&update);
        log::debug!("Currency {:?} -> {:?}", current.currency, currency);
        let next = Studio {
            currency,
            ..(**current).clone()
        };
        self.install(next);
        Ok(())
    }

    /// Append a film to the studio's slate.
    ///
    /// The film's id must be new, and every talent id it references must be
    /// on the studio roster.
    pub fn start_film_production(&mut self, film: Film) -> Result<(), StoreError> {
        let current = self.current()?;
        film.validate()?;
        if current.film_by_id(&film.id).is_some() {
            log::warn!("Rejected film '{}': duplicate id {}", film.title, film.id);
            return Err(StoreError::DuplicateFilm(film.id));
        }
        if let Some(missing) = current.missing_talent(&film) {
            log::warn!("Rejected film '{}': unknown talent {}", film.title, missing);
            return Err(StoreError::UnknownTalent(missing.to_string()));
        }
        for (id, expected) in [
            (&film.director, TalentType::Director),
            (&film.writer, TalentType::Writer),
        ] {
            if current.talent_by_id(id).map(|t| t.talent_type) != Some(expected) {
                log::warn!(
                    "Rejected film '{}': {} is not a {}",
                    film.title,
                    id,
                    expected.label()
                );
                return Err(StoreError::WrongRole {
                    id: id.clone(),
                    expected,
                });
            }
        }
        log::info!(
            "Production started on '{}' ({}, budget {:.0})",
            film.title,
            film.genre.label(),
            film.budget
        );
        let mut next = (**current).clone();
        next.films.push(film);
        self.install(next);
        Ok(())
    }

    /// Append a contract to the roster. Any talent type is accepted.
    pub fn hire_actor(&mut self, talent: TalentContract) -> Result<(), StoreError> {
        let current = self.current()?;
        talent.validate()?;
        if current.talent_by_id(&talent.id).is_some() {
            log::warn!("Rejected hire of {}: duplicate id {}", talent.name, talent.id);
            return Err(StoreError::DuplicateTalent(talent.id));
        }
        log::info!(
            "Hired {} '{}' for {:.0}",
            talent.talent_type.label(),
            talent.name,
            talent.cost
        );
        let mut next = (**current).clone();
        next.talent.push(talent);
        self.install(next);
        Ok(())
    }

    pub fn set_error(&mut self, error: Option<String>) {
        if let Some(message) = &error {
            log::error!("{}", message);
        }
        self.error = error;
        self.bump();
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
        self.bump();
    }

    /// Drop the studio, selection, and error. Progress is kept.
    pub fn reset(&mut self) {
        if let Some(studio) = self.studio.take() {
            log::info!("Studio '{}' ({}) closed", studio.name, studio.id);
        }
        self.selected_film = None;
        self.selected_talent = None;
        self.is_loading = false;
        self.error = None;
        self.bump();
    }

    fn current(&self) -> Result<&Arc<Studio>, StoreError> {
        self.studio.as_ref().ok_or_else(|| {
            log::warn!("Rejected action: no studio");
            StoreError::NoStudio
        })
    }

    fn install(&mut self, studio: Studio) {
        self.studio = Some(Arc::new(studio));
        self.bump();
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}
