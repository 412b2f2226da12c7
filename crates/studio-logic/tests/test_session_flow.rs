//! Integration tests for a full studio session.
//!
//! Exercises: Bootstrap → StudioStore actions → LotLayout → click → selection
//!
//! All tests are pure logic — no renderer, no UI.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use studio_logic::bootstrap::{BootPhase, Bootstrap};
use studio_logic::casting::{generate_talent_pool, pitch_film};
use studio_logic::config::StudioConfig;
use studio_logic::economy::{Currency, CurrencyUpdate};
use studio_logic::error::StoreError;
use studio_logic::film::{Film, Genre};
use studio_logic::geometry::Vec3;
use studio_logic::lot::{LotAction, LotLayout};
use studio_logic::store::StudioStore;

// ── Helpers ────────────────────────────────────────────────────────────

fn fixed_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-06-01T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// Boot a session and hire an eight-person pool.
fn booted_session(seed: u64) -> (StudioStore, Bootstrap, StdRng) {
    let config = StudioConfig {
        seed: Some(seed),
        ..StudioConfig::default()
    };
    let mut store = StudioStore::new(&config);
    let mut boot = Bootstrap::new(&config);
    boot.mount(&mut store);

    let mut rng = StdRng::seed_from_u64(seed);
    for talent in generate_talent_pool(&mut rng, 8, fixed_now()).unwrap() {
        store.hire_actor(talent).unwrap();
    }
    (store, boot, rng)
}

// ── Session lifecycle ──────────────────────────────────────────────────

#[test]
fn boot_then_produce_then_click() {
    let (mut store, boot, mut rng) = booted_session(11);
    assert!(boot.is_ready());

    let first = pitch_film(&mut rng, store.studio().unwrap(), Vec3::new(10.0, 0.0, 0.0)).unwrap();
    let second = pitch_film(&mut rng, store.studio().unwrap(), Vec3::new(-10.0, 0.0, 0.0)).unwrap();
    store.start_film_production(first.clone()).unwrap();
    store.start_film_production(second.clone()).unwrap();

    let layout = LotLayout::from_store(&store);
    assert_eq!(layout.buildings.len(), 2);
    assert_eq!(layout.buildings[0].id, first.id);
    assert_eq!(layout.buildings[1].id, second.id);

    let action = layout.click(&second.id).cloned().unwrap();
    assert_eq!(action, LotAction::SelectFilm(second.id.clone()));
    action.apply(&mut store).unwrap();
    assert_eq!(store.selected_film(), Some(&second));

    store.select_film(None);
    assert!(store.selected_film().is_none());
}

#[test]
fn cast_resolves_to_roster_contracts() {
    let (mut store, _, mut rng) = booted_session(5);
    let film = pitch_film(&mut rng, store.studio().unwrap(), Vec3::ZERO).unwrap();
    store.start_film_production(film.clone()).unwrap();

    let cast = store.film_cast(&film);
    assert_eq!(cast.len(), film.cast.len());
    for (contract, id) in cast.iter().zip(&film.cast) {
        assert_eq!(&contract.id, id);
    }
}

#[test]
fn rejected_actions_leave_snapshot_untouched() {
    let (mut store, _, _) = booted_session(2);
    let before = store.snapshot();

    let ghost = Film::new("Ghost", Genre::SciFi, 1.0, "nobody", "nobody", Vec3::ZERO).unwrap();
    assert!(matches!(
        store.start_film_production(ghost),
        Err(StoreError::UnknownTalent(_))
    ));
    assert!(matches!(
        store.initialize_studio("Again"),
        Err(StoreError::AlreadyInitialized(_))
    ));

    let after = store.snapshot();
    assert_eq!(before, after);
    assert!(!before.studio_changed(&after));
}

#[test]
fn old_snapshots_are_never_mutated() {
    let (mut store, _, _) = booted_session(3);
    let old: Arc<_> = store.studio_handle().unwrap();
    let talent_before = old.talent.len();

    store.update_currency(CurrencyUpdate::producer_credits(50)).unwrap();
    let new = store.studio_handle().unwrap();

    assert!(!Arc::ptr_eq(&old, &new));
    assert_eq!(old.currency, Currency::new(1_000_000, 100));
    assert_eq!(new.currency, Currency::new(1_000_000, 50));
    assert_eq!(old.talent.len(), talent_before);
    assert_eq!(new.talent, old.talent);
}

#[test]
fn actions_before_boot_are_rejected() {
    let mut store = StudioStore::default();
    assert_eq!(
        store.update_currency(CurrencyUpdate::studio_coins(1)),
        Err(StoreError::NoStudio)
    );
    assert!(LotLayout::from_store(&store).buildings.is_empty());
    assert!(store.studio().is_none());
}

#[test]
fn failed_boot_surfaces_error() {
    let config = StudioConfig {
        studio_name: String::new(),
        ..StudioConfig::default()
    };
    let mut store = StudioStore::new(&config);
    let mut boot = Bootstrap::new(&config);
    boot.mount(&mut store);
    assert!(matches!(boot.phase(), BootPhase::Failed(_)));
    assert!(store.error().unwrap().starts_with("Failed to initialize studio"));
}
