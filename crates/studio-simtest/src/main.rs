//! Studio Tycoon Headless Session Harness
//!
//! Boots a studio session the way the application shell does, drives the
//! store through its actions, lays out the lot, and checks the results.
//! Runs entirely in-process — no renderer, no UI.
//!
//! Usage:
//!   cargo run -p studio-simtest
//!   cargo run -p studio-simtest -- --name "Lumen Pictures" --seed 42 --verbose
//!   cargo run -p studio-simtest -- --config session.json

use anyhow::{bail, Context};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

use studio_logic::bootstrap::{BootPhase, Bootstrap};
use studio_logic::casting::{generate_talent_pool, pitch_film};
use studio_logic::config::StudioConfig;
use studio_logic::economy::{Currency, CurrencyUpdate};
use studio_logic::error::StoreError;
use studio_logic::geometry::Vec3;
use studio_logic::lot::{LotLayout, COLOR_IN_PRODUCTION};
use studio_logic::store::StudioStore;

// ── Command line ────────────────────────────────────────────────────────

struct Args {
    verbose: bool,
    config_path: Option<String>,
    name: Option<String>,
    seed: Option<u64>,
}

impl Args {
    fn parse() -> anyhow::Result<Self> {
        let args: Vec<String> = std::env::args().collect();
        let mut parsed = Self {
            verbose: false,
            config_path: None,
            name: None,
            seed: None,
        };
        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--verbose" | "-v" => {
                    parsed.verbose = true;
                    i += 1;
                }
                "--config" | "-c" if i + 1 < args.len() => {
                    parsed.config_path = Some(args[i + 1].clone());
                    i += 2;
                }
                "--name" | "-n" if i + 1 < args.len() => {
                    parsed.name = Some(args[i + 1].clone());
                    i += 2;
                }
                "--seed" | "-s" if i + 1 < args.len() => {
                    let seed = args[i + 1]
                        .parse()
                        .with_context(|| format!("invalid seed '{}'", args[i + 1]))?;
                    parsed.seed = Some(seed);
                    i += 2;
                }
                other => bail!("unrecognized argument '{}'", other),
            }
        }
        Ok(parsed)
    }

    fn into_config(self) -> anyhow::Result<StudioConfig> {
        let mut config = match &self.config_path {
            Some(path) => StudioConfig::load(path)
                .with_context(|| format!("loading config from {}", path))?,
            None => StudioConfig::default(),
        };
        if let Some(name) = self.name {
            config.studio_name = name;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()?;
        Ok(config)
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn check(name: &str, passed: bool, detail: impl Into<String>) -> TestResult {
    TestResult {
        name: name.into(),
        passed,
        detail: detail.into(),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse()?;
    let verbose = args.verbose;
    init_logging(verbose);
    let config = args.into_config()?;
    let seed = config.seed.unwrap_or_else(rand::random);

    println!("=== Studio Tycoon Session Harness ===");
    println!("studio: {}  seed: {}\n", config.studio_name, seed);

    let mut results = Vec::new();
    let mut rng = StdRng::seed_from_u64(seed);

    // 1. Store contract on a bare store
    results.extend(validate_store_contract(&config));

    // 2. Shell bootstrap
    let mut store = StudioStore::new(&config);
    results.extend(validate_bootstrap(&config, &mut store));

    // 3. Hiring and production with generated talent
    results.extend(validate_production(&mut store, &mut rng));

    // 4. Lot layout and click-through selection
    results.extend(validate_lot(&mut store));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

// ── 1. Store contract ───────────────────────────────────────────────────

fn validate_store_contract(config: &StudioConfig) -> Vec<TestResult> {
    println!("--- Store Contract ---");
    let mut results = Vec::new();
    let mut store = StudioStore::new(config);

    let before = store.snapshot();
    let outcome = store.update_currency(CurrencyUpdate::producer_credits(50));
    results.push(check(
        "currency_without_studio",
        outcome == Err(StoreError::NoStudio) && store.snapshot() == before,
        format!("{:?}", outcome),
    ));

    let init = store.initialize_studio(&config.studio_name);
    let studio_ok = store.studio().is_some_and(|s| {
        s.level == 1
            && s.currency == config.starting_currency
            && s.facilities.is_empty()
            && s.films.is_empty()
            && s.talent.is_empty()
    });
    results.push(check(
        "initialize_fresh_studio",
        init.is_ok() && studio_ok,
        format!("{:?}", store.studio().map(|s| (&s.name, s.currency))),
    ));

    let first_id = store.studio().map(|s| s.id.clone());
    let again = store.initialize_studio("Second Studio");
    results.push(check(
        "double_initialize_rejected",
        matches!(again, Err(StoreError::AlreadyInitialized(_)))
            && store.studio().map(|s| s.id.clone()) == first_id,
        format!("{:?}", again),
    ));

    let merged = store
        .update_currency(CurrencyUpdate::producer_credits(50))
        .ok()
        .and_then(|_| store.studio().map(|s| s.currency));
    let expected = Currency {
        producer_credits: 50,
        ..config.starting_currency
    };
    results.push(check(
        "currency_partial_merge",
        merged == Some(expected),
        format!("{:?}", merged),
    ));

    results
}

// ── 2. Bootstrap ────────────────────────────────────────────────────────

fn validate_bootstrap(config: &StudioConfig, store: &mut StudioStore) -> Vec<TestResult> {
    println!("--- Bootstrap ---");
    let mut results = Vec::new();
    let mut boot = Bootstrap::new(config);

    let phase = boot.mount(store).clone();
    results.push(check(
        "mount_ready",
        boot.is_ready() && boot.banner_visible() && !store.is_loading(),
        format!("{:?}", phase),
    ));

    let step = 0.25;
    let mut elapsed = 0.0;
    while boot.banner_visible() && elapsed < config.banner_seconds * 2.0 {
        boot.tick(step);
        elapsed += step;
    }
    results.push(check(
        "banner_auto_dismiss",
        !boot.banner_visible() && (elapsed - config.banner_seconds).abs() <= step,
        format!("dismissed after {:.2}s", elapsed),
    ));

    let failing = StudioConfig {
        studio_name: " ".into(),
        ..config.clone()
    };
    let mut bad_store = StudioStore::new(&failing);
    let mut bad_boot = Bootstrap::new(&failing);
    bad_boot.mount(&mut bad_store);
    results.push(check(
        "failed_boot_sticks",
        matches!(bad_boot.phase(), BootPhase::Failed(_)) && bad_store.error().is_some(),
        bad_store.error().unwrap_or("<no error>").to_string(),
    ));

    results
}

// ── 3. Production ───────────────────────────────────────────────────────

fn validate_production(store: &mut StudioStore, rng: &mut StdRng) -> Vec<TestResult> {
    println!("--- Production ---");
    let mut results = Vec::new();

    let now = Utc::now();
    let pool = match generate_talent_pool(rng, 8, now) {
        Ok(pool) => pool,
        Err(e) => {
            results.push(check("talent_pool", false, e.to_string()));
            return results;
        }
    };
    let hired = pool
        .into_iter()
        .map(|t| store.hire_actor(t))
        .filter(Result::is_ok)
        .count();
    results.push(check(
        "hire_pool",
        hired == 8 && store.studio().is_some_and(|s| s.talent.len() == 8),
        format!("{} contracts hired", hired),
    ));

    let expired = store
        .studio()
        .map(|s| s.talent.iter().filter(|t| t.is_expired(now)).count())
        .unwrap_or(0);
    results.push(check(
        "fresh_contracts_active",
        expired == 0,
        format!("{} expired contracts", expired),
    ));

    let roster_counts = |store: &StudioStore| {
        store
            .studio()
            .map(|s| (s.talent.len(), s.facilities.len()))
    };
    let counts_before = roster_counts(&*store);

    let mut titles = Vec::new();
    for i in 0..3 {
        let position = Vec3::new(-12.0 + 12.0 * i as f32, 0.0, 8.0);
        let Some(studio) = store.studio() else {
            break;
        };
        match pitch_film(rng, studio, position) {
            Ok(film) => {
                log::debug!(
                    "Pitched '{}' with overall quality {:.2}",
                    film.title,
                    film.quality.overall()
                );
                titles.push(film.title.clone());
                if let Err(e) = store.start_film_production(film) {
                    results.push(check("start_production", false, e.to_string()));
                }
            }
            Err(e) => results.push(check("pitch_film", false, e.to_string())),
        }
    }
    let slate: Vec<String> = store
        .studio()
        .map(|s| s.films.iter().map(|f| f.title.clone()).collect())
        .unwrap_or_default();
    results.push(check(
        "films_in_call_order",
        slate == titles && slate.len() == 3,
        slate.join(", "),
    ));

    let counts_after = roster_counts(&*store);
    results.push(check(
        "production_leaves_roster",
        counts_before.is_some() && counts_before == counts_after,
        format!(
            "(roster, facilities) before {:?}, after {:?}",
            counts_before, counts_after
        ),
    ));

    let rated = store
        .studio()
        .map(|s| {
            s.films
                .iter()
                .all(|f| (0.0..=1.0).contains(&f.quality.overall()))
        })
        .unwrap_or(false);
    results.push(check(
        "quality_in_range",
        rated,
        "overall quality within 0.0..=1.0",
    ));

    results.push(check(
        "progress_untouched",
        store.game_progress().completed_count() == 0
            && store.game_progress().achievements.is_empty(),
        format!("phase {:?}", store.game_progress().universe_phase),
    ));

    results
}

// ── 4. Lot ──────────────────────────────────────────────────────────────

fn validate_lot(store: &mut StudioStore) -> Vec<TestResult> {
    println!("--- Lot Layout ---");
    let mut results = Vec::new();

    let layout = LotLayout::from_store(store);
    let film_count = store.studio().map(|s| s.films.len()).unwrap_or(0);
    results.push(check(
        "one_building_per_film",
        layout.buildings.len() == film_count,
        format!("{} buildings", layout.buildings.len()),
    ));

    let unreleased = layout
        .buildings
        .iter()
        .all(|b| b.color == COLOR_IN_PRODUCTION);
    results.push(check(
        "pre_production_color",
        unreleased,
        "new films render as in production",
    ));

    let closest = layout
        .buildings
        .iter()
        .enumerate()
        .flat_map(|(i, a)| {
            layout.buildings[i + 1..]
                .iter()
                .map(move |b| a.position.distance(&b.position))
        })
        .fold(f32::INFINITY, f32::min);
    results.push(check(
        "buildings_spaced_apart",
        closest >= 6.0,
        format!("closest pair {:.1} units apart", closest),
    ));

    let Some(target) = layout.buildings.last() else {
        results.push(check("click_selects_film", false, "empty lot"));
        return results;
    };
    let clicked = layout
        .click(&target.id)
        .map(|action| action.apply(store))
        .transpose();
    results.push(check(
        "click_selects_film",
        clicked.is_ok() && store.selected_film().map(|f| &f.id) == Some(&target.id),
        format!("selected {:?}", store.selected_film().map(|f| &f.title)),
    ));

    store.select_film(None);
    results.push(check(
        "clear_selection",
        store.selected_film().is_none(),
        "selection cleared",
    ));

    results
}
