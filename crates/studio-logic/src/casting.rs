//! Talent pool and film pitch generation.
//!
//! Everything takes an `Rng`, so a seeded `StdRng` gives the same pool and
//! the same pitches every run.

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::ModelError;
use crate::film::{Film, FilmQuality, Genre};
use crate::geometry::Vec3;
use crate::studio::Studio;
use crate::talent::{TalentContract, TalentSkills, TalentType};

/// Signing cost at zero star power, per role.
fn base_cost(role: TalentType) -> f64 {
    match role {
        TalentType::Actor => 80_000.0,
        TalentType::Director => 150_000.0,
        TalentType::Writer => 60_000.0,
    }
}

/// Generate one available contract for `role`, ending 3–24 months after `now`.
pub fn generate_talent(
    rng: &mut impl Rng,
    role: TalentType,
    now: DateTime<Utc>,
) -> Result<TalentContract, ModelError> {
    let given = GIVEN_NAMES[rng.gen_range(0..GIVEN_NAMES.len())];
    let family = FAMILY_NAMES[rng.gen_range(0..FAMILY_NAMES.len())];
    let primary = rng.gen_range(0.2..0.95_f32);
    let chemistry = rng.gen_range(0.0..1.0_f32);
    let star_power = rng.gen_range(0.0..1.0_f32);
    let skills = TalentSkills::for_role(role, primary, chemistry, star_power);

    // Stars and strong craft both push the price up.
    let cost = base_cost(role) * (1.0 + 4.0 * star_power as f64) * (0.5 + primary as f64);
    let cost = (cost / 1000.0).round() * 1000.0;
    let contract_end = now + Duration::days(rng.gen_range(90..=730));

    TalentContract::new(
        format!("{} {}", given, family),
        role,
        skills,
        cost,
        contract_end,
    )
}

/// A mixed pool cycling actor, actor, director, writer.
pub fn generate_talent_pool(
    rng: &mut impl Rng,
    count: usize,
    now: DateTime<Utc>,
) -> Result<Vec<TalentContract>, ModelError> {
    const ROTATION: [TalentType; 4] = [
        TalentType::Actor,
        TalentType::Actor,
        TalentType::Director,
        TalentType::Writer,
    ];
    (0..count)
        .map(|i| generate_talent(rng, ROTATION[i % ROTATION.len()], now))
        .collect()
}

/// Pitch a pre-production film crewed from the studio roster.
///
/// Picks a director and a writer from the roster and up to three actors.
/// Fails with an empty-field error if the roster has no director or writer.
pub fn pitch_film(
    rng: &mut impl Rng,
    studio: &Studio,
    position: Vec3,
) -> Result<Film, ModelError> {
    let director = pick_role(rng, studio, TalentType::Director);
    let writer = pick_role(rng, studio, TalentType::Writer);

    let actors: Vec<&TalentContract> = studio
        .talent
        .iter()
        .filter(|t| t.talent_type == TalentType::Actor)
        .collect();
    let cast: Vec<String> = actors
        .choose_multiple(rng, 3)
        .map(|t| t.id.clone())
        .collect();

    let genre = *Genre::ALL.choose(rng).unwrap_or(&Genre::Action);
    let title = format!(
        "{} {}",
        TITLE_ADJECTIVES[rng.gen_range(0..TITLE_ADJECTIVES.len())],
        TITLE_NOUNS[rng.gen_range(0..TITLE_NOUNS.len())]
    );
    let budget = (rng.gen_range(500_000.0..5_000_000.0_f64) / 1000.0).round() * 1000.0;

    let quality = FilmQuality {
        script: skill_of(studio, &writer, TalentType::Writer),
        directing: skill_of(studio, &director, TalentType::Director),
        acting: mean(cast.iter().map(|id| skill_of(studio, id, TalentType::Actor))),
        special_effects: 0.0,
        marketing: 0.0,
    };

    Ok(Film::new(title, genre, budget, director, writer, position)?
        .with_cast(cast)
        .with_quality(quality))
}

fn pick_role(rng: &mut impl Rng, studio: &Studio, role: TalentType) -> String {
    let candidates: Vec<&TalentContract> = studio
        .talent
        .iter()
        .filter(|t| t.talent_type == role)
        .collect();
    candidates
        .choose(rng)
        .map(|t| t.id.clone())
        .unwrap_or_default()
}

fn skill_of(studio: &Studio, id: &str, role: TalentType) -> f32 {
    studio
        .talent_by_id(id)
        .and_then(|t| t.skills.primary(role))
        .unwrap_or(0.0)
}

fn mean(values: impl Iterator<Item = f32>) -> f32 {
    let (sum, n) = values.fold((0.0, 0u32), |(s, n), v| (s + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f32
    }
}

static GIVEN_NAMES: &[&str] = &[
    "Ava", "Marcus", "Ingrid", "Kenji", "Lucia", "Omar", "Greta", "Dev", "Nadia", "Felix",
    "Priya", "Hugo", "Mei", "Rafael", "Sloane", "Tobias", "Yara", "Elliot", "Zora", "Luca",
];

static FAMILY_NAMES: &[&str] = &[
    "Hart", "Okafor", "Lindqvist", "Moreau", "Tanaka", "Castellano", "Whitlock", "Rao",
    "Novak", "Delacroix", "Brennan", "Sato", "Volkov", "Ashby", "Quinn", "Mbeki",
];

static TITLE_ADJECTIVES: &[&str] = &[
    "Midnight", "Crimson", "Silent", "Last", "Neon", "Broken", "Golden", "Hollow",
    "Distant", "Electric",
];

static TITLE_NOUNS: &[&str] = &[
    "Frontier", "Heist", "Kingdom", "Signal", "Harbor", "Oath", "Circuit", "Empire",
    "Witness", "Tide",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::Currency;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn generated_talent_is_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        for role in TalentType::ALL {
            let t = generate_talent(&mut rng, role, now()).unwrap();
            assert_eq!(t.talent_type, role);
            assert!(t.skills.primary(role).is_some());
            assert!(t.validate().is_ok());
            assert!(t.contract_end > now());
            assert!(t.cost > 0.0);
        }
    }

    #[test]
    fn pool_rotation() {
        let mut rng = StdRng::seed_from_u64(1);
        let pool = generate_talent_pool(&mut rng, 8, now()).unwrap();
        let roles: Vec<_> = pool.iter().map(|t| t.talent_type).collect();
        assert_eq!(
            roles[..4],
            [
                TalentType::Actor,
                TalentType::Actor,
                TalentType::Director,
                TalentType::Writer
            ]
        );
        assert_eq!(roles[4..], roles[..4]);
    }

    #[test]
    fn seeded_pool_is_deterministic() {
        let a = generate_talent_pool(&mut StdRng::seed_from_u64(42), 5, now()).unwrap();
        let b = generate_talent_pool(&mut StdRng::seed_from_u64(42), 5, now()).unwrap();
        let names_a: Vec<_> = a.iter().map(|t| (&t.name, t.cost)).collect();
        let names_b: Vec<_> = b.iter().map(|t| (&t.name, t.cost)).collect();
        assert_eq!(names_a, names_b);
    }

    #[test]
    fn pitch_uses_roster() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut studio = Studio::found("S", Currency::default()).unwrap();
        studio.talent = generate_talent_pool(&mut rng, 8, now()).unwrap();

        let film = pitch_film(&mut rng, &studio, Vec3::ZERO).unwrap();
        assert!(studio.missing_talent(&film).is_none());
        assert_eq!(film.cast.len(), 3);
        assert!(film.budget >= 500_000.0);
        assert!(film.quality.validate().is_ok());
        assert!(film.quality.script > 0.0);
    }

    #[test]
    fn pitch_needs_director() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut studio = Studio::found("S", Currency::default()).unwrap();
        studio.talent = vec![generate_talent(&mut rng, TalentType::Writer, now()).unwrap()];
        assert_eq!(
            pitch_film(&mut rng, &studio, Vec3::ZERO),
            Err(ModelError::Empty { field: "director" })
        );
    }
}
