//! Pure game logic for Studio Tycoon.
//!
//! This crate contains everything about a studio session that is independent
//! of any renderer or UI toolkit. The view layer reads snapshots from the
//! [`store::StudioStore`] and calls its actions; nothing here draws.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`bootstrap`] | Application-shell startup: loading, error, welcome banner |
//! | [`casting`] | Seeded generation of hireable talent and film pitches |
//! | [`config`] | Session configuration with defaults and validation |
//! | [`economy`] | Currency counters and partial currency updates |
//! | [`error`] | Error types for model validation, store actions, config |
//! | [`film`] | Films, genres, production lifecycle, quality scores |
//! | [`geometry`] | 3D positions on the studio lot |
//! | [`lot`] | Render boundary: building descriptors for the 3D lot |
//! | [`progress`] | Universe phases and achievements |
//! | [`store`] | The session state store and its action surface |
//! | [`studio`] | Studio, facilities, talent roster lookup |
//! | [`talent`] | Talent contracts, roles, and skills |

pub mod bootstrap;
pub mod casting;
pub mod config;
pub mod economy;
pub mod error;
pub mod film;
pub mod geometry;
pub mod lot;
pub mod progress;
pub mod store;
pub mod studio;
pub mod talent;

/// Generate a fresh opaque entity id.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
