//! Application-shell startup.
//!
//! On first mount the shell founds the studio if the store has none. While
//! that runs the store reports loading; a failure is recorded as the store
//! error and the shell stays failed for the rest of the session (there is no
//! retry). After a successful start a welcome banner is shown and dismissed
//! automatically once `banner_seconds` have elapsed.

use crate::config::StudioConfig;
use crate::store::StudioStore;

#[derive(Debug, Clone, PartialEq)]
pub enum BootPhase {
    /// Not mounted yet, or initialization in progress.
    Loading,
    /// Studio available. `banner_remaining` counts down the welcome banner.
    Ready { banner_remaining: Option<f32> },
    /// Initialization failed; the message replaces the main view.
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct Bootstrap {
    studio_name: String,
    banner_seconds: f32,
    phase: BootPhase,
}

impl Bootstrap {
    pub fn new(config: &StudioConfig) -> Self {
        Self {
            studio_name: config.studio_name.clone(),
            banner_seconds: config.banner_seconds,
            phase: BootPhase::Loading,
        }
    }

    pub fn phase(&self) -> &BootPhase {
        &self.phase
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.phase, BootPhase::Ready { .. })
    }

    pub fn banner_visible(&self) -> bool {
        matches!(
            self.phase,
            BootPhase::Ready {
                banner_remaining: Some(_)
            }
        )
    }

    /// Mount the shell against `store`, founding the studio if needed.
    ///
    /// Mounting again after success or failure does nothing.
    pub fn mount(&mut self, store: &mut StudioStore) -> &BootPhase {
        if self.phase != BootPhase::Loading {
            return &self.phase;
        }
        if store.studio().is_some() {
            log::debug!("Studio already present, skipping initialization");
            self.phase = BootPhase::Ready {
                banner_remaining: None,
            };
            return &self.phase;
        }

        store.set_loading(true);
        let result = store.initialize_studio(&self.studio_name);
        store.set_loading(false);

        self.phase = match result {
            Ok(()) => BootPhase::Ready {
                banner_remaining: Some(self.banner_seconds),
            },
            Err(e) => {
                let message = format!("Failed to initialize studio: {}", e);
                store.set_error(Some(message.clone()));
                BootPhase::Failed(message)
            }
        };
        &self.phase
    }

    /// Advance the banner timer by `dt` seconds. Negative or non-finite
    /// steps count as zero.
    pub fn tick(&mut self, dt: f32) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        if let BootPhase::Ready { banner_remaining } = &mut self.phase {
            let expired = match banner_remaining.as_mut() {
                Some(remaining) => {
                    *remaining -= dt;
                    *remaining <= 0.0
                }
                None => false,
            };
            if expired {
                log::debug!("Welcome banner dismissed");
                *banner_remaining = None;
            }
        }
    }
}
