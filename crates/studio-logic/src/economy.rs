//! Studio currency — two independent non-negative counters.
//!
//! Amounts are placeholder constants; there is no balancing logic here.

use serde::{Deserialize, Serialize};

/// Coins granted to a freshly founded studio.
pub const STARTING_STUDIO_COINS: u64 = 1_000_000;
/// Producer credits granted to a freshly founded studio.
pub const STARTING_PRODUCER_CREDITS: u64 = 100;

/// A studio's wallet. Fields missing from serialized input take the
/// starting amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    pub studio_coins: u64,
    pub producer_credits: u64,
}

impl Currency {
    pub fn new(studio_coins: u64, producer_credits: u64) -> Self {
        Self {
            studio_coins,
            producer_credits,
        }
    }

    /// Return a copy with the supplied fields of `update` merged in.
    pub fn merged(self, update: &CurrencyUpdate) -> Self {
        Self {
            studio_coins: update.studio_coins.unwrap_or(self.studio_coins),
            producer_credits: update.producer_credits.unwrap_or(self.producer_credits),
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::new(STARTING_STUDIO_COINS, STARTING_PRODUCER_CREDITS)
    }
}

/// Partial currency — `None` means "leave unchanged".
///
/// Also used as the reward attached to an achievement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyUpdate {
    pub studio_coins: Option<u64>,
    pub producer_credits: Option<u64>,
}

impl CurrencyUpdate {
    pub fn studio_coins(amount: u64) -> Self {
        Self {
            studio_coins: Some(amount),
            producer_credits: None,
        }
    }

    pub fn producer_credits(amount: u64) -> Self {
        Self {
            studio_coins: None,
            producer_credits: Some(amount),
        }
    }

    pub fn with_studio_coins(mut self, amount: u64) -> Self {
        self.studio_coins = Some(amount);
        self
    }

    pub fn with_producer_credits(mut self, amount: u64) -> Self {
        self.producer_credits = Some(amount);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.studio_coins.is_none() && self.producer_credits.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_starting_wallet() {
        assert_eq!(Currency::default(), Currency::new(1_000_000, 100));
    }

    #[test]
    fn merge_only_touches_supplied_fields() {
        let wallet = Currency::default();
        let merged = wallet.merged(&CurrencyUpdate::producer_credits(50));
        assert_eq!(merged, Currency::new(1_000_000, 50));

        let merged = wallet.merged(&CurrencyUpdate::studio_coins(7));
        assert_eq!(merged, Currency::new(7, 100));
    }

    #[test]
    fn empty_update_is_identity() {
        let wallet = Currency::new(3, 4);
        assert!(CurrencyUpdate::default().is_empty());
        assert_eq!(wallet.merged(&CurrencyUpdate::default()), wallet);
    }

    #[test]
    fn both_fields_merge() {
        let update = CurrencyUpdate::default()
            .with_studio_coins(0)
            .with_producer_credits(0);
        assert_eq!(Currency::default().merged(&update), Currency::new(0, 0));
    }
}
