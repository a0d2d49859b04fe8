//! Business intelligence live strip

use brennan_core::constants::business::*;
use brennan_core::time::Timestamp;
use brennan_core::BusinessPulse;
use rand::Rng;

use crate::scoring::Draw;

/// One refresh of the live metrics, stamped `now`
pub fn pulse<R: Rng + ?Sized>(rng: &mut R, now: Timestamp) -> BusinessPulse {
    BusinessPulse {
        live_users: rng.floored(LIVE_USERS_BAND),
        current_revenue: rng.floored(CURRENT_REVENUE_BAND),
        active_transactions: rng.floored(ACTIVE_TRANSACTIONS_BAND),
        system_load: rng.floored(SYSTEM_LOAD_BAND),
        headline: headline(rng).to_string(),
        timestamp: now,
    }
}

/// Uniform pick from the headline pool
pub fn headline<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    HEADLINE_POOL[rng.gen_range(0..HEADLINE_POOL.len())]
}
