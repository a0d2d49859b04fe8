//! Business Intelligence Live Metrics
//!
//! Integer metrics are floored, so each lies in `[base, base + width)`.

use super::Band;

/// Users currently online.
pub const LIVE_USERS_BAND: Band = Band::new(2_000.0, 1_000.0);

/// Running revenue, in dollars.
pub const CURRENT_REVENUE_BAND: Band = Band::new(320_000.0, 50_000.0);

/// Open transactions.
pub const ACTIVE_TRANSACTIONS_BAND: Band = Band::new(150.0, 50.0);

/// System load, in percent.
pub const SYSTEM_LOAD_BAND: Band = Band::new(65.0, 20.0);

/// Headline pool shown under the live metrics.
pub const HEADLINE_POOL: [&str; 5] = [
    "Revenue growth acceleration detected - 23.5% increase driven by enterprise segment expansion",
    "User engagement peaks at 12:00 PM - optimal time for product launches and announcements",
    "Predictive model shows 87% confidence in reaching $350K revenue next month",
    "Market segment analysis reveals untapped potential in startup category (+40% growth opportunity)",
    "Real-time analytics indicate system performance is optimal with 15% headroom for scaling",
];
