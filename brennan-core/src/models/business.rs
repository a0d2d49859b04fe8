//! Business intelligence live metrics

use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// One refresh of the BI dashboard's live strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessPulse {
    /// In `[2000, 3000)`
    pub live_users: u32,
    /// Dollars, in `[320000, 370000)`
    pub current_revenue: u32,
    /// In `[150, 200)`
    pub active_transactions: u32,
    /// Percent, in `[65, 85)`
    pub system_load: u32,
    /// One entry of the headline pool
    pub headline: String,
    /// When the metrics were drawn
    pub timestamp: Timestamp,
}
