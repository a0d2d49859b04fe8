//! Blockchain market snapshot

use serde::{Deserialize, Serialize};

use super::{MarketTrend, SignalAction};
use crate::time::Timestamp;

/// Network, trading and DeFi figures at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockchainSnapshot {
    /// Chain health
    pub network_stats: NetworkStats,
    /// Volume and price view
    pub trading_metrics: TradingMetrics,
    /// Protocol totals
    pub defi_metrics: DefiMetrics,
}

/// Chain-level statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStats {
    /// Current block number
    pub block_height: u64,
    /// `"<N> EH/s"`
    pub hash_rate: String,
    /// Mining difficulty
    pub difficulty: u64,
    /// Pending transactions
    pub mem_pool_size: u64,
}

/// Market activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingMetrics {
    /// Dollars traded over 24h
    #[serde(rename = "volume24h")]
    pub volume_24h: u64,
    /// Direction and levels
    pub price_analysis: PriceAnalysis,
}

/// Price direction and key levels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceAnalysis {
    /// Bullish or bearish
    pub trend: MarketTrend,
    /// Percent
    pub volatility: u32,
    /// Support level, dollars
    pub support: u64,
    /// Resistance level, dollars
    pub resistance: u64,
}

/// Decentralized finance totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefiMetrics {
    /// Dollars
    pub total_value_locked: u64,
    /// Open yield programs
    pub yield_opportunities: u32,
    /// Active pools
    pub liquidity_pools: u32,
}

/// One tick of the market ticker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketTicker {
    /// Dollars, two decimals
    pub btc_price: f64,
    /// Dollars, two decimals
    pub eth_price: f64,
    /// Dollars
    pub total_market_cap: u64,
    /// Bitcoin dominance in percent, one decimal
    pub dominance: f64,
    /// In `[65, 85)`
    pub fear_greed_index: u32,
    /// When it was produced
    pub timestamp: Timestamp,
}

/// Suggested trade on one pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingSignal {
    /// e.g. `"BTC/USDT"`
    pub pair: String,
    /// Suggested action
    pub signal: SignalAction,
    /// Percent
    pub confidence: u32,
    /// Rationale shown next to the signal
    pub reason: String,
    /// When it was produced
    pub timestamp: Timestamp,
}
