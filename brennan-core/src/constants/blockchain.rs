//! Blockchain Market Snapshot Bands

use super::Band;
use crate::models::SignalAction;

/// Block height.
pub const BLOCK_HEIGHT_BAND: Band = Band::new(18_500_000.0, 100_000.0);

/// Network hash rate, in EH/s.
pub const HASH_RATE_BAND: Band = Band::new(200.0, 50.0);

/// Mining difficulty.
pub const DIFFICULTY_BAND: Band = Band::new(35_000_000_000_000.0, 5_000_000_000_000.0);

/// Mempool size, in transactions.
pub const MEMPOOL_BAND: Band = Band::new(150_000.0, 50_000.0);

/// 24h traded volume, in dollars.
pub const VOLUME_BAND: Band = Band::new(25_000_000_000.0, 10_000_000_000.0);

/// Trend draws strictly above this are bullish.
pub const BULLISH_THRESHOLD: f64 = 0.5;

/// Volatility, in percent.
pub const VOLATILITY_BAND: Band = Band::new(15.0, 25.0);

/// Support price level.
pub const SUPPORT_BAND: Band = Band::new(35_000.0, 5_000.0);

/// Resistance price level.
pub const RESISTANCE_BAND: Band = Band::new(45_000.0, 5_000.0);

/// Total value locked, in dollars.
pub const TVL_BAND: Band = Band::new(50_000_000_000.0, 20_000_000_000.0);

/// Count of yield opportunities.
pub const YIELD_OPPORTUNITIES_BAND: Band = Band::new(5.0, 15.0);

/// Count of liquidity pools.
pub const LIQUIDITY_POOLS_BAND: Band = Band::new(15_000.0, 5_000.0);

// ===== MARKET TICKER =====

/// Bitcoin reference price, in dollars.
pub const BTC_REFERENCE_PRICE: f64 = 67_450.0;

/// Full width of the bitcoin price jitter around the reference.
pub const BTC_PRICE_SPREAD: f64 = 1_000.0;

/// Ether reference price, in dollars.
pub const ETH_REFERENCE_PRICE: f64 = 3_850.0;

/// Full width of the ether price jitter around the reference.
pub const ETH_PRICE_SPREAD: f64 = 100.0;

/// Total crypto market capitalization, in dollars.
pub const TOTAL_MARKET_CAP_BAND: Band = Band::new(2.1e12, 1e11);

/// Bitcoin dominance reference, in percent.
pub const DOMINANCE_REFERENCE: f64 = 42.5;

/// Full width of the dominance jitter.
pub const DOMINANCE_SPREAD: f64 = 2.0;

/// Fear and greed index (floored).
pub const FEAR_GREED_BAND: Band = Band::new(65.0, 20.0);

// ===== TRADING SIGNALS =====

/// Fixed signal set: pair, action, confidence, reason.
pub const TRADING_SIGNALS: [(&str, SignalAction, u32, &str); 3] = [
    ("BTC/USDT", SignalAction::Buy, 87, "RSI oversold, bullish divergence detected"),
    ("ETH/USDT", SignalAction::Hold, 72, "Consolidation phase, await breakout"),
    ("ADA/USDT", SignalAction::Buy, 91, "Strong uptrend, volume surge"),
];
