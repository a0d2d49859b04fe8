//! Fabricated blockchain market snapshot

use brennan_core::constants::blockchain::*;
use brennan_core::time::Timestamp;
use brennan_core::{
    BlockchainSnapshot, DefiMetrics, MarketTicker, MarketTrend, NetworkStats, PriceAnalysis, TradingMetrics,
    TradingSignal,
};
use rand::Rng;

use crate::scoring::{round_to, Draw};

pub fn snapshot<R: Rng + ?Sized>(rng: &mut R) -> BlockchainSnapshot {
    let network_stats = NetworkStats {
        block_height: rng.rounded_wide(BLOCK_HEIGHT_BAND),
        hash_rate: format!("{} EH/s", rng.rounded(HASH_RATE_BAND)),
        difficulty: rng.rounded_wide(DIFFICULTY_BAND),
        mem_pool_size: rng.rounded_wide(MEMPOOL_BAND),
    };

    let trend = if rng.exceeds(BULLISH_THRESHOLD) {
        MarketTrend::Bullish
    } else {
        MarketTrend::Bearish
    };

    BlockchainSnapshot {
        network_stats,
        trading_metrics: TradingMetrics {
            volume_24h: rng.rounded_wide(VOLUME_BAND),
            price_analysis: PriceAnalysis {
                trend,
                volatility: rng.rounded(VOLATILITY_BAND),
                support: rng.rounded_wide(SUPPORT_BAND),
                resistance: rng.rounded_wide(RESISTANCE_BAND),
            },
        },
        defi_metrics: DefiMetrics {
            total_value_locked: rng.rounded_wide(TVL_BAND),
            yield_opportunities: rng.rounded(YIELD_OPPORTUNITIES_BAND),
            liquidity_pools: rng.rounded(LIQUIDITY_POOLS_BAND),
        },
    }
}

/// Prices jittered around their references, stamped `now`
pub fn ticker<R: Rng + ?Sized>(rng: &mut R, now: Timestamp) -> MarketTicker {
    MarketTicker {
        btc_price: round_to(BTC_REFERENCE_PRICE + rng.jitter(BTC_PRICE_SPREAD), 2),
        eth_price: round_to(ETH_REFERENCE_PRICE + rng.jitter(ETH_PRICE_SPREAD), 2),
        total_market_cap: rng.in_band(TOTAL_MARKET_CAP_BAND).floor() as u64,
        dominance: round_to(DOMINANCE_REFERENCE + rng.jitter(DOMINANCE_SPREAD), 1),
        fear_greed_index: rng.floored(FEAR_GREED_BAND),
        timestamp: now,
    }
}

/// The fixed signal set, stamped `now`
pub fn signals(now: Timestamp) -> Vec<TradingSignal> {
    TRADING_SIGNALS
        .iter()
        .map(|&(pair, signal, confidence, reason)| TradingSignal {
            pair: pair.to_string(),
            signal,
            confidence,
            reason: reason.to_string(),
            timestamp: now,
        })
        .collect()
}
