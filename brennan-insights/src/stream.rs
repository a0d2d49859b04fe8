//! Activity stream feeding the real-time panel

use brennan_core::constants::stream::{STREAM_SOURCES, STREAM_VALUE_BAND};
use brennan_core::time::Timestamp;
use brennan_core::{DataPoint, StreamWindow};
use rand::Rng;

use crate::scoring::Draw;

/// Next point of the stream, stamped `now`
pub fn point<R: Rng + ?Sized>(rng: &mut R, now: Timestamp) -> DataPoint {
    let value = rng.in_band(STREAM_VALUE_BAND);
    let source = STREAM_SOURCES[rng.gen_range(0..STREAM_SOURCES.len())];
    DataPoint {
        timestamp: now,
        value,
        source: source.to_string(),
    }
}

/// Push a fresh point into `window` and return the updated window
pub fn advance<R: Rng + ?Sized>(rng: &mut R, window: &mut StreamWindow, now: Timestamp) -> StreamWindow {
    window.push(point(rng, now));
    window.clone()
}
