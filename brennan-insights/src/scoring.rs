//! Random draws mapped onto documented bands
//!
//! Every fabricated number goes through [`Draw`], which turns a unit sample
//! into a value inside a [`Band`]. Keeping the mapping in one place is what
//! guarantees the output ranges listed in `brennan_core::constants`.

use brennan_core::constants::Band;
use rand::Rng;

/// Band-aware sampling on top of any [`Rng`]
pub trait Draw: Rng {
    /// Uniform sample in `[0, 1)`
    fn unit(&mut self) -> f64 {
        self.gen::<f64>()
    }

    /// Uniform value inside `band`
    fn in_band(&mut self, band: Band) -> f64 {
        band.at(self.unit())
    }

    /// Value inside `band`, rounded to the nearest integer
    fn rounded(&mut self, band: Band) -> u32 {
        self.in_band(band).round() as u32
    }

    /// Value inside `band`, floored; never reaches the upper edge
    fn floored(&mut self, band: Band) -> u32 {
        self.in_band(band).floor() as u32
    }

    /// Like [`Draw::rounded`] for bands beyond `u32`
    fn rounded_wide(&mut self, band: Band) -> u64 {
        self.in_band(band).round() as u64
    }

    /// Whether a fresh unit sample lands strictly above `threshold`
    fn exceeds(&mut self, threshold: f64) -> bool {
        self.unit() > threshold
    }

    /// Symmetric step in `[-span / 2, span / 2)`
    fn jitter(&mut self, span: f64) -> f64 {
        (self.unit() - 0.5) * span
    }
}

impl<R: Rng + ?Sized> Draw for R {}

/// Round to `decimals` places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn draws_stay_in_band() {
        let mut rng = StdRng::seed_from_u64(7);
        let band = Band::new(85.0, 13.0);
        for _ in 0..1_000 {
            let value = rng.in_band(band);
            assert!(band.contains(value));
            let rounded = rng.rounded(band);
            assert!((85..=98).contains(&rounded));
        }
    }

    #[test]
    fn floored_excludes_upper_edge() {
        let mut rng = StdRng::seed_from_u64(5);
        let band = Band::new(150.0, 50.0);
        assert!((0..1_000).map(|_| rng.floored(band)).all(|v| (150..200).contains(&v)));
    }

    #[test]
    fn jitter_is_centered() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1_000 {
            let step = rng.jitter(5.0);
            assert!((-2.5..2.5).contains(&step));
        }
    }

    #[test]
    fn exceeds_rate_tracks_threshold() {
        let mut rng = StdRng::seed_from_u64(3);
        let hits = (0..10_000).filter(|_| rng.exceeds(0.85)).count();
        // 15% expected; allow generous slack
        assert!((1_200..1_800).contains(&hits), "hits = {hits}");
    }

    #[test]
    fn round_to_one_decimal() {
        assert_eq!(round_to(99.87, 1), 99.9);
        assert_eq!(round_to(99.5, 1), 99.5);
    }
}
